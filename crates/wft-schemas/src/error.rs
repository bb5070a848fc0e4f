use std::fmt;

/// Errors from the strict per-record decoders.
///
/// The collection builders ([`crate::StageCollections::from_json`],
/// [`crate::DashboardInputs::from_json`]) never return these; they skip the
/// offending element instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// A collection element was not a JSON object.
    NotAnObject {
        collection: &'static str,
        found: &'static str,
    },
    /// A JSON object could not be decoded into the raw record shape.
    Decode {
        collection: &'static str,
        message: String,
    },
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaError::NotAnObject { collection, found } => {
                write!(f, "{collection} element must be an object, got {found}")
            }
            SchemaError::Decode {
                collection,
                message,
            } => write!(f, "{collection} element could not be decoded: {message}"),
        }
    }
}

impl std::error::Error for SchemaError {}
