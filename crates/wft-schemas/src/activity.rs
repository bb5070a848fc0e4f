//! Activity log and art-history entries.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::json::{decode, first_text};
use crate::SchemaError;

/// Accepted layouts for log timestamps, tried in order.
const DATETIME_FORMATS: &[&str] = &[
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y, %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
];

const DATE_FORMATS: &[&str] = &["%d/%m/%Y", "%Y-%m-%d"];

/// Parse a log timestamp (`DD/MM/YYYY HH:MM:SS`, `DD/MM/YYYY`, ISO-8601,
/// or RFC 3339). `None` when nothing matches.
pub fn parse_log_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }
    DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.naive_utc())
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
struct RawActivityLog {
    usuario: Option<Value>,
    user: Option<Value>,
    acao: Option<Value>,
    action: Option<Value>,
    data: Option<Value>,
    date: Option<Value>,
    timestamp: Option<Value>,
}

/// One entry of the system activity log.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ActivityLogEntry {
    pub user: Option<String>,
    pub action: String,
    pub timestamp_raw: Option<String>,
    pub timestamp: Option<NaiveDateTime>,
}

impl ActivityLogEntry {
    pub fn new(user: Option<&str>, action: impl Into<String>, timestamp_raw: Option<&str>) -> Self {
        Self {
            user: user.map(str::to_string),
            action: action.into(),
            timestamp_raw: timestamp_raw.map(str::to_string),
            timestamp: timestamp_raw.and_then(parse_log_timestamp),
        }
    }

    pub fn from_json(v: &Value) -> Result<Self, SchemaError> {
        let raw: RawActivityLog = decode("logs", v)?;
        let timestamp_raw = first_text(&[&raw.data, &raw.date, &raw.timestamp]);
        Ok(Self {
            user: first_text(&[&raw.usuario, &raw.user]),
            action: first_text(&[&raw.acao, &raw.action]).unwrap_or_default(),
            timestamp: timestamp_raw.as_deref().and_then(parse_log_timestamp),
            timestamp_raw,
        })
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
struct RawArtHistory {
    sku: Option<Value>,
    impressora: Option<Value>,
    printer: Option<Value>,
    usuario: Option<Value>,
    user: Option<Value>,
}

/// One artwork print submission.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ArtHistoryEntry {
    pub sku: Option<String>,
    pub printer: Option<String>,
    pub user: Option<String>,
}

impl ArtHistoryEntry {
    pub fn from_json(v: &Value) -> Result<Self, SchemaError> {
        let raw: RawArtHistory = decode("art_history", v)?;
        Ok(Self {
            sku: first_text(&[&raw.sku]),
            printer: first_text(&[&raw.impressora, &raw.printer]),
            user: first_text(&[&raw.usuario, &raw.user]),
        })
    }
}
