//! wft-schemas
//!
//! Typed records for the four pipeline stages (ordered, production, sewing,
//! shipping) plus the inventory / activity collections the dashboard reads.
//!
//! The data layer hands over loosely-shaped JSON: Portuguese field names,
//! optional fields, identifiers that are sometimes numbers and sometimes
//! strings, and collections that may be missing or not arrays at all. This
//! crate owns the *raw* wire structs and the conversion into the internal
//! types. Pure conversion; no IO.

mod activity;
mod error;
mod inputs;
mod inventory;
mod json;
mod order_id;
mod stage;

pub use activity::{parse_log_timestamp, ActivityLogEntry, ArtHistoryEntry};
pub use error::SchemaError;
pub use inputs::DashboardInputs;
pub use inventory::InventoryItem;
pub use order_id::OrderId;
pub use stage::{RawStageRecord, Stage, StageCollections, StageRecord};
