use serde::Serialize;
use serde_json::Value;

use crate::json::{decode_collection, first_key};
use crate::{ActivityLogEntry, ArtHistoryEntry, InventoryItem, StageCollections};

/// Everything the dashboard reads, passed explicitly.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct DashboardInputs {
    pub stages: StageCollections,
    pub inventory: Vec<InventoryItem>,
    pub logs: Vec<ActivityLogEntry>,
    pub art_history: Vec<ArtHistoryEntry>,
}

impl DashboardInputs {
    pub fn new(stages: StageCollections) -> Self {
        Self {
            stages,
            ..Self::default()
        }
    }

    /// Build from one JSON object holding every collection.
    ///
    /// Keys: the stage keys of [`StageCollections::from_json`], plus
    /// `itensEstoque` / `inventory`, `logs`, `historicoArtes` / `artHistory`.
    /// Never fails; see [`StageCollections::from_json`].
    pub fn from_json(root: &Value) -> Self {
        Self {
            stages: StageCollections::from_json(root),
            inventory: decode_collection(
                "inventory",
                first_key(root, &["itensEstoque", "inventory"]),
                InventoryItem::from_json,
            ),
            logs: decode_collection(
                "logs",
                first_key(root, &["logs"]),
                ActivityLogEntry::from_json,
            ),
            art_history: decode_collection(
                "art_history",
                first_key(root, &["historicoArtes", "artHistory"]),
                ArtHistoryEntry::from_json,
            ),
        }
    }
}
