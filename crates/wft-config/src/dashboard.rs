use anyhow::{bail, Result};
use serde::Serialize;
use serde_json::Value;

use crate::LoadedConfig;

/// The defaults, spelled out as a base layer.
pub const DEFAULT_CONFIG_YAML: &str = r#"
reconcile:
  shipped_statuses: ["Enviado", "Shipped"]
orders:
  pending_status: "Pendente"
marketplace:
  fallback_label: "Outros"
activity:
  keywords: ["pedido", "produção", "costura", "expedição"]
  limit: 10
art_history:
  limit: 5
"#;

/// Typed dashboard settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardConfig {
    /// `/reconcile/shipped_statuses`
    pub shipped_statuses: Vec<String>,
    /// `/orders/pending_status`
    pub pending_status: String,
    /// `/marketplace/fallback_label`: label for pending orders without a marketplace.
    pub marketplace_fallback: String,
    /// `/activity/keywords`: case-insensitive substrings selecting order-related log entries.
    pub activity_keywords: Vec<String>,
    /// `/activity/limit`
    pub activity_limit: usize,
    /// `/art_history/limit`
    pub art_history_limit: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            shipped_statuses: vec!["Enviado".to_string(), "Shipped".to_string()],
            pending_status: "Pendente".to_string(),
            marketplace_fallback: "Outros".to_string(),
            activity_keywords: ["pedido", "produção", "costura", "expedição"]
                .into_iter()
                .map(str::to_string)
                .collect(),
            activity_limit: 10,
            art_history_limit: 5,
        }
    }
}

impl DashboardConfig {
    pub fn from_loaded(loaded: &LoadedConfig) -> Result<Self> {
        Self::from_json(&loaded.config_json)
    }

    /// Read the typed view of a merged config tree. Absent (or null) keys
    /// keep their defaults; present keys of the wrong type are an error.
    pub fn from_json(config_json: &Value) -> Result<Self> {
        let mut cfg = Self::default();

        if let Some(v) = string_list(config_json, "/reconcile/shipped_statuses")? {
            cfg.shipped_statuses = v;
        }
        if let Some(v) = non_empty_string(config_json, "/orders/pending_status")? {
            cfg.pending_status = v;
        }
        if let Some(v) = non_empty_string(config_json, "/marketplace/fallback_label")? {
            cfg.marketplace_fallback = v;
        }
        if let Some(v) = string_list(config_json, "/activity/keywords")? {
            cfg.activity_keywords = v;
        }
        if let Some(v) = limit(config_json, "/activity/limit")? {
            cfg.activity_limit = v;
        }
        if let Some(v) = limit(config_json, "/art_history/limit")? {
            cfg.art_history_limit = v;
        }

        Ok(cfg)
    }
}

fn present<'a>(root: &'a Value, ptr: &str) -> Option<&'a Value> {
    root.pointer(ptr).filter(|v| !v.is_null())
}

fn non_empty_string(root: &Value, ptr: &str) -> Result<Option<String>> {
    match present(root, ptr) {
        None => Ok(None),
        Some(Value::String(s)) if !s.is_empty() => Ok(Some(s.clone())),
        Some(_) => bail!("CONFIG_INVALID_VALUE pointer={ptr} expected=non-empty string"),
    }
}

fn string_list(root: &Value, ptr: &str) -> Result<Option<Vec<String>>> {
    let Some(v) = present(root, ptr) else {
        return Ok(None);
    };
    let Some(items) = v.as_array() else {
        bail!("CONFIG_INVALID_VALUE pointer={ptr} expected=list of strings");
    };
    let mut out = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        match item.as_str() {
            Some(s) => out.push(s.to_string()),
            None => bail!("CONFIG_INVALID_VALUE pointer={ptr}/{i} expected=string"),
        }
    }
    Ok(Some(out))
}

fn limit(root: &Value, ptr: &str) -> Result<Option<usize>> {
    let Some(v) = present(root, ptr) else {
        return Ok(None);
    };
    match v.as_u64().and_then(|n| usize::try_from(n).ok()) {
        Some(n) => Ok(Some(n)),
        None => bail!("CONFIG_INVALID_VALUE pointer={ptr} expected=non-negative integer"),
    }
}
