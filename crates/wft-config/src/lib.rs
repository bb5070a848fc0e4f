//! wft-config
//!
//! Layered YAML configuration for the dashboard core.
//!
//! - YAML documents are merged in order (earlier = base, later = override)
//! - The merged tree is rendered to canonical JSON and hashed (SHA-256) so a
//!   report can name the exact configuration it was computed with
//! - [`DashboardConfig`] is the typed view; every key has a default
//!
//! Callers hand over YAML *text*. This crate does not read files.

mod consumption;
mod dashboard;

use anyhow::{Context, Result};
use serde_json::Value;
use sha2::{Digest, Sha256};

pub use consumption::{
    report_unused_keys, UnusedKeyPolicy, UnusedKeyReport, CONSUMED_POINTERS,
};
pub use dashboard::{DashboardConfig, DEFAULT_CONFIG_YAML};

#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config_hash: String,
    pub canonical_json: String,
    pub config_json: Value,
}

impl LoadedConfig {
    /// Typed dashboard settings; absent keys take their defaults.
    pub fn dashboard(&self) -> Result<DashboardConfig> {
        DashboardConfig::from_loaded(self)
    }
}

pub fn load_layered_yaml_from_strings(yaml_docs: &[&str]) -> Result<LoadedConfig> {
    let mut merged = serde_json::json!({});
    for (i, raw) in yaml_docs.iter().enumerate() {
        let v_yaml: serde_yaml::Value =
            serde_yaml::from_str(raw).with_context(|| format!("invalid yaml (layer {i})"))?;
        let v_json = serde_json::to_value(v_yaml).context("yaml->json conversion failed")?;
        // An empty document parses as null; it contributes nothing.
        if v_json.is_null() {
            continue;
        }
        merged = deep_merge(merged, v_json);
    }

    let canonical_json = canonicalize_json(&merged)?;
    let config_hash = sha256_hex(canonical_json.as_bytes());
    Ok(LoadedConfig {
        config_hash,
        canonical_json,
        config_json: merged,
    })
}

/// Load YAML layers and extract the typed dashboard settings in one step.
pub fn load_dashboard_config(yaml_docs: &[&str]) -> Result<(LoadedConfig, DashboardConfig)> {
    let loaded = load_layered_yaml_from_strings(yaml_docs)?;
    let cfg = loaded.dashboard()?;
    Ok((loaded, cfg))
}

fn deep_merge(a: Value, b: Value) -> Value {
    match (a, b) {
        (Value::Object(mut a_map), Value::Object(b_map)) => {
            for (k, b_val) in b_map {
                let a_val = a_map.remove(&k).unwrap_or(Value::Null);
                a_map.insert(k, deep_merge(a_val, b_val));
            }
            Value::Object(a_map)
        }
        (_, b_other) => b_other,
    }
}

fn canonicalize_json(v: &Value) -> Result<String> {
    // serde_json::Map is key-sorted (no preserve_order feature), so compact
    // serialization is already canonical.
    let s = serde_json::to_string(v).context("canonical json serialize failed")?;
    Ok(s)
}

fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    let out = hasher.finalize();
    hex::encode(out)
}
