use serde::{Deserialize, Serialize};
use serde_json::Value;
use wft_quantity::QuantityInput;

use crate::json::{decode, first_text};
use crate::SchemaError;

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
struct RawInventoryItem {
    sku: Option<Value>,
    codigo: Option<Value>,
    quantity: QuantityInput,
    quantidade: QuantityInput,
    qtd: QuantityInput,
    quantidade_atual: QuantityInput,
}

/// One stock line.
///
/// Quantity comes from the first present of `quantity`, `quantidade`, `qtd`,
/// `quantidade_atual`; the SKU from the first present of `sku`, `codigo`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct InventoryItem {
    pub sku: Option<String>,
    pub quantity: QuantityInput,
}

impl InventoryItem {
    pub fn new(sku: impl Into<String>, quantity: impl Into<QuantityInput>) -> Self {
        Self {
            sku: Some(sku.into()),
            quantity: quantity.into(),
        }
    }

    /// SKU if present and non-empty.
    pub fn sku_key(&self) -> Option<&str> {
        self.sku.as_deref().filter(|s| !s.is_empty())
    }

    pub fn from_json(v: &Value) -> Result<Self, SchemaError> {
        let raw: RawInventoryItem = decode("inventory", v)?;
        let quantity = [raw.quantity, raw.quantidade, raw.qtd, raw.quantidade_atual]
            .into_iter()
            .find(|q| !q.is_absent())
            .unwrap_or_default();
        Ok(Self {
            sku: first_text(&[&raw.sku, &raw.codigo]),
            quantity,
        })
    }
}
