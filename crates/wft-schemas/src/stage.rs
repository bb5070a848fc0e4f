//! Stage records and the four-stage collection context.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use wft_quantity::QuantityInput;

use crate::json::{decode, decode_collection, first_key, first_present, first_text};
use crate::{OrderId, SchemaError};

// ---------------------------------------------------------------------------
// Stage
// ---------------------------------------------------------------------------

/// Pipeline stage a record sits in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Ordered,
    InProduction,
    InSewing,
    InShipping,
}

impl Stage {
    pub const ALL: [Stage; 4] = [
        Stage::Ordered,
        Stage::InProduction,
        Stage::InSewing,
        Stage::InShipping,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Ordered => "ordered",
            Stage::InProduction => "in_production",
            Stage::InSewing => "in_sewing",
            Stage::InShipping => "in_shipping",
        }
    }

    /// Keys the data layer uses for this stage's collection, in lookup order.
    pub fn collection_keys(&self) -> &'static [&'static str] {
        match self {
            Stage::Ordered => &["pedidos", "ordered"],
            Stage::InProduction => &["producao", "inProduction"],
            Stage::InSewing => &["costura", "inSewing"],
            Stage::InShipping => &["expedicao", "inShipping"],
        }
    }
}

// ---------------------------------------------------------------------------
// Raw (wire) record
// ---------------------------------------------------------------------------

/// Wire shape shared by all four stages. Every field is optional and unknown
/// fields are ignored.
///
/// Which field carries the order id depends on the stage:
/// - ordered: `orderId`, then `id`
/// - production / sewing: `orderId`, then `pedidoId`
/// - shipping: `orderId`, then `pedidoId`, `pedidoIdOriginal`, `pedido`
///
/// The first *present* candidate wins even when it does not resolve, so a
/// shipping record with `pedidoId: ""` has no order id regardless of `pedido`.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawStageRecord {
    #[serde(rename = "orderId")]
    pub order_id: Option<Value>,
    pub id: Option<Value>,
    #[serde(rename = "pedidoId")]
    pub pedido_id: Option<Value>,
    #[serde(rename = "pedidoIdOriginal")]
    pub pedido_id_original: Option<Value>,
    pub pedido: Option<Value>,

    pub quantity: QuantityInput,
    pub quantidade: QuantityInput,

    pub status: Option<Value>,
    pub marketplace: Option<Value>,
}

impl RawStageRecord {
    pub fn into_record(self, stage: Stage) -> StageRecord {
        let id_value = match stage {
            Stage::Ordered => first_present(&[&self.order_id, &self.id]),
            Stage::InProduction | Stage::InSewing => {
                first_present(&[&self.order_id, &self.pedido_id])
            }
            Stage::InShipping => first_present(&[
                &self.order_id,
                &self.pedido_id,
                &self.pedido_id_original,
                &self.pedido,
            ]),
        };
        let order_id = id_value.and_then(OrderId::from_json);

        let status = first_text(&[&self.status]);
        let marketplace = first_text(&[&self.marketplace]);

        let quantity = if self.quantity.is_absent() {
            self.quantidade
        } else {
            self.quantity
        };

        StageRecord {
            order_id,
            quantity,
            status,
            marketplace,
        }
    }
}

// ---------------------------------------------------------------------------
// Internal record
// ---------------------------------------------------------------------------

/// One record sitting at one pipeline stage.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct StageRecord {
    pub order_id: Option<OrderId>,
    pub quantity: QuantityInput,
    pub status: Option<String>,
    pub marketplace: Option<String>,
}

impl StageRecord {
    /// Record for `order_id`; an empty id leaves the record unassigned.
    pub fn new(order_id: &str, quantity: impl Into<QuantityInput>) -> Self {
        Self {
            order_id: OrderId::new(order_id),
            quantity: quantity.into(),
            status: None,
            marketplace: None,
        }
    }

    /// Record with no order id.
    pub fn unassigned(quantity: impl Into<QuantityInput>) -> Self {
        Self {
            quantity: quantity.into(),
            ..Self::default()
        }
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_marketplace(mut self, marketplace: impl Into<String>) -> Self {
        self.marketplace = Some(marketplace.into());
        self
    }

    pub fn has_status(&self, status: &str) -> bool {
        self.status.as_deref() == Some(status)
    }

    /// Strict decode of one JSON element.
    pub fn from_json(stage: Stage, v: &Value) -> Result<Self, SchemaError> {
        let raw: RawStageRecord = decode(stage.as_str(), v)?;
        Ok(raw.into_record(stage))
    }
}

// ---------------------------------------------------------------------------
// Stage collections
// ---------------------------------------------------------------------------

/// The four stage collections, passed explicitly to the reconciler.
///
/// `Default` is four empty collections; a stage the caller does not have is
/// simply left empty.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct StageCollections {
    pub ordered: Vec<StageRecord>,
    pub in_production: Vec<StageRecord>,
    pub in_sewing: Vec<StageRecord>,
    pub in_shipping: Vec<StageRecord>,
}

impl StageCollections {
    pub fn new(
        ordered: Vec<StageRecord>,
        in_production: Vec<StageRecord>,
        in_sewing: Vec<StageRecord>,
        in_shipping: Vec<StageRecord>,
    ) -> Self {
        Self {
            ordered,
            in_production,
            in_sewing,
            in_shipping,
        }
    }

    pub fn stage(&self, stage: Stage) -> &[StageRecord] {
        match stage {
            Stage::Ordered => &self.ordered,
            Stage::InProduction => &self.in_production,
            Stage::InSewing => &self.in_sewing,
            Stage::InShipping => &self.in_shipping,
        }
    }

    pub fn stage_mut(&mut self, stage: Stage) -> &mut Vec<StageRecord> {
        match stage {
            Stage::Ordered => &mut self.ordered,
            Stage::InProduction => &mut self.in_production,
            Stage::InSewing => &mut self.in_sewing,
            Stage::InShipping => &mut self.in_shipping,
        }
    }

    /// Build from a JSON object holding the stage arrays.
    ///
    /// Never fails: a missing key, a non-array value, or a non-object `root`
    /// reads as an empty stage; malformed elements are skipped.
    pub fn from_json(root: &Value) -> Self {
        let mut out = Self::default();
        for stage in Stage::ALL {
            let v = first_key(root, stage.collection_keys());
            *out.stage_mut(stage) = decode_collection(stage.as_str(), v, |item| {
                StageRecord::from_json(stage, item)
            });
        }
        out
    }
}
