//! wft-testkit
//!
//! Fixtures for scenario tests: a realistic operations snapshot in the
//! data layer's wire shape, and a builder for hand-made stage collections.

use anyhow::{Context, Result};
use serde_json::Value;
use wft_quantity::QuantityInput;
use wft_schemas::{DashboardInputs, StageCollections, StageRecord};

/// Operations snapshot as the data layer hands it over (Portuguese keys,
/// mixed id types, free-text quantities, one malformed shipping record).
pub const OPERATIONS_SNAPSHOT_JSON: &str = include_str!("../fixtures/operations_snapshot.json");

pub fn parse_operations_snapshot(json: &str) -> Result<DashboardInputs> {
    let root: Value = serde_json::from_str(json).context("parse operations snapshot json")?;
    Ok(DashboardInputs::from_json(&root))
}

/// The bundled fixture, decoded.
pub fn operations_snapshot() -> Result<DashboardInputs> {
    parse_operations_snapshot(OPERATIONS_SNAPSHOT_JSON)
}

pub fn ordered(order_id: &str, qty: impl Into<QuantityInput>) -> StageRecord {
    StageRecord::new(order_id, qty)
}

pub fn in_production(order_id: &str, qty: impl Into<QuantityInput>) -> StageRecord {
    StageRecord::new(order_id, qty)
}

pub fn in_sewing(order_id: &str, qty: impl Into<QuantityInput>) -> StageRecord {
    StageRecord::new(order_id, qty)
}

pub fn shipping(order_id: &str, qty: impl Into<QuantityInput>) -> StageRecord {
    StageRecord::new(order_id, qty)
}

/// Builder for [`StageCollections`].
///
/// ```
/// use wft_testkit::StagesBuilder;
///
/// let stages = StagesBuilder::new()
///     .ordered("P1", "10")
///     .shipping("P1", "7")
///     .build();
/// assert_eq!(stages.in_shipping.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct StagesBuilder {
    stages: StageCollections,
}

impl StagesBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ordered(mut self, order_id: &str, qty: impl Into<QuantityInput>) -> Self {
        self.stages.ordered.push(ordered(order_id, qty));
        self
    }

    pub fn pending(
        mut self,
        order_id: &str,
        qty: impl Into<QuantityInput>,
        marketplace: &str,
    ) -> Self {
        self.stages.ordered.push(
            ordered(order_id, qty)
                .with_status("Pendente")
                .with_marketplace(marketplace),
        );
        self
    }

    pub fn production(mut self, order_id: &str, qty: impl Into<QuantityInput>) -> Self {
        self.stages.in_production.push(in_production(order_id, qty));
        self
    }

    pub fn sewing(mut self, order_id: &str, qty: impl Into<QuantityInput>) -> Self {
        self.stages.in_sewing.push(in_sewing(order_id, qty));
        self
    }

    pub fn shipping(mut self, order_id: &str, qty: impl Into<QuantityInput>) -> Self {
        self.stages.in_shipping.push(shipping(order_id, qty));
        self
    }

    /// Shipping record already marked as shipped (`"Enviado"`).
    pub fn shipped(mut self, order_id: &str, qty: impl Into<QuantityInput>) -> Self {
        self.stages
            .in_shipping
            .push(shipping(order_id, qty).with_status("Enviado"));
        self
    }

    /// Shipping record with no order id.
    pub fn orphan_shipping(mut self, qty: impl Into<QuantityInput>) -> Self {
        self.stages.in_shipping.push(StageRecord::unassigned(qty));
        self
    }

    pub fn build(self) -> StageCollections {
        self.stages
    }
}
