use std::collections::HashSet;

use serde::Serialize;
use wft_quantity::{try_normalize, QuantityError};
use wft_reconcile::{reconcile_with_policy, PackageReport};
use wft_schemas::{DashboardInputs, InventoryItem, StageRecord};

use crate::{reconcile_policy, DashboardConfig};

/// Metric cards.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct DashboardMetrics {
    /// Distinct order ids in the ordered stage with the pending status.
    pub pending_orders: usize,
    /// Sum of normalized inventory quantities.
    pub stock_units: f64,
    /// Distinct non-empty SKUs in inventory.
    pub unique_skus: usize,
    /// Records in production.
    pub production_queue: usize,
    /// Records in sewing.
    pub sewing_queue: usize,
    /// Complete shipping packages.
    pub ready_to_ship: usize,
}

/// Distinct order ids among pending ordered records. Pending records without
/// an order id are not counted.
pub fn pending_order_count(ordered: &[StageRecord], pending_status: &str) -> usize {
    ordered
        .iter()
        .filter(|r| r.has_status(pending_status))
        .filter_map(|r| r.order_id.as_ref())
        .collect::<HashSet<_>>()
        .len()
}

/// Total stock units. Quantities that could not be read count as zero and
/// are reported at `debug`.
pub fn stock_units(inventory: &[InventoryItem]) -> f64 {
    inventory
        .iter()
        .enumerate()
        .fold(0.0, |acc, (index, item)| {
            let q = match try_normalize(&item.quantity) {
                Ok(q) => q,
                Err(QuantityError::Absent) => 0.0,
                Err(reason) => {
                    tracing::debug!(
                        index,
                        sku = item.sku.as_deref().unwrap_or(""),
                        raw = ?item.quantity,
                        %reason,
                        "inventory quantity read as zero"
                    );
                    0.0
                }
            };
            acc + q
        })
}

pub fn unique_sku_count(inventory: &[InventoryItem]) -> usize {
    inventory
        .iter()
        .filter_map(InventoryItem::sku_key)
        .collect::<HashSet<_>>()
        .len()
}

/// Metric cards, reusing an already computed package report.
pub fn metrics_with_packages(
    inputs: &DashboardInputs,
    cfg: &DashboardConfig,
    packages: &PackageReport,
) -> DashboardMetrics {
    DashboardMetrics {
        pending_orders: pending_order_count(&inputs.stages.ordered, &cfg.pending_status),
        stock_units: stock_units(&inputs.inventory),
        unique_skus: unique_sku_count(&inputs.inventory),
        production_queue: inputs.stages.in_production.len(),
        sewing_queue: inputs.stages.in_sewing.len(),
        ready_to_ship: packages.complete_count(),
    }
}

pub fn metrics(inputs: &DashboardInputs, cfg: &DashboardConfig) -> DashboardMetrics {
    let packages = reconcile_with_policy(&inputs.stages, &reconcile_policy(cfg));
    metrics_with_packages(inputs, cfg, &packages)
}
