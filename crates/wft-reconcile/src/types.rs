use serde::Serialize;
use wft_schemas::{OrderId, StageRecord};

/// Status the legacy data layer writes once a package has left.
pub const SHIPPED_STATUS: &str = "Enviado";

/// English spelling of the same sentinel.
pub const SHIPPED_STATUS_EN: &str = "Shipped";

/// Knobs for [`crate::reconcile_with_policy`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReconcilePolicy {
    /// Shipping records whose status equals one of these (exact match) have
    /// already left and take no part in reconciliation.
    pub shipped_statuses: Vec<String>,
}

impl ReconcilePolicy {
    pub fn new(shipped_statuses: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            shipped_statuses: shipped_statuses.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_shipped(&self, record: &StageRecord) -> bool {
        match record.status.as_deref() {
            Some(status) => self.shipped_statuses.iter().any(|s| s == status),
            None => false,
        }
    }
}

impl Default for ReconcilePolicy {
    fn default() -> Self {
        Self::new([SHIPPED_STATUS, SHIPPED_STATUS_EN])
    }
}

/// Normalized quantity sums for one order, per stage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct StageQuantities {
    pub ordered: f64,
    pub in_production: f64,
    pub in_sewing: f64,
    pub in_shipping: f64,
    /// `ordered + in_production + in_sewing + in_shipping`, summed in that order.
    pub total: f64,
}

impl StageQuantities {
    /// Exact comparison; no tolerance is applied.
    pub fn all_in_shipping(&self) -> bool {
        self.in_shipping == self.total
    }

    /// Quantity still upstream of shipping.
    pub fn outstanding(&self) -> f64 {
        self.total - self.in_shipping
    }
}

/// Shipping-stage records of one order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PackageGroup {
    pub order_id: OrderId,
    /// Marketplace of the first shipping record, if it had one.
    pub marketplace: Option<String>,
    /// Shipping records in scan order.
    pub items: Vec<StageRecord>,
    pub quantities: StageQuantities,
}

impl PackageGroup {
    pub fn is_complete(&self) -> bool {
        self.quantities.all_in_shipping()
    }
}

/// Complete / incomplete packages, each list in first-encounter order.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PackageReport {
    pub complete: Vec<PackageGroup>,
    pub incomplete: Vec<PackageGroup>,
}

impl PackageReport {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn complete_count(&self) -> usize {
        self.complete.len()
    }

    pub fn incomplete_count(&self) -> usize {
        self.incomplete.len()
    }

    pub fn package_count(&self) -> usize {
        self.complete.len() + self.incomplete.len()
    }

    pub fn find(&self, order_id: &OrderId) -> Option<&PackageGroup> {
        self.complete
            .iter()
            .chain(self.incomplete.iter())
            .find(|g| &g.order_id == order_id)
    }

    /// `Some(true|false)` for an order in shipping, `None` otherwise.
    pub fn is_complete(&self, order_id: &OrderId) -> Option<bool> {
        self.find(order_id).map(PackageGroup::is_complete)
    }
}
