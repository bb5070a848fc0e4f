use std::collections::HashMap;

use wft_quantity::normalize;
use wft_schemas::{OrderId, StageCollections, StageRecord};

use crate::{PackageGroup, PackageReport, ReconcilePolicy, StageQuantities};

/// Per-order normalized quantity sums for one upstream stage.
///
/// Records are added in scan order, so each sum is bit-identical to a
/// filter-then-fold over the same collection.
fn sum_by_order(records: &[StageRecord]) -> HashMap<&OrderId, f64> {
    let mut sums: HashMap<&OrderId, f64> = HashMap::new();
    for rec in records {
        if let Some(order_id) = rec.order_id.as_ref() {
            *sums.entry(order_id).or_insert(0.0) += normalize(&rec.quantity);
        }
    }
    sums
}

/// Shipping records still in the building, grouped by order id in
/// first-encounter order.
fn group_shipping<'a>(
    shipping: &'a [StageRecord],
    policy: &ReconcilePolicy,
) -> Vec<(&'a OrderId, Vec<&'a StageRecord>)> {
    let mut groups: Vec<(&OrderId, Vec<&StageRecord>)> = Vec::new();
    let mut index: HashMap<&OrderId, usize> = HashMap::new();

    for rec in shipping {
        if policy.is_shipped(rec) {
            continue;
        }
        let Some(order_id) = rec.order_id.as_ref() else {
            continue;
        };
        match index.get(order_id) {
            Some(&i) => groups[i].1.push(rec),
            None => {
                index.insert(order_id, groups.len());
                groups.push((order_id, vec![rec]));
            }
        }
    }
    groups
}

/// Reconcile with the default policy (`"Enviado"` / `"Shipped"` are the
/// shipped sentinels).
pub fn reconcile(stages: &StageCollections) -> PackageReport {
    reconcile_with_policy(stages, &ReconcilePolicy::default())
}

/// Classify every order present in shipping as complete or incomplete:
/// - ordered / production / sewing / shipping quantities are summed per order
/// - complete iff the shipping sum equals the four-stage total exactly
///
/// Every non-shipped shipping record with an order id lands in exactly one
/// group; every group lands in exactly one list.
pub fn reconcile_with_policy(stages: &StageCollections, policy: &ReconcilePolicy) -> PackageReport {
    let ordered = sum_by_order(&stages.ordered);
    let in_production = sum_by_order(&stages.in_production);
    let in_sewing = sum_by_order(&stages.in_sewing);

    let mut report = PackageReport::empty();

    for (order_id, items) in group_shipping(&stages.in_shipping, policy) {
        let a = ordered.get(order_id).copied().unwrap_or(0.0);
        let b = in_production.get(order_id).copied().unwrap_or(0.0);
        let c = in_sewing.get(order_id).copied().unwrap_or(0.0);
        let d = items
            .iter()
            .fold(0.0, |acc, rec| acc + normalize(&rec.quantity));

        let quantities = StageQuantities {
            ordered: a,
            in_production: b,
            in_sewing: c,
            in_shipping: d,
            total: a + b + c + d,
        };

        let group = PackageGroup {
            order_id: order_id.clone(),
            marketplace: items.first().and_then(|rec| rec.marketplace.clone()),
            items: items.into_iter().cloned().collect(),
            quantities,
        };

        if group.is_complete() {
            report.complete.push(group);
        } else {
            report.incomplete.push(group);
        }
    }

    tracing::debug!(
        complete = report.complete_count(),
        incomplete = report.incomplete_count(),
        shipping_records = stages.in_shipping.len(),
        "packages reconciled"
    );

    report
}
