//! Data series for the funnel and marketplace charts.

use serde::Serialize;
use wft_reconcile::PackageReport;
use wft_schemas::StageRecord;

use crate::{pending_order_count, DashboardConfig, DashboardInputs};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FunnelStep {
    Pending,
    Production,
    Sewing,
    Shipping,
}

impl FunnelStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            FunnelStep::Pending => "pending",
            FunnelStep::Production => "production",
            FunnelStep::Sewing => "sewing",
            FunnelStep::Shipping => "shipping",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FunnelStage {
    pub step: FunnelStep,
    pub count: usize,
}

/// Pending orders -> production records -> sewing records -> complete
/// packages, always in that order.
pub fn order_funnel(
    inputs: &DashboardInputs,
    cfg: &DashboardConfig,
    packages: &PackageReport,
) -> Vec<FunnelStage> {
    vec![
        FunnelStage {
            step: FunnelStep::Pending,
            count: pending_order_count(&inputs.stages.ordered, &cfg.pending_status),
        },
        FunnelStage {
            step: FunnelStep::Production,
            count: inputs.stages.in_production.len(),
        },
        FunnelStage {
            step: FunnelStep::Sewing,
            count: inputs.stages.in_sewing.len(),
        },
        FunnelStage {
            step: FunnelStep::Shipping,
            count: packages.complete_count(),
        },
    ]
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MarketplaceShare {
    pub marketplace: String,
    pub pending_orders: usize,
}

/// Pending order records per marketplace, in first-encounter order.
/// Records without a marketplace (or with an empty one) go to the fallback
/// label.
pub fn marketplace_distribution(
    ordered: &[StageRecord],
    cfg: &DashboardConfig,
) -> Vec<MarketplaceShare> {
    let mut shares: Vec<MarketplaceShare> = Vec::new();

    for rec in ordered.iter().filter(|r| r.has_status(&cfg.pending_status)) {
        let name = rec
            .marketplace
            .as_deref()
            .filter(|m| !m.is_empty())
            .unwrap_or(&cfg.marketplace_fallback);

        match shares.iter_mut().find(|s| s.marketplace == name) {
            Some(share) => share.pending_orders += 1,
            None => shares.push(MarketplaceShare {
                marketplace: name.to_string(),
                pending_orders: 1,
            }),
        }
    }

    shares
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marketplace_counts_records_with_fallback() {
        let ordered = vec![
            StageRecord::new("P1", 1.0).with_status("Pendente").with_marketplace("Shopee"),
            StageRecord::new("P2", 1.0).with_status("Pendente"),
            StageRecord::new("P3", 1.0).with_status("Pendente").with_marketplace("Shopee"),
            StageRecord::new("P4", 1.0).with_status("Pendente").with_marketplace(""),
            StageRecord::new("P5", 1.0).with_status("Enviado").with_marketplace("Amazon"),
        ];

        let shares = marketplace_distribution(&ordered, &DashboardConfig::default());
        assert_eq!(
            shares,
            vec![
                MarketplaceShare {
                    marketplace: "Shopee".to_string(),
                    pending_orders: 2
                },
                MarketplaceShare {
                    marketplace: "Outros".to_string(),
                    pending_orders: 2
                },
            ]
        );
    }
}
