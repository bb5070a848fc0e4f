use serde::Serialize;
use wft_reconcile::{reconcile_with_policy, PackageReport, ReconcilePolicy};
use wft_schemas::{ActivityLogEntry, ArtHistoryEntry, DashboardInputs};

use crate::{
    guarded, marketplace_distribution, metrics_with_packages, order_funnel, recent_activity,
    recent_art_history, DashboardConfig, DashboardMetrics, FunnelStage, MarketplaceShare,
};

pub fn reconcile_policy(cfg: &DashboardConfig) -> ReconcilePolicy {
    ReconcilePolicy::new(cfg.shipped_statuses.iter().cloned())
}

/// Every dashboard section computed from one set of inputs.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub metrics: DashboardMetrics,
    pub funnel: Vec<FunnelStage>,
    pub marketplaces: Vec<MarketplaceShare>,
    pub packages: PackageReport,
    pub recent_activity: Vec<ActivityLogEntry>,
    pub recent_art: Vec<ArtHistoryEntry>,
}

impl DashboardSnapshot {
    /// Compute all sections. Packages are reconciled once and shared by the
    /// metric cards and the funnel. Never panics.
    pub fn build(inputs: &DashboardInputs, cfg: &DashboardConfig) -> Self {
        let policy = reconcile_policy(cfg);

        let packages = guarded("packages", || reconcile_with_policy(&inputs.stages, &policy));
        let metrics = guarded("metrics", || metrics_with_packages(inputs, cfg, &packages));
        let funnel = guarded("funnel", || order_funnel(inputs, cfg, &packages));
        let marketplaces = guarded("marketplaces", || {
            marketplace_distribution(&inputs.stages.ordered, cfg)
        });
        let recent_activity = guarded("recent_activity", || {
            recent_activity(&inputs.logs, &cfg.activity_keywords, cfg.activity_limit)
        });
        let recent_art = guarded("recent_art", || {
            recent_art_history(&inputs.art_history, cfg.art_history_limit)
        });

        tracing::debug!(
            stock_units = metrics.stock_units,
            unique_skus = metrics.unique_skus,
            pending_orders = metrics.pending_orders,
            production_queue = metrics.production_queue,
            sewing_queue = metrics.sewing_queue,
            ready_to_ship = metrics.ready_to_ship,
            "dashboard snapshot built"
        );

        Self {
            metrics,
            funnel,
            marketplaces,
            packages,
            recent_activity,
            recent_art,
        }
    }
}
