//! wft-dashboard
//!
//! Numbers behind the operations dashboard: metric cards, the order funnel,
//! the marketplace split of pending orders, and the recent-activity / art
//! history feeds. Rendering is the caller's job; this crate only selects and
//! counts.
//!
//! Every section of [`DashboardSnapshot::build`] runs under [`guarded`]: an
//! unexpected fault in one section is logged and replaced by that section's
//! empty value instead of taking the whole dashboard down.

mod charts;
mod feed;
mod guard;
mod metrics;
mod snapshot;

pub use charts::{marketplace_distribution, order_funnel, FunnelStage, FunnelStep, MarketplaceShare};
pub use feed::{recent_activity, recent_art_history};
pub use guard::guarded;
pub use metrics::{
    metrics, metrics_with_packages, pending_order_count, stock_units, unique_sku_count,
    DashboardMetrics,
};
pub use snapshot::{reconcile_policy, DashboardSnapshot};

pub use wft_config::DashboardConfig;
pub use wft_schemas::DashboardInputs;
