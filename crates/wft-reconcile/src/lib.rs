//! wft-reconcile
//!
//! Shipping-package reconciliation.
//!
//! Decides, per order sitting in the shipping stage, whether its whole
//! quantity has arrived there or part of it is still upstream:
//! - Shipping records already marked shipped are ignored
//! - Shipping records without an order id are ignored
//! - A package is complete when nothing for its order remains in the
//!   ordered / production / sewing stages
//!
//! Deterministic, pure logic. No IO.

mod engine;
mod types;

pub use engine::{reconcile, reconcile_with_policy};
pub use types::*;

pub use wft_schemas::{OrderId, StageCollections, StageRecord};
