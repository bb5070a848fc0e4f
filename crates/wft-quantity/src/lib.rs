//! wft-quantity
//!
//! Quantity normalization for human-entered stock / order quantities.
//!
//! Deterministic, pure logic. No IO. Every input yields a finite number.

mod input;
pub mod normalizer;

pub use input::QuantityInput;
pub use normalizer::{normalize, normalize_str, parse_quantity_text, try_normalize, QuantityError};
