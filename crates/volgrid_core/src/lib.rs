//! # volgrid_core: Foundation Layer for Option Pricing
//!
//! Bottom layer of the volgrid workspace, providing:
//! - Standard normal distribution functions (`math::distributions`)
//! - Evenly spaced axis construction (`math::axis`)
//! - Structured error types: `PricingError` (`types::error`)
//!
//! This layer has no dependencies on other volgrid crates and only minimal
//! external dependencies:
//! - num-traits: traits for generic numerical computation
//! - thiserror: structured error derivation
//!
//! ## Usage Examples
//!
//! ```rust
//! use volgrid_core::math::distributions::norm_cdf;
//! use volgrid_core::math::axis::linspace;
//!
//! let cdf = norm_cdf(0.0_f64);
//! assert!((cdf - 0.5).abs() < 1e-7);
//!
//! let axis = linspace(80.0, 120.0, 5);
//! assert_eq!(axis, vec![80.0, 90.0, 100.0, 110.0, 120.0]);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod math;
pub mod types;
