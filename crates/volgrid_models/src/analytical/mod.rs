//! Closed-form pricing for European options.
//!
//! ## Design Principles
//!
//! - **Generic over `T: Float`**: works with `f64` and `f32`
//! - **Typed rejection**: domain violations surface as `PricingError`
//!   before any arithmetic runs
//! - **Numerical stability**: erfc-based normal CDF from `volgrid_core`

pub mod black_scholes;

pub use black_scholes::{price, BlackScholes};
