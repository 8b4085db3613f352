//! # Volgrid Models (L2: Pricing Logic)
//!
//! European option pricing under Black-Scholes and grid evaluation over
//! spot/volatility ranges.
//!
//! This crate provides:
//! - Contract definitions (`OptionType`, `PricingInputs`)
//! - The Black-Scholes closed-form pricer (`analytical::BlackScholes`)
//! - Grid evaluation producing call/put price matrices (`grid`)
//!
//! ## Design Principles
//!
//! - **Typed rejection**: invalid parameters fail with structured errors
//!   before any arithmetic; a NaN never escapes
//! - **Generic over `T: Float`** for `f64`/`f32`
//! - **Single-pass grid**: one evaluation yields both the call and the
//!   put matrix

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod grid;
pub mod instruments;

pub use analytical::BlackScholes;
pub use grid::{evaluate_grid, GridError, PriceGrid};
pub use instruments::{OptionType, PricingInputs};
