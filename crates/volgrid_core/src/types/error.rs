//! Error types for structured error handling.
//!
//! A caller must always be able to tell a valid price from an invalid
//! input without inspecting the numeric result, so every rejection is a
//! typed variant carrying the offending value, never a NaN, a sentinel,
//! or a bare message.

use thiserror::Error;

/// Categorised pricing errors.
///
/// # Variants
/// - `InvalidParameter`: a model parameter outside its valid domain
/// - `UnsupportedOptionType`: option-type token outside {Call, Put}
///
/// # Examples
/// ```
/// use volgrid_core::types::PricingError;
///
/// let err = PricingError::InvalidParameter {
///     name: "volatility",
///     value: -0.2,
/// };
/// assert_eq!(format!("{}", err), "Invalid parameter volatility: -0.2");
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PricingError {
    /// Parameter outside its valid domain (e.g. non-positive volatility).
    #[error("Invalid parameter {name}: {value}")]
    InvalidParameter {
        /// Name of the offending parameter
        name: &'static str,
        /// The rejected value
        value: f64,
    },

    /// Option-type value outside the supported set.
    #[error("Unsupported option type: {value}")]
    UnsupportedOptionType {
        /// The rejected option-type token
        value: String,
    },
}
