//! Contract parameter types for European option pricing.
//!
//! This module provides:
//! - `OptionType`: call/put discriminant with text parsing
//! - `PricingInputs`: validated bundle of the six pricing parameters

use std::fmt;
use std::str::FromStr;

use num_traits::Float;
use volgrid_core::types::PricingError;

/// European option payoff direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptionType {
    /// Right to buy the underlying at the strike.
    Call,
    /// Right to sell the underlying at the strike.
    Put,
}

impl OptionType {
    /// Returns true for `Call`.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionType::Call)
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "Call"),
            OptionType::Put => write!(f, "Put"),
        }
    }
}

impl FromStr for OptionType {
    type Err = PricingError;

    /// Parses an option-type token.
    ///
    /// Accepts `call`/`c` and `put`/`p`, case-insensitive. Anything else
    /// fails with `UnsupportedOptionType` carrying the offending token.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "call" | "c" => Ok(OptionType::Call),
            "put" | "p" => Ok(OptionType::Put),
            _ => Err(PricingError::UnsupportedOptionType {
                value: s.to_string(),
            }),
        }
    }
}

/// Validated pricing parameters for a single European option.
///
/// Construction rejects any parameter outside the formula's domain, so a
/// `PricingInputs` value always satisfies `spot > 0`, `strike > 0`,
/// `time_to_expiry > 0` and `volatility > 0`. Negative rates are allowed.
///
/// # Examples
/// ```
/// use volgrid_models::instruments::{OptionType, PricingInputs};
///
/// let inputs =
///     PricingInputs::new(0.05, 100.0_f64, 100.0, 1.0, 0.2, OptionType::Call).unwrap();
/// assert_eq!(inputs.spot(), 100.0);
///
/// // Zero time to expiry is rejected
/// assert!(PricingInputs::new(0.05, 100.0_f64, 100.0, 0.0, 0.2, OptionType::Call).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingInputs<T: Float> {
    rate: T,
    spot: T,
    strike: T,
    time_to_expiry: T,
    volatility: T,
    option_type: OptionType,
}

impl<T: Float> PricingInputs<T> {
    /// Creates a validated parameter bundle.
    ///
    /// # Errors
    /// `PricingError::InvalidParameter` if `spot`, `strike`,
    /// `time_to_expiry` or `volatility` is non-positive or non-finite,
    /// or if `rate` is non-finite; the error names the parameter and
    /// carries the rejected value.
    pub fn new(
        rate: T,
        spot: T,
        strike: T,
        time_to_expiry: T,
        volatility: T,
        option_type: OptionType,
    ) -> Result<Self, PricingError> {
        let zero = T::zero();

        // The rate may be negative but must still be finite
        if !rate.is_finite() {
            return Err(PricingError::InvalidParameter {
                name: "rate",
                value: rate.to_f64().unwrap_or(f64::NAN),
            });
        }

        for (name, value) in [
            ("spot", spot),
            ("strike", strike),
            ("time_to_expiry", time_to_expiry),
            ("volatility", volatility),
        ] {
            // NaN fails the comparison too; only finite positive values pass
            if !value.is_finite() || value <= zero {
                return Err(PricingError::InvalidParameter {
                    name,
                    value: value.to_f64().unwrap_or(f64::NAN),
                });
            }
        }

        Ok(Self {
            rate,
            spot,
            strike,
            time_to_expiry,
            volatility,
            option_type,
        })
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> T {
        self.strike
    }

    /// Returns the time to expiry in years.
    #[inline]
    pub fn time_to_expiry(&self) -> T {
        self.time_to_expiry
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// Returns the option type.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }
}
