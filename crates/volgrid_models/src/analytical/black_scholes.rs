//! Black-Scholes pricing for European options.
//!
//! Closed-form model for European call and put prices on a
//! non-dividend-paying underlying:
//!
//! **Call**: C = S·Φ(d₁) - K·e^(-rT)·Φ(d₂)
//! **Put**:  P = K·e^(-rT)·Φ(-d₂) - S·Φ(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! Every parameter that would make the formula ill-defined (non-positive
//! spot, strike, expiry or volatility) is rejected with a typed error up
//! front; the arithmetic only runs on a valid domain, so the returned
//! price is always a finite nonnegative number.

use num_traits::Float;

use volgrid_core::math::distributions::norm_cdf;
use volgrid_core::types::PricingError;

use crate::instruments::{OptionType, PricingInputs};

/// Black-Scholes model for European option pricing.
///
/// Holds the market parameters (spot, rate, volatility); strike and
/// expiry are supplied per contract. Pure and deterministic: identical
/// inputs give bit-identical prices.
///
/// # Examples
/// ```
/// use volgrid_models::analytical::BlackScholes;
///
/// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
/// let call = bs.price_call(100.0, 1.0).unwrap();
/// let put = bs.price_put(100.0, 1.0).unwrap();
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call - put - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-6);
/// ```
#[derive(Debug, Clone)]
pub struct BlackScholes<T: Float> {
    /// Spot price (S)
    spot: T,
    /// Risk-free interest rate (r)
    rate: T,
    /// Volatility (σ)
    volatility: T,
}

impl<T: Float> BlackScholes<T> {
    /// Creates a new Black-Scholes model.
    ///
    /// # Errors
    /// `PricingError::InvalidParameter` if `spot` or `volatility` is
    /// non-positive or non-finite, or if `rate` is non-finite. Negative
    /// rates are allowed.
    pub fn new(spot: T, rate: T, volatility: T) -> Result<Self, PricingError> {
        check_positive("spot", spot)?;
        check_positive("volatility", volatility)?;

        // The rate may be negative but must still be finite
        if !rate.is_finite() {
            return Err(PricingError::InvalidParameter {
                name: "rate",
                value: rate.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(Self {
            spot,
            rate,
            volatility,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// Computes (d₁, d₂) for a validated strike and expiry.
    ///
    /// Callers must have checked `strike > 0` and `expiry > 0`; the
    /// denominator σ√T is then strictly positive.
    #[inline]
    fn d1_d2(&self, strike: T, expiry: T) -> (T, T) {
        let half = T::from(0.5).unwrap();

        let vol_sqrt_t = self.volatility * expiry.sqrt();
        let log_moneyness = (self.spot / strike).ln();
        let drift = (self.rate + half * self.volatility * self.volatility) * expiry;

        let d1 = (log_moneyness + drift) / vol_sqrt_t;
        (d1, d1 - vol_sqrt_t)
    }

    /// Computes the European call price C = S·Φ(d₁) - K·e^(-rT)·Φ(d₂).
    ///
    /// # Errors
    /// `PricingError::InvalidParameter` if `strike` or `expiry` is
    /// non-positive or non-finite.
    pub fn price_call(&self, strike: T, expiry: T) -> Result<T, PricingError> {
        check_positive("strike", strike)?;
        check_positive("time_to_expiry", expiry)?;

        let (d1, d2) = self.d1_d2(strike, expiry);
        let discount = (-self.rate * expiry).exp();

        Ok(self.spot * norm_cdf(d1) - strike * discount * norm_cdf(d2))
    }

    /// Computes the European put price P = K·e^(-rT)·Φ(-d₂) - S·Φ(-d₁).
    ///
    /// # Errors
    /// `PricingError::InvalidParameter` if `strike` or `expiry` is
    /// non-positive or non-finite.
    pub fn price_put(&self, strike: T, expiry: T) -> Result<T, PricingError> {
        check_positive("strike", strike)?;
        check_positive("time_to_expiry", expiry)?;

        let (d1, d2) = self.d1_d2(strike, expiry);
        let discount = (-self.rate * expiry).exp();

        Ok(strike * discount * norm_cdf(-d2) - self.spot * norm_cdf(-d1))
    }

    /// Prices either payoff direction for the given contract.
    pub fn price(
        &self,
        option_type: OptionType,
        strike: T,
        expiry: T,
    ) -> Result<T, PricingError> {
        match option_type {
            OptionType::Call => self.price_call(strike, expiry),
            OptionType::Put => self.price_put(strike, expiry),
        }
    }
}

/// Prices a single European option from a full parameter bundle.
///
/// This is the one-shot entry point matching the external contract
/// `price(inputs) -> Price | Error`.
///
/// # Examples
/// ```
/// use volgrid_models::analytical::price;
/// use volgrid_models::instruments::{OptionType, PricingInputs};
///
/// let inputs =
///     PricingInputs::new(0.05, 100.0_f64, 100.0, 1.0, 0.2, OptionType::Call).unwrap();
/// let value = price(&inputs).unwrap();
/// assert!((value - 10.4506).abs() < 1e-3);
/// ```
pub fn price<T: Float>(inputs: &PricingInputs<T>) -> Result<T, PricingError> {
    let model = BlackScholes::new(inputs.spot(), inputs.rate(), inputs.volatility())?;
    model.price(
        inputs.option_type(),
        inputs.strike(),
        inputs.time_to_expiry(),
    )
}

#[inline]
fn check_positive<T: Float>(name: &'static str, value: T) -> Result<(), PricingError> {
    // NaN fails the comparison too; only finite positive values pass
    if !value.is_finite() || value <= T::zero() {
        return Err(PricingError::InvalidParameter {
            name,
            value: value.to_f64().unwrap_or(f64::NAN),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ==========================================================
    // Constructor Tests
    // ==========================================================

    #[test]
    fn test_new_valid_parameters() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        assert_eq!(bs.spot(), 100.0);
        assert_eq!(bs.rate(), 0.05);
        assert_eq!(bs.volatility(), 0.2);
    }

    #[test]
    fn test_new_invalid_spot() {
        let err = BlackScholes::new(-100.0_f64, 0.05, 0.2).unwrap_err();
        match err {
            PricingError::InvalidParameter { name, value } => {
                assert_eq!(name, "spot");
                assert_eq!(value, -100.0);
            }
            other => panic!("Expected InvalidParameter, got {:?}", other),
        }
    }

    #[test]
    fn test_new_invalid_volatility() {
        let err = BlackScholes::new(100.0_f64, 0.05, 0.0).unwrap_err();
        match err {
            PricingError::InvalidParameter { name, .. } => {
                assert_eq!(name, "volatility");
            }
            other => panic!("Expected InvalidParameter, got {:?}", other),
        }
    }

    #[test]
    fn test_new_negative_rate_allowed() {
        assert!(BlackScholes::new(100.0_f64, -0.02, 0.2).is_ok());
    }

    // ==========================================================
    // Domain Rejection Tests
    // ==========================================================

    #[test]
    fn test_zero_expiry_rejected() {
        // Zero time to expiry is a typed failure, never a numeric result
        let bs = BlackScholes::new(30.0_f64, 0.01, 0.3).unwrap();
        let err = bs.price_call(40.0, 0.0).unwrap_err();
        match err {
            PricingError::InvalidParameter { name, value } => {
                assert_eq!(name, "time_to_expiry");
                assert_eq!(value, 0.0);
            }
            other => panic!("Expected InvalidParameter, got {:?}", other),
        }
    }

    #[test]
    fn test_nan_spot_rejected() {
        // Validation must catch NaN: a comparison against zero alone
        // lets it through and a NaN price would escape
        let err = BlackScholes::new(f64::NAN, 0.05, 0.2).unwrap_err();
        match err {
            PricingError::InvalidParameter { name, value } => {
                assert_eq!(name, "spot");
                assert!(value.is_nan());
            }
            other => panic!("Expected InvalidParameter, got {:?}", other),
        }

        let inputs = PricingInputs::new(0.05, f64::NAN, 100.0, 1.0, 0.2, OptionType::Call);
        assert!(inputs.is_err());
    }

    #[test]
    fn test_infinite_volatility_rejected() {
        let err = BlackScholes::new(100.0_f64, 0.05, f64::INFINITY).unwrap_err();
        match err {
            PricingError::InvalidParameter { name, .. } => assert_eq!(name, "volatility"),
            other => panic!("Expected InvalidParameter, got {:?}", other),
        }
    }

    #[test]
    fn test_non_finite_rate_rejected() {
        let err = BlackScholes::new(100.0_f64, f64::INFINITY, 0.2).unwrap_err();
        match err {
            PricingError::InvalidParameter { name, .. } => assert_eq!(name, "rate"),
            other => panic!("Expected InvalidParameter, got {:?}", other),
        }
    }

    #[test]
    fn test_nan_expiry_rejected() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        let err = bs.price_call(100.0, f64::NAN).unwrap_err();
        match err {
            PricingError::InvalidParameter { name, .. } => {
                assert_eq!(name, "time_to_expiry");
            }
            other => panic!("Expected InvalidParameter, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_strike_rejected() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        let err = bs.price_put(-40.0, 1.0).unwrap_err();
        match err {
            PricingError::InvalidParameter { name, .. } => assert_eq!(name, "strike"),
            other => panic!("Expected InvalidParameter, got {:?}", other),
        }
    }

    // ==========================================================
    // Reference Value Tests
    // ==========================================================

    #[test]
    fn test_call_price_reference_value() {
        // S=100, K=100, r=0.05, σ=0.2, T=1 → call ≈ 10.4506
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        let price = bs.price_call(100.0, 1.0).unwrap();
        assert_relative_eq!(price, 10.4506, epsilon = 1e-3);
    }

    #[test]
    fn test_put_price_reference_value() {
        // S=100, K=100, r=0.05, σ=0.2, T=1 → put ≈ 5.5735
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        let price = bs.price_put(100.0, 1.0).unwrap();
        assert_relative_eq!(price, 5.5735, epsilon = 1e-3);
    }

    #[test]
    fn test_put_price_otm_underlying() {
        // S=30, K=40, r=0.01, σ=0.3, T=240/365 → put ≈ 10.25
        let bs = BlackScholes::new(30.0_f64, 0.01, 0.3).unwrap();
        let price = bs.price_put(40.0, 240.0 / 365.0).unwrap();
        assert_relative_eq!(price, 10.2513, epsilon = 1e-3);
    }

    #[test]
    fn test_call_price_otm_underlying() {
        // Same contract as above priced as a call ≈ 0.51
        let bs = BlackScholes::new(30.0_f64, 0.01, 0.3).unwrap();
        let price = bs.price_call(40.0, 240.0 / 365.0).unwrap();
        assert_relative_eq!(price, 0.5135, epsilon = 1e-3);
    }

    // ==========================================================
    // Model Property Tests
    // ==========================================================

    #[test]
    fn test_prices_nonnegative() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        for strike in [50.0, 80.0, 100.0, 120.0, 200.0] {
            for expiry in [0.1, 0.5, 1.0, 2.0] {
                assert!(bs.price_call(strike, expiry).unwrap() >= 0.0);
                assert!(bs.price_put(strike, expiry).unwrap() >= 0.0);
            }
        }
    }

    #[test]
    fn test_put_call_parity() {
        // C - P = S - K*exp(-rT)
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        for strike in [80.0, 90.0, 100.0, 110.0, 120.0] {
            let call = bs.price_call(strike, 1.0).unwrap();
            let put = bs.price_put(strike, 1.0).unwrap();
            let forward = 100.0 - strike * (-0.05_f64).exp();
            assert_relative_eq!(call - put, forward, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_put_call_parity_negative_rate() {
        let bs = BlackScholes::new(100.0_f64, -0.02, 0.2).unwrap();
        let call = bs.price_call(100.0, 1.0).unwrap();
        let put = bs.price_put(100.0, 1.0).unwrap();
        let forward = 100.0 - 100.0 * (0.02_f64).exp();
        assert_relative_eq!(call - put, forward, epsilon = 1e-6);
    }

    #[test]
    fn test_vanishing_volatility_boundary() {
        // As σ → 0⁺ prices approach the discounted intrinsic values
        let discounted_strike = 90.0 * (-0.05_f64).exp();

        let bs = BlackScholes::new(100.0_f64, 0.05, 1e-4).unwrap();
        let call = bs.price_call(90.0, 1.0).unwrap();
        assert_relative_eq!(call, 100.0 - discounted_strike, epsilon = 1e-6);
        let put = bs.price_put(90.0, 1.0).unwrap();
        assert!(put.abs() < 1e-6);

        let bs = BlackScholes::new(80.0_f64, 0.05, 1e-4).unwrap();
        let put = bs.price_put(90.0, 1.0).unwrap();
        assert_relative_eq!(put, discounted_strike - 80.0, epsilon = 1e-6);
        let call = bs.price_call(90.0, 1.0).unwrap();
        assert!(call.abs() < 1e-6);
    }

    #[test]
    fn test_call_monotone_in_spot() {
        let spots: Vec<f64> = (1..=40).map(|i| 5.0 * i as f64).collect();
        let mut prev = 0.0;
        for spot in spots {
            let bs = BlackScholes::new(spot, 0.05, 0.2).unwrap();
            let call = bs.price_call(100.0, 1.0).unwrap();
            assert!(call >= prev, "Call price decreased at spot = {}", spot);
            prev = call;
        }
    }

    #[test]
    fn test_put_antitone_in_spot() {
        let spots: Vec<f64> = (1..=40).map(|i| 5.0 * i as f64).collect();
        let mut prev = f64::INFINITY;
        for spot in spots {
            let bs = BlackScholes::new(spot, 0.05, 0.2).unwrap();
            let put = bs.price_put(100.0, 1.0).unwrap();
            assert!(put <= prev, "Put price increased at spot = {}", spot);
            prev = put;
        }
    }

    #[test]
    fn test_deterministic() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        let first = bs.price_call(105.0, 0.75).unwrap();
        let second = bs.price_call(105.0, 0.75).unwrap();
        assert_eq!(first.to_bits(), second.to_bits());
    }

    // ==========================================================
    // One-Shot Entry Tests
    // ==========================================================

    #[test]
    fn test_price_inputs_call() {
        let inputs =
            PricingInputs::new(0.05, 100.0_f64, 100.0, 1.0, 0.2, OptionType::Call).unwrap();
        assert_relative_eq!(price(&inputs).unwrap(), 10.4506, epsilon = 1e-3);
    }

    #[test]
    fn test_price_inputs_put() {
        let inputs = PricingInputs::new(0.05, 100.0_f64, 100.0, 1.0, 0.2, OptionType::Put).unwrap();
        assert_relative_eq!(price(&inputs).unwrap(), 5.5735, epsilon = 1e-3);
    }

    #[test]
    fn test_f32_compatibility() {
        let bs = BlackScholes::new(100.0_f32, 0.05_f32, 0.2_f32).unwrap();
        let call = bs.price_call(100.0_f32, 1.0_f32).unwrap();
        assert!((call - 10.45_f32).abs() < 0.05);
    }

    // ==========================================================
    // Property-Based Tests
    // ==========================================================

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(512))]

            #[test]
            fn prop_put_call_parity(
                spot in 1.0_f64..500.0,
                strike in 1.0_f64..500.0,
                rate in -0.05_f64..0.15,
                vol in 0.01_f64..1.5,
                expiry in 0.01_f64..5.0,
            ) {
                let bs = BlackScholes::new(spot, rate, vol).unwrap();
                let call = bs.price_call(strike, expiry).unwrap();
                let put = bs.price_put(strike, expiry).unwrap();
                let forward = spot - strike * (-rate * expiry).exp();
                let scale = spot.max(strike);
                prop_assert!(((call - put) - forward).abs() <= 1e-6 * scale);
            }

            #[test]
            fn prop_prices_nonnegative_and_finite(
                spot in 1.0_f64..500.0,
                strike in 1.0_f64..500.0,
                rate in -0.05_f64..0.15,
                vol in 0.01_f64..1.5,
                expiry in 0.01_f64..5.0,
            ) {
                let bs = BlackScholes::new(spot, rate, vol).unwrap();
                let call = bs.price_call(strike, expiry).unwrap();
                let put = bs.price_put(strike, expiry).unwrap();
                prop_assert!(call.is_finite() && call >= -1e-12);
                prop_assert!(put.is_finite() && put >= -1e-12);
            }
        }
    }
}
