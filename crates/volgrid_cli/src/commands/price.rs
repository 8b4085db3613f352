//! Price command implementation
//!
//! Prices a single European option through the volgrid_models pricer.

use tracing::info;

use volgrid_models::analytical::price;
use volgrid_models::instruments::{OptionType, PricingInputs};

use crate::{CliError, Result};

/// Run the price command
pub fn run(
    rate: f64,
    spot: f64,
    strike: f64,
    expiry: f64,
    vol: f64,
    option_type: &str,
    format: &str,
) -> Result<()> {
    let option_type: OptionType = option_type.parse()?;

    info!("Pricing {} option...", option_type);
    info!("  rate: {}, spot: {}, strike: {}", rate, spot, strike);
    info!("  expiry: {:.6}y, vol: {}", expiry, vol);

    let inputs = PricingInputs::new(rate, spot, strike, expiry, vol, option_type)?;
    let value = price(&inputs)?;

    match format {
        "text" => {
            println!("{} price: {:.4}", option_type, value);
        }
        "json" => {
            let payload = serde_json::json!({
                "option_type": option_type.to_string(),
                "rate": rate,
                "spot": spot,
                "strike": strike,
                "time_to_expiry": expiry,
                "volatility": vol,
                "price": value,
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: text, json",
                other
            )));
        }
    }

    Ok(())
}
