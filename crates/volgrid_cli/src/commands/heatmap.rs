//! Heatmap command implementation
//!
//! Builds the spot and volatility axes, evaluates both price grids in a
//! single pass, and renders them as aligned tables or JSON.

use tracing::info;

use volgrid_core::math::axis::linspace;
use volgrid_models::grid::{evaluate_grid, PriceGrid};

use crate::{CliError, Result};

/// Run the heatmap command
pub fn run(
    strike: f64,
    rate: f64,
    expiry: f64,
    spot_range: (f64, f64),
    vol_range: (f64, f64),
    points: usize,
    format: &str,
) -> Result<()> {
    info!("Evaluating {}x{} price grid...", points, points);
    info!("  strike: {}, rate: {}, expiry: {:.6}y", strike, rate, expiry);
    info!("  spot range: {:?}, vol range: {:?}", spot_range, vol_range);

    let spots = linspace(spot_range.0, spot_range.1, points);
    let vols = linspace(vol_range.0, vol_range.1, points);

    let grid = evaluate_grid(&spots, &vols, strike, rate, expiry)?;

    match format {
        "table" => {
            render_table("Call prices", &grid, grid.calls());
            println!();
            render_table("Put prices", &grid, grid.puts());
        }
        "json" => {
            println!("{}", serde_json::to_string_pretty(&grid)?);
        }
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: table, json",
                other
            )));
        }
    }

    info!("Grid evaluation complete");
    Ok(())
}

/// Prints one price matrix with rounded axis labels.
///
/// Rows are volatilities, columns are spots, matching the
/// `[vol_index][spot_index]` layout of the grid.
fn render_table(title: &str, grid: &PriceGrid<f64>, matrix: &[Vec<f64>]) {
    println!("{} (rows: volatility, columns: spot)", title);

    print!("{:>8}", "vol\\spot");
    for &spot in grid.spots() {
        print!("{:>9.2}", spot);
    }
    println!();

    for (row, &vol) in matrix.iter().zip(grid.vols()) {
        print!("{:>8.2}", vol);
        for &value in row {
            print!("{:>9.2}", value);
        }
        println!();
    }
}
