//! Grid evaluation of call/put prices over spot and volatility ranges.
//!
//! Maps the Black-Scholes pricer over the Cartesian product of a
//! volatility axis and a spot axis, producing two equal-shaped matrices
//! indexed `[vol_index][spot_index]` in a single pass. Cells are
//! independent, so rows are evaluated in parallel with rayon; any cell
//! failure aborts the evaluation and surfaces with its coordinates.

use num_traits::Float;
use rayon::prelude::*;
use thiserror::Error;

use volgrid_core::types::PricingError;

use crate::analytical::BlackScholes;

/// Grid evaluation errors.
///
/// # Variants
/// - `EmptyAxis`: an input axis has no points
/// - `UnsortedAxis`: an input axis is not strictly increasing
/// - `CellFailure`: pricing failed for one cell, annotated with the
///   failing `(spot_index, vol_index)` coordinates
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GridError {
    /// An input axis has no points.
    #[error("Empty {axis} axis: grid evaluation needs at least one point")]
    EmptyAxis {
        /// Name of the offending axis
        axis: &'static str,
    },

    /// An input axis is not strictly increasing.
    #[error("{axis} axis is not strictly increasing at index {index}")]
    UnsortedAxis {
        /// Name of the offending axis
        axis: &'static str,
        /// Index of the first out-of-order point
        index: usize,
    },

    /// An input axis contains a NaN or infinite point.
    #[error("{axis} axis has a non-finite point at index {index}")]
    NonFiniteAxis {
        /// Name of the offending axis
        axis: &'static str,
        /// Index of the first non-finite point
        index: usize,
    },

    /// Pricing failed for a single grid cell.
    #[error("Grid cell failed at spot index {spot_index}, vol index {vol_index}")]
    CellFailure {
        /// Column (spot) index of the failing cell
        spot_index: usize,
        /// Row (volatility) index of the failing cell
        vol_index: usize,
        /// The underlying pricing error
        #[source]
        source: PricingError,
    },
}

/// Call and put price matrices over a spot/volatility grid.
///
/// Both matrices have shape `[vols.len()][spots.len()]`: row index is
/// volatility, column index is spot. Produced fresh per evaluation and
/// immutable once returned.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PriceGrid<T: Float> {
    /// Spot axis (column labels)
    spots: Vec<T>,
    /// Volatility axis (row labels)
    vols: Vec<T>,
    /// Call prices: `calls[vol_index][spot_index]`
    calls: Vec<Vec<T>>,
    /// Put prices: `puts[vol_index][spot_index]`
    puts: Vec<Vec<T>>,
}

impl<T: Float> PriceGrid<T> {
    /// Returns the spot axis.
    #[inline]
    pub fn spots(&self) -> &[T] {
        &self.spots
    }

    /// Returns the volatility axis.
    #[inline]
    pub fn vols(&self) -> &[T] {
        &self.vols
    }

    /// Returns the call price matrix.
    #[inline]
    pub fn calls(&self) -> &[Vec<T>] {
        &self.calls
    }

    /// Returns the put price matrix.
    #[inline]
    pub fn puts(&self) -> &[Vec<T>] {
        &self.puts
    }

    /// Returns the matrix shape as `(rows, columns)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.vols.len(), self.spots.len())
    }
}

/// Evaluates call and put prices over a spot/volatility grid.
///
/// For each `(vol, spot)` pair the cell is priced twice, once per
/// payoff direction, with the shared `strike`, `rate` and `expiry`.
/// One pass yields both matrices. Evaluation order is irrelevant (each
/// cell is independent), so rows are dispatched across the rayon thread
/// pool.
///
/// # Errors
/// - `GridError::EmptyAxis`, `GridError::UnsortedAxis` or
///   `GridError::NonFiniteAxis` for malformed axis input
/// - `GridError::CellFailure` if any cell's parameters are rejected by
///   the pricer; the evaluation aborts rather than storing a placeholder
///
/// # Examples
/// ```
/// use volgrid_core::math::axis::linspace;
/// use volgrid_models::grid::evaluate_grid;
///
/// let spots = linspace(80.0_f64, 120.0, 10);
/// let vols = linspace(0.1_f64, 0.3, 10);
/// let grid = evaluate_grid(&spots, &vols, 100.0, 0.05, 1.0).unwrap();
/// assert_eq!(grid.shape(), (10, 10));
/// ```
pub fn evaluate_grid<T>(
    spots: &[T],
    vols: &[T],
    strike: T,
    rate: T,
    expiry: T,
) -> Result<PriceGrid<T>, GridError>
where
    T: Float + Send + Sync,
{
    check_axis("spot", spots)?;
    check_axis("volatility", vols)?;

    let rows: Vec<(Vec<T>, Vec<T>)> = vols
        .par_iter()
        .enumerate()
        .map(|(vol_index, &vol)| {
            let mut call_row = Vec::with_capacity(spots.len());
            let mut put_row = Vec::with_capacity(spots.len());

            for (spot_index, &spot) in spots.iter().enumerate() {
                let model = BlackScholes::new(spot, rate, vol).map_err(|source| {
                    GridError::CellFailure {
                        spot_index,
                        vol_index,
                        source,
                    }
                })?;
                let call = model.price_call(strike, expiry).map_err(|source| {
                    GridError::CellFailure {
                        spot_index,
                        vol_index,
                        source,
                    }
                })?;
                let put = model.price_put(strike, expiry).map_err(|source| {
                    GridError::CellFailure {
                        spot_index,
                        vol_index,
                        source,
                    }
                })?;
                call_row.push(call);
                put_row.push(put);
            }

            Ok((call_row, put_row))
        })
        .collect::<Result<Vec<_>, GridError>>()?;

    let (calls, puts) = rows.into_iter().unzip();

    Ok(PriceGrid {
        spots: spots.to_vec(),
        vols: vols.to_vec(),
        calls,
        puts,
    })
}

fn check_axis<T: Float>(axis: &'static str, values: &[T]) -> Result<(), GridError> {
    if values.is_empty() {
        return Err(GridError::EmptyAxis { axis });
    }
    for (index, &value) in values.iter().enumerate() {
        if !value.is_finite() {
            return Err(GridError::NonFiniteAxis { axis, index });
        }
    }
    for (index, pair) in values.windows(2).enumerate() {
        if pair[1] <= pair[0] {
            return Err(GridError::UnsortedAxis {
                axis,
                index: index + 1,
            });
        }
    }
    Ok(())
}
