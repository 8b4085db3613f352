//! CLI error type wrapping the pricing and grid error taxonomies.

use thiserror::Error;

use volgrid_core::types::PricingError;
use volgrid_models::grid::GridError;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Pricing rejected an input parameter or option type.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// Grid evaluation failed.
    #[error(transparent)]
    Grid(#[from] GridError),

    /// A flag value outside what the command supports.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON output serialisation failed.
    #[error("Serialisation error: {0}")]
    Serialisation(#[from] serde_json::Error),
}

/// Convenience result alias for CLI commands.
pub type Result<T> = std::result::Result<T, CliError>;
