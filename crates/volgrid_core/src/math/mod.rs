//! Mathematical primitives shared by the pricing layer.

pub mod axis;
pub mod distributions;

pub use axis::linspace;
pub use distributions::norm_cdf;
