//! # Poulos Approximation
//!
//! Empirical closed-form fit for the influence factor beneath the center of
//! a uniformly loaded rectangle. Trades the exactness of the elastic
//! integral for a single power-law expression; agrees with the superposed
//! Boussinesq center value to within a few percent over common footing
//! proportions.
//!
//! ## Example
//!
//! ```rust
//! use geostress::methods::poulos;
//!
//! let i = poulos::center_factor(2.0, 3.0, 1.5).unwrap();
//! assert!(i > 0.0 && i < 1.0);
//! ```

use super::check_dimensions;
use crate::errors::StressResult;

/// Approximate influence factor beneath the center of a `width x length`
/// rectangle, at `depth` below the surface.
///
/// The fit exponents depend on the aspect ratio `width / length`; the
/// convention is `width <= length`, though the formula accepts any
/// positive pair.
///
/// # Errors
///
/// Returns [`crate::errors::StressError::InvalidInput`] if any dimension is
/// non-positive or non-finite.
pub fn center_factor(width: f64, length: f64, depth: f64) -> StressResult<f64> {
    check_dimensions(width, length, depth)?;

    let aspect = width / length;
    let inner = 1.0 / (1.0 + (width / (2.0 * depth)).powf(1.38 + 0.62 * aspect));

    Ok(1.0 - inner.powf(2.60 - 0.84 * aspect))
}
