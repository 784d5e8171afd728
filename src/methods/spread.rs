//! # 1:2 Load-Spread Method
//!
//! Simplified estimate that assumes the surface load disperses through the
//! soil on planes sloping two vertical to one horizontal, so a
//! `width x length` footprint grows to `(width + depth) x (length + depth)`
//! at depth. The influence factor is then just the area ratio.
//!
//! Usable as a rough estimate anywhere beneath the loaded area, but notably
//! cruder than the elastic solutions: it routinely sits 20-35% below the
//! Boussinesq center value at shallow to moderate depths.
//!
//! ## Example
//!
//! ```rust
//! use geostress::methods::spread;
//!
//! // Square area one width deep: load spread over four times the area
//! let i = spread::influence_factor(1.0, 1.0, 1.0).unwrap();
//! assert_eq!(i, 0.25);
//! ```

use super::check_dimensions;
use crate::errors::StressResult;

/// Influence factor by the 1:2 method for a `width x length` rectangle at
/// `depth` below the surface.
///
/// # Errors
///
/// Returns [`crate::errors::StressError::InvalidInput`] if any dimension is
/// non-positive or non-finite. Positivity guarantees both denominators are
/// non-zero.
pub fn influence_factor(width: f64, length: f64, depth: f64) -> StressResult<f64> {
    check_dimensions(width, length, depth)?;

    Ok((width * length) / ((width + depth) * (length + depth)))
}
