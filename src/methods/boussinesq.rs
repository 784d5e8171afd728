//! # Boussinesq Method (Newmark's Solution)
//!
//! Closed-form integration of the Boussinesq point-load solution over a
//! rectangular area, after Newmark. Gives the vertical stress influence
//! factor directly beneath a corner of a uniformly loaded flexible rectangle
//! resting on an elastic half-space; the center-point value follows from
//! superposition over four quadrants.
//!
//! ## Assumptions
//!
//! - Homogeneous, isotropic, linear-elastic half-space
//! - Perfectly flexible loaded area (uniform contact pressure)
//! - Evaluation point on the vertical through the corner (or center)
//!
//! ## Example
//!
//! ```rust
//! use geostress::methods::boussinesq;
//!
//! // Square loaded area, evaluated one width below a corner
//! let corner = boussinesq::corner_factor(1.0, 1.0, 1.0).unwrap();
//! assert!((corner - 0.1752).abs() < 1e-4);
//!
//! // Center value is four quadrant corners superposed
//! let center = boussinesq::center_factor(1.0, 1.0, 1.0).unwrap();
//! assert!(center > corner);
//! ```

use std::f64::consts::PI;

use super::check_dimensions;
use crate::errors::{StressError, StressResult};

/// Allowed floating-point overshoot of the arcsine argument.
///
/// The closed form keeps the argument within [-1, 1] for any valid
/// rectangle; overshoot beyond this tolerance means the geometry is
/// degenerate, not that rounding crept in.
const ASIN_OVERSHOOT_TOL: f64 = 1e-9;

/// Influence factor directly beneath a corner of a `width x length`
/// rectangle, at `depth` below the surface.
///
/// Peaks at 0.25 for a point just under the surface of a large area and
/// decays toward zero with depth.
///
/// # Errors
///
/// Returns [`StressError::InvalidInput`] if any dimension is non-positive
/// or non-finite, and [`StressError::CalculationFailed`] if the arcsine
/// argument falls outside [-1, 1] by more than rounding tolerance.
pub fn corner_factor(width: f64, length: f64, depth: f64) -> StressResult<f64> {
    check_dimensions(width, length, depth)?;

    let b2 = width * width;
    let l2 = length * length;
    let z2 = depth * depth;

    let diag_sq = b2 + l2 + z2;
    let plan_sq = b2 * l2;

    let sin_term = 2.0 * width * length * depth * diag_sq.sqrt() / (z2 * diag_sq + plan_sq);
    let ratio_term = (diag_sq + z2) / diag_sq;

    let sin_term = clamp_asin_arg(sin_term)?;

    // The arcsine argument reaches exactly 1 where z² · diag_sq = plan_sq.
    // For shallower points the true angle lies in the supplementary range,
    // so the principal arcsine must be folded back through π.
    let angle = if diag_sq < plan_sq / z2 {
        PI - sin_term.asin()
    } else {
        sin_term.asin()
    };

    Ok((sin_term * ratio_term + angle) / (4.0 * PI))
}

/// Influence factor directly beneath the center of a `width x length`
/// rectangle, at `depth` below the surface.
///
/// Splits the rectangle into four equal quadrants sharing the center point;
/// each quadrant contributes its corner factor at that shared point, so the
/// center value is four times the quarter-rectangle corner factor.
///
/// # Errors
///
/// Same conditions as [`corner_factor`].
pub fn center_factor(width: f64, length: f64, depth: f64) -> StressResult<f64> {
    let quadrant = corner_factor(width / 2.0, length / 2.0, depth)?;
    Ok(4.0 * quadrant)
}

fn clamp_asin_arg(raw: f64) -> StressResult<f64> {
    if raw.abs() > 1.0 + ASIN_OVERSHOOT_TOL {
        return Err(StressError::calculation_failed(
            "boussinesq_corner",
            format!("arcsine argument {raw} is outside [-1, 1]"),
        ));
    }
    Ok(raw.clamp(-1.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_corner_matches_published_value() {
        // Newmark's tables give I = 0.1752 for m = n = 1
        let i = corner_factor(1.0, 1.0, 1.0).unwrap();
        assert!((i - 0.175221).abs() < 1e-5);
    }

    #[test]
    fn test_half_by_one_rectangle() {
        // 0.5 x 1.0 area at depth 1.2
        let corner = corner_factor(0.5, 1.0, 1.2).unwrap();
        assert!((corner - 0.097909).abs() < 1e-5);

        let center = center_factor(0.5, 1.0, 1.2).unwrap();
        assert!((center - 0.140683).abs() < 1e-5);
    }

    #[test]
    fn test_both_angle_branches_return_values() {
        // Shallow point under a broad area: supplementary-angle branch
        let shallow = corner_factor(10.0, 10.0, 0.1).unwrap();
        assert!(shallow.is_finite());
        assert!((shallow - 0.25).abs() < 1e-5);

        let shallow = corner_factor(5.0, 5.0, 0.5).unwrap();
        assert!((shallow - 0.249815).abs() < 1e-5);

        // Deep point: principal-angle branch
        let deep = corner_factor(1.0, 1.0, 1.0).unwrap();
        assert!(deep.is_finite());
        assert!(deep > 0.0 && deep < 0.25);
    }

    #[test]
    fn test_width_length_symmetry() {
        for (w, l, z) in [(0.5, 1.0, 1.2), (2.0, 7.0, 0.3), (0.01, 100.0, 4.0)] {
            let a = corner_factor(w, l, z).unwrap();
            let b = corner_factor(l, w, z).unwrap();
            assert!((a - b).abs() <= 1e-12 * a.abs());
        }
    }

    #[test]
    fn test_superposition_identity() {
        for (w, l, z) in [(0.5, 1.0, 1.2), (2.0, 3.0, 1.5), (10.0, 10.0, 0.1)] {
            let center = center_factor(w, l, z).unwrap();
            let quadrant = corner_factor(w / 2.0, l / 2.0, z).unwrap();
            assert_eq!(center, 4.0 * quadrant);
        }
    }

    #[test]
    fn test_factor_decreases_with_depth() {
        let mut previous = f64::INFINITY;
        for depth in [0.1, 1.0, 10.0, 100.0] {
            let i = corner_factor(1.0, 2.0, depth).unwrap();
            assert!(i < previous);
            previous = i;
        }
    }

    #[test]
    fn test_bounded_over_geometry_grid() {
        for w in [0.01, 0.1, 1.0, 10.0, 100.0] {
            for l in [0.01, 0.1, 1.0, 10.0, 100.0] {
                for z in [0.01, 0.1, 1.0, 10.0, 100.0] {
                    let corner = corner_factor(w, l, z).unwrap();
                    assert!(corner.is_finite());
                    assert!((0.0..=1.0).contains(&corner));

                    let center = center_factor(w, l, z).unwrap();
                    assert!(center.is_finite());
                    assert!((0.0..=1.0).contains(&center));
                }
            }
        }
    }

    #[test]
    fn test_vanishes_at_great_depth() {
        assert!(corner_factor(1.0, 1.5, 10_000.0).unwrap() < 1e-4);
        assert!(center_factor(1.0, 1.5, 10_000.0).unwrap() < 1e-4);
    }

    #[test]
    fn test_extreme_shallow_point_stays_clamped() {
        // Near-surface point under a huge pad pushes the arcsine argument
        // against 1; the clamp must absorb rounding without erroring
        let i = corner_factor(100.0, 100.0, 0.01).unwrap();
        assert!((i - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_invalid_dimensions_rejected() {
        assert!(corner_factor(0.0, 1.0, 1.0).is_err());
        assert!(corner_factor(1.0, -2.0, 1.0).is_err());
        assert!(corner_factor(1.0, 1.0, 0.0).is_err());
        assert!(corner_factor(f64::NAN, 1.0, 1.0).is_err());
        assert!(corner_factor(1.0, f64::INFINITY, 1.0).is_err());
        assert!(center_factor(1.0, 1.0, -0.5).is_err());
    }

    #[test]
    fn test_invalid_input_names_field() {
        let err = corner_factor(1.0, 1.0, 0.0).unwrap_err();
        match err {
            StressError::InvalidInput { field, .. } => assert_eq!(field, "depth"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
