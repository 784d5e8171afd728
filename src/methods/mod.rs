//! # Influence-Factor Methods
//!
//! Each method computes a dimensionless influence factor: the ratio of the
//! induced vertical stress at a subsurface point to the uniform pressure
//! applied on a `width x length` rectangle at the surface. Multiply the
//! factor by the applied bearing pressure to get the stress increase.
//!
//! Every function follows the pattern:
//!
//! - Validate its own inputs (`width, length, depth` all positive and finite)
//! - Return `StressResult<f64>` with the factor, never a silent NaN
//!
//! ## Available Methods
//!
//! - [`boussinesq`] - Newmark's closed-form elastic solution (corner and center)
//! - [`poulos`] - Empirical closed-form fit for the center point
//! - [`spread`] - Simplified 1:2 load-spread estimate
//!
//! Dimensions may be in any consistent length unit; the factors depend only
//! on the ratios between them.

pub mod boussinesq;
pub mod poulos;
pub mod spread;

use serde::{Deserialize, Serialize};

use crate::errors::{StressError, StressResult};

/// Enum over the four factor computations.
///
/// Useful when a caller wants to iterate over methods generically, e.g. to
/// tabulate a comparison, while keeping type-safe dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InfluenceMethod {
    /// Newmark's solution beneath a corner of the loaded area
    BoussinesqCorner,
    /// Newmark's solution beneath the center, via quadrant superposition
    BoussinesqCenter,
    /// Poulos approximation beneath the center
    PoulosCenter,
    /// 1:2 load-spread estimate
    OneToTwo,
}

impl InfluenceMethod {
    /// Evaluate this method for the given geometry.
    pub fn evaluate(&self, width: f64, length: f64, depth: f64) -> StressResult<f64> {
        match self {
            InfluenceMethod::BoussinesqCorner => boussinesq::corner_factor(width, length, depth),
            InfluenceMethod::BoussinesqCenter => boussinesq::center_factor(width, length, depth),
            InfluenceMethod::PoulosCenter => poulos::center_factor(width, length, depth),
            InfluenceMethod::OneToTwo => spread::influence_factor(width, length, depth),
        }
    }

    /// Human-readable name for display
    pub fn label(&self) -> &'static str {
        match self {
            InfluenceMethod::BoussinesqCorner => "Boussinesq (corner)",
            InfluenceMethod::BoussinesqCenter => "Boussinesq (center)",
            InfluenceMethod::PoulosCenter => "Poulos (center)",
            InfluenceMethod::OneToTwo => "1:2 load spread",
        }
    }
}

/// Validate the shared geometry preconditions for every method.
pub(crate) fn check_dimensions(width: f64, length: f64, depth: f64) -> StressResult<()> {
    check_positive("width", width)?;
    check_positive("length", length)?;
    check_positive("depth", depth)
}

fn check_positive(field: &str, value: f64) -> StressResult<()> {
    if !value.is_finite() {
        return Err(StressError::invalid_input(
            field,
            value.to_string(),
            "Dimension must be finite",
        ));
    }
    if value <= 0.0 {
        return Err(StressError::invalid_input(
            field,
            value.to_string(),
            "Dimension must be positive",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_matches_direct_calls() {
        let (w, l, z) = (2.0, 3.0, 1.5);
        assert_eq!(
            InfluenceMethod::BoussinesqCorner.evaluate(w, l, z).unwrap(),
            boussinesq::corner_factor(w, l, z).unwrap()
        );
        assert_eq!(
            InfluenceMethod::BoussinesqCenter.evaluate(w, l, z).unwrap(),
            boussinesq::center_factor(w, l, z).unwrap()
        );
        assert_eq!(
            InfluenceMethod::PoulosCenter.evaluate(w, l, z).unwrap(),
            poulos::center_factor(w, l, z).unwrap()
        );
        assert_eq!(
            InfluenceMethod::OneToTwo.evaluate(w, l, z).unwrap(),
            spread::influence_factor(w, l, z).unwrap()
        );
    }

    #[test]
    fn test_check_dimensions_names_offending_field() {
        let err = check_dimensions(1.0, -3.0, 1.0).unwrap_err();
        match err {
            StressError::InvalidInput { field, .. } => assert_eq!(field, "length"),
            other => panic!("unexpected error: {other:?}"),
        }

        let err = check_dimensions(1.0, 2.0, f64::NAN).unwrap_err();
        match err {
            StressError::InvalidInput { field, .. } => assert_eq!(field, "depth"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_labels_are_distinct() {
        let labels = [
            InfluenceMethod::BoussinesqCorner.label(),
            InfluenceMethod::BoussinesqCenter.label(),
            InfluenceMethod::PoulosCenter.label(),
            InfluenceMethod::OneToTwo.label(),
        ];
        for (i, a) in labels.iter().enumerate() {
            for b in labels.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_method_serialization() {
        let method = InfluenceMethod::BoussinesqCenter;
        let json = serde_json::to_string(&method).unwrap();
        let roundtrip: InfluenceMethod = serde_json::from_str(&json).unwrap();
        assert_eq!(method, roundtrip);
    }
}
