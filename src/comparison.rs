//! # Method Comparison
//!
//! Evaluates every influence-factor method for one loaded-area geometry and
//! reports how far the approximations sit from the elastic solution. The
//! center-point Boussinesq value (via quadrant superposition) is the
//! reference; the Poulos fit and the 1:2 estimate are measured against it.
//!
//! ## Example
//!
//! ```rust
//! use geostress::comparison::{calculate, ComparisonInput};
//!
//! let input = ComparisonInput {
//!     label: "Strip footing SF-2".to_string(),
//!     width: 1.0,
//!     length: 1.5,
//!     depth: 1.2,
//! };
//!
//! let result = calculate(&input).unwrap();
//!
//! // Poulos tracks the elastic solution closely; the 1:2 method is coarser
//! assert!(result.poulos_vs_boussinesq.abs() < result.spread_vs_boussinesq.abs());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{StressError, StressResult};
use crate::methods::{boussinesq, poulos, spread, InfluenceMethod};

/// Geometry of one comparison run: a uniformly loaded rectangle and the
/// depth of the evaluation point beneath it.
///
/// Dimensions may be in any consistent length unit; the factors depend only
/// on the ratios between them.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "F-1",
///   "width": 2.0,
///   "length": 3.0,
///   "depth": 1.5
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonInput {
    /// User label for this geometry (e.g., "F-1", "Tank pad at grid C")
    pub label: String,

    /// Loaded-area width
    pub width: f64,

    /// Loaded-area length
    pub length: f64,

    /// Depth of the evaluation point below the surface
    pub depth: f64,
}

impl ComparisonInput {
    /// Validate input parameters.
    pub fn validate(&self) -> StressResult<()> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(StressError::invalid_input(
                "width",
                self.width.to_string(),
                "Width must be positive and finite",
            ));
        }
        if !self.length.is_finite() || self.length <= 0.0 {
            return Err(StressError::invalid_input(
                "length",
                self.length.to_string(),
                "Length must be positive and finite",
            ));
        }
        if !self.depth.is_finite() || self.depth <= 0.0 {
            return Err(StressError::invalid_input(
                "depth",
                self.depth.to_string(),
                "Depth must be positive and finite",
            ));
        }
        Ok(())
    }
}

/// All four influence factors for one geometry, plus the relative
/// differences between the center-point methods.
///
/// Differences are signed fractions: `-0.05` means the first method sits 5%
/// below the second.
///
/// ## JSON Example
///
/// ```json
/// {
///   "boussinesq_corner": 0.173,
///   "boussinesq_center": 0.339,
///   "poulos_center": 0.320,
///   "one_to_two": 0.253,
///   "poulos_vs_boussinesq": -0.056,
///   "spread_vs_boussinesq": -0.255,
///   "poulos_vs_spread": 0.211
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Newmark's solution beneath a corner of the full rectangle
    pub boussinesq_corner: f64,

    /// Newmark's solution beneath the center, via quadrant superposition
    pub boussinesq_center: f64,

    /// Poulos approximation beneath the center
    pub poulos_center: f64,

    /// 1:2 load-spread estimate
    pub one_to_two: f64,

    /// (Poulos - Boussinesq center) / Boussinesq center
    pub poulos_vs_boussinesq: f64,

    /// (1:2 - Boussinesq center) / Boussinesq center
    pub spread_vs_boussinesq: f64,

    /// (Poulos - 1:2) / Poulos
    pub poulos_vs_spread: f64,
}

impl ComparisonResult {
    /// The four factors paired with their methods, in display order.
    pub fn factors(&self) -> [(InfluenceMethod, f64); 4] {
        [
            (InfluenceMethod::BoussinesqCorner, self.boussinesq_corner),
            (InfluenceMethod::BoussinesqCenter, self.boussinesq_center),
            (InfluenceMethod::PoulosCenter, self.poulos_center),
            (InfluenceMethod::OneToTwo, self.one_to_two),
        ]
    }

    /// Largest relative difference (by magnitude) among the three pairings.
    pub fn max_divergence(&self) -> f64 {
        self.poulos_vs_boussinesq
            .abs()
            .max(self.spread_vs_boussinesq.abs())
            .max(self.poulos_vs_spread.abs())
    }

    /// Check whether every pairing agrees within `tolerance` (a fraction,
    /// e.g. `0.15` for 15%).
    pub fn methods_agree(&self, tolerance: f64) -> bool {
        self.max_divergence() <= tolerance
    }
}

impl fmt::Display for ComparisonResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (method, value) in self.factors() {
            writeln!(f, "{:<22}{:.3}", format!("{}:", method.label()), value)?;
        }
        writeln!(
            f,
            "Poulos vs Boussinesq: {:+.1}%",
            self.poulos_vs_boussinesq * 100.0
        )?;
        writeln!(
            f,
            "1:2 vs Boussinesq:    {:+.1}%",
            self.spread_vs_boussinesq * 100.0
        )?;
        write!(f, "Poulos vs 1:2:        {:+.1}%", self.poulos_vs_spread * 100.0)
    }
}

/// Evaluate all four influence factors and their relative differences.
///
/// This is a pure function suitable for LLM invocation.
///
/// # Arguments
///
/// * `input` - Loaded-area geometry (width, length, evaluation depth)
///
/// # Returns
///
/// * `Ok(ComparisonResult)` - The four factors and three relative differences
/// * `Err(StressError)` - Structured error if the geometry is invalid
///
/// # Example
///
/// ```rust
/// use geostress::comparison::{calculate, ComparisonInput};
///
/// let input = ComparisonInput {
///     label: "F-1".to_string(),
///     width: 2.0,
///     length: 3.0,
///     depth: 1.5,
/// };
///
/// let result = calculate(&input).expect("Calculation should succeed");
/// assert!(result.boussinesq_center > result.boussinesq_corner);
/// ```
pub fn calculate(input: &ComparisonInput) -> StressResult<ComparisonResult> {
    input.validate()?;

    let boussinesq_corner = boussinesq::corner_factor(input.width, input.length, input.depth)?;
    let boussinesq_center = boussinesq::center_factor(input.width, input.length, input.depth)?;
    let poulos_center = poulos::center_factor(input.width, input.length, input.depth)?;
    let one_to_two = spread::influence_factor(input.width, input.length, input.depth)?;

    if boussinesq_center == 0.0 {
        return Err(StressError::calculation_failed(
            "comparison",
            "Boussinesq center factor is zero; relative differences are undefined",
        ));
    }
    if poulos_center == 0.0 {
        return Err(StressError::calculation_failed(
            "comparison",
            "Poulos center factor is zero; relative differences are undefined",
        ));
    }

    Ok(ComparisonResult {
        boussinesq_corner,
        boussinesq_center,
        poulos_center,
        one_to_two,
        poulos_vs_boussinesq: (poulos_center - boussinesq_center) / boussinesq_center,
        spread_vs_boussinesq: (one_to_two - boussinesq_center) / boussinesq_center,
        poulos_vs_spread: (poulos_center - one_to_two) / poulos_center,
    })
}
