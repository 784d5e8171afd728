//! # geostress - Subsurface Stress Distribution Engine
//!
//! `geostress` computes the increase in vertical stress beneath a uniformly
//! loaded rectangular area on an elastic half-space, using the classical
//! influence-factor methods of foundation engineering. All inputs and outputs
//! are JSON-serializable, making it ideal for integration with AI assistants
//! via MCP or similar protocols.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **No I/O**: The core never prints, logs, or touches the filesystem
//!
//! ## Quick Start
//!
//! ```rust
//! use geostress::comparison::{calculate, ComparisonInput};
//!
//! // A 2 m x 3 m footing pad, evaluated 1.5 m below the surface
//! let input = ComparisonInput {
//!     label: "F-1".to_string(),
//!     width: 2.0,
//!     length: 3.0,
//!     depth: 1.5,
//! };
//!
//! let result = calculate(&input).unwrap();
//!
//! println!("Boussinesq (center): {:.3}", result.boussinesq_center);
//! println!("Poulos (center):     {:.3}", result.poulos_center);
//! println!("1:2 load spread:     {:.3}", result.one_to_two);
//! ```
//!
//! ## Modules
//!
//! - [`methods`] - The individual influence-factor solutions (Boussinesq, Poulos, 1:2)
//! - [`comparison`] - Side-by-side evaluation of all methods for one geometry
//! - [`errors`] - Structured error types

pub mod comparison;
pub mod errors;
pub mod methods;

// Re-export commonly used types at crate root for convenience
pub use comparison::{ComparisonInput, ComparisonResult};
pub use errors::{StressError, StressResult};
pub use methods::InfluenceMethod;
