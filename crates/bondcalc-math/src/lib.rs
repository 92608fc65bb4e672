//! # Bondcalc Math
//!
//! Numerical primitives for the Bondcalc bond pricing calculator.
//!
//! This crate provides:
//!
//! - **Solvers**: Bracketing root-finding (bisection) for residual functions
//!   without a closed-form inverse
//!
//! The solver is domain-agnostic: it accepts any `Fn(f64) -> f64`, so the
//! bond-specific residuals live in `bondcalc-core`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::float_cmp)]

pub mod error;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::solvers::{bisect, bisection, SolverConfig, SolverResult};
}

pub use error::{MathError, MathResult};
