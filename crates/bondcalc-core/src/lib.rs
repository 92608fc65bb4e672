//! # Bondcalc Core
//!
//! Bond price and yield evaluation.
//!
//! Four quantities are supported, selected by [`Formula`]:
//!
//! | Formula | Solves for | Method |
//! |---------|-----------|--------|
//! | PV coupon bond | price | closed form |
//! | PV zero-coupon bond | price | closed form |
//! | YTM zero-coupon bond | yield | closed form |
//! | YTM coupon bond | yield | bisection on the price residual |
//!
//! Inputs are passed as an explicit [`BondParameters`] value and every
//! evaluation is a pure function of its inputs.
//!
//! ## Example
//!
//! ```rust
//! use bondcalc_core::prelude::*;
//!
//! let params = BondParameters::new()
//!     .with_face_value(1000.0)
//!     .with_periods(10.0)
//!     .with_yield(0.05);
//!
//! let result = evaluate(Formula::PvZero, &params).unwrap();
//! assert!((result.value - 613.913).abs() < 1e-3);
//! assert_eq!(result.display(8), "613.91325");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod config;
pub mod error;
pub mod evaluator;
pub mod fields;
pub mod formulas;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::config::{EvaluatorConfig, Validate, ValidationError};
    pub use crate::error::{CalcError, CalcResult};
    pub use crate::evaluator::{evaluate, Computation, Evaluator};
    pub use crate::fields::{format_significant, parse_field, parse_field_strict};
    pub use crate::formulas::CouponResidual;
    pub use crate::types::{BondParameters, Field, Formula};
}

pub use error::{CalcError, CalcResult};
pub use evaluator::{evaluate, Computation, Evaluator};
pub use types::{BondParameters, Field, Formula};
