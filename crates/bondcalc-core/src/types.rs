//! Bond calculation inputs: formula selectors, field names and parameter sets.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CalcError, CalcResult};

/// The quantity to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Formula {
    /// Present value (price) of a coupon-bearing bond.
    PvCoupon,
    /// Present value (price) of a zero-coupon bond.
    PvZero,
    /// Yield to maturity of a zero-coupon bond.
    YtmZero,
    /// Yield to maturity of a coupon-bearing bond (solved numerically).
    YtmCoupon,
}

impl Formula {
    /// All formulas, in menu order.
    pub const ALL: [Formula; 4] = [
        Formula::PvCoupon,
        Formula::YtmZero,
        Formula::YtmCoupon,
        Formula::PvZero,
    ];

    /// Returns the kebab-case name used on the command line and in JSON.
    pub fn name(self) -> &'static str {
        match self {
            Formula::PvCoupon => "pv-coupon",
            Formula::PvZero => "pv-zero",
            Formula::YtmZero => "ytm-zero",
            Formula::YtmCoupon => "ytm-coupon",
        }
    }

    /// Returns a human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Formula::PvCoupon => "PV Coupon Bond",
            Formula::PvZero => "PV Zero-Coupon",
            Formula::YtmZero => "YTM Zero-Coupon",
            Formula::YtmCoupon => "YTM Coupon Bond",
        }
    }

    /// Returns the relation evaluated by this formula, in display form.
    pub fn expression(self) -> &'static str {
        match self {
            Formula::PvCoupon => "P = CPN*(1/y)*(1-1/(1+y)^N)+FV/(1+y)^N",
            Formula::PvZero => "P = FV/(1+y)^N",
            Formula::YtmZero => "y = (FV/P)^(1/N) - 1",
            Formula::YtmCoupon => "0 = CPN*(1/y)*(1-1/(1+y)^N)+FV/(1+y)^N-P",
        }
    }

    /// Returns the fields that must be supplied.
    pub fn required_fields(self) -> &'static [Field] {
        match self {
            Formula::PvCoupon => &[Field::Coupon, Field::FaceValue, Field::Periods, Field::Yield],
            Formula::PvZero => &[Field::FaceValue, Field::Periods, Field::Yield],
            Formula::YtmZero => &[Field::Price, Field::FaceValue, Field::Periods],
            Formula::YtmCoupon => &[Field::Price, Field::FaceValue, Field::Coupon, Field::Periods],
        }
    }

    /// Returns the field this formula computes.
    pub fn solves_for(self) -> Field {
        match self {
            Formula::PvCoupon | Formula::PvZero => Field::Price,
            Formula::YtmZero | Formula::YtmCoupon => Field::Yield,
        }
    }

    /// Returns true if the computed quantity is a yield.
    pub fn is_yield(self) -> bool {
        self.solves_for() == Field::Yield
    }

    /// Returns true if no closed form exists and a root finder is needed.
    pub fn needs_solver(self) -> bool {
        matches!(self, Formula::YtmCoupon)
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A named bond input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// Price P.
    Price,
    /// Face value FV.
    FaceValue,
    /// Coupon amount per period CPN.
    Coupon,
    /// Number of periods N.
    Periods,
    /// Periodic yield y, as a fraction.
    Yield,
}

impl Field {
    /// Returns the symbol used in formula expressions.
    pub fn symbol(self) -> &'static str {
        match self {
            Field::Price => "P",
            Field::FaceValue => "FV",
            Field::Coupon => "CPN",
            Field::Periods => "N",
            Field::Yield => "y",
        }
    }

    /// Returns a descriptive name.
    pub fn description(self) -> &'static str {
        match self {
            Field::Price => "price",
            Field::FaceValue => "face value",
            Field::Coupon => "coupon amount",
            Field::Periods => "number of periods",
            Field::Yield => "periodic yield",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Inputs for a single bond calculation.
///
/// Only the fields a [`Formula`] lists in [`Formula::required_fields`] are
/// read; anything else is ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BondParameters {
    /// Price P.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// Face value FV.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub face_value: Option<f64>,
    /// Coupon amount per period CPN.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coupon: Option<f64>,
    /// Number of periods N.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub periods: Option<f64>,
    /// Periodic yield y, as a fraction (0.05 for 5%).
    #[serde(default, rename = "yield", skip_serializing_if = "Option::is_none")]
    pub yield_rate: Option<f64>,
}

impl BondParameters {
    /// Creates an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the price.
    #[must_use]
    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// Sets the face value.
    #[must_use]
    pub fn with_face_value(mut self, face_value: f64) -> Self {
        self.face_value = Some(face_value);
        self
    }

    /// Sets the coupon amount per period.
    #[must_use]
    pub fn with_coupon(mut self, coupon: f64) -> Self {
        self.coupon = Some(coupon);
        self
    }

    /// Sets the number of periods.
    #[must_use]
    pub fn with_periods(mut self, periods: f64) -> Self {
        self.periods = Some(periods);
        self
    }

    /// Sets the periodic yield.
    #[must_use]
    pub fn with_yield(mut self, yield_rate: f64) -> Self {
        self.yield_rate = Some(yield_rate);
        self
    }

    /// Sets a field by name.
    #[must_use]
    pub fn with(self, field: Field, value: f64) -> Self {
        match field {
            Field::Price => self.with_price(value),
            Field::FaceValue => self.with_face_value(value),
            Field::Coupon => self.with_coupon(value),
            Field::Periods => self.with_periods(value),
            Field::Yield => self.with_yield(value),
        }
    }

    /// Returns a field by name.
    pub fn get(&self, field: Field) -> Option<f64> {
        match field {
            Field::Price => self.price,
            Field::FaceValue => self.face_value,
            Field::Coupon => self.coupon,
            Field::Periods => self.periods,
            Field::Yield => self.yield_rate,
        }
    }

    /// Returns a field the formula needs, or a `MissingParameter` error.
    pub fn require(&self, formula: Formula, field: Field) -> CalcResult<f64> {
        self.get(field)
            .ok_or_else(|| CalcError::MissingParameter {
                formula,
                fields: vec![field],
            })
    }

    /// Returns the required fields of `formula` that are not set.
    pub fn missing_for(&self, formula: Formula) -> Vec<Field> {
        formula
            .required_fields()
            .iter()
            .copied()
            .filter(|field| self.get(*field).is_none())
            .collect()
    }
}
