//! Closed-form bond relations.
//!
//! These are the raw arithmetic kernels. They perform no validation and
//! happily return NaN or infinity for out-of-domain inputs; the
//! [`Evaluator`](crate::Evaluator) guards the domain before calling them.
//!
//! # Formulas
//!
//! ```text
//! PV coupon:  P = CPN * (1/y) * (1 - (1+y)^-N) + FV * (1+y)^-N
//! PV zero:    P = FV * (1+y)^-N
//! YTM zero:   y = (FV/P)^(1/N) - 1
//! ```

/// Price of a coupon bond paying `coupon` per period for `periods` periods
/// and `face_value` at maturity, discounted at periodic yield `y`.
pub fn pv_coupon(coupon: f64, face_value: f64, periods: f64, y: f64) -> f64 {
    let discount = (1.0 + y).powf(-periods);
    coupon * (1.0 / y) * (1.0 - discount) + face_value * discount
}

/// Price of a zero-coupon bond.
pub fn pv_zero(face_value: f64, periods: f64, y: f64) -> f64 {
    face_value * (1.0 + y).powf(-periods)
}

/// Periodic yield of a zero-coupon bond bought at `price`.
pub fn ytm_zero(face_value: f64, price: f64, periods: f64) -> f64 {
    (face_value / price).powf(1.0 / periods) - 1.0
}

/// Price mismatch of a coupon bond as a function of the yield.
///
/// `value(y)` is zero exactly at the yield to maturity. It is positive for
/// yields below the YTM and negative above it, since price falls as yield
/// rises.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CouponResidual {
    /// Target price P.
    pub price: f64,
    /// Face value FV.
    pub face_value: f64,
    /// Coupon amount per period CPN.
    pub coupon: f64,
    /// Number of periods N.
    pub periods: f64,
}

impl CouponResidual {
    /// Creates the residual for a bond quoted at `price`.
    pub fn new(price: f64, face_value: f64, coupon: f64, periods: f64) -> Self {
        Self {
            price,
            face_value,
            coupon,
            periods,
        }
    }

    /// Theoretical price at `y` minus the target price.
    pub fn value(&self, y: f64) -> f64 {
        pv_coupon(self.coupon, self.face_value, self.periods, y) - self.price
    }

    /// Borrows the residual as a plain function for a root finder.
    pub fn as_fn(&self) -> impl Fn(f64) -> f64 + '_ {
        move |y| self.value(y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_pv_zero() {
        // 1000 / 1.05^10
        assert_relative_eq!(pv_zero(1000.0, 10.0, 0.05), 613.913_253_540_759_1, epsilon = 1e-9);
    }

    #[test]
    fn test_pv_coupon_at_par() {
        // Coupon equal to yield * face prices at par
        assert_relative_eq!(pv_coupon(50.0, 1000.0, 10.0, 0.05), 1000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_pv_coupon_without_coupon_is_zero_coupon_price() {
        assert_relative_eq!(
            pv_coupon(0.0, 1000.0, 7.0, 0.04),
            pv_zero(1000.0, 7.0, 0.04),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_pv_coupon_annuity() {
        // 100 per period for 5 periods at 10%: 379.0787
        assert_relative_eq!(pv_coupon(100.0, 0.0, 5.0, 0.10), 379.078_676_940_1, epsilon = 1e-6);
    }

    #[test]
    fn test_ytm_zero() {
        assert_relative_eq!(ytm_zero(1000.0, 613.913_253_540_759_1, 10.0), 0.05, epsilon = 1e-12);
        // Bought at par: zero yield
        assert_eq!(ytm_zero(100.0, 100.0, 3.0), 0.0);
    }

    #[test]
    fn test_ytm_zero_is_non_finite_for_degenerate_inputs() {
        assert!(!ytm_zero(1000.0, 0.0, 10.0).is_finite());
        assert!(!pv_coupon(50.0, 1000.0, 10.0, 0.0).is_finite());
    }

    #[test]
    fn test_coupon_residual_sign() {
        let residual = CouponResidual::new(950.0, 1000.0, 50.0, 10.0);
        assert!(residual.value(0.01) > 0.0);
        assert!(residual.value(0.10) < 0.0);

        let f = residual.as_fn();
        assert_eq!(f(0.05), residual.value(0.05));
        assert_relative_eq!(f(0.05), 50.0, epsilon = 1e-9);
    }
}
