//! # Post (Column) Buckling Formulas
//!
//! Slenderness and elastic critical load used by the simplified post check.
//! The post check takes `min(Fc'·A, 0.30·P_cr)` as the allowable axial load;
//! the 0.30 knockdown stands in for the full NDS 3.7.1 column stability
//! factor.
//!
//! ## References
//!
//! - NDS 2018 Section 3.7: Solid Columns
//! - Timoshenko & Gere, Theory of Elastic Stability, Chapter 2

use std::f64::consts::PI;

use crate::numeric::SLENDERNESS_SQ_GUARD;

/// Knockdown applied to the Euler load in the simplified allowable
pub const EULER_KNOCKDOWN: f64 = 0.30;

/// Slenderness ratio using the radius of gyration
///
/// # Formula
/// λ = Le / r
#[inline]
pub fn slenderness_ratio(le: f64, r: f64) -> f64 {
    le / r
}

/// Elastic (Euler) critical buckling load
///
/// # Formula
/// P_cr = π²EA / (Le/r)²
///
/// The squared slenderness is guarded by a small additive term so a zero
/// effective length does not divide by zero.
#[inline]
pub fn euler_critical_load(e: f64, a: f64, slenderness: f64) -> f64 {
    PI.powi(2) * e * a / (slenderness.powi(2) + SLENDERNESS_SQ_GUARD)
}

/// Simplified allowable axial load for a post
///
/// # Formula
/// P_allow = min(Fc'·A, 0.30·P_cr)
#[inline]
pub fn simplified_allowable_axial(fc_axis: f64, a: f64, p_crit: f64) -> f64 {
    (fc_axis * a).min(EULER_KNOCKDOWN * p_crit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_euler_load_4x4_at_8ft() {
        let a = 12.25;
        let r = 3.5 / 12f64.sqrt();
        let lambda = slenderness_ratio(96.0, r);
        let p_crit = euler_critical_load(1.6e6, a, lambda);
        assert!((lambda - 95.015359).abs() < 1e-5);
        assert!((p_crit - 21_427.34).abs() < 0.01);
    }

    #[test]
    fn test_allowable_takes_minimum() {
        // Short post: crushing governs
        assert_eq!(simplified_allowable_axial(1000.0, 12.25, 1.0e9), 12_250.0);
        // Slender post: buckling governs
        assert_eq!(simplified_allowable_axial(1000.0, 12.25, 10_000.0), 3_000.0);
    }

    #[test]
    fn test_zero_length_is_finite() {
        let p_crit = euler_critical_load(1.6e6, 12.25, 0.0);
        assert!(p_crit.is_finite());
    }
}
