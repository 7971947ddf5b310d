//! # Simply-Supported Beam Formulas
//!
//! Closed-form results for a single-span beam, pin at one post and roller at
//! the other, under a uniform line load over the full span.
//!
//! ```text
//!    ↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓ w
//!    ═════════════════
//!    △                △
//!   R1  ←─────L─────→ R2
//! ```
//!
//! Units are whatever the caller passes in, as long as they are consistent:
//! moment and deflection use lb/in and inches, shear uses plf and feet.
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table 8.1, Case 2a
//! - NDS 2018 Section 3.4.2 (shear stress in rectangular members)

/// Reactions for uniform load w over full span L
///
/// # Formula
/// R1 = R2 = wL/2
#[inline]
pub fn uniform_load_reactions(w: f64, l: f64) -> (f64, f64) {
    let r = w * l / 2.0;
    (r, r)
}

/// Maximum shear for uniform load (at either support)
///
/// # Formula
/// V_max = wL/2
#[inline]
pub fn uniform_load_max_shear(w: f64, l: f64) -> f64 {
    w * l / 2.0
}

/// Maximum moment for uniform load (at midspan)
///
/// # Formula
/// M_max = wL²/8
#[inline]
pub fn uniform_load_max_moment(w: f64, l: f64) -> f64 {
    w * l.powi(2) / 8.0
}

/// Maximum deflection for uniform load (at midspan)
///
/// # Formula
/// δ_max = 5wL⁴ / (384EI)
#[inline]
pub fn uniform_load_max_deflection(w: f64, l: f64, e: f64, i: f64) -> f64 {
    5.0 * w * l.powi(4) / (384.0 * e * i)
}

/// Bending stress at the extreme fiber
///
/// # Formula
/// f_b = M/S
#[inline]
pub fn bending_stress(m: f64, s: f64) -> f64 {
    m / s
}

/// Maximum shear stress in a rectangular section
///
/// # Formula
/// f_v = 1.5V/(bd)
#[inline]
pub fn rectangular_shear_stress(v: f64, b: f64, d: f64) -> f64 {
    1.5 * v / (b * d)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_load_moment_and_shear() {
        // 300 plf over 10 ft = 25 lb/in over 120 in
        assert_eq!(uniform_load_max_moment(25.0, 120.0), 45_000.0);
        assert_eq!(uniform_load_max_shear(300.0, 10.0), 1_500.0);
        let (r1, r2) = uniform_load_reactions(300.0, 10.0);
        assert_eq!(r1, r2);
        assert_eq!(r1, uniform_load_max_shear(300.0, 10.0));
    }

    #[test]
    fn test_uniform_load_deflection() {
        let i = 3.5 * 9.25f64.powi(3) / 12.0;
        let delta = uniform_load_max_deflection(25.0, 120.0, 1.6e6, i);
        assert!((delta - 0.182756).abs() < 1e-6);
    }

    #[test]
    fn test_rectangular_shear_stress() {
        let fv = rectangular_shear_stress(1_500.0, 3.5, 9.25);
        assert!((fv - 69.498069).abs() < 1e-6);
    }
}
