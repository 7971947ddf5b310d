//! # Cross-Section Property Formulas
//!
//! Geometric properties of solid rectangular sections (sawn lumber beams and
//! posts). Dimensions are actual, not nominal.
//!
//! ## Notation
//!
//! - `A` = Cross-sectional area
//! - `I` = Moment of inertia about the strong axis
//! - `S` = Section modulus (I/c, c = d/2)
//! - `r` = Radius of gyration (√(I/A))
//! - `b` = Width of section
//! - `d` = Depth of section
//!
//! ## References
//!
//! - NDS 2018 Section 3.3: Bending Members - Section Properties
//! - Roark's Formulas for Stress and Strain, 8th Edition, Chapter 3

/// Cross-sectional area of a rectangle
///
/// # Formula
/// A = b × d
///
/// # Example
/// ```rust
/// use deck_core::equations::section::rectangular_area;
///
/// // 4x4 post (3.5" x 3.5" actual)
/// assert!((rectangular_area(3.5, 3.5) - 12.25).abs() < 1e-12);
/// ```
#[inline]
pub fn rectangular_area(b: f64, d: f64) -> f64 {
    b * d
}

/// Moment of inertia of a rectangle about its centroidal strong axis
///
/// ```text
///     ┌─────────┐
///     │         │
///   d │ ════════│ ← neutral axis at d/2
///     │         │
///     └─────────┘
///          b
/// ```
///
/// # Formula
/// I = bd³/12
///
/// # Example
/// ```rust
/// use deck_core::equations::section::rectangular_moment_of_inertia;
///
/// // 4x10 (3.5" x 9.25" actual)
/// let i = rectangular_moment_of_inertia(3.5, 9.25);
/// assert!((i - 230.84).abs() < 0.01);
/// ```
#[inline]
pub fn rectangular_moment_of_inertia(b: f64, d: f64) -> f64 {
    b * d.powi(3) / 12.0
}

/// Section modulus of a rectangle
///
/// Relates bending moment to extreme fiber stress: f_b = M/S
///
/// # Formula
/// S = I/c = bd²/6
///
/// # Example
/// ```rust
/// use deck_core::equations::section::rectangular_section_modulus;
///
/// let s = rectangular_section_modulus(3.5, 9.25);
/// assert!((s - 49.91).abs() < 0.01);
/// ```
#[inline]
pub fn rectangular_section_modulus(b: f64, d: f64) -> f64 {
    b * d.powi(2) / 6.0
}

/// Radius of gyration from area and moment of inertia
///
/// # Formula
/// r = √(I/A)
///
/// For a rectangle bending about the `d` axis this reduces to d/√12.
#[inline]
pub fn radius_of_gyration(i: f64, a: f64) -> f64 {
    (i / a).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_properties_4x10() {
        let s = rectangular_section_modulus(3.5, 9.25);
        let i = rectangular_moment_of_inertia(3.5, 9.25);
        assert!((s - 49.911458).abs() < 1e-6);
        assert!((i - 230.840495).abs() < 1e-6);
        // S = I / (d/2)
        assert!((s - i / (9.25 / 2.0)).abs() < 1e-9);
    }

    #[test]
    fn test_radius_of_gyration_matches_d_over_root_12() {
        let a = rectangular_area(3.5, 5.5);
        let i = rectangular_moment_of_inertia(3.5, 5.5);
        let r = radius_of_gyration(i, a);
        assert!((r - 5.5 / 12f64.sqrt()).abs() < 1e-12);
    }
}
