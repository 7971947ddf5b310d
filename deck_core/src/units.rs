//! # Unit Types
//!
//! Type-safe wrappers for the handful of unit conversions the screening
//! engines perform. These are plain f64 newtypes that serialize as bare
//! numbers.
//!
//! ## US Customary Units
//!
//! - Length: feet (ft), inches (in)
//! - Area load: pounds per square foot (psf)
//! - Distributed load: pounds per linear foot (plf)
//!
//! ## Example
//!
//! ```rust
//! use deck_core::units::{Feet, Inches, Psf, PlF};
//!
//! let span = Feet(12.0);
//! let span_inches: Inches = span.into();
//! assert_eq!(span_inches.0, 144.0);
//!
//! let line_load: PlF = Psf(50.0) * Feet(6.0);
//! assert_eq!(line_load.0, 300.0);
//! assert_eq!(line_load.lb_per_in(), 25.0);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Length Units
// ============================================================================

/// Length in feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feet(pub f64);

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

impl From<Feet> for Inches {
    fn from(ft: Feet) -> Self {
        Inches(ft.0 * 12.0)
    }
}

impl From<Inches> for Feet {
    fn from(inches: Inches) -> Self {
        Feet(inches.0 / 12.0)
    }
}

// ============================================================================
// Load Units
// ============================================================================

/// Area load in pounds per square foot (psf)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Psf(pub f64);

/// Distributed load in pounds per linear foot (plf)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlF(pub f64);

impl PlF {
    /// Same load expressed per inch of length
    pub fn lb_per_in(self) -> f64 {
        self.0 / 12.0
    }
}

/// Area load spread over a tributary width gives a line load.
impl Mul<Feet> for Psf {
    type Output = PlF;
    fn mul(self, rhs: Feet) -> PlF {
        PlF(self.0 * rhs.0)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }
        }
    };
}

impl_arithmetic!(Feet);
impl_arithmetic!(Inches);
impl_arithmetic!(Psf);
impl_arithmetic!(PlF);
