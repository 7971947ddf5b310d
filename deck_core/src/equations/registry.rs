//! # Equation Registry
//!
//! Identity and metadata for every formula that appears in an audit log.
//! Log entries carry an [`Equation`] rather than a free-form string, so the
//! trail can be inspected as data and the printed symbol/expression always
//! match the registry.
//!
//! ```rust
//! use deck_core::equations::registry::Equation;
//!
//! let eq = Equation::UniformLoadMaxMoment;
//! assert_eq!(eq.symbol(), "Mmax");
//! assert_eq!(eq.expression(), "w L² / 8");
//! assert_eq!(eq.reference().citation(), "Roark's 8ed, Table 8.1, Case 2a");
//! ```

use serde::{Deserialize, Serialize};

/// Reference to a structural engineering code or standard.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum CodeReference {
    /// Roark's Formulas for Stress and Strain
    Roarks {
        edition: u8,
        table: &'static str,
        case: &'static str,
    },
    /// National Design Specification for Wood Construction
    NDS { year: u16, section: &'static str },
    /// Fundamental mechanics / statics (no specific code reference needed)
    Mechanics,
}

impl CodeReference {
    /// Format the reference for display
    pub fn citation(&self) -> String {
        match self {
            CodeReference::Roarks { edition, table, case } => {
                format!("Roark's {}ed, {}, Case {}", edition, table, case)
            }
            CodeReference::NDS { year, section } => {
                format!("NDS {} Section {}", year, section)
            }
            CodeReference::Mechanics => "Fundamental Mechanics".to_string(),
        }
    }
}

/// Every formula the screening engines narrate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Equation {
    // -------------------------------------------------------------------------
    // Loads
    // -------------------------------------------------------------------------
    /// q = DL + SL + LL
    TotalAreaLoad,
    /// w = q × tributary width
    LineLoad,

    // -------------------------------------------------------------------------
    // Section Properties
    // -------------------------------------------------------------------------
    /// S = bd²/6
    RectangularSectionModulus,
    /// I = bd³/12
    RectangularMomentOfInertia,

    // -------------------------------------------------------------------------
    // Simply-Supported Beam: Uniform Load
    // -------------------------------------------------------------------------
    /// M_max = wL²/8
    UniformLoadMaxMoment,
    /// V_max = wL/2
    UniformLoadMaxShear,
    /// δ_max = 5wL⁴/(384EI)
    UniformLoadMaxDeflection,

    // -------------------------------------------------------------------------
    // Stresses
    // -------------------------------------------------------------------------
    /// f_b = M/S
    BendingStress,
    /// f_v = 1.5V/(bd)
    ShearStressRectangular,
    /// f_c⊥ = R/A
    BearingStress,

    // -------------------------------------------------------------------------
    // Footing
    // -------------------------------------------------------------------------
    /// V_struct = R + W_post
    FootingStructuralVertical,

    // -------------------------------------------------------------------------
    // Wind at the post (shared by connector and footing demands)
    // -------------------------------------------------------------------------
    /// H = w_lat × L / 2 with an explicit line load
    PostLateralFromLineLoad,
    /// H = (p_wall × h) × L / 2
    PostLateralFromWallPressure,
    /// U = p_uplift × A_trib
    PostUplift,
    /// M_top = H × arm
    TopConnectorMoment,
}

impl Equation {
    /// Symbol printed on the left-hand side of the log line
    pub fn symbol(&self) -> &'static str {
        match self {
            Equation::TotalAreaLoad => "q",
            Equation::LineLoad => "w",
            Equation::RectangularSectionModulus => "S",
            Equation::RectangularMomentOfInertia => "I",
            Equation::UniformLoadMaxMoment => "Mmax",
            Equation::UniformLoadMaxShear => "Vmax",
            Equation::UniformLoadMaxDeflection => "Δ",
            Equation::BendingStress => "fb",
            Equation::ShearStressRectangular => "fv",
            Equation::BearingStress => "bearing",
            Equation::FootingStructuralVertical => "V_struct",
            Equation::PostLateralFromLineLoad | Equation::PostLateralFromWallPressure => "H_post",
            Equation::PostUplift => "U_post",
            Equation::TopConnectorMoment => "M_top",
        }
    }

    /// Symbolic right-hand side as printed in the log
    pub fn expression(&self) -> &'static str {
        match self {
            Equation::TotalAreaLoad => "DL + SL + LL",
            Equation::LineLoad => "q × tributary_width",
            Equation::RectangularSectionModulus => "b d² / 6",
            Equation::RectangularMomentOfInertia => "b d³ / 12",
            Equation::UniformLoadMaxMoment => "w L² / 8",
            Equation::UniformLoadMaxShear => "w_plf × L / 2",
            Equation::UniformLoadMaxDeflection => "5 w L⁴/(384 E I)",
            Equation::BendingStress => "M/S",
            Equation::ShearStressRectangular => "1.5V/(bd)",
            Equation::BearingStress => "R/A",
            Equation::FootingStructuralVertical => "Reaction(post) + Post self-weight",
            Equation::PostLateralFromLineLoad => "lateral_plf × span / 2",
            Equation::PostLateralFromWallPressure => "(wind_wall_psf×height)×span/2",
            Equation::PostUplift => "roof_uplift_psf × uplift_area",
            Equation::TopConnectorMoment => "H_post × arm",
        }
    }

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Equation::TotalAreaLoad => "Total Area Load",
            Equation::LineLoad => "Beam Line Load",
            Equation::RectangularSectionModulus => "Rectangular Section Modulus",
            Equation::RectangularMomentOfInertia => "Rectangular Moment of Inertia",
            Equation::UniformLoadMaxMoment => "Maximum Moment for Uniform Load",
            Equation::UniformLoadMaxShear => "Maximum Shear for Uniform Load",
            Equation::UniformLoadMaxDeflection => "Maximum Deflection for Uniform Load",
            Equation::BendingStress => "Bending Stress",
            Equation::ShearStressRectangular => "Shear Stress (Rectangular)",
            Equation::BearingStress => "Bearing Stress Perpendicular to Grain",
            Equation::FootingStructuralVertical => "Footing Structural Vertical Load",
            Equation::PostLateralFromLineLoad => "Post Lateral Load (Line Load)",
            Equation::PostLateralFromWallPressure => "Post Lateral Load (Wall Pressure)",
            Equation::PostUplift => "Post Uplift Load",
            Equation::TopConnectorMoment => "Top Connector Moment",
        }
    }

    /// Code/standard reference
    pub fn reference(&self) -> CodeReference {
        match self {
            Equation::UniformLoadMaxMoment | Equation::UniformLoadMaxShear | Equation::UniformLoadMaxDeflection => {
                CodeReference::Roarks {
                    edition: 8,
                    table: "Table 8.1",
                    case: "2a",
                }
            }
            Equation::BendingStress => CodeReference::NDS {
                year: 2018,
                section: "3.3.1",
            },
            Equation::ShearStressRectangular => CodeReference::NDS {
                year: 2018,
                section: "3.4.2",
            },
            Equation::BearingStress => CodeReference::NDS {
                year: 2018,
                section: "3.10.2",
            },
            Equation::RectangularSectionModulus | Equation::RectangularMomentOfInertia => CodeReference::NDS {
                year: 2018,
                section: "3.3",
            },
            _ => CodeReference::Mechanics,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_are_stable() {
        assert_eq!(Equation::TotalAreaLoad.symbol(), "q");
        assert_eq!(Equation::UniformLoadMaxDeflection.symbol(), "Δ");
        assert_eq!(Equation::PostLateralFromWallPressure.symbol(), "H_post");
    }

    #[test]
    fn test_citations() {
        assert_eq!(
            Equation::BendingStress.reference().citation(),
            "NDS 2018 Section 3.3.1"
        );
        assert_eq!(Equation::LineLoad.reference().citation(), "Fundamental Mechanics");
    }

    #[test]
    fn test_equation_serialization() {
        let json = serde_json::to_string(&Equation::BearingStress).unwrap();
        assert_eq!(json, "\"BearingStress\"");
    }
}
