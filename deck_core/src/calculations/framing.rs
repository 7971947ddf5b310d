//! # Framing Line Input
//!
//! The immutable snapshot one screening run works from: a beam spanning
//! between two posts, the posts bearing on connectors, the connectors bearing
//! on footings.
//!
//! Optional inputs are `Option<_>` throughout. An absent value is never
//! inferred from zero: zero uplift is a legitimate engineering value, so each
//! dependent check tests for presence explicitly.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "label": "Line A",
//!   "geometry": {
//!     "span_ft": 10.0,
//!     "tributary_width_ft": 6.0,
//!     "beam_b_in": 3.5,
//!     "beam_d_in": 9.25,
//!     "post_unsupported_height_in": 96.0,
//!     "post_base_bearing_area_in2": 24.0
//!   },
//!   "material": {
//!     "fb_prime_psi": 1000.0,
//!     "fv_prime_psi": 180.0,
//!     "fc_perp_prime_psi": 625.0,
//!     "e_psi": 1600000.0,
//!     "fc_axis_prime_psi": 1000.0,
//!     "post_b_in": 3.5,
//!     "post_d_in": 3.5
//!   },
//!   "loads": { "dead_psf": 10.0, "snow_psf": 0.0, "live_psf": 40.0 },
//!   "wind": { "roof_uplift_psf": 20.0, "uplift_area_per_post_ft2": 30.0 }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::calc_log::{CalcLog, Operand};
use crate::equations::Equation;
use crate::errors::{CalcError, CalcResult};
use crate::numeric::fixed;

/// Default deflection limit, L/240
pub const DEFAULT_DEFLECTION_LIMIT_RATIO: f64 = 240.0;

fn default_deflection_limit_ratio() -> f64 {
    DEFAULT_DEFLECTION_LIMIT_RATIO
}

/// Complete input for one framing line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FramingInput {
    /// User label (e.g., "Line A", "Rear beam at grid 3")
    #[serde(default)]
    pub label: String,

    pub geometry: Geometry,

    pub material: MaterialAllowables,

    pub loads: AreaLoads,

    #[serde(default)]
    pub lateral: LateralRestraint,

    #[serde(default)]
    pub connectors: ConnectorModels,

    #[serde(default)]
    pub wind: WindInput,

    #[serde(default)]
    pub site: SiteInput,
}

/// Beam and post geometry. All dimensions are actual, not nominal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    /// Beam span between posts (ft)
    pub span_ft: f64,
    /// Width of deck framing tributary to the beam (ft)
    pub tributary_width_ft: f64,
    /// Beam width (in)
    pub beam_b_in: f64,
    /// Beam depth (in)
    pub beam_d_in: f64,
    /// Unbraced post height, used as the effective length (in)
    pub post_unsupported_height_in: f64,
    /// Bearing area between beam and post (in²)
    pub post_base_bearing_area_in2: f64,
}

/// Adjusted allowable stresses and stiffness of the wood members (psi).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialAllowables {
    /// Fb' - allowable bending stress
    pub fb_prime_psi: f64,
    /// Fv' - allowable shear stress
    pub fv_prime_psi: f64,
    /// Fc⊥' - allowable bearing perpendicular to grain
    pub fc_perp_prime_psi: f64,
    /// E - modulus of elasticity
    pub e_psi: f64,
    /// Fc' - allowable compression parallel to grain (post check)
    #[serde(default)]
    pub fc_axis_prime_psi: Option<f64>,
    /// Post section width (in)
    #[serde(default)]
    pub post_b_in: Option<f64>,
    /// Post section depth (in)
    #[serde(default)]
    pub post_d_in: Option<f64>,
}

/// Pre-combined area loads on the deck (psf).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaLoads {
    pub dead_psf: f64,
    pub snow_psf: f64,
    #[serde(default)]
    pub live_psf: f64,
    /// Deflection limit expressed as L/ratio
    #[serde(default = "default_deflection_limit_ratio")]
    pub deflection_limit_ratio: f64,
}

/// What the line already has for lateral restraint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LateralRestraint {
    #[serde(default)]
    pub has_knee_braces: bool,
    #[serde(default)]
    pub has_moment_top_connector: bool,
    #[serde(default)]
    pub has_hold_downs_or_shear_base: bool,
}

/// Connector models the designer wants verified. Absent means auto-select.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConnectorModels {
    #[serde(default)]
    pub top_model: Option<String>,
    #[serde(default)]
    pub base_model: Option<String>,
}

/// Wind uplift and lateral load at the post.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WindInput {
    /// Net roof/deck uplift pressure (psf)
    #[serde(default)]
    pub roof_uplift_psf: Option<f64>,
    /// Area tributary to one post for uplift (ft²)
    #[serde(default)]
    pub uplift_area_per_post_ft2: Option<f64>,
    /// Lateral line load along the beam (plf); takes precedence when given
    #[serde(default)]
    pub lateral_line_load_plf: Option<f64>,
    /// Wind pressure on the exposed wall/screen (psf)
    #[serde(default)]
    pub wind_wall_psf: Option<f64>,
    /// Height of exposed wall/screen (ft)
    #[serde(default)]
    pub exposed_height_ft: Option<f64>,
    /// Lever arm from beam centroid to the top connector (in)
    #[serde(default)]
    pub post_to_beam_arm_in: Option<f64>,
}

/// Footing size and site parameters. Missing values fall back to
/// [`SiteDefaults`](crate::calculations::footing::SiteDefaults) or zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteInput {
    #[serde(default)]
    pub soil_bearing_capacity_psf: Option<f64>,
    #[serde(default)]
    pub soil_unit_weight_pcf: Option<f64>,
    #[serde(default)]
    pub concrete_unit_weight_pcf: Option<f64>,
    /// μ between footing base and soil
    #[serde(default)]
    pub friction_coefficient: Option<f64>,
    #[serde(default)]
    pub sf_bearing: Option<f64>,
    #[serde(default)]
    pub sf_sliding: Option<f64>,
    #[serde(default)]
    pub sf_uplift: Option<f64>,
    /// Extra uplift resistance credited to the base connector/anchor (lb)
    #[serde(default)]
    pub connector_uplift_credit_lb: Option<f64>,
    /// Count soil above the footing as resisting weight
    #[serde(default)]
    pub include_overburden: Option<bool>,
    #[serde(default)]
    pub footing_length_in: Option<f64>,
    #[serde(default)]
    pub footing_width_in: Option<f64>,
    #[serde(default)]
    pub footing_thickness_in: Option<f64>,
    /// Depth of footing top below grade (in)
    #[serde(default)]
    pub footing_depth_below_grade_in: Option<f64>,
    #[serde(default)]
    pub post_self_weight_lb: Option<f64>,
}

/// Post section and axial allowable, present only when all three are given.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PostSection {
    pub fc_axis_prime_psi: f64,
    pub b_in: f64,
    pub d_in: f64,
}

/// Where the lateral line load at the post came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LateralSource {
    /// Explicit `lateral_line_load_plf`
    LineLoad { plf: f64 },
    /// `wind_wall_psf × exposed_height_ft`
    WallPressure { psf: f64, height_ft: f64 },
    /// Neither given
    None,
}

impl LateralSource {
    /// Lateral line load (plf)
    pub fn line_load_plf(&self) -> f64 {
        match *self {
            LateralSource::LineLoad { plf } => plf,
            LateralSource::WallPressure { psf, height_ft } => psf * height_ft,
            LateralSource::None => 0.0,
        }
    }
}

fn present(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0)
}

impl FramingInput {
    /// Validate the required inputs.
    ///
    /// The engines never fail on numeric input; this is the gate callers run
    /// before trusting the verdicts.
    pub fn validate(&self) -> CalcResult<()> {
        let g = &self.geometry;
        let m = &self.material;
        let positive = [
            ("geometry.span_ft", g.span_ft),
            ("geometry.tributary_width_ft", g.tributary_width_ft),
            ("geometry.beam_b_in", g.beam_b_in),
            ("geometry.beam_d_in", g.beam_d_in),
            ("geometry.post_unsupported_height_in", g.post_unsupported_height_in),
            ("material.e_psi", m.e_psi),
            ("loads.deflection_limit_ratio", self.loads.deflection_limit_ratio),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(CalcError::invalid_input(field, value.to_string(), "Must be a positive number"));
            }
        }

        // zero bearing area is a CHECK verdict, not an input error
        let non_negative = [
            ("geometry.post_base_bearing_area_in2", g.post_base_bearing_area_in2),
            ("material.fb_prime_psi", m.fb_prime_psi),
            ("material.fv_prime_psi", m.fv_prime_psi),
            ("material.fc_perp_prime_psi", m.fc_perp_prime_psi),
            ("loads.dead_psf", self.loads.dead_psf),
            ("loads.snow_psf", self.loads.snow_psf),
            ("loads.live_psf", self.loads.live_psf),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(CalcError::invalid_input(field, value.to_string(), "Must not be negative"));
            }
        }

        let safety_factors = [
            ("site.sf_bearing", self.site.sf_bearing),
            ("site.sf_sliding", self.site.sf_sliding),
            ("site.sf_uplift", self.site.sf_uplift),
        ];
        for (field, value) in safety_factors {
            if let Some(v) = value {
                if v.is_nan() || v <= 0.0 {
                    return Err(CalcError::invalid_input(field, v.to_string(), "Factor of safety must be positive"));
                }
            }
        }

        Ok(())
    }

    /// Post section for the buckling check.
    ///
    /// Returns `None` unless Fc', post b and post d are all present and
    /// non-zero; a zero dimension carries no section to check.
    pub fn post_section(&self) -> Option<PostSection> {
        let m = &self.material;
        Some(PostSection {
            fc_axis_prime_psi: present(m.fc_axis_prime_psi)?,
            b_in: present(m.post_b_in)?,
            d_in: present(m.post_d_in)?,
        })
    }

    /// Lateral line load source, first available wins (never summed).
    pub fn lateral_source(&self) -> LateralSource {
        let w = &self.wind;
        if let Some(plf) = w.lateral_line_load_plf {
            return LateralSource::LineLoad { plf };
        }
        match (w.wind_wall_psf, w.exposed_height_ft) {
            (Some(psf), Some(height_ft)) => LateralSource::WallPressure { psf, height_ft },
            _ => LateralSource::None,
        }
    }

    /// Roof uplift pressure and tributary area, when both are given.
    pub fn uplift_source(&self) -> Option<(f64, f64)> {
        Some((self.wind.roof_uplift_psf?, self.wind.uplift_area_per_post_ft2?))
    }

    /// Lateral load delivered to one post (lb): w_lat × span / 2.
    pub fn post_lateral_lb(&self) -> f64 {
        self.lateral_source().line_load_plf() * self.geometry.span_ft / 2.0
    }

    /// Uplift delivered to one post (lb), zero unless pressure and area are both given.
    pub fn post_uplift_lb(&self) -> f64 {
        self.uplift_source().map(|(psf, area)| psf * area).unwrap_or(0.0)
    }

    /// Narrate the post lateral load derivation into `log`.
    pub(crate) fn log_post_lateral(&self, log: &mut CalcLog) {
        let span = self.geometry.span_ft;
        let h = self.post_lateral_lb();
        match self.lateral_source() {
            LateralSource::LineLoad { plf } => log.formula(
                Equation::PostLateralFromLineLoad,
                vec![Operand::new("lateral_plf", plf), Operand::new("span", span)],
                Some(format!("{} × {} / 2", fixed(plf, 2), fixed(span, 2))),
                h,
                1,
                "lb",
            ),
            LateralSource::WallPressure { psf, height_ft } => log.formula(
                Equation::PostLateralFromWallPressure,
                vec![
                    Operand::new("wind_wall_psf", psf),
                    Operand::new("height", height_ft),
                    Operand::new("span", span),
                ],
                Some(format!("({}×{})×{}/2", fixed(psf, 2), fixed(height_ft, 2), fixed(span, 2))),
                h,
                1,
                "lb",
            ),
            LateralSource::None => log.note("H_post = 0 (no lateral line load provided)"),
        }
    }

    /// Narrate the post uplift derivation into `log`.
    pub(crate) fn log_post_uplift(&self, log: &mut CalcLog) {
        match self.uplift_source() {
            Some((psf, area)) => log.formula(
                Equation::PostUplift,
                vec![Operand::new("roof_uplift_psf", psf), Operand::new("uplift_area", area)],
                Some(format!("{} × {}", fixed(psf, 2), fixed(area, 2))),
                psf * area,
                1,
                "lb",
            ),
            None => log.note("U_post = 0 (no uplift psf or area provided)"),
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// 4x10 beam on 10 ft span, 6 ft tributary, 10 psf dead + 40 psf live
    pub fn deck_line() -> FramingInput {
        FramingInput {
            label: "Line A".to_string(),
            geometry: Geometry {
                span_ft: 10.0,
                tributary_width_ft: 6.0,
                beam_b_in: 3.5,
                beam_d_in: 9.25,
                post_unsupported_height_in: 96.0,
                post_base_bearing_area_in2: 24.0,
            },
            material: MaterialAllowables {
                fb_prime_psi: 1000.0,
                fv_prime_psi: 180.0,
                fc_perp_prime_psi: 625.0,
                e_psi: 1.6e6,
                fc_axis_prime_psi: None,
                post_b_in: None,
                post_d_in: None,
            },
            loads: AreaLoads {
                dead_psf: 10.0,
                snow_psf: 0.0,
                live_psf: 40.0,
                deflection_limit_ratio: 240.0,
            },
            lateral: LateralRestraint::default(),
            connectors: ConnectorModels::default(),
            wind: WindInput::default(),
            site: SiteInput::default(),
        }
    }
}
