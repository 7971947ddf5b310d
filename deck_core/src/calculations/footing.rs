//! # Isolated Post Footing
//!
//! Bearing, sliding and uplift screening of a rectangular spread footing
//! under one post.
//!
//! ## Assumptions
//!
//! - Concentric vertical load, uniform soil pressure (no eccentricity)
//! - Bearing uses the structural load alone: q = V_struct / A
//! - Sliding resistance uses the effective vertical load
//!   V_eff = V_struct + W_footing + W_overburden
//! - Uplift is resisted by dead weight plus any credited anchor capacity
//! - Overburden counts only when explicitly requested; otherwise it is
//!   exactly zero (it is a resisting force)
//!
//! Missing site values fall back to [`SiteDefaults`]; missing footing
//! dimensions are zero, which floors the plan area and reports CHECK.

use serde::{Deserialize, Serialize};

use crate::calc_log::{CalcLog, LogEntry, Operand};
use crate::calculations::beam::BeamResult;
use crate::calculations::framing::FramingInput;
use crate::equations::{block_weight, overburden_weight, sliding_resistance, uplift_resistance, Equation};
use crate::numeric::{fixed, floored, FOOTING_FLOOR};
use crate::units::{Feet, Inches};

/// Site values used when a framing line does not supply its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteDefaults {
    pub soil_unit_weight_pcf: f64,
    pub concrete_unit_weight_pcf: f64,
    pub friction_coefficient: f64,
    pub sf_bearing: f64,
    pub sf_sliding: f64,
    pub sf_uplift: f64,
}

impl Default for SiteDefaults {
    fn default() -> Self {
        SiteDefaults {
            soil_unit_weight_pcf: 120.0,
            concrete_unit_weight_pcf: 150.0,
            friction_coefficient: 0.5,
            sf_bearing: 1.0,
            sf_sliding: 1.5,
            sf_uplift: 1.5,
        }
    }
}

/// Footing demands, resistances and verdicts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FootingChecks {
    // === Demands ===
    pub v_struct_lb: f64,
    pub h_post_lb: f64,
    pub u_post_lb: f64,

    // === Dead weights ===
    pub area_ft2: f64,
    pub volume_ft3: f64,
    pub w_footing_lb: f64,
    pub w_overburden_lb: f64,
    pub v_eff_lb: f64,

    // === Bearing ===
    pub q_actual_psf: f64,
    pub q_allow_eff_psf: f64,
    pub bearing_ok: bool,

    // === Sliding ===
    pub r_slide_lb: f64,
    pub sliding_ok: bool,

    // === Uplift ===
    pub r_uplift_lb: f64,
    pub uplift_ok: bool,

    pub calc_log: CalcLog,
}

impl FootingChecks {
    pub fn passes(&self) -> bool {
        self.bearing_ok && self.sliding_ok && self.uplift_ok
    }
}

fn inches_to_feet(value: Option<f64>) -> f64 {
    Feet::from(Inches(value.unwrap_or(0.0))).value()
}

/// Footing checks with [`SiteDefaults::default`].
pub fn footing_checks(input: &FramingInput, beam: &BeamResult) -> FootingChecks {
    footing_checks_with(input, beam, &SiteDefaults::default())
}

/// Footing checks with explicit site defaults.
pub fn footing_checks_with(input: &FramingInput, beam: &BeamResult, defaults: &SiteDefaults) -> FootingChecks {
    let site = &input.site;
    let mut log = CalcLog::new();

    let gamma_soil = site.soil_unit_weight_pcf.unwrap_or(defaults.soil_unit_weight_pcf);
    let gamma_conc = site.concrete_unit_weight_pcf.unwrap_or(defaults.concrete_unit_weight_pcf);
    let mu = site.friction_coefficient.unwrap_or(defaults.friction_coefficient);
    let sf_bearing = site.sf_bearing.unwrap_or(defaults.sf_bearing);
    let sf_sliding = site.sf_sliding.unwrap_or(defaults.sf_sliding);
    let sf_uplift = site.sf_uplift.unwrap_or(defaults.sf_uplift);
    let q_allow = site.soil_bearing_capacity_psf.unwrap_or(0.0);
    let credit = site.connector_uplift_credit_lb.unwrap_or(0.0);
    let include_overburden = site.include_overburden == Some(true);

    // === Geometry ===
    let length = inches_to_feet(site.footing_length_in);
    let width = inches_to_feet(site.footing_width_in);
    let thickness = inches_to_feet(site.footing_thickness_in);
    let depth = inches_to_feet(site.footing_depth_below_grade_in);

    let area = length * width;
    let volume = area * thickness;
    let w_footing = block_weight(volume, gamma_conc);
    let w_overburden = if include_overburden {
        overburden_weight(area, depth, gamma_soil)
    } else {
        0.0
    };
    log.push(LogEntry::FootingGeometry {
        area_ft2: area,
        volume_ft3: volume,
        footing_weight_lb: w_footing,
        overburden_weight_lb: w_overburden,
        include_overburden,
    });

    // === Demands ===
    let reaction = beam.reaction_per_post_lb;
    let w_post = site.post_self_weight_lb.unwrap_or(0.0);
    let v_struct = reaction + w_post;
    log.formula(
        Equation::FootingStructuralVertical,
        vec![Operand::new("R", reaction), Operand::new("W_post", w_post)],
        Some(format!("{} + {}", fixed(reaction, 1), fixed(w_post, 1))),
        v_struct,
        1,
        "lb",
    );

    let h_post = input.post_lateral_lb();
    input.log_post_lateral(&mut log);
    let u_post = input.post_uplift_lb();
    input.log_post_uplift(&mut log);

    let v_eff = v_struct + w_footing + w_overburden;

    // === Bearing ===
    let q_actual = v_struct / floored(area, FOOTING_FLOOR);
    let q_allow_eff = q_allow / floored(sf_bearing, FOOTING_FLOOR);
    let bearing_ok = q_actual <= q_allow_eff;
    log.push(LogEntry::Comparison {
        check: "Bearing".to_string(),
        demand: format!("q_actual={} psf", fixed(q_actual, 0)),
        capacity: format!("q_allow_eff={} psf", fixed(q_allow_eff, 0)),
        pass: bearing_ok,
    });

    // === Sliding ===
    let sf_sliding_eff = floored(sf_sliding, FOOTING_FLOOR);
    let r_slide = sliding_resistance(mu, v_eff, sf_sliding_eff);
    let sliding_ok = h_post <= r_slide;
    log.push(LogEntry::Comparison {
        check: "Sliding".to_string(),
        demand: format!("H={} lb", fixed(h_post, 0)),
        capacity: format!(
            "μ·V_eff/SF={}·{}/{}={} lb",
            fixed(mu, 2),
            fixed(v_eff, 0),
            fixed(sf_sliding_eff, 2),
            fixed(r_slide, 0)
        ),
        pass: sliding_ok,
    });

    // === Uplift ===
    let sf_uplift_eff = floored(sf_uplift, FOOTING_FLOOR);
    let r_uplift = uplift_resistance(w_footing, w_overburden, credit, sf_uplift_eff);
    let uplift_ok = u_post <= r_uplift;
    log.push(LogEntry::Comparison {
        check: "Uplift".to_string(),
        demand: format!("U={} lb", fixed(u_post, 0)),
        capacity: format!(
            "(W_footing+W_overburden+credit)/SF=({}+{}+{})/{}={} lb",
            fixed(w_footing, 0),
            fixed(w_overburden, 0),
            fixed(credit, 0),
            fixed(sf_uplift_eff, 2),
            fixed(r_uplift, 0)
        ),
        pass: uplift_ok,
    });

    FootingChecks {
        v_struct_lb: v_struct,
        h_post_lb: h_post,
        u_post_lb: u_post,
        area_ft2: area,
        volume_ft3: volume,
        w_footing_lb: w_footing,
        w_overburden_lb: w_overburden,
        v_eff_lb: v_eff,
        q_actual_psf: q_actual,
        q_allow_eff_psf: q_allow_eff,
        bearing_ok,
        r_slide_lb: r_slide,
        sliding_ok,
        r_uplift_lb: r_uplift,
        uplift_ok,
        calc_log: log,
    }
}
