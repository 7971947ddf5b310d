//! # Deck Beam Calculation
//!
//! Screens a simply-supported deck beam spanning between two posts, the
//! beam-to-post bearing, and (optionally) the post itself.
//!
//! ## Assumptions
//!
//! - Simply-supported (pin-roller) single span, uniform load over full span
//! - Loads are already combined by the caller (q = DL + SL + LL)
//! - Rectangular beam section, allowables already adjusted (Fb', Fv', Fc⊥')
//! - Reaction per post R = V_max; this value feeds the connector and
//!   footing checks
//!
//! ## Example
//!
//! ```rust
//! use deck_core::calculations::beam::evaluate;
//! use deck_core::calculations::framing::{
//!     AreaLoads, FramingInput, Geometry, MaterialAllowables,
//! };
//!
//! let input = FramingInput {
//!     label: "Line A".to_string(),
//!     geometry: Geometry {
//!         span_ft: 10.0,
//!         tributary_width_ft: 6.0,
//!         beam_b_in: 3.5,
//!         beam_d_in: 9.25,
//!         post_unsupported_height_in: 96.0,
//!         post_base_bearing_area_in2: 24.0,
//!     },
//!     material: MaterialAllowables {
//!         fb_prime_psi: 1000.0,
//!         fv_prime_psi: 180.0,
//!         fc_perp_prime_psi: 625.0,
//!         e_psi: 1.6e6,
//!         fc_axis_prime_psi: None,
//!         post_b_in: None,
//!         post_d_in: None,
//!     },
//!     loads: AreaLoads {
//!         dead_psf: 10.0,
//!         snow_psf: 0.0,
//!         live_psf: 40.0,
//!         deflection_limit_ratio: 240.0,
//!     },
//!     lateral: Default::default(),
//!     connectors: Default::default(),
//!     wind: Default::default(),
//!     site: Default::default(),
//! };
//!
//! let result = evaluate(&input);
//! assert_eq!(result.reaction_per_post_lb, 1500.0);
//! assert!(result.bending_ok);
//! assert!(result.column_axial_ok.is_none());
//! ```

use serde::{Deserialize, Serialize};

use crate::calc_log::{CalcLog, LogEntry, Operand};
use crate::calculations::column::check_post;
use crate::calculations::framing::FramingInput;
use crate::equations::{
    bending_stress,
    rectangular_moment_of_inertia,
    rectangular_section_modulus,
    rectangular_shear_stress,
    uniform_load_max_deflection,
    uniform_load_max_moment,
    uniform_load_max_shear,
    uniform_load_reactions,
    Equation,
};
use crate::numeric::{fixed, floored, plain, BEARING_AREA_FLOOR_IN2};
use crate::units::{Feet, Inches, Psf};

/// Lateral restraint advisories. `true` means the item needs attention;
/// these are markers for the reviewer, not structural verdicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LateralWarnings {
    /// No knee braces and no moment-rated top connector
    pub needs_top_moment_or_bracing: bool,
    /// No hold-downs or shear-rated base
    pub needs_base_anchorage: bool,
    /// Deflection check failed; span is long for the beam depth
    pub span_long_for_depth_watch_deflection: bool,
}

impl LateralWarnings {
    /// Flags in their fixed reporting order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, bool)> {
        [
            ("needs_top_moment_or_bracing", self.needs_top_moment_or_bracing),
            ("needs_base_anchorage", self.needs_base_anchorage),
            (
                "span_long_for_depth_watch_deflection",
                self.span_long_for_depth_watch_deflection,
            ),
        ]
        .into_iter()
    }

    /// Look up a flag by name
    pub fn get(&self, name: &str) -> Option<bool> {
        self.iter().find(|(n, _)| *n == name).map(|(_, v)| v)
    }

    /// True when any advisory is raised
    pub fn any(&self) -> bool {
        self.iter().any(|(_, v)| v)
    }
}

/// Results from the beam/post screening.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamResult {
    // === Load Summary ===
    /// Total area load q = DL + SL + LL (psf)
    pub area_load_psf: f64,

    /// Beam line load w = q × tributary width (plf)
    pub line_load_plf: f64,

    // === Section Properties ===
    pub section_modulus_in3: f64,
    pub moment_of_inertia_in4: f64,

    // === Demand ===
    /// M_max = wL²/8 (lb·in)
    pub max_moment_lb_in: f64,

    /// V_max = wL/2 (lb)
    pub max_shear_lb: f64,

    /// Reaction delivered to each post (lb)
    pub reaction_per_post_lb: f64,

    // === Stresses ===
    pub bending_stress_psi: f64,
    pub shear_stress_psi: f64,
    pub bearing_stress_psi: f64,

    // === Deflection ===
    pub deflection_in: f64,
    pub deflection_limit_in: f64,

    // === Verdicts ===
    pub bending_ok: bool,
    pub shear_ok: bool,
    pub bearing_ok: bool,
    pub deflection_ok: bool,

    // === Post ===
    /// `None` when the post check was skipped for missing data
    pub column_axial_ok: Option<bool>,
    pub column_allowable_axial_lb: Option<f64>,

    // === Lateral ===
    pub lateral_warnings: LateralWarnings,

    /// Audit trail, in computation order
    pub calc_log: CalcLog,
}

impl BeamResult {
    /// All structural verdicts pass (the post verdict counts only when it ran)
    pub fn passes(&self) -> bool {
        self.bending_ok
            && self.shear_ok
            && self.bearing_ok
            && self.deflection_ok
            && self.column_axial_ok.unwrap_or(true)
    }

    /// Bending, shear, bearing and deflection utilizations (actual / allowable)
    pub fn unity_ratios(&self, input: &FramingInput) -> [(&'static str, f64); 4] {
        let m = &input.material;
        [
            ("Bending", self.bending_stress_psi / m.fb_prime_psi),
            ("Shear", self.shear_stress_psi / m.fv_prime_psi),
            ("Bearing", self.bearing_stress_psi / m.fc_perp_prime_psi),
            ("Deflection", self.deflection_in / self.deflection_limit_in),
        ]
    }
}

/// Screen the beam and post of one framing line.
///
/// Pure function: never fails for numeric input. A zero bearing area is
/// floored so the bearing stress comes out very large and the bearing
/// verdict reports CHECK.
pub fn evaluate(input: &FramingInput) -> BeamResult {
    let g = &input.geometry;
    let m = &input.material;
    let loads = &input.loads;
    let mut log = CalcLog::new();

    // === Loads ===
    let q = Psf(loads.dead_psf) + Psf(loads.snow_psf) + Psf(loads.live_psf);
    log.formula(
        Equation::TotalAreaLoad,
        vec![
            Operand::new("DL", loads.dead_psf),
            Operand::new("SL", loads.snow_psf),
            Operand::new("LL", loads.live_psf),
        ],
        Some(format!(
            "{} + {} + {}",
            plain(loads.dead_psf),
            plain(loads.snow_psf),
            plain(loads.live_psf)
        )),
        q.value(),
        3,
        "psf",
    );

    let w = q * Feet(g.tributary_width_ft);
    let w_plf = w.value();
    log.formula(
        Equation::LineLoad,
        vec![Operand::new("q", q.value()), Operand::new("tributary_width", g.tributary_width_ft)],
        Some(format!("{} × {}", fixed(q.value(), 3), fixed(g.tributary_width_ft, 3))),
        w_plf,
        3,
        "plf",
    );

    let w_lb_in = w.lb_per_in();
    let span_in = Inches::from(Feet(g.span_ft)).value();
    let (b, d) = (g.beam_b_in, g.beam_d_in);

    // === Section Properties ===
    let s = rectangular_section_modulus(b, d);
    let i = rectangular_moment_of_inertia(b, d);
    log.formula(
        Equation::RectangularSectionModulus,
        vec![Operand::new("b", b), Operand::new("d", d)],
        Some(format!("{}×{}²/6", fixed(b, 3), fixed(d, 3))),
        s,
        3,
        "in³",
    );
    log.formula(
        Equation::RectangularMomentOfInertia,
        vec![Operand::new("b", b), Operand::new("d", d)],
        Some(format!("{}×{}³/12", fixed(b, 3), fixed(d, 3))),
        i,
        3,
        "in⁴",
    );

    // === Demand ===
    let max_moment = uniform_load_max_moment(w_lb_in, span_in);
    let max_shear = uniform_load_max_shear(w_plf, g.span_ft);
    log.formula(
        Equation::UniformLoadMaxMoment,
        vec![Operand::new("w", w_lb_in), Operand::new("L", span_in)],
        Some(format!("{} × {}² / 8", fixed(w_lb_in, 3), fixed(span_in, 1))),
        max_moment,
        1,
        "lb·in",
    );
    log.formula(
        Equation::UniformLoadMaxShear,
        vec![Operand::new("w_plf", w_plf), Operand::new("L", g.span_ft)],
        Some(format!("{} × {} / 2", fixed(w_plf, 3), fixed(g.span_ft, 3))),
        max_shear,
        1,
        "lb",
    );

    // === Stresses ===
    let fb = bending_stress(max_moment, s);
    let fv = rectangular_shear_stress(max_shear, b, d);
    log.formula_with_note(
        Equation::BendingStress,
        vec![Operand::new("M", max_moment), Operand::new("S", s)],
        Some(format!("{}/{}", fixed(max_moment, 1), fixed(s, 3))),
        fb,
        1,
        "psi",
        format!("  (Fb'={})", fixed(m.fb_prime_psi, 0)),
    );
    log.formula_with_note(
        Equation::ShearStressRectangular,
        vec![Operand::new("V", max_shear), Operand::new("b", b), Operand::new("d", d)],
        Some(format!("1.5×{}/({}×{})", fixed(max_shear, 1), fixed(b, 3), fixed(d, 3))),
        fv,
        1,
        "psi",
        format!("  (Fv'={})", fixed(m.fv_prime_psi, 0)),
    );

    let (reaction, _) = uniform_load_reactions(w_plf, g.span_ft);
    let bearing_area = g.post_base_bearing_area_in2;
    let f_bearing = reaction / floored(bearing_area, BEARING_AREA_FLOOR_IN2);
    log.formula_with_note(
        Equation::BearingStress,
        vec![Operand::new("R", reaction), Operand::new("A", bearing_area)],
        Some(format!("{}/{}", fixed(reaction, 1), fixed(bearing_area, 3))),
        f_bearing,
        1,
        "psi",
        format!("  (Fc⊥'={})", fixed(m.fc_perp_prime_psi, 0)),
    );

    // === Deflection ===
    let deflection = uniform_load_max_deflection(w_lb_in, span_in, m.e_psi, i);
    let deflection_limit = span_in / loads.deflection_limit_ratio;
    log.formula_with_note(
        Equation::UniformLoadMaxDeflection,
        vec![
            Operand::new("w", w_lb_in),
            Operand::new("L", span_in),
            Operand::new("E", m.e_psi),
            Operand::new("I", i),
        ],
        None,
        deflection,
        3,
        "in",
        format!(
            "  (limit L/{} = {} in)",
            fixed(loads.deflection_limit_ratio, 0),
            fixed(deflection_limit, 3)
        ),
    );

    // === Verdicts ===
    let bending_ok = fb <= m.fb_prime_psi;
    let shear_ok = fv <= m.fv_prime_psi;
    let bearing_ok = f_bearing <= m.fc_perp_prime_psi;
    let deflection_ok = deflection <= deflection_limit;
    for (check, pass) in [
        ("Bending", bending_ok),
        ("Shear", shear_ok),
        ("Bearing", bearing_ok),
        ("Deflection", deflection_ok),
    ] {
        log.push(LogEntry::Verdict {
            check: check.to_string(),
            pass,
        });
    }

    // === Post ===
    let column = check_post(input, reaction, &mut log);

    // === Lateral ===
    let lateral = &input.lateral;
    let lateral_warnings = LateralWarnings {
        needs_top_moment_or_bracing: !(lateral.has_knee_braces || lateral.has_moment_top_connector),
        needs_base_anchorage: !lateral.has_hold_downs_or_shear_base,
        span_long_for_depth_watch_deflection: !deflection_ok,
    };
    for (flag, attention) in lateral_warnings.iter() {
        log.push(LogEntry::Advisory {
            flag: flag.to_string(),
            attention,
        });
    }

    BeamResult {
        area_load_psf: q.value(),
        line_load_plf: w_plf,
        section_modulus_in3: s,
        moment_of_inertia_in4: i,
        max_moment_lb_in: max_moment,
        max_shear_lb: max_shear,
        reaction_per_post_lb: reaction,
        bending_stress_psi: fb,
        shear_stress_psi: fv,
        bearing_stress_psi: f_bearing,
        deflection_in: deflection,
        deflection_limit_in: deflection_limit,
        bending_ok,
        shear_ok,
        bearing_ok,
        deflection_ok,
        column_axial_ok: column.map(|c| c.axial_ok),
        column_allowable_axial_lb: column.map(|c| c.allowable_axial_lb),
        lateral_warnings,
        calc_log: log,
    }
}
