//! # Post Buckling Check
//!
//! Simplified axial check of the post under the beam reaction.
//!
//! ## Assumptions
//!
//! - Pin-pin post, effective length = unsupported height (K = 1.0)
//! - Solid rectangular section, buckling about the `d` axis as given
//! - Allowable axial = min(Fc'·A, 0.30·P_cr); the 0.30 knockdown stands in
//!   for the NDS column stability factor C_P
//!
//! The check only runs when Fc', post b and post d are all supplied. With
//! incomplete data it records a skip in the log and offers no verdict; that
//! is "insufficient data", not a failure.

use serde::{Deserialize, Serialize};

use crate::calc_log::{CalcLog, LogEntry};
use crate::calculations::framing::{FramingInput, PostSection};
use crate::equations::{
    euler_critical_load,
    radius_of_gyration,
    rectangular_area,
    rectangular_moment_of_inertia,
    simplified_allowable_axial,
    slenderness_ratio,
};
use crate::numeric::{floored, RADIUS_FLOOR_IN};

/// Intermediate quantities of a post check that ran.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColumnCheck {
    pub area_in2: f64,
    pub radius_of_gyration_in: f64,
    pub effective_length_in: f64,
    pub slenderness_ratio: f64,
    pub critical_load_lb: f64,
    pub allowable_axial_lb: f64,
    pub axial_ok: bool,
}

/// Compute the post check for a known section and axial load.
pub fn check_section(section: PostSection, effective_length_in: f64, e_psi: f64, axial_lb: f64) -> ColumnCheck {
    let area = rectangular_area(section.b_in, section.d_in);
    let i_col = rectangular_moment_of_inertia(section.b_in, section.d_in);
    let r = radius_of_gyration(i_col, area);
    let slenderness = slenderness_ratio(effective_length_in, floored(r, RADIUS_FLOOR_IN));
    let p_crit = euler_critical_load(e_psi, area, slenderness);
    let allowable = simplified_allowable_axial(section.fc_axis_prime_psi, area, p_crit);

    ColumnCheck {
        area_in2: area,
        radius_of_gyration_in: r,
        effective_length_in,
        slenderness_ratio: slenderness,
        critical_load_lb: p_crit,
        allowable_axial_lb: allowable,
        axial_ok: axial_lb <= allowable,
    }
}

/// Run the post check for `input` under `reaction_lb`, narrating into `log`.
///
/// Returns `None` (and logs the skip) when the post section is incomplete.
pub fn check_post(input: &FramingInput, reaction_lb: f64, log: &mut CalcLog) -> Option<ColumnCheck> {
    let Some(section) = input.post_section() else {
        log.push(LogEntry::Skipped {
            check: "Column".to_string(),
            reason: "provide Fc_axis_prime & post section".to_string(),
        });
        return None;
    };

    let check = check_section(
        section,
        input.geometry.post_unsupported_height_in,
        input.material.e_psi,
        reaction_lb,
    );

    log.push(LogEntry::ColumnSection {
        area_in2: check.area_in2,
        radius_in: check.radius_of_gyration_in,
        effective_length_in: check.effective_length_in,
        slenderness: check.slenderness_ratio,
    });
    log.push(LogEntry::ColumnCapacity {
        critical_load_lb: check.critical_load_lb,
        allowable_lb: check.allowable_axial_lb,
        pass: check.axial_ok,
    });

    Some(check)
}
