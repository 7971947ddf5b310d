//! # Summary Tables
//!
//! Flattens engine results into `item / value / status` rows for a tabular
//! sink (terminal table, spreadsheet, JSON report). Purely presentational:
//! every number here is already in the results.

use serde::{Deserialize, Serialize};

use crate::calc_log::{CalcLog, LogEntry};
use crate::calculations::{BeamResult, ConnectionSelection, ConnectorChecks, FootingChecks, FramingInput};
use crate::numeric::{fixed, grouped, ok_attention, pass_check};

/// One row of a summary table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub item: String,
    pub value: String,
    pub status: String,
}

impl SummaryRow {
    pub fn new(item: impl Into<String>, value: impl Into<String>, status: impl Into<String>) -> Self {
        SummaryRow {
            item: item.into(),
            value: value.into(),
            status: status.into(),
        }
    }
}

/// Beam, post and lateral advisory rows.
pub fn beam_summary(input: &FramingInput, beam: &BeamResult) -> Vec<SummaryRow> {
    let m = &input.material;
    let mut rows = vec![
        SummaryRow::new("Line load", format!("{} plf", fixed(beam.line_load_plf, 1)), ""),
        SummaryRow::new("Reaction per post", format!("{} lb", grouped(beam.reaction_per_post_lb, 0)), ""),
        SummaryRow::new(
            "Bending fb / Fb'",
            format!("{} / {} psi", fixed(beam.bending_stress_psi, 1), fixed(m.fb_prime_psi, 0)),
            pass_check(beam.bending_ok),
        ),
        SummaryRow::new(
            "Shear fv / Fv'",
            format!("{} / {} psi", fixed(beam.shear_stress_psi, 1), fixed(m.fv_prime_psi, 0)),
            pass_check(beam.shear_ok),
        ),
        SummaryRow::new(
            "Bearing fc⊥ / Fc⊥'",
            format!("{} / {} psi", fixed(beam.bearing_stress_psi, 1), fixed(m.fc_perp_prime_psi, 0)),
            pass_check(beam.bearing_ok),
        ),
        SummaryRow::new(
            "Deflection Δ / limit",
            format!("{} / {} in", fixed(beam.deflection_in, 3), fixed(beam.deflection_limit_in, 3)),
            pass_check(beam.deflection_ok),
        ),
    ];

    match (beam.column_axial_ok, beam.column_allowable_axial_lb) {
        (Some(ok), Some(allowable)) => rows.push(SummaryRow::new(
            "Post axial R / P_allow",
            format!("{} / {} lb", grouped(beam.reaction_per_post_lb, 0), grouped(allowable, 0)),
            pass_check(ok),
        )),
        _ => rows.push(SummaryRow::new("Column check", "— supply Fc′ and post size —", "SKIPPED")),
    }

    for (flag, attention) in beam.lateral_warnings.iter() {
        rows.push(SummaryRow::new(format!("Lateral: {}", flag), "", ok_attention(attention)));
    }

    rows
}

fn check_rows(position: &str, checks: &ConnectorChecks, rows: &mut Vec<SummaryRow>) {
    for check in checks.iter() {
        rows.push(SummaryRow::new(
            format!("{} {}", position, check.name),
            format!(
                "{} / {} {} (U={})",
                grouped(check.demand, 0),
                grouped(check.capacity, 0),
                check.unit(),
                fixed(check.utilization(), 2)
            ),
            pass_check(check.pass),
        ));
    }
}

/// Chosen models and their check rows, top first.
pub fn connector_summary(selection: &ConnectionSelection) -> Vec<SummaryRow> {
    let mut rows = Vec::new();
    for (position, model, basis, checks) in [
        ("Top", &selection.top_model, &selection.top_basis, &selection.top_checks),
        ("Base", &selection.base_model, &selection.base_basis, &selection.base_checks),
    ] {
        rows.push(SummaryRow::new(
            format!("{} connector", position),
            model.clone().unwrap_or_else(|| "none".to_string()),
            basis.to_string(),
        ));
        check_rows(position, checks, &mut rows);
    }
    rows
}

/// Footing demand and verdict rows.
pub fn footing_summary(footing: &FootingChecks) -> Vec<SummaryRow> {
    vec![
        SummaryRow::new("Footing V_struct", format!("{} lb", grouped(footing.v_struct_lb, 0)), ""),
        SummaryRow::new("Footing V_eff", format!("{} lb", grouped(footing.v_eff_lb, 0)), ""),
        SummaryRow::new(
            "Footing bearing q / q_allow",
            format!("{} / {} psf", grouped(footing.q_actual_psf, 0), grouped(footing.q_allow_eff_psf, 0)),
            pass_check(footing.bearing_ok),
        ),
        SummaryRow::new(
            "Footing sliding H / R",
            format!("{} / {} lb", grouped(footing.h_post_lb, 0), grouped(footing.r_slide_lb, 0)),
            pass_check(footing.sliding_ok),
        ),
        SummaryRow::new(
            "Footing uplift U / R",
            format!("{} / {} lb", grouped(footing.u_post_lb, 0), grouped(footing.r_uplift_lb, 0)),
            pass_check(footing.uplift_ok),
        ),
    ]
}

/// Equations used in a calculation trail, one row each in first-use order:
/// name, symbol, code citation.
pub fn equation_references(log: &CalcLog) -> Vec<SummaryRow> {
    let mut seen = Vec::new();
    for entry in log.entries() {
        if let LogEntry::Formula { equation, .. } = entry {
            if !seen.contains(equation) {
                seen.push(*equation);
            }
        }
    }
    seen.into_iter()
        .map(|eq| SummaryRow::new(eq.name(), eq.symbol(), eq.reference().citation()))
        .collect()
}
