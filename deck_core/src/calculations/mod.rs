//! # Framing Line Calculations
//!
//! One framing line is screened as a chain: the beam engine produces the
//! reaction per post, which both the connector engine and the footing
//! engine consume. Every engine is a pure function of its inputs and
//! returns its own audit log.
//!
//! - [`framing`] - Line input (geometry, allowables, loads, wind, site)
//! - [`beam`] - Beam bending/shear/bearing/deflection and lateral advisories
//! - [`column`] - Post buckling check
//! - [`connectors`] - Connector demands, verification and selection
//! - [`footing`] - Footing bearing, sliding and uplift
//!
//! [`evaluate_line`] runs the whole chain.

pub mod beam;
pub mod column;
pub mod connectors;
pub mod footing;
pub mod framing;

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;

pub use beam::{evaluate, BeamResult, LateralWarnings};
pub use column::ColumnCheck;
pub use connectors::{
    compute_demands,
    first_passing,
    least_utilized,
    select_or_verify,
    BaseConnectorSpec,
    ConnectionDemands,
    ConnectionSelection,
    ConnectorCatalog,
    ConnectorCheck,
    ConnectorChecks,
    ConnectorSpec,
    SelectionBasis,
    TopConnectorSpec,
};
pub use footing::{footing_checks, footing_checks_with, FootingChecks, SiteDefaults};
pub use framing::FramingInput;

/// Everything computed for one framing line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub label: String,
    pub beam: BeamResult,
    pub demands: ConnectionDemands,
    pub connections: ConnectionSelection,
    pub footing: FootingChecks,
}

impl Evaluation {
    /// Beam, post, connectors and footing all pass
    pub fn passes(&self) -> bool {
        self.beam.passes() && self.connections.passes() && self.footing.passes()
    }
}

/// Validate and screen one framing line.
///
/// Fails on invalid input or when a named connector is not in its catalog.
pub fn evaluate_line(
    input: &FramingInput,
    catalog: &ConnectorCatalog,
    defaults: &SiteDefaults,
) -> CalcResult<Evaluation> {
    input.validate()?;

    let beam = evaluate(input);
    log::debug!(
        "{}: reaction per post {:.1} lb, beam passes: {}",
        input.label,
        beam.reaction_per_post_lb,
        beam.passes()
    );

    let demands = compute_demands(input, &beam);
    log::debug!("{}: connection demands {:?}", input.label, demands);

    let connections = select_or_verify(input, &demands, &catalog.top, &catalog.base)?;
    log::debug!(
        "{}: top {:?} ({}), base {:?} ({})",
        input.label,
        connections.top_model,
        connections.top_basis,
        connections.base_model,
        connections.base_basis
    );

    let footing = footing_checks_with(input, &beam, defaults);
    log::debug!(
        "{}: footing bearing {} sliding {} uplift {}",
        input.label,
        footing.bearing_ok,
        footing.sliding_ok,
        footing.uplift_ok
    );

    Ok(Evaluation {
        label: input.label.clone(),
        beam,
        demands,
        connections,
        footing,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::framing::fixtures::deck_line;

    #[test]
    fn test_invalid_input_is_rejected_before_any_engine() {
        let mut input = deck_line();
        input.geometry.beam_d_in = -1.0;
        let err = evaluate_line(&input, &ConnectorCatalog::default(), &SiteDefaults::default()).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_zero_bearing_area_reports_check() {
        let mut input = deck_line();
        input.geometry.post_base_bearing_area_in2 = 0.0;
        let evaluation = evaluate_line(&input, &ConnectorCatalog::default(), &SiteDefaults::default()).unwrap();
        assert!(!evaluation.beam.bearing_ok);
        assert!(evaluation.beam.bearing_stress_psi.is_finite());
        assert!(evaluation.beam.bearing_stress_psi > 1e6);
        assert!(!evaluation.passes());
    }

    #[test]
    fn test_reaction_threads_into_both_consumers() {
        let input = deck_line();
        let evaluation = evaluate_line(&input, &ConnectorCatalog::default(), &SiteDefaults::default()).unwrap();
        assert_eq!(evaluation.demands.top_download_lb, evaluation.beam.reaction_per_post_lb);
        assert_eq!(evaluation.footing.v_struct_lb, evaluation.beam.reaction_per_post_lb);
        assert_eq!(evaluation.label, "Line A");
    }
}
