//! # Post Connector Demand and Selection
//!
//! Derives the per-post demands on the beam-to-post (top) and post-to-footing
//! (base) connectors, then either verifies a named catalog model or picks one.
//!
//! ## Demands
//!
//! - Download = beam reaction per post
//! - Uplift = roof uplift psf × tributary area (0 unless both given)
//! - Lateral = w_lat × span / 2, w_lat from the explicit line load, else wind
//!   wall pressure × exposed height, else 0 (first available wins)
//! - Top moment = lateral × post-to-beam arm (0 without an arm)
//! - Base shear = top lateral, base uplift = top uplift (single load path)
//!
//! ## Selection
//!
//! A named model is looked up by exact name and verified; a miss is an error.
//! Without a name the catalog is searched in two phases:
//!
//! 1. [`first_passing`]: first entry, in catalog order, whose checks all pass
//! 2. [`least_utilized`]: entry with the smallest worst-case demand/capacity
//!    ratio, so the report shows the closest candidate even when none is
//!    adequate
//!
//! ```rust
//! use deck_core::calculations::connectors::{first_passing, ConnectionDemands, TopConnectorSpec};
//!
//! let catalog = vec![
//!     TopConnectorSpec::new("PC44", 1_000.0, 500.0, 300.0, 0.0),
//!     TopConnectorSpec::new("PCZ46", 2_500.0, 900.0, 600.0, 0.0),
//! ];
//! let demands = ConnectionDemands {
//!     top_download_lb: 1_500.0,
//!     ..Default::default()
//! };
//! assert_eq!(first_passing(&catalog, &demands).map(|c| c.model.as_str()), Some("PCZ46"));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::calc_log::{CalcLog, LogEntry, Operand};
use crate::calculations::beam::BeamResult;
use crate::calculations::framing::FramingInput;
use crate::equations::Equation;
use crate::errors::{CalcError, CalcResult};
use crate::numeric::{fixed, grouped, plain};

// ============================================================================
// Catalog
// ============================================================================

/// Beam-to-post connector capacities (lb, lb·in).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopConnectorSpec {
    pub model: String,
    pub allowable_download_lb: f64,
    pub allowable_uplift_lb: f64,
    pub allowable_lateral_lb: f64,
    /// 0 when the manufacturer publishes no moment value
    #[serde(default)]
    pub allowable_moment_lb_in: f64,
}

impl TopConnectorSpec {
    pub fn new(model: impl Into<String>, download: f64, uplift: f64, lateral: f64, moment: f64) -> Self {
        TopConnectorSpec {
            model: model.into(),
            allowable_download_lb: download,
            allowable_uplift_lb: uplift,
            allowable_lateral_lb: lateral,
            allowable_moment_lb_in: moment,
        }
    }
}

/// Post-to-footing connector capacities (lb).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseConnectorSpec {
    pub model: String,
    pub allowable_shear_lb: f64,
    pub allowable_uplift_lb: f64,
}

impl BaseConnectorSpec {
    pub fn new(model: impl Into<String>, shear: f64, uplift: f64) -> Self {
        BaseConnectorSpec {
            model: model.into(),
            allowable_shear_lb: shear,
            allowable_uplift_lb: uplift,
        }
    }
}

/// Top and base catalogs, each in preference order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConnectorCatalog {
    #[serde(default)]
    pub top: Vec<TopConnectorSpec>,
    #[serde(default)]
    pub base: Vec<BaseConnectorSpec>,
}

// ============================================================================
// Demands
// ============================================================================

/// Per-post connector demands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ConnectionDemands {
    pub top_download_lb: f64,
    pub top_uplift_lb: f64,
    pub top_lateral_lb: f64,
    pub top_moment_lb_in: f64,
    pub base_shear_lb: f64,
    pub base_uplift_lb: f64,
}

/// Derive connector demands from the beam reaction and wind inputs.
pub fn compute_demands(input: &FramingInput, beam: &BeamResult) -> ConnectionDemands {
    let lateral = input.post_lateral_lb();
    let uplift = input.post_uplift_lb();
    let moment = input.wind.post_to_beam_arm_in.map(|arm| lateral * arm).unwrap_or(0.0);

    ConnectionDemands {
        top_download_lb: beam.reaction_per_post_lb,
        top_uplift_lb: uplift,
        top_lateral_lb: lateral,
        top_moment_lb_in: moment,
        base_shear_lb: lateral,
        base_uplift_lb: uplift,
    }
}

fn log_demands(input: &FramingInput, demands: &ConnectionDemands, log: &mut CalcLog) {
    log.note(format!(
        "download = reaction per post = {} lb",
        fixed(demands.top_download_lb, 1)
    ));
    input.log_post_lateral(log);
    input.log_post_uplift(log);
    match input.wind.post_to_beam_arm_in {
        Some(arm) => log.formula(
            Equation::TopConnectorMoment,
            vec![Operand::new("H_post", demands.top_lateral_lb), Operand::new("arm", arm)],
            Some(format!("{} × {}", fixed(demands.top_lateral_lb, 1), plain(arm))),
            demands.top_moment_lb_in,
            1,
            "lb·in",
        ),
        None => log.note("M_top = 0 (no post_to_beam_arm_in provided)"),
    }
}

// ============================================================================
// Checks
// ============================================================================

/// One demand-versus-capacity check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectorCheck {
    pub name: String,
    pub demand: f64,
    pub capacity: f64,
    pub pass: bool,
}

impl ConnectorCheck {
    fn new(name: &str, demand: f64, capacity: f64) -> Self {
        ConnectorCheck {
            name: name.to_string(),
            demand,
            capacity,
            pass: demand <= capacity,
        }
    }

    /// A zero moment capacity means "not rated": it passes only a zero demand.
    fn moment(demand: f64, capacity: f64) -> Self {
        ConnectorCheck {
            name: "moment".to_string(),
            demand,
            capacity,
            pass: if capacity != 0.0 { demand <= capacity } else { demand == 0.0 },
        }
    }

    pub fn unit(&self) -> &'static str {
        if self.name == "moment" {
            "lb·in"
        } else {
            "lb"
        }
    }

    /// demand / capacity, 0 when the capacity is 0
    pub fn utilization(&self) -> f64 {
        if self.capacity == 0.0 {
            0.0
        } else {
            self.demand / self.capacity
        }
    }

    fn log_entry(&self) -> LogEntry {
        LogEntry::Comparison {
            check: self.name.clone(),
            demand: format!("demand={} {}", grouped(self.demand, 0), self.unit()),
            capacity: format!("capacity={} {}", grouped(self.capacity, 0), self.unit()),
            pass: self.pass,
        }
    }
}

/// Check set for one connector, in fixed order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConnectorChecks(Vec<ConnectorCheck>);

impl ConnectorChecks {
    pub fn get(&self, name: &str) -> Option<&ConnectorCheck> {
        self.0.iter().find(|c| c.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConnectorCheck> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when every check passes (vacuously true when empty)
    pub fn all_pass(&self) -> bool {
        self.0.iter().all(|c| c.pass)
    }
}

/// Demand/capacity ratio for selection. A zero capacity carrying demand is
/// unbounded.
fn ratio(demand: f64, capacity: f64) -> f64 {
    if capacity == 0.0 {
        if demand == 0.0 {
            0.0
        } else {
            f64::INFINITY
        }
    } else {
        demand / capacity
    }
}

/// A catalog entry that can be checked against connection demands.
pub trait ConnectorSpec {
    fn model(&self) -> &str;

    /// Checks for this connector in reporting order
    fn checks(&self, demands: &ConnectionDemands) -> ConnectorChecks;

    /// Worst-case demand/capacity ratio; `f64::INFINITY` when unbounded
    fn utilization(&self, demands: &ConnectionDemands) -> f64;
}

impl ConnectorSpec for TopConnectorSpec {
    fn model(&self) -> &str {
        &self.model
    }

    fn checks(&self, d: &ConnectionDemands) -> ConnectorChecks {
        ConnectorChecks(vec![
            ConnectorCheck::new("download", d.top_download_lb, self.allowable_download_lb),
            ConnectorCheck::new("uplift", d.top_uplift_lb, self.allowable_uplift_lb),
            ConnectorCheck::new("lateral", d.top_lateral_lb, self.allowable_lateral_lb),
            ConnectorCheck::moment(d.top_moment_lb_in, self.allowable_moment_lb_in),
        ])
    }

    fn utilization(&self, d: &ConnectionDemands) -> f64 {
        let mut worst = ratio(d.top_download_lb, self.allowable_download_lb)
            .max(ratio(d.top_uplift_lb, self.allowable_uplift_lb))
            .max(ratio(d.top_lateral_lb, self.allowable_lateral_lb));
        if self.allowable_moment_lb_in != 0.0 && d.top_moment_lb_in != 0.0 {
            worst = worst.max(ratio(d.top_moment_lb_in, self.allowable_moment_lb_in));
        }
        worst
    }
}

impl ConnectorSpec for BaseConnectorSpec {
    fn model(&self) -> &str {
        &self.model
    }

    fn checks(&self, d: &ConnectionDemands) -> ConnectorChecks {
        ConnectorChecks(vec![
            ConnectorCheck::new("shear", d.base_shear_lb, self.allowable_shear_lb),
            ConnectorCheck::new("uplift", d.base_uplift_lb, self.allowable_uplift_lb),
        ])
    }

    fn utilization(&self, d: &ConnectionDemands) -> f64 {
        ratio(d.base_shear_lb, self.allowable_shear_lb).max(ratio(d.base_uplift_lb, self.allowable_uplift_lb))
    }
}

// ============================================================================
// Selection
// ============================================================================

/// Phase 1: first catalog entry whose checks all pass.
pub fn first_passing<'a, C: ConnectorSpec>(catalog: &'a [C], demands: &ConnectionDemands) -> Option<&'a C> {
    catalog.iter().find(|c| c.checks(demands).all_pass())
}

/// Phase 2: entry with the smallest finite worst-case utilization.
///
/// Ties keep the earliest entry. Returns `None` when the catalog is empty or
/// every entry is unbounded.
pub fn least_utilized<'a, C: ConnectorSpec>(catalog: &'a [C], demands: &ConnectionDemands) -> Option<(&'a C, f64)> {
    catalog
        .iter()
        .map(|c| (c, c.utilization(demands)))
        .filter(|(_, u)| u.is_finite())
        .min_by(|a, b| a.1.total_cmp(&b.1))
}

/// Which end of the post a connector sits at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConnectorPosition {
    Top,
    Base,
}

impl fmt::Display for ConnectorPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectorPosition::Top => write!(f, "Top"),
            ConnectorPosition::Base => write!(f, "Base"),
        }
    }
}

/// How a connector model was arrived at.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "basis")]
pub enum SelectionBasis {
    /// Named by the designer and verified
    Named,
    /// First catalog entry with every check passing
    FirstFit,
    /// Nothing passes; closest candidate by worst-case utilization
    LeastUtilized { utilization: f64 },
    /// Empty catalog, or every entry unbounded
    NoCandidate,
}

impl fmt::Display for SelectionBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionBasis::Named => write!(f, "specified"),
            SelectionBasis::FirstFit => write!(f, "first passing in catalog"),
            SelectionBasis::LeastUtilized { utilization } => {
                write!(f, "none pass; least utilized, U={}", fixed(*utilization, 2))
            }
            SelectionBasis::NoCandidate => write!(f, "no candidate in catalog"),
        }
    }
}

/// Result of verifying or selecting both connectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionSelection {
    pub top_model: Option<String>,
    pub base_model: Option<String>,
    pub top_checks: ConnectorChecks,
    pub base_checks: ConnectorChecks,
    pub top_basis: SelectionBasis,
    pub base_basis: SelectionBasis,
    pub calc_log: CalcLog,
}

impl ConnectionSelection {
    /// Both positions have a model and every check passes
    pub fn passes(&self) -> bool {
        self.top_model.is_some() && self.base_model.is_some() && self.top_checks.all_pass() && self.base_checks.all_pass()
    }
}

struct Chosen {
    model: Option<String>,
    checks: ConnectorChecks,
    basis: SelectionBasis,
}

fn choose<C: ConnectorSpec>(
    position: ConnectorPosition,
    named: Option<&str>,
    catalog: &[C],
    demands: &ConnectionDemands,
) -> CalcResult<Chosen> {
    if let Some(name) = named {
        let spec = catalog
            .iter()
            .find(|c| c.model() == name)
            .ok_or_else(|| CalcError::connector_not_found(position.to_string(), name))?;
        return Ok(Chosen {
            model: Some(spec.model().to_string()),
            checks: spec.checks(demands),
            basis: SelectionBasis::Named,
        });
    }

    if let Some(spec) = first_passing(catalog, demands) {
        return Ok(Chosen {
            model: Some(spec.model().to_string()),
            checks: spec.checks(demands),
            basis: SelectionBasis::FirstFit,
        });
    }

    match least_utilized(catalog, demands) {
        Some((spec, utilization)) => {
            log::warn!(
                "{} connector: no catalog entry passes; using least utilized {} (U={:.2})",
                position,
                spec.model(),
                utilization
            );
            Ok(Chosen {
                model: Some(spec.model().to_string()),
                checks: spec.checks(demands),
                basis: SelectionBasis::LeastUtilized { utilization },
            })
        }
        None => {
            if !catalog.is_empty() {
                log::warn!("{} connector: every catalog entry is unbounded for these demands", position);
            }
            Ok(Chosen {
                model: None,
                checks: ConnectorChecks::default(),
                basis: SelectionBasis::NoCandidate,
            })
        }
    }
}

fn log_choice(position: ConnectorPosition, chosen: &Chosen, log: &mut CalcLog) {
    log.push(LogEntry::Selection {
        position: position.to_string(),
        model: chosen.model.clone(),
        basis: chosen.basis.to_string(),
    });
    for check in chosen.checks.iter() {
        log.push(check.log_entry());
    }
}

/// Verify the named connectors or select them from the catalogs.
///
/// Top and base are handled independently. Returns
/// [`CalcError::ConnectorNotFound`] when a named model is not in its catalog.
pub fn select_or_verify(
    input: &FramingInput,
    demands: &ConnectionDemands,
    top_catalog: &[TopConnectorSpec],
    base_catalog: &[BaseConnectorSpec],
) -> CalcResult<ConnectionSelection> {
    let top = choose(
        ConnectorPosition::Top,
        input.connectors.top_model.as_deref(),
        top_catalog,
        demands,
    )?;
    let base = choose(
        ConnectorPosition::Base,
        input.connectors.base_model.as_deref(),
        base_catalog,
        demands,
    )?;

    let mut log = CalcLog::new();
    log_demands(input, demands, &mut log);
    log_choice(ConnectorPosition::Top, &top, &mut log);
    log_choice(ConnectorPosition::Base, &base, &mut log);

    Ok(ConnectionSelection {
        top_model: top.model,
        base_model: base.model,
        top_checks: top.checks,
        base_checks: base.checks,
        top_basis: top.basis,
        base_basis: base.basis,
        calc_log: log,
    })
}
