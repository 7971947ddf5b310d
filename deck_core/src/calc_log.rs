//! # Calculation Audit Log
//!
//! Every engine narrates its work as an ordered [`CalcLog`]. Entries are
//! structured data (which formula, which inputs, what result, which verdict)
//! and [`LogEntry::render`] turns each one into the line an engineer reviews:
//!
//! ```text
//! q = DL + SL + LL = 10.0 + 0.0 + 40.0 = 50.000 psf
//! fb = M/S = 45000.0/49.911 = 901.6 psi  (Fb'=1000)
//! Bending:   PASS
//! Lateral 'needs_base_anchorage': ATTENTION
//! ```
//!
//! The rendered text is part of the external contract, so tests should
//! compare against it; the structured form is for programmatic consumers
//! (JSON output, report tables).

use serde::{Deserialize, Serialize};

use crate::equations::Equation;
use crate::numeric::{fixed, grouped, ok_attention, pass_check};

/// A named value substituted into a formula.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operand {
    pub symbol: String,
    pub value: f64,
}

impl Operand {
    pub fn new(symbol: impl Into<String>, value: f64) -> Self {
        Operand {
            symbol: symbol.into(),
            value,
        }
    }
}

/// One line of the audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum LogEntry {
    /// `symbol = expression [= substitution] = result unit[note]`
    Formula {
        equation: Equation,
        inputs: Vec<Operand>,
        /// Numbers substituted into the expression, already formatted
        substitution: Option<String>,
        result: f64,
        precision: usize,
        unit: String,
        /// Trailing annotation such as the allowable stress
        note: Option<String>,
    },

    /// Beam verdict, label padded to a fixed column: `Bending:   PASS`
    Verdict { check: String, pass: bool },

    /// `check: demand vs capacity -> PASS`
    Comparison {
        check: String,
        demand: String,
        capacity: String,
        pass: bool,
    },

    /// Post section summary for the buckling check
    ColumnSection {
        area_in2: f64,
        radius_in: f64,
        effective_length_in: f64,
        slenderness: f64,
    },

    /// Post buckling result
    ColumnCapacity {
        critical_load_lb: f64,
        allowable_lb: f64,
        pass: bool,
    },

    /// Footing size and dead weights
    FootingGeometry {
        area_ft2: f64,
        volume_ft3: f64,
        footing_weight_lb: f64,
        overburden_weight_lb: f64,
        include_overburden: bool,
    },

    /// Which connector model was adopted and why
    Selection {
        position: String,
        model: Option<String>,
        basis: String,
    },

    /// Lateral restraint advisory: `Lateral 'flag': OK|ATTENTION`
    Advisory { flag: String, attention: bool },

    /// A check that was not run because its inputs are incomplete
    Skipped { check: String, reason: String },

    /// Free-form line
    Note { text: String },
}

/// Width of the label column in beam verdict lines ("Deflection:" fits exactly).
const VERDICT_LABEL_WIDTH: usize = 11;

impl LogEntry {
    /// Render the entry as a single audit line.
    pub fn render(&self) -> String {
        match self {
            LogEntry::Formula {
                equation,
                substitution,
                result,
                precision,
                unit,
                note,
                ..
            } => {
                let mut line = format!("{} = {}", equation.symbol(), equation.expression());
                if let Some(sub) = substitution {
                    line.push_str(" = ");
                    line.push_str(sub);
                }
                line.push_str(" = ");
                line.push_str(&fixed(*result, *precision));
                if !unit.is_empty() {
                    line.push(' ');
                    line.push_str(unit);
                }
                if let Some(note) = note {
                    line.push_str(note);
                }
                line
            }
            LogEntry::Verdict { check, pass } => {
                format!(
                    "{:<width$}{}",
                    format!("{}:", check),
                    pass_check(*pass),
                    width = VERDICT_LABEL_WIDTH
                )
            }
            LogEntry::Comparison {
                check,
                demand,
                capacity,
                pass,
            } => format!("{}: {} vs {} -> {}", check, demand, capacity, pass_check(*pass)),
            LogEntry::ColumnSection {
                area_in2,
                radius_in,
                effective_length_in,
                slenderness,
            } => format!(
                "Column: A={} in², r={} in, Le={} in, (Le/r)={}",
                fixed(*area_in2, 2),
                fixed(*radius_in, 3),
                fixed(*effective_length_in, 1),
                fixed(*slenderness, 1)
            ),
            LogEntry::ColumnCapacity {
                critical_load_lb,
                allowable_lb,
                pass,
            } => format!(
                "Pcrit≈{} lb; Allowable axial≈min(Fc'×A,0.3Pcrit)={} lb -> {}",
                grouped(*critical_load_lb, 0),
                grouped(*allowable_lb, 0),
                pass_check(*pass)
            ),
            LogEntry::FootingGeometry {
                area_ft2,
                volume_ft3,
                footing_weight_lb,
                overburden_weight_lb,
                include_overburden,
            } => format!(
                "Footing A={} ft², Vconc={} ft³, W_footing={} lb, W_overburden={} lb (include={})",
                fixed(*area_ft2, 3),
                fixed(*volume_ft3, 3),
                fixed(*footing_weight_lb, 1),
                fixed(*overburden_weight_lb, 1),
                if *include_overburden { "True" } else { "False" }
            ),
            LogEntry::Selection { position, model, basis } => match model {
                Some(model) => format!("{} connector: {} ({})", position, model, basis),
                None => format!("{} connector: none ({})", position, basis),
            },
            LogEntry::Advisory { flag, attention } => {
                format!("Lateral '{}': {}", flag, ok_attention(*attention))
            }
            LogEntry::Skipped { check, reason } => format!("{} check skipped ({}).", check, reason),
            LogEntry::Note { text } => text.clone(),
        }
    }
}

/// Ordered audit trail produced by one engine run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalcLog {
    entries: Vec<LogEntry>,
}

impl CalcLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry
    pub fn push(&mut self, entry: LogEntry) {
        self.entries.push(entry);
    }

    /// Record a formula step.
    pub fn formula(
        &mut self,
        equation: Equation,
        inputs: Vec<Operand>,
        substitution: Option<String>,
        result: f64,
        precision: usize,
        unit: &str,
    ) {
        self.push(LogEntry::Formula {
            equation,
            inputs,
            substitution,
            result,
            precision,
            unit: unit.to_string(),
            note: None,
        });
    }

    /// Record a formula step with a trailing annotation.
    #[allow(clippy::too_many_arguments)]
    pub fn formula_with_note(
        &mut self,
        equation: Equation,
        inputs: Vec<Operand>,
        substitution: Option<String>,
        result: f64,
        precision: usize,
        unit: &str,
        note: String,
    ) {
        self.push(LogEntry::Formula {
            equation,
            inputs,
            substitution,
            result,
            precision,
            unit: unit.to_string(),
            note: Some(note),
        });
    }

    /// Record a free-form line
    pub fn note(&mut self, text: impl Into<String>) {
        self.push(LogEntry::Note { text: text.into() });
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rendered lines in order
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(LogEntry::render).collect()
    }

    /// First formula entry for `equation`, if the engine recorded one
    pub fn find_formula(&self, equation: Equation) -> Option<&LogEntry> {
        self.entries
            .iter()
            .find(|e| matches!(e, LogEntry::Formula { equation: eq, .. } if *eq == equation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formula_render() {
        let entry = LogEntry::Formula {
            equation: Equation::TotalAreaLoad,
            inputs: vec![
                Operand::new("DL", 10.0),
                Operand::new("SL", 0.0),
                Operand::new("LL", 40.0),
            ],
            substitution: Some("10.0 + 0.0 + 40.0".to_string()),
            result: 50.0,
            precision: 3,
            unit: "psf".to_string(),
            note: None,
        };
        assert_eq!(entry.render(), "q = DL + SL + LL = 10.0 + 0.0 + 40.0 = 50.000 psf");
    }

    #[test]
    fn test_formula_without_substitution() {
        let entry = LogEntry::Formula {
            equation: Equation::UniformLoadMaxDeflection,
            inputs: vec![],
            substitution: None,
            result: 0.18275,
            precision: 3,
            unit: "in".to_string(),
            note: Some("  (limit L/240 = 0.500 in)".to_string()),
        };
        assert_eq!(
            entry.render(),
            "Δ = 5 w L⁴/(384 E I) = 0.183 in  (limit L/240 = 0.500 in)"
        );
    }

    #[test]
    fn test_verdict_padding() {
        let lines: Vec<String> = [("Bending", true), ("Shear", true), ("Bearing", false), ("Deflection", true)]
            .iter()
            .map(|(c, p)| {
                LogEntry::Verdict {
                    check: c.to_string(),
                    pass: *p,
                }
                .render()
            })
            .collect();
        assert_eq!(lines, vec!["Bending:   PASS", "Shear:     PASS", "Bearing:   CHECK", "Deflection:PASS"]);
    }

    #[test]
    fn test_column_capacity_groups_thousands() {
        let entry = LogEntry::ColumnCapacity {
            critical_load_lb: 21_427.34,
            allowable_lb: 6_428.2,
            pass: true,
        };
        assert_eq!(
            entry.render(),
            "Pcrit≈21,427 lb; Allowable axial≈min(Fc'×A,0.3Pcrit)=6,428 lb -> PASS"
        );
    }

    #[test]
    fn test_advisory_and_skip() {
        let advisory = LogEntry::Advisory {
            flag: "needs_base_anchorage".to_string(),
            attention: false,
        };
        assert_eq!(advisory.render(), "Lateral 'needs_base_anchorage': OK");

        let skipped = LogEntry::Skipped {
            check: "Column".to_string(),
            reason: "provide Fc_axis_prime & post section".to_string(),
        };
        assert_eq!(
            skipped.render(),
            "Column check skipped (provide Fc_axis_prime & post section)."
        );
    }

    #[test]
    fn test_log_serializes_as_tagged_entries() {
        let mut log = CalcLog::new();
        log.note("H_post = 0 (no lateral line load provided)");
        let json = serde_json::to_string(&log).unwrap();
        assert!(json.starts_with('['));
        assert!(json.contains("\"kind\":\"Note\""));
        let roundtrip: CalcLog = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, log);
    }
}
