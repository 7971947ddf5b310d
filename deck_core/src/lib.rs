//! # deck_core - Deck Framing Line Screening Engine
//!
//! `deck_core` screens a deck-support framing line: a beam on posts, bearing
//! on connectors, bearing on footings. It computes demands, compares them to
//! allowable capacities and returns PASS/CHECK verdicts together with a
//! narrated calculation trail an engineer can review line by line.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions from input snapshot to result
//! - **JSON-First**: All inputs and results implement Serialize/Deserialize
//! - **Traceable**: Every engine returns a structured [`calc_log::CalcLog`]
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use deck_core::calculations::{evaluate_line, ConnectorCatalog, SiteDefaults, TopConnectorSpec};
//! use deck_core::calculations::framing::{AreaLoads, FramingInput, Geometry, MaterialAllowables};
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
//!     loads: AreaLoads { dead_psf: 10.0, snow_psf: 0.0, live_psf: 40.0, deflection_limit_ratio: 240.0 },
//!     lateral: Default::default(),
//!     connectors: Default::default(),
//!     wind: Default::default(),
//!     site: Default::default(),
//! };
//!
//! let catalog = ConnectorCatalog {
//!     top: vec![TopConnectorSpec::new("BC4", 2_000.0, 500.0, 300.0, 0.0)],
//!     base: vec![],
//! };
//!
//! let evaluation = evaluate_line(&input, &catalog, &SiteDefaults::default()).unwrap();
//! assert_eq!(evaluation.connections.top_model.as_deref(), Some("BC4"));
//! for line in evaluation.beam.calc_log.lines() {
//!     println!("{}", line);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Beam, post, connector and footing engines
//! - [`equations`] - Pure formulas and the equation registry
//! - [`calc_log`] - Structured audit trail
//! - [`report`] - Summary table rows
//! - [`project`] - Project container (lines, catalog, settings)
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types
//! - [`file_io`] - File operations with atomic saves and locking

pub mod calc_log;
pub mod calculations;
pub mod equations;
pub mod errors;
#[cfg(not(target_arch = "wasm32"))]
pub mod file_io;
pub mod numeric;
pub mod project;
pub mod report;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calc_log::{CalcLog, LogEntry};
pub use calculations::{evaluate_line, Evaluation, FramingInput};
pub use errors::{CalcError, CalcResult};
#[cfg(not(target_arch = "wasm32"))]
pub use file_io::{load_project, save_project, save_report, FileLock};
pub use project::{Project, ProjectMetadata, ProjectSettings};
