//! # Structural Engineering Equations
//!
//! Every closed-form formula used by the screening engines lives here, so the
//! engines read as a sequence of named steps and each formula can be checked
//! against its reference in isolation.
//!
//! ## Modules
//!
//! - [`section`] - Rectangular section properties (A, S, I, r)
//! - [`beam`] - Simply-supported uniform-load beam formulas
//! - [`column`] - Slenderness and Euler buckling for posts
//! - [`footing`] - Footing weights and resistances
//! - [`registry`] - Equation identity and metadata for the audit log
//!
//! ## Sign Conventions
//!
//! - **Loads**: Positive downward (gravity direction)
//! - **Moment**: Positive causes tension on bottom fiber (sagging)
//! - **Deflection**: Positive downward
//! - **Reactions**: Positive upward (resisting gravity)
//! - **Uplift**: Positive upward at the post
//!
//! ## References
//!
//! - NDS 2018: National Design Specification for Wood Construction
//! - Roark's Formulas for Stress and Strain, 8th Edition

pub mod beam;
pub mod column;
pub mod footing;
pub mod registry;
pub mod section;

pub use beam::{
    bending_stress,
    rectangular_shear_stress,
    uniform_load_max_deflection,
    uniform_load_max_moment,
    uniform_load_max_shear,
    uniform_load_reactions,
};

pub use column::{euler_critical_load, simplified_allowable_axial, slenderness_ratio, EULER_KNOCKDOWN};

pub use footing::{block_weight, overburden_weight, sliding_resistance, uplift_resistance};

pub use registry::{CodeReference, Equation};

pub use section::{
    radius_of_gyration,
    rectangular_area,
    rectangular_moment_of_inertia,
    rectangular_section_modulus,
};
