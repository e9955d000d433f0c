//! TSP-as-ILP model builders.
//!
//! - [`assignment_model`] — degree constraints only; admits sub-tours
//! - [`cut_set_model`] — assignment + every cut-set inequality (DFJ, cut form)
//! - [`subtour_elimination_model`] — assignment + every packing inequality (DFJ, packing form)
//! - [`mtz_model`] — assignment + Miller–Tucker–Zemlin ordering variables

mod arcs;
mod assignment;
mod mtz;
mod subsets;

pub use arcs::{ArcVars, TspModel};
pub use assignment::assignment_model;
pub use mtz::mtz_model;
pub use subsets::{cut_set_model, subtour_elimination_model};
