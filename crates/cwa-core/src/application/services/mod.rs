//! Application services - orchestrate use cases.
//!
//! Two use cases: collect a [`crate::domain::Selection`] through the prompt
//! sequence, then apply it to disk.

pub mod scaffold_service;
pub mod selection_flow;

pub use scaffold_service::{ScaffoldOutcome, ScaffoldService};
pub use selection_flow::{FlowInputs, SelectionFlow};
