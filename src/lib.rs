//! Physics Tuning – parameter registry for rigid-body simulation.
//!
//! Holds the numeric constants that govern collision tolerance, continuous
//! collision sub-stepping, constraint correction, and sleep heuristics, and
//! keeps the values derived from them consistent. A [`ParameterSet`] is a
//! plain value owned by the world that uses it; [`ParameterRegistry`] shares
//! one across worker threads by publishing immutable snapshots.

pub mod config;
pub mod core;
pub mod registry;
pub mod utils;

pub use config::CURRENT_VERSION;
pub use crate::core::{
    overrides::ParameterOverrides,
    parameters::ParameterSet,
    types::{Real, Version},
};
pub use registry::ParameterRegistry;
