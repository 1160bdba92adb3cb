//! Parameter data: the tunable set, its transactional overrides, and the schema version.

pub mod overrides;
pub mod parameters;
pub mod types;

pub use overrides::ParameterOverrides;
pub use parameters::ParameterSet;
pub use types::{Real, Version};
