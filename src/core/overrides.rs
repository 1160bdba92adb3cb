use log::debug;
use serde::{Deserialize, Serialize};

use super::{parameters::ParameterSet, types::Real};

/// Partial set of primary-field values applied as one transaction.
///
/// Every field is optional; absent fields keep whatever the target set holds.
/// Build one with a struct literal and `..Default::default()`, or deserialize it.
/// [`ParameterOverrides::apply`] writes the present values and recomputes
/// once, so the target is never observed with stale derived fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParameterOverrides {
    pub pi: Option<Real>,
    pub max_manifold_points: Option<usize>,
    pub max_polygon_vertices: Option<usize>,
    pub aabb_extension: Option<Real>,
    pub aabb_multiplier: Option<Real>,
    pub linear_slop: Option<Real>,
    pub max_sub_steps: Option<usize>,
    pub max_toi_contacts: Option<usize>,
    pub velocity_threshold: Option<Real>,
    pub max_linear_correction: Option<Real>,
    pub max_translation: Option<Real>,
    pub baumgarte: Option<Real>,
    pub toi_baumgarte: Option<Real>,
    pub time_to_sleep: Option<Real>,
    pub linear_sleep_tolerance: Option<Real>,
}

impl ParameterOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Writes every present value into `params`, then recomputes derived fields.
    pub fn apply(&self, params: &mut ParameterSet) {
        if let Some(v) = self.pi {
            params.set_pi(v);
        }
        if let Some(v) = self.max_manifold_points {
            params.set_max_manifold_points(v);
        }
        if let Some(v) = self.max_polygon_vertices {
            params.set_max_polygon_vertices(v);
        }
        if let Some(v) = self.aabb_extension {
            params.set_aabb_extension(v);
        }
        if let Some(v) = self.aabb_multiplier {
            params.set_aabb_multiplier(v);
        }
        if let Some(v) = self.linear_slop {
            params.set_linear_slop(v);
        }
        if let Some(v) = self.max_sub_steps {
            params.set_max_sub_steps(v);
        }
        if let Some(v) = self.max_toi_contacts {
            params.set_max_toi_contacts(v);
        }
        if let Some(v) = self.velocity_threshold {
            params.set_velocity_threshold(v);
        }
        if let Some(v) = self.max_linear_correction {
            params.set_max_linear_correction(v);
        }
        if let Some(v) = self.max_translation {
            params.set_max_translation(v);
        }
        if let Some(v) = self.baumgarte {
            params.set_baumgarte(v);
        }
        if let Some(v) = self.toi_baumgarte {
            params.set_toi_baumgarte(v);
        }
        if let Some(v) = self.time_to_sleep {
            params.set_time_to_sleep(v);
        }
        if let Some(v) = self.linear_sleep_tolerance {
            params.set_linear_sleep_tolerance(v);
        }

        params.recompute();
        debug!("applied parameter overrides: {:?}", self);
    }
}

impl ParameterSet {
    /// Defaults with `overrides` applied.
    pub fn with_overrides(overrides: &ParameterOverrides) -> Self {
        let mut params = Self::new();
        overrides.apply(&mut params);
        params
    }
}
