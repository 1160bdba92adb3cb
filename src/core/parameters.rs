//! Tunable parameters read by the broad-phase, narrow-phase, solver, and
//! sleep manager, plus the values derived from them.
//!
//! Setters only touch primary fields. Derived fields are stale until
//! [`ParameterSet::recompute`] runs; callers that mutate primaries must
//! recompute before the next step reads the set. Batching several writes
//! behind one recompute is the intended usage. [`ParameterOverrides`]
//! performs that batch in a single call.
//!
//! [`ParameterOverrides`]: crate::core::overrides::ParameterOverrides

use log::{trace, warn};
use serde::Serialize;

use crate::config::{
    ANGULAR_SLEEP_TOLERANCE_DEGREES, ANGULAR_SLOP_DEGREES, CURRENT_VERSION,
    DEFAULT_AABB_EXTENSION, DEFAULT_AABB_MULTIPLIER, DEFAULT_BAUMGARTE,
    DEFAULT_LINEAR_SLEEP_TOLERANCE, DEFAULT_LINEAR_SLOP, DEFAULT_MAX_LINEAR_CORRECTION,
    DEFAULT_MAX_SUB_STEPS, DEFAULT_MAX_TOI_CONTACTS, DEFAULT_MAX_TRANSLATION,
    DEFAULT_TIME_TO_SLEEP, DEFAULT_TOI_BAUMGARTE, DEFAULT_VELOCITY_THRESHOLD,
    MAX_ANGULAR_CORRECTION_DEGREES, MAX_MANIFOLD_POINTS, MAX_POLYGON_VERTICES,
    MAX_ROTATION_PI_FRACTION, POLYGON_RADIUS_SLOP_FACTOR,
};

use super::types::{Real, Version};

/// Registry of simulation tunables.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterSet {
    // Numeric limits
    min_float: Real,
    max_float: Real,
    epsilon: Real,
    pi: Real,

    // Collision
    max_manifold_points: usize,
    max_polygon_vertices: usize,
    aabb_extension: Real,
    aabb_multiplier: Real,
    linear_slop: Real,
    angular_slop: Real,
    polygon_radius: Real,
    max_sub_steps: usize,

    // Dynamics
    max_toi_contacts: usize,
    velocity_threshold: Real,
    max_linear_correction: Real,
    max_angular_correction: Real,
    max_translation: Real,
    max_translation_squared: Real,
    max_rotation: Real,
    max_rotation_squared: Real,
    baumgarte: Real,
    toi_baumgarte: Real,

    // Sleep
    time_to_sleep: Real,
    linear_sleep_tolerance: Real,
    angular_sleep_tolerance: Real,

    version: Version,
}

/// Derived values computed from a primary-field state.
#[derive(Debug, Clone, Copy)]
struct Derived {
    angular_slop: Real,
    polygon_radius: Real,
    max_angular_correction: Real,
    max_translation_squared: Real,
    max_rotation: Real,
    max_rotation_squared: Real,
    angular_sleep_tolerance: Real,
}

impl Default for ParameterSet {
    fn default() -> Self {
        let mut params = Self {
            min_float: Real::MIN_POSITIVE,
            max_float: Real::MAX,
            epsilon: Real::EPSILON,
            pi: std::f32::consts::PI,
            max_manifold_points: MAX_MANIFOLD_POINTS,
            max_polygon_vertices: MAX_POLYGON_VERTICES,
            aabb_extension: DEFAULT_AABB_EXTENSION,
            aabb_multiplier: DEFAULT_AABB_MULTIPLIER,
            linear_slop: DEFAULT_LINEAR_SLOP,
            angular_slop: 0.0,
            polygon_radius: 0.0,
            max_sub_steps: DEFAULT_MAX_SUB_STEPS,
            max_toi_contacts: DEFAULT_MAX_TOI_CONTACTS,
            velocity_threshold: DEFAULT_VELOCITY_THRESHOLD,
            max_linear_correction: DEFAULT_MAX_LINEAR_CORRECTION,
            max_angular_correction: 0.0,
            max_translation: DEFAULT_MAX_TRANSLATION,
            max_translation_squared: 0.0,
            max_rotation: 0.0,
            max_rotation_squared: 0.0,
            baumgarte: DEFAULT_BAUMGARTE,
            toi_baumgarte: DEFAULT_TOI_BAUMGARTE,
            time_to_sleep: DEFAULT_TIME_TO_SLEEP,
            linear_sleep_tolerance: DEFAULT_LINEAR_SLEEP_TOLERANCE,
            angular_sleep_tolerance: 0.0,
            version: CURRENT_VERSION,
        };
        params.recompute();
        params
    }
}

impl ParameterSet {
    /// Creates a set holding the documented defaults with derived fields
    /// already consistent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Alias of [`ParameterSet::new`].
    pub fn initialize() -> Self {
        Self::default()
    }

    /// Refreshes every derived field from the current primary fields.
    pub fn recompute(&mut self) {
        let derived = self.derive();
        self.angular_slop = derived.angular_slop;
        self.polygon_radius = derived.polygon_radius;
        self.max_angular_correction = derived.max_angular_correction;
        self.max_translation_squared = derived.max_translation_squared;
        self.max_rotation = derived.max_rotation;
        self.max_rotation_squared = derived.max_rotation_squared;
        self.angular_sleep_tolerance = derived.angular_sleep_tolerance;

        trace!(
            "recomputed derived parameters: angular_slop={} polygon_radius={} max_angular_correction={} max_translation_squared={} max_rotation={} max_rotation_squared={} angular_sleep_tolerance={}",
            self.angular_slop,
            self.polygon_radius,
            self.max_angular_correction,
            self.max_translation_squared,
            self.max_rotation,
            self.max_rotation_squared,
            self.angular_sleep_tolerance
        );
    }

    /// Returns true when every derived field matches its formula bit for bit,
    /// i.e. no primary field was written since the last recompute (or the
    /// write did not change anything a derived field depends on).
    pub fn is_consistent(&self) -> bool {
        let d = self.derive();
        let same = |a: Real, b: Real| a.to_bits() == b.to_bits();
        same(self.angular_slop, d.angular_slop)
            && same(self.polygon_radius, d.polygon_radius)
            && same(self.max_angular_correction, d.max_angular_correction)
            && same(self.max_translation_squared, d.max_translation_squared)
            && same(self.max_rotation, d.max_rotation)
            && same(self.max_rotation_squared, d.max_rotation_squared)
            && same(self.angular_sleep_tolerance, d.angular_sleep_tolerance)
    }

    fn derive(&self) -> Derived {
        let pi = self.pi;
        let max_rotation = MAX_ROTATION_PI_FRACTION * pi;
        Derived {
            angular_slop: ANGULAR_SLOP_DEGREES / 180.0 * pi,
            polygon_radius: POLYGON_RADIUS_SLOP_FACTOR * self.linear_slop,
            max_angular_correction: MAX_ANGULAR_CORRECTION_DEGREES / 180.0 * pi,
            max_translation_squared: self.max_translation * self.max_translation,
            max_rotation,
            max_rotation_squared: max_rotation * max_rotation,
            angular_sleep_tolerance: ANGULAR_SLEEP_TOLERANCE_DEGREES / 180.0 * pi,
        }
    }

    pub fn version(&self) -> Version {
        self.version
    }

    // Numeric limits

    /// Smallest positive normal value.
    pub fn min_float(&self) -> Real {
        self.min_float
    }

    /// Largest finite value.
    pub fn max_float(&self) -> Real {
        self.max_float
    }

    /// Machine epsilon.
    pub fn epsilon(&self) -> Real {
        self.epsilon
    }

    pub fn pi(&self) -> Real {
        self.pi
    }

    pub fn set_pi(&mut self, value: Real) {
        self.pi = value;
    }

    // Collision

    pub fn max_manifold_points(&self) -> usize {
        self.max_manifold_points
    }

    /// Engine limit. Consumers size contact buffers from it, so changing it at
    /// runtime is logged but not rejected.
    pub fn set_max_manifold_points(&mut self, value: usize) {
        if value != MAX_MANIFOLD_POINTS {
            warn!(
                "max_manifold_points set to {value}; engine limit is {MAX_MANIFOLD_POINTS}"
            );
        }
        self.max_manifold_points = value;
    }

    pub fn max_polygon_vertices(&self) -> usize {
        self.max_polygon_vertices
    }

    /// Engine limit. Changing it at runtime is logged but not rejected.
    pub fn set_max_polygon_vertices(&mut self, value: usize) {
        if value != MAX_POLYGON_VERTICES {
            warn!(
                "max_polygon_vertices set to {value}; engine limit is {MAX_POLYGON_VERTICES}"
            );
        }
        self.max_polygon_vertices = value;
    }

    /// Fattening applied to dynamic-tree AABBs so proxies can move slightly
    /// without a tree adjustment, in meters.
    pub fn aabb_extension(&self) -> Real {
        self.aabb_extension
    }

    pub fn set_aabb_extension(&mut self, value: Real) {
        self.aabb_extension = value;
    }

    /// Dimensionless multiplier used to predict AABB displacement.
    pub fn aabb_multiplier(&self) -> Real {
        self.aabb_multiplier
    }

    pub fn set_aabb_multiplier(&mut self, value: Real) {
        self.aabb_multiplier = value;
    }

    /// Collision and constraint length tolerance. Numerically significant,
    /// visually insignificant.
    pub fn linear_slop(&self) -> Real {
        self.linear_slop
    }

    pub fn set_linear_slop(&mut self, value: Real) {
        self.linear_slop = value;
    }

    /// Angular counterpart of the linear slop. Derived.
    pub fn angular_slop(&self) -> Real {
        self.angular_slop
    }

    /// Polygon and edge skin radius. Derived from the linear slop.
    pub fn polygon_radius(&self) -> Real {
        self.polygon_radius
    }

    pub fn max_sub_steps(&self) -> usize {
        self.max_sub_steps
    }

    pub fn set_max_sub_steps(&mut self, value: usize) {
        self.max_sub_steps = value;
    }

    // Dynamics

    pub fn max_toi_contacts(&self) -> usize {
        self.max_toi_contacts
    }

    pub fn set_max_toi_contacts(&mut self, value: usize) {
        self.max_toi_contacts = value;
    }

    /// Collisions with relative linear velocity below this are inelastic.
    pub fn velocity_threshold(&self) -> Real {
        self.velocity_threshold
    }

    pub fn set_velocity_threshold(&mut self, value: Real) {
        self.velocity_threshold = value;
    }

    pub fn max_linear_correction(&self) -> Real {
        self.max_linear_correction
    }

    pub fn set_max_linear_correction(&mut self, value: Real) {
        self.max_linear_correction = value;
    }

    pub fn max_angular_correction(&self) -> Real {
        self.max_angular_correction
    }

    pub fn max_translation(&self) -> Real {
        self.max_translation
    }

    pub fn set_max_translation(&mut self, value: Real) {
        self.max_translation = value;
    }

    pub fn max_translation_squared(&self) -> Real {
        self.max_translation_squared
    }

    pub fn max_rotation(&self) -> Real {
        self.max_rotation
    }

    pub fn max_rotation_squared(&self) -> Real {
        self.max_rotation_squared
    }

    /// How fast overlap is resolved. Values close to 1 overshoot.
    pub fn baumgarte(&self) -> Real {
        self.baumgarte
    }

    pub fn set_baumgarte(&mut self, value: Real) {
        self.baumgarte = value;
    }

    pub fn toi_baumgarte(&self) -> Real {
        self.toi_baumgarte
    }

    pub fn set_toi_baumgarte(&mut self, value: Real) {
        self.toi_baumgarte = value;
    }

    // Sleep

    /// Seconds a body must be still before it goes to sleep.
    pub fn time_to_sleep(&self) -> Real {
        self.time_to_sleep
    }

    pub fn set_time_to_sleep(&mut self, value: Real) {
        self.time_to_sleep = value;
    }

    pub fn linear_sleep_tolerance(&self) -> Real {
        self.linear_sleep_tolerance
    }

    pub fn set_linear_sleep_tolerance(&mut self, value: Real) {
        self.linear_sleep_tolerance = value;
    }

    pub fn angular_sleep_tolerance(&self) -> Real {
        self.angular_sleep_tolerance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn defaults_are_consistent() {
        let params = ParameterSet::new();
        assert!(params.is_consistent());
        assert_eq!(params.angular_slop(), 2.0 / 180.0 * PI);
        assert_eq!(params.polygon_radius(), 2.0 * 0.005_f32);
        assert_eq!(params.max_translation_squared(), 4.0);
        assert_eq!(params.max_rotation(), 0.5 * PI);
    }

    #[test]
    fn primary_write_leaves_derived_stale_until_recompute() {
        let mut params = ParameterSet::new();
        let before = params.polygon_radius();

        params.set_linear_slop(0.02);
        assert_eq!(params.polygon_radius(), before);
        assert!(!params.is_consistent());

        params.recompute();
        assert_eq!(params.polygon_radius(), 0.04);
        assert!(params.is_consistent());
    }

    #[test]
    fn writes_to_unrelated_primaries_keep_consistency() {
        let mut params = ParameterSet::new();
        params.set_baumgarte(0.4);
        params.set_time_to_sleep(1.0);
        assert!(params.is_consistent());
    }

    #[test]
    fn pi_drives_angular_derivations() {
        let mut params = ParameterSet::new();
        params.set_pi(3.0);
        params.recompute();
        assert_eq!(params.max_rotation(), 1.5);
        assert_eq!(params.max_rotation_squared(), 2.25);
        assert_eq!(params.max_angular_correction(), 8.0 / 180.0 * 3.0);
    }

    #[test]
    fn fixed_limits_accept_writes() {
        let mut params = ParameterSet::new();
        params.set_max_polygon_vertices(12);
        params.set_max_manifold_points(4);
        assert_eq!(params.max_polygon_vertices(), 12);
        assert_eq!(params.max_manifold_points(), 4);
    }
}
