//! Default tuning constants based on meters-kilograms-seconds (MKS) units.

use crate::core::types::{Real, Version};

/// Maximum number of contact points between two convex shapes.
pub const MAX_MANIFOLD_POINTS: usize = 2;

/// Maximum number of vertices on a convex polygon.
pub const MAX_POLYGON_VERTICES: usize = 8;

/// AABB fattening in the dynamic tree, in meters.
pub const DEFAULT_AABB_EXTENSION: Real = 0.1;

/// Dimensionless multiplier predicting future AABB displacement.
pub const DEFAULT_AABB_MULTIPLIER: Real = 2.0;

/// Collision and constraint length tolerance, in meters.
pub const DEFAULT_LINEAR_SLOP: Real = 0.005;

/// Maximum sub-steps per contact in continuous collision.
pub const DEFAULT_MAX_SUB_STEPS: usize = 8;

/// Maximum contacts handled when solving a time-of-impact event.
pub const DEFAULT_MAX_TOI_CONTACTS: usize = 32;

/// Relative velocity below which collisions are treated as inelastic.
pub const DEFAULT_VELOCITY_THRESHOLD: Real = 1.0;

/// Maximum linear position correction per constraint solve.
pub const DEFAULT_MAX_LINEAR_CORRECTION: Real = 0.2;

/// Maximum linear translation of a body per step.
pub const DEFAULT_MAX_TRANSLATION: Real = 2.0;

/// Overlap resolution rate for the regular solver.
pub const DEFAULT_BAUMGARTE: Real = 0.2;

/// Overlap resolution rate for the time-of-impact solver.
pub const DEFAULT_TOI_BAUMGARTE: Real = 0.75;

/// Seconds a body must be still before it may sleep.
pub const DEFAULT_TIME_TO_SLEEP: Real = 0.5;

/// Linear velocity above which a body cannot sleep.
pub const DEFAULT_LINEAR_SLEEP_TOLERANCE: Real = 0.01;

/// Angular slop, in degrees. Converted as `degrees / 180 * pi`.
pub const ANGULAR_SLOP_DEGREES: Real = 2.0;

/// Maximum angular correction, in degrees.
pub const MAX_ANGULAR_CORRECTION_DEGREES: Real = 8.0;

/// Angular sleep tolerance, in degrees.
pub const ANGULAR_SLEEP_TOLERANCE_DEGREES: Real = 2.0;

/// Maximum rotation per step as a fraction of pi.
pub const MAX_ROTATION_PI_FRACTION: Real = 0.5;

/// Polygon skin radius as a multiple of the linear slop.
pub const POLYGON_RADIUS_SLOP_FACTOR: Real = 2.0;

/// Parameter schema version.
pub const CURRENT_VERSION: Version = Version::new(2, 3, 0);
