/// Radius used when either route endpoint is still unset.
pub const DEFAULT_SEARCH_RADIUS_KM: f64 = 50.0;

/// Rough surface length of one degree of arc.
pub const KM_PER_DEGREE: f64 = 111.0;

// The values below are empirical tuning, not derived; check with the product
// owner before changing them.
pub const RADIUS_DAMPING: f64 = 0.7;
pub const MIN_SEARCH_RADIUS_KM: f64 = 30.0;
pub const MAX_SEARCH_RADIUS_KM: f64 = 200.0;
