pub const EARTH_RADIUS_KM: f64 = 6371.0;
