// crates/dinerdb-core/src/distance.rs

//! Great-circle distances (haversine formula).

/// Earth radius in kilometres used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6372.8;
/// Kilometres to statute miles.
pub const KM_TO_MILES: f64 = 0.62137;

/// Distance in kilometres between two coordinates, rounded to 0.1 km.
///
/// ```rust
/// use dinerdb_core::distance::in_kilometres;
///
/// assert_eq!(in_kilometres(52.0, -1.5, 52.0, -1.5), 0.0);
/// let d = in_kilometres(51.5074, -0.1278, 48.8566, 2.3522); // London -> Paris
/// assert!((d - 343.6).abs() < 1.0);
/// ```
pub fn in_kilometres(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let (phi1, phi2) = (lat1.to_radians(), lat2.to_radians());
    let d_phi = phi1 - phi2;
    let d_lambda = lon2.to_radians() - lon1.to_radians();

    let a = (d_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();
    round_tenth(EARTH_RADIUS_KM * c)
}

/// Distance in miles, derived from the rounded kilometre value.
pub fn in_miles(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    round_tenth(in_kilometres(lat1, lon1, lat2, lon2) * KM_TO_MILES)
}

fn round_tenth(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symmetric() {
        let there = in_kilometres(52.3793, -1.5615, 52.4862, -1.8904);
        let back = in_kilometres(52.4862, -1.8904, 52.3793, -1.5615);
        assert_eq!(there, back);
        assert!(there > 20.0 && there < 30.0);
    }

    #[test]
    fn miles_follow_kilometres() {
        let km = in_kilometres(51.5074, -0.1278, 48.8566, 2.3522);
        let mi = in_miles(51.5074, -0.1278, 48.8566, 2.3522);
        assert!((mi - km * KM_TO_MILES).abs() <= 0.05 + f64::EPSILON);
    }
}
