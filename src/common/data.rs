use approx::{AbsDiffEq, UlpsEq};
use serde::Deserialize;

// Degrees; latitude in [-90, 90], longitude in [-180, 180] for meaningful
// input, but nothing here enforces it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Deserialize)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        GeoCoordinate {
            latitude,
            longitude,
        }
    }
}

impl From<(f64, f64)> for GeoCoordinate {
    fn from(value: (f64, f64)) -> Self {
        GeoCoordinate {
            latitude: value.0,
            longitude: value.1,
        }
    }
}

impl AbsDiffEq for GeoCoordinate {
    type Epsilon = <f64 as AbsDiffEq>::Epsilon;

    fn default_epsilon() -> <f64 as AbsDiffEq>::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: <f64 as AbsDiffEq>::Epsilon) -> bool {
        f64::abs_diff_eq(&self.latitude, &other.latitude, epsilon)
            && f64::abs_diff_eq(&self.longitude, &other.longitude, epsilon)
    }
}

impl UlpsEq for GeoCoordinate {
    fn default_max_ulps() -> u32 {
        f64::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: <f64 as AbsDiffEq>::Epsilon, max_ulps: u32) -> bool {
        f64::ulps_eq(&self.latitude, &other.latitude, epsilon, max_ulps)
            && f64::ulps_eq(&self.longitude, &other.longitude, epsilon, max_ulps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_tuple() {
        let coord: GeoCoordinate = (52.52, 13.40).into();
        assert_eq!(coord, GeoCoordinate::new(52.52, 13.40));
    }
}
