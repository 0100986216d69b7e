use std::f64::consts::FRAC_PI_2;

use glam::DVec3;

use crate::common::data::GeoCoordinate;

// Below this the slerp denominator is unusable and the endpoints are either
// coincident or antipodal.
const SIN_EPSILON: f64 = 1e-12;

// Geographic frame with z toward the north pole, unrelated to the render
// frame used by projection.
fn to_unit_vector(coord: GeoCoordinate) -> DVec3 {
    let latitude = coord.latitude.to_radians();
    let longitude = coord.longitude.to_radians();
    DVec3::new(
        latitude.cos() * longitude.cos(),
        latitude.cos() * longitude.sin(),
        latitude.sin(),
    )
}

fn to_coordinate(v: DVec3) -> GeoCoordinate {
    GeoCoordinate {
        latitude: v.z.clamp(-1.0, 1.0).asin().to_degrees(),
        longitude: v.y.atan2(v.x).to_degrees(),
    }
}

/// Central angle between two coordinates, in radians.
pub fn angular_distance(start: GeoCoordinate, end: GeoCoordinate) -> f64 {
    to_unit_vector(start)
        .dot(to_unit_vector(end))
        .clamp(-1.0, 1.0)
        .acos()
}

/// Point at fraction `t` along the geodesic from `start` to `end`.
pub fn interpolate(start: GeoCoordinate, end: GeoCoordinate, t: f64) -> GeoCoordinate {
    let a = to_unit_vector(start);
    let b = to_unit_vector(end);
    let distance = a.dot(b).clamp(-1.0, 1.0).acos();
    let sin_distance = distance.sin();

    if sin_distance < SIN_EPSILON {
        if distance < FRAC_PI_2 {
            return start;
        }
        // Antipodal pair: every great circle through the endpoints is a
        // geodesic, so fall back to interpolating the raw coordinates.
        return GeoCoordinate {
            latitude: (1.0 - t) * start.latitude + t * end.latitude,
            longitude: (1.0 - t) * start.longitude + t * end.longitude,
        };
    }

    let point = a * (((1.0 - t) * distance).sin() / sin_distance)
        + b * ((t * distance).sin() / sin_distance);
    to_coordinate(point)
}
