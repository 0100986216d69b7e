use glam::DVec3;

use crate::common::data::GeoCoordinate;

// y is up; longitude sign flips before the radian conversion so it grows in
// the same rotational sense as the render engine's frame.
pub fn project(coord: GeoCoordinate, radius: f64) -> DVec3 {
    let latitude = coord.latitude.to_radians();
    let longitude = (-coord.longitude).to_radians();
    DVec3::new(
        latitude.cos() * longitude.cos() * radius,
        latitude.sin() * radius,
        latitude.cos() * longitude.sin() * radius,
    )
}

pub fn project_elevated(coord: GeoCoordinate, radius: f64, altitude: f64) -> DVec3 {
    project(coord, radius + altitude)
}
