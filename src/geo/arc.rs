use glam::DVec3;

use super::{InvalidInput, great_circle, projection};
use crate::common::data::GeoCoordinate;

pub const CURVE_MIN_ALTITUDE: f64 = 5.0;
pub const CURVE_MAX_ALTITUDE: f64 = 10.0;

// Geodesic fractions where the two elevated control points sit.
const CONTROL_FRACTIONS: (f64, f64) = (0.4, 0.7);

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ArcConfig {
    pub radius: f64,
    pub min_altitude: f64,
    pub max_altitude: f64,
    pub segment_count: usize,
}

impl Default for ArcConfig {
    fn default() -> Self {
        Self {
            radius: 8.0,
            min_altitude: CURVE_MIN_ALTITUDE,
            max_altitude: CURVE_MAX_ALTITUDE,
            segment_count: 32,
        }
    }
}

impl ArcConfig {
    pub fn validate(&self) -> Result<(), InvalidInput> {
        if self.radius <= 0.0 {
            return Err(InvalidInput::NonPositiveRadius(self.radius));
        }
        if self.min_altitude <= 0.0 || self.min_altitude >= self.max_altitude {
            return Err(InvalidInput::BadAltitudeBounds {
                min: self.min_altitude,
                max: self.max_altitude,
            });
        }
        if self.segment_count < 2 {
            return Err(InvalidInput::TooFewSegments(self.segment_count));
        }
        Ok(())
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CubicBezier {
    pub p0: DVec3,
    pub p1: DVec3,
    pub p2: DVec3,
    pub p3: DVec3,
}

impl CubicBezier {
    pub fn point_at(&self, t: f64) -> DVec3 {
        let u = 1.0 - t;
        self.p0 * (u * u * u)
            + self.p1 * (3.0 * u * u * t)
            + self.p2 * (3.0 * u * t * t)
            + self.p3 * (t * t * t)
    }

    // count >= 2; parameters are evenly spaced over [0, 1] inclusive.
    pub fn sample(&self, count: usize) -> Vec<DVec3> {
        let last = (count - 1) as f64;
        (0..count)
            .map(|i| self.point_at(i as f64 / last))
            .collect()
    }
}

fn check_endpoint(coord: GeoCoordinate) -> Result<(), InvalidInput> {
    if !(-90.0..=90.0).contains(&coord.latitude) {
        return Err(InvalidInput::LatitudeOutOfRange(coord.latitude));
    }
    if !(-180.0..=180.0).contains(&coord.longitude) {
        return Err(InvalidInput::LongitudeOutOfRange(coord.longitude));
    }
    Ok(())
}

pub fn build_curve(
    start: GeoCoordinate,
    end: GeoCoordinate,
    config: &ArcConfig,
) -> Result<CubicBezier, InvalidInput> {
    config.validate()?;
    check_endpoint(start)?;
    check_endpoint(end)?;

    let p0 = projection::project(start, config.radius);
    let p3 = projection::project(end, config.radius);

    // A zero chord collapses the whole curve onto the endpoint; clamping it
    // up to min_altitude would leave the control points hanging above a
    // degenerate arc.
    let chord = p0.distance(p3);
    let altitude = if chord == 0.0 {
        0.0
    } else {
        (chord * 0.5).clamp(config.min_altitude, config.max_altitude)
    };

    let control_a = great_circle::interpolate(start, end, CONTROL_FRACTIONS.0);
    let control_b = great_circle::interpolate(start, end, CONTROL_FRACTIONS.1);
    let p1 = projection::project_elevated(control_a, config.radius, altitude);
    let p2 = projection::project_elevated(control_b, config.radius, altitude);

    Ok(CubicBezier { p0, p1, p2, p3 })
}

pub fn build_arc(
    start: GeoCoordinate,
    end: GeoCoordinate,
    config: &ArcConfig,
) -> Result<Vec<DVec3>, InvalidInput> {
    Ok(build_curve(start, end, config)?.sample(config.segment_count))
}
