pub mod arc;
pub mod great_circle;
pub mod projection;

use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq)]
pub enum InvalidInput {
    #[error("sphere radius must be positive, got {0}")]
    NonPositiveRadius(f64),
    #[error("latitude {0} outside [-90, 90]")]
    LatitudeOutOfRange(f64),
    #[error("longitude {0} outside [-180, 180]")]
    LongitudeOutOfRange(f64),
    #[error("arc sampling needs at least 2 segments, got {0}")]
    TooFewSegments(usize),
    #[error("arc altitude bounds must satisfy 0 < min < max, got [{min}, {max}]")]
    BadAltitudeBounds { min: f64, max: f64 },
}
