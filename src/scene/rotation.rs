use std::f64::consts::TAU;

// Globe spin as explicit state: the render driver owns the clock and calls
// advance once per tick, nothing mutates inside a draw callback.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SpinState {
    pub angle_rad: f64,
    pub rate_rad_per_sec: f64,
}

impl SpinState {
    pub fn new(rate_rad_per_sec: f64) -> Self {
        SpinState {
            angle_rad: 0.0,
            rate_rad_per_sec,
        }
    }

    pub fn advance(&mut self, dt_secs: f64) {
        self.angle_rad = (self.angle_rad + self.rate_rad_per_sec * dt_secs).rem_euclid(TAU);
    }
}
