use glam::{DQuat, DVec3};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Orbit {
    pub radius: f64,
    pub inclination_deg: f64,
    pub node_deg: f64,
}

impl Orbit {
    // Equatorial ring in the render frame (y up), tilted by inclination,
    // then swung around the pole to its ascending node.
    pub fn position(&self, phase_deg: f64) -> DVec3 {
        let phase = phase_deg.to_radians();
        let ring = DVec3::new(phase.cos(), 0.0, phase.sin()) * self.radius;
        let tilt = DQuat::from_axis_angle(DVec3::X, self.inclination_deg.to_radians());
        let swing = DQuat::from_axis_angle(DVec3::Y, self.node_deg.to_radians());
        swing * (tilt * ring)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Satellite {
    pub orbit: Orbit,
    pub phase_deg: f64,
}

impl Satellite {
    // angle_deg is the shared orbit angle the driver advances each tick.
    pub fn position_at(&self, angle_deg: f64) -> DVec3 {
        self.orbit.position(self.phase_deg + angle_deg)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Constellation {
    pub planes: usize,
    pub sats_per_plane: usize,
    pub radius: f64,
    pub inclination_deg: f64,
}

impl Constellation {
    pub fn satellites(&self) -> Vec<Satellite> {
        let node_step = 360.0 / self.planes as f64;
        let phase_step = 360.0 / self.sats_per_plane as f64;
        (0..self.planes)
            .flat_map(|plane| {
                let orbit = Orbit {
                    radius: self.radius,
                    inclination_deg: self.inclination_deg,
                    node_deg: node_step * plane as f64,
                };
                (0..self.sats_per_plane).map(move |slot| Satellite {
                    orbit,
                    phase_deg: phase_step * slot as f64,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0.0)]
    #[case(37.5)]
    #[case(180.0)]
    #[case(271.3)]
    fn position_stays_at_orbit_radius(#[case] phase_deg: f64) {
        let orbit = Orbit {
            radius: 10.0,
            inclination_deg: 53.0,
            node_deg: 120.0,
        };
        assert_relative_eq!(orbit.position(phase_deg).length(), 10.0, max_relative = 1e-9);
    }

    #[test]
    fn flat_orbit_stays_in_the_equatorial_plane() {
        let orbit = Orbit {
            radius: 10.0,
            inclination_deg: 0.0,
            node_deg: 0.0,
        };
        for phase_deg in [0.0, 45.0, 90.0, 200.0] {
            assert_abs_diff_eq!(orbit.position(phase_deg).y, 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn constellation_fills_planes_and_slots() {
        let constellation = Constellation {
            planes: 3,
            sats_per_plane: 4,
            radius: 10.0,
            inclination_deg: 53.0,
        };
        let satellites = constellation.satellites();

        assert_eq!(satellites.len(), 12);
        assert_abs_diff_eq!(satellites[0].phase_deg, 0.0);
        assert_abs_diff_eq!(satellites[1].phase_deg, 90.0);
        assert_abs_diff_eq!(satellites[4].orbit.node_deg, 120.0);
        assert_abs_diff_eq!(satellites[8].orbit.node_deg, 240.0);
    }

    #[test]
    fn shared_angle_offsets_every_phase() {
        let constellation = Constellation {
            planes: 1,
            sats_per_plane: 2,
            radius: 10.0,
            inclination_deg: 53.0,
        };
        let satellites = constellation.satellites();

        assert_eq!(
            satellites[0].position_at(90.0),
            satellites[0].orbit.position(90.0)
        );
        assert_abs_diff_eq!(
            satellites[1].position_at(45.0),
            satellites[1].orbit.position(225.0),
            epsilon = 1e-12
        );
    }
}
