use glam::DVec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const ARROW_COUNT: usize = 3348;
pub const HIGHLIGHT_LENGTH: f64 = 15.0;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Arrow {
    pub direction: DVec3,
    pub length: f64,
    pub color_index: usize,
}

// Same seed, same field.
pub fn generate(count: usize, seed: u64) -> Vec<Arrow> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|index| {
            let direction = DVec3::new(
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
            )
            .normalize_or(DVec3::Y);
            Arrow {
                direction,
                length: rng.gen_range(4.0..5.0),
                color_index: index,
            }
        })
        .collect()
}

// Unit direction of the field's vector sum, the single highlighted arrow.
pub fn resultant(arrows: &[Arrow]) -> DVec3 {
    arrows
        .iter()
        .map(|arrow| arrow.direction * arrow.length)
        .sum::<DVec3>()
        .normalize_or(DVec3::Y)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn same_seed_reproduces_the_field() {
        assert_eq!(generate(64, 7), generate(64, 7));
    }

    #[test]
    fn different_seeds_diverge() {
        assert_ne!(generate(64, 7), generate(64, 8));
    }

    #[test]
    fn arrows_are_unit_directions_with_bounded_lengths() {
        for arrow in generate(256, 42) {
            assert_relative_eq!(arrow.direction.length(), 1.0, max_relative = 1e-9);
            assert!((4.0..5.0).contains(&arrow.length));
        }
    }

    #[test]
    fn color_indices_run_in_order() {
        let arrows = generate(16, 3);
        for (index, arrow) in arrows.iter().enumerate() {
            assert_eq!(arrow.color_index, index);
        }
    }

    #[test]
    fn resultant_is_normalized() {
        let arrows = generate(256, 42);
        assert_relative_eq!(resultant(&arrows).length(), 1.0, max_relative = 1e-9);
    }
}
