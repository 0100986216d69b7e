use glam::{DVec3, Vec3};
use itertools::Itertools;

use super::cities::City;
use super::palette;
use crate::geo::InvalidInput;
use crate::geo::arc::{self, ArcConfig};

#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub from: String,
    pub to: String,
    pub points: Vec<DVec3>,
    pub color: Vec3,
}

// One arc per unordered city pair, in catalog order.
pub fn build(cities: &[City], config: &ArcConfig) -> Result<Vec<Link>, InvalidInput> {
    cities
        .iter()
        .tuple_combinations()
        .enumerate()
        .map(|(index, (from, to))| {
            Ok(Link {
                from: from.name.clone(),
                to: to.name.clone(),
                points: arc::build_arc(from.coordinate(), to.coordinate(), config)?,
                color: palette::color(index),
            })
        })
        .collect()
}
