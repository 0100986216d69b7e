use glam::{DVec3, Vec3};

use super::cities::City;
use super::palette;
use crate::geo::projection;

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub name: String,
    pub position: DVec3,
    pub color: Vec3,
}

pub fn place(cities: &[City], radius: f64) -> Vec<Marker> {
    cities
        .iter()
        .enumerate()
        .map(|(index, city)| Marker {
            name: city.name.clone(),
            position: projection::project(city.coordinate(), radius),
            color: palette::color(index),
        })
        .collect()
}
