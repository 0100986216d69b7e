use std::io;

use approx::{AbsDiffEq, UlpsEq};
use color_eyre::{
    Section,
    eyre::{Result, eyre},
};
use itertools::Itertools;

use crate::common::data::GeoCoordinate;

#[derive(Debug, serde::Deserialize, Clone, PartialEq)]
pub struct City {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl City {
    pub fn new(name: &str, latitude: f64, longitude: f64) -> Self {
        City {
            name: name.to_owned(),
            latitude,
            longitude,
        }
    }

    pub fn coordinate(&self) -> GeoCoordinate {
        GeoCoordinate::new(self.latitude, self.longitude)
    }
}

impl AbsDiffEq for City {
    type Epsilon = <f64 as AbsDiffEq>::Epsilon;

    fn default_epsilon() -> <f64 as AbsDiffEq>::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: <f64 as AbsDiffEq>::Epsilon) -> bool {
        self.name == other.name
            && f64::abs_diff_eq(&self.latitude, &other.latitude, epsilon)
            && f64::abs_diff_eq(&self.longitude, &other.longitude, epsilon)
    }
}

impl UlpsEq for City {
    fn default_max_ulps() -> u32 {
        f64::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: <f64 as AbsDiffEq>::Epsilon, max_ulps: u32) -> bool {
        self.name == other.name
            && f64::ulps_eq(&self.latitude, &other.latitude, epsilon, max_ulps)
            && f64::ulps_eq(&self.longitude, &other.longitude, epsilon, max_ulps)
    }
}

const DEFAULT_CITIES_CSV: &[u8] = include_bytes!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/resources/cities.csv"
));

pub fn default_cities() -> Result<Vec<City>> {
    read_cities(DEFAULT_CITIES_CSV)
}

pub fn read_cities<R: io::Read>(reader: R) -> Result<Vec<City>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let (cities, errors): (Vec<_>, Vec<_>) = rdr.deserialize().partition_result();

    if !errors.is_empty() {
        return Err(errors.into_iter().fold(
            eyre!("encountered errors while reading the city table"),
            |report, e| report.error(e),
        ));
    }

    Ok(cities)
}
