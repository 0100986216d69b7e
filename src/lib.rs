extern crate approx;

pub mod common;
pub mod geo;
pub mod scene;
