pub mod cities;
pub mod field;
pub mod links;
pub mod markers;
pub mod palette;
pub mod rotation;
pub mod satellites;
