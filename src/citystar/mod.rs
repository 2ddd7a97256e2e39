mod city;
mod distance;
mod error;
mod point;
mod store;
pub mod strategy;

pub use city::{City, NameId};
pub use distance::DistanceTable;
pub use error::CityError;
pub use point::Point;
pub use store::CityStore;
pub use strategy::Tour;
