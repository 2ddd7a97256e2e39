mod citystar;

#[cfg(feature = "2d")]
pub mod citystar2d;

pub use citystar::*;
