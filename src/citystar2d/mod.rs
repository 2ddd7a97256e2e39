//! Some types that provide a basic implementation of CityStar on a 2D plane,
//! plus the renderer and the form-style session built on top of it

mod canvas;
mod config;
mod render;
mod session;
mod svg;

pub use canvas::{Canvas, DrawCommand, RecordingCanvas};
pub use config::{ConfigError, RenderConfig};
pub use render::{render, render_tour};
pub use session::{Session, SessionError};
pub use svg::SvgCanvas;

use crate::citystar::*;
use glam::DVec2;

impl Point for DVec2 {
    fn distance_squared(&self, other: &Self) -> f64 {
        (*self - *other).length_squared()
    }

    fn distance(&self, other: &Self) -> f64 {
        (*self - *other).length()
    }

    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

pub type City2D = City<DVec2>;
pub type CityStore2D = CityStore<DVec2>;
