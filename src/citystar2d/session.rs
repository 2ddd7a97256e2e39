//! The form layer: raw text fields in, a visible log and a drawn canvas out.
//!
//! Every error's `Display` is the message shown to the user as an alert.

use crate::citystar::strategy::{AStar, InsertionOrder};
use crate::citystar::{CityError, Tour};
use crate::citystar2d::{render_tour, Canvas, City2D, CityStore2D, RenderConfig};

use glam::DVec2;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error("Please fill in all fields.")]
    InvalidInput,

    #[error("Add at least two cities.")]
    InsufficientCities,

    #[error("The city {0} is not in the list.")]
    UnknownCity(String),

    #[error(transparent)]
    City(CityError),
}

impl From<CityError> for SessionError {
    fn from(err: CityError) -> Self {
        match err {
            CityError::InvalidInput { .. } => SessionError::InvalidInput,
            CityError::InsufficientCities { .. } => SessionError::InsufficientCities,
            CityError::UnknownCity(name) => SessionError::UnknownCity(name),
            err => SessionError::City(err),
        }
    }
}

#[derive(Debug, Default)]
pub struct Session {
    store: CityStore2D,
    log: Vec<String>,
    config: RenderConfig,
}

/// A field holds a coordinate when it parses as a finite number
fn parse_coordinate(field: &str) -> Option<f64> {
    field.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

impl Session {
    pub fn new(config: RenderConfig) -> Self {
        Self {
            store: CityStore2D::new(),
            log: Vec::new(),
            config,
        }
    }

    /// Add a city from the three form fields
    pub fn add_point(&mut self, name: &str, x: &str, y: &str) -> Result<&City2D, SessionError> {
        let (Some(x), Some(y)) = (parse_coordinate(x), parse_coordinate(y)) else {
            warn!(name, x, y, "rejected non numeric coordinates");
            return Err(SessionError::InvalidInput);
        };

        let index = self.store.add_city(name, DVec2::new(x, y))?;
        self.log.push(format!("Added city: {name} ({x}, {y})"));
        Ok(&self.store.cities()[index])
    }

    /// Recompute distances and draw the cities in the order they were added.
    ///
    /// The log is replaced by the path. With fewer than two cities nothing is
    /// drawn and the log is left alone.
    pub fn calculate_path<C: Canvas + ?Sized>(&mut self, canvas: &mut C) -> Result<Tour, SessionError> {
        self.store.compute_all_distances()?;
        let tour = self.store.find_tour(&InsertionOrder, 0)?;

        self.log.clear();
        self.log.push(format!("Path: {}", tour.describe(self.store.cities())));
        render_tour(canvas, self.store.cities(), &tour, &self.config);
        Ok(tour)
    }

    /// Like `calculate_path`, but searches for the shortest tour starting at
    /// the first city called `start`. Nothing changes if `start` is unknown.
    pub fn calculate_optimal_path<C: Canvas + ?Sized>(
        &mut self,
        start: &str,
        canvas: &mut C,
    ) -> Result<Tour, SessionError> {
        if self.store.len() < 2 {
            return Err(SessionError::InsufficientCities);
        }
        let start = self
            .store
            .find(start)
            .ok_or_else(|| SessionError::UnknownCity(start.to_string()))?;
        self.store.compute_all_distances()?;
        let tour = self.store.find_tour(&AStar, start)?;

        self.log.clear();
        self.log.push(format!("Path: {}", tour.describe(self.store.cities())));
        self.log.push(format!("Total cost: {}", tour.cost()));
        render_tour(canvas, self.store.cities(), &tour, &self.config);
        Ok(tour)
    }

    /// The lines currently shown to the user
    pub fn log(&self) -> &[String] {
        &self.log
    }

    pub fn store(&self) -> &CityStore2D {
        &self.store
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }
}
