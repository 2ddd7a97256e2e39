use crate::citystar::{self, City, CityError, DistanceTable};
use crate::citystar::strategy::{Strategy, Tour};

use tracing::{debug, warn};

/// An append-only list of cities in the order they were entered, with a cache
/// of the distances between them.
///
/// Point: The type of a single point in the space the cities live in
#[derive(Clone, Debug)]
pub struct CityStore<Point>
where
    Point: citystar::Point,
{
    cities: Vec<City<Point>>,
    // Only refreshed by `compute_all_distances`
    distances: DistanceTable,
}

impl<Point> Default for CityStore<Point>
where
    Point: citystar::Point,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<Point> CityStore<Point>
where
    Point: citystar::Point,
{
    /// Create an empty CityStore
    pub fn new() -> Self {
        Self {
            cities: Vec::new(),
            distances: DistanceTable::new(),
        }
    }

    /// Append a city, returning its index.
    ///
    /// Names are not required to be unique. Nothing is stored if the name is
    /// empty or the position has a non finite coordinate.
    pub fn add_city(&mut self, name: &str, pos: Point) -> Result<usize, CityError> {
        if name.is_empty() {
            warn!("rejected city with an empty name");
            return Err(CityError::InvalidInput { reason: "city name is empty" });
        }
        if !pos.is_finite() {
            warn!(name, "rejected city with a non finite coordinate");
            return Err(CityError::InvalidInput { reason: "coordinates must be finite numbers" });
        }

        let index = self.cities.len();
        self.cities.push(City::new(name, pos));
        debug!(name, index, "added city");
        Ok(index)
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn cities(&self) -> &[City<Point>] {
        &self.cities
    }

    pub fn get(&self, index: usize) -> Option<&City<Point>> {
        self.cities.get(index)
    }

    /// Index of the first city with the given name
    pub fn find(&self, name: &str) -> Option<usize> {
        self.cities.iter().position(|c| c.name == name)
    }

    /// Straight line distance between two cities by index
    pub fn distance(&self, a: usize, b: usize) -> Option<f64> {
        Some(self.get(a)?.pos.distance(&self.get(b)?.pos))
    }

    /// The table filled by the last call to `compute_all_distances`
    pub fn distances(&self) -> &DistanceTable {
        &self.distances
    }

    /// Recompute the distance between every pair of cities.
    ///
    /// Needs at least two cities; with fewer the previous table is left alone.
    pub fn compute_all_distances(&mut self) -> Result<&DistanceTable, CityError> {
        let count = self.cities.len();
        if count < 2 {
            return Err(CityError::InsufficientCities { count });
        }

        self.distances.clear();
        for (i, a) in self.cities.iter().enumerate() {
            for b in &self.cities[i + 1..] {
                self.distances.insert(&a.name, &b.name, a.pos.distance(&b.pos));
            }
        }

        debug!(cities = count, pairs = self.distances.len(), "recomputed distances");
        Ok(&self.distances)
    }

    /// Find a tour through every city starting at `start` using the given strategy.
    ///
    /// Just a wrapper for `Strategy::find_tour`
    pub fn find_tour<S>(&self, strat: &S, start: usize) -> Result<Tour, CityError>
    where
        S: Strategy<Point>,
    {
        strat.find_tour(self, start)
    }
}
