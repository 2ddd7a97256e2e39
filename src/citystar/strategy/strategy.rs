use crate::citystar::{self, City, CityError, CityStore};

/// A closed loop through every city.
///
/// The edge from the last city back to the first is implied and is included
/// in `cost`.
#[derive(Clone, Debug, PartialEq)]
pub struct Tour {
    // Indices into the store, in visiting order. Only strategies build tours,
    // so every index is in range for the store they came from
    pub(crate) order: Vec<usize>,
    pub(crate) cost: f64,
}

impl Tour {
    /// Build a tour that visits `order` and returns to its first city
    pub(crate) fn closed<Point: citystar::Point>(cities: &[City<Point>], order: Vec<usize>) -> Self {
        let cost = order
            .iter()
            .zip(order.iter().cycle().skip(1))
            .map(|(&a, &b)| cities[a].pos.distance(&cities[b].pos))
            .sum();
        Self { order, cost }
    }

    /// Indices into the store, in visiting order
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Length of the closed loop
    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn names<'a, Point>(&self, cities: &'a [City<Point>]) -> Vec<&'a str> {
        self.order.iter().filter_map(|&i| cities.get(i)).map(|c| c.name.as_str()).collect()
    }

    /// The visiting order as `A -> B -> C`
    pub fn describe<Point>(&self, cities: &[City<Point>]) -> String {
        self.names(cities).join(" -> ")
    }
}

/// A way of choosing the order a tour visits the cities in
pub trait Strategy<Point>
where
    Point: citystar::Point,
{
    /// Find a tour through every city in the store that starts at `start`
    fn find_tour(&self, store: &CityStore<Point>, start: usize) -> Result<Tour, CityError>;
}

/// Shared precondition of every strategy: two or more cities and a valid start
pub(crate) fn check_start<Point: citystar::Point>(
    store: &CityStore<Point>,
    start: usize,
) -> Result<(), CityError> {
    let len = store.len();
    if len < 2 {
        return Err(CityError::InsufficientCities { count: len });
    }
    if start >= len {
        return Err(CityError::StartOutOfRange { index: start, len });
    }
    Ok(())
}
