use crate::citystar::strategy::strategy::check_start;
use crate::citystar::strategy::{Strategy, Tour};
use crate::citystar::{self, City, CityError, CityStore};

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};
use bitvec::vec::BitVec;
use tracing::debug;

const INVALID_INDEX: usize = usize::MAX;

/// Exact search for the shortest closed tour.
///
/// The search space grows exponentially with the number of cities, so this is
/// only practical for small inputs.
#[derive(Clone, Copy, Debug, Default)]
pub struct AStar;

struct AStarStep {
    step: usize,
    // The cost of the partial tour so far
    total_cost: f64,
    // total_cost plus the heuristic
    est_cost: f64,
}

impl AStarStep {
    pub fn new(step: usize, total_cost: f64, est_cost: f64) -> Self {
        Self {
            step,
            total_cost,
            est_cost,
        }
    }
}

impl PartialEq for AStarStep {
    fn eq(&self, other: &Self) -> bool {
        self.est_cost == other.est_cost
    }
}

impl Eq for AStarStep {}

impl PartialOrd for AStarStep {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AStarStep {
    fn cmp(&self, other: &Self) -> Ordering {
        self.est_cost.total_cmp(&other.est_cost).reverse()
    }
}

/// A partial tour. `prev` links back to the step it was extended from.
struct TourStep {
    visited: BitVec<u32>,
    city: usize,
    prev: usize,
    // Set once the tour has returned to the start
    closed: bool,
}

impl<Point> Strategy<Point> for AStar
where
    Point: citystar::Point,
{
    fn find_tour(&self, store: &CityStore<Point>, start: usize) -> Result<Tour, CityError> {
        check_start(store, start)?;
        let cities = store.cities();

        let mut frontier: BinaryHeap<AStarStep> = BinaryHeap::new();
        let mut expanded: HashSet<(BitVec<u32>, usize)> = HashSet::new();
        let mut steps: Vec<TourStep> = Vec::with_capacity(cities.len() * cities.len());

        let mut visited: BitVec<u32> = BitVec::new();
        visited.resize(cities.len(), false);
        visited.set(start, true);
        let h = Self::heuristic(cities, &visited, start, start);
        steps.push(TourStep { visited, city: start, prev: INVALID_INDEX, closed: false });
        frontier.push(AStarStep::new(0, 0.0, h));

        while let Some(AStarStep { step: step_id, total_cost: cost, .. }) = frontier.pop() {
            let step = &steps[step_id];

            if step.closed {
                // The closing step repeats the start city, skip it
                let mut order = Vec::with_capacity(cities.len());
                let mut prev_step_id = step.prev;
                while prev_step_id != INVALID_INDEX {
                    let step = &steps[prev_step_id];
                    order.push(step.city);
                    prev_step_id = step.prev;
                }
                order.reverse();

                debug!(cities = cities.len(), explored = steps.len(), cost, "found optimal tour");
                return Ok(Tour { order, cost });
            }

            if !expanded.insert((step.visited.clone(), step.city)) {
                continue;
            }

            let from = step.city;
            if step.visited.all() {
                let cost = cost + cities[from].pos.distance(&cities[start].pos);
                let visited = step.visited.clone();
                steps.push(TourStep {
                    visited,
                    city: start,
                    prev: step_id,
                    closed: true,
                });
                frontier.push(AStarStep::new(steps.len() - 1, cost, cost));
                continue;
            }

            let unvisited: Vec<usize> = step.visited.iter_zeros().collect();
            for next in unvisited {
                let mut visited = steps[step_id].visited.clone();
                visited.set(next, true);

                let cost = cost + cities[from].pos.distance(&cities[next].pos);
                let est_cost = cost + Self::heuristic(cities, &visited, next, start);

                steps.push(TourStep { visited, city: next, prev: step_id, closed: false });
                frontier.push(AStarStep::new(steps.len() - 1, cost, est_cost));
            }
        }

        // Every state can always be extended, so the frontier never runs dry first
        unreachable!("A* exhausted the frontier without closing a tour")
    }
}

impl AStar {
    /// Distance to the nearest unvisited city, or back to the start once every
    /// city is visited. Never overestimates the remaining cost.
    fn heuristic<Point: citystar::Point>(
        cities: &[City<Point>],
        visited: &BitVec<u32>,
        city: usize,
        start: usize,
    ) -> f64 {
        let here = &cities[city].pos;
        visited
            .iter_zeros()
            .map(|i| here.distance(&cities[i].pos))
            .reduce(f64::min)
            .unwrap_or_else(|| here.distance(&cities[start].pos))
    }
}
