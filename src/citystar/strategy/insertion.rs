use crate::citystar::strategy::strategy::check_start;
use crate::citystar::strategy::{Strategy, Tour};
use crate::citystar::{self, CityError, CityStore};

/// Visits the cities in the order they were added, rotated to begin at the
/// start city. Performs no optimisation.
#[derive(Clone, Copy, Debug, Default)]
pub struct InsertionOrder;

impl<Point> Strategy<Point> for InsertionOrder
where
    Point: citystar::Point,
{
    fn find_tour(&self, store: &CityStore<Point>, start: usize) -> Result<Tour, CityError> {
        check_start(store, start)?;

        let order = (start..store.len()).chain(0..start).collect();
        Ok(Tour::closed(store.cities(), order))
    }
}
