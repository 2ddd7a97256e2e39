pub trait Point: PartialEq + Clone {
    fn distance_squared(&self, other: &Self) -> f64;

    fn distance(&self, other: &Self) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// Whether every coordinate is a finite number
    fn is_finite(&self) -> bool;
}
