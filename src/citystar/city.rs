/// Interned handle for a city name. Two cities with the same name share an id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NameId(u32);
impl NameId {
    pub fn from_raw(id: u32) -> Self {
        Self(id)
    }

    pub fn raw(&self) -> u32 {
        self.0
    }
}

/// A named point entered by the user
#[derive(Clone, Debug, PartialEq)]
pub struct City<Point> {
    pub name: String,
    pub pos: Point,
}

impl<Point> City<Point> {
    pub fn new<S: Into<String>>(name: S, pos: Point) -> Self {
        Self { name: name.into(), pos }
    }
}
