use crate::citystar::NameId;

use petgraph::graphmap::UnGraphMap;
use std::collections::HashMap;

/// Symmetric table of distances between city names.
///
/// Keyed by unordered name pairs, so `get(a, b) == get(b, a)` always holds.
/// Inserting a pair that already exists overwrites its distance, which is what
/// happens when two cities share a name.
#[derive(Clone, Debug, Default)]
pub struct DistanceTable {
    ids: HashMap<String, NameId>,
    names: Vec<String>,
    graph: UnGraphMap<NameId, f64>,
}

impl DistanceTable {
    pub fn new() -> Self {
        Self::default()
    }

    fn intern(&mut self, name: &str) -> NameId {
        if let Some(id) = self.ids.get(name) {
            return *id;
        }

        let id = NameId::from_raw(self.names.len() as u32);
        self.names.push(name.to_string());
        self.ids.insert(name.to_string(), id);
        self.graph.add_node(id);
        id
    }

    pub fn id(&self, name: &str) -> Option<NameId> {
        self.ids.get(name).copied()
    }

    pub fn name(&self, id: NameId) -> Option<&str> {
        self.names.get(id.raw() as usize).map(String::as_str)
    }

    /// Store the distance between two names, returning the value it replaced
    pub fn insert(&mut self, a: &str, b: &str, distance: f64) -> Option<f64> {
        debug_assert!(distance >= 0.0, "distances are never negative");
        let a = self.intern(a);
        let b = self.intern(b);
        self.graph.add_edge(a, b, distance)
    }

    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        let (a, b) = (self.id(a)?, self.id(b)?);
        self.graph.edge_weight(a, b).copied()
    }

    /// Number of stored name pairs
    pub fn len(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        self.graph.clear();
        self.ids.clear();
        self.names.clear();
    }

    /// Every stored pair in the order it was first inserted
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, f64)> + '_ {
        self.graph.all_edges().map(|(a, b, d)| {
            (
                self.names[a.raw() as usize].as_str(),
                self.names[b.raw() as usize].as_str(),
                *d,
            )
        })
    }
}
