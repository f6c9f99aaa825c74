use crate::domain::ports::MapMarker;
use std::collections::HashSet;

/// Insertion-ordered set of markers.
///
/// `order` drives iteration, `seen` answers membership.
#[derive(Debug, Clone)]
pub struct MarkerSet<M: MapMarker> {
    order: Vec<M>,
    seen: HashSet<M>,
}

impl<M: MapMarker> MarkerSet<M> {
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            seen: HashSet::new(),
        }
    }

    /// Returns `false` when a structurally equal marker is already held.
    pub fn add(&mut self, marker: M) -> bool {
        if self.seen.contains(&marker) {
            return false;
        }
        self.seen.insert(marker.clone());
        self.order.push(marker);
        true
    }

    pub fn contains(&self, marker: &M) -> bool {
        self.seen.contains(marker)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, M> {
        self.order.iter()
    }
}

impl<M: MapMarker> Default for MarkerSet<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: MapMarker> Extend<M> for MarkerSet<M> {
    fn extend<I: IntoIterator<Item = M>>(&mut self, iter: I) {
        for marker in iter {
            self.add(marker);
        }
    }
}

impl<M: MapMarker> FromIterator<M> for MarkerSet<M> {
    fn from_iter<I: IntoIterator<Item = M>>(iter: I) -> Self {
        let mut set = MarkerSet::new();
        set.extend(iter);
        set
    }
}

impl<'a, M: MapMarker> IntoIterator for &'a MarkerSet<M> {
    type Item = &'a M;
    type IntoIter = std::slice::Iter<'a, M>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
