//! Working state shared by the Prim variants.

use crate::edge::{EdgeRecord, VertexId, Weight};
use crate::error::Result;
use crate::list::OrderedEdgeList;

use super::FrontierStats;

/// Per-run `visited`, `parent`, and `key` arrays plus frontier counters.
///
/// A key of `None` stands for +infinity.
pub(super) struct PrimState {
    visited: Vec<bool>,
    parent: Vec<Option<VertexId>>,
    key: Vec<Option<Weight>>,
    stats: FrontierStats,
}

impl PrimState {
    pub(super) fn new(vertex_count: usize, start: VertexId) -> Self {
        let mut key = vec![None; vertex_count];
        key[start.get()] = Some(0);
        Self {
            visited: vec![false; vertex_count],
            parent: vec![None; vertex_count],
            key,
            stats: FrontierStats::default(),
        }
    }

    pub(super) fn is_visited(&self, vertex: VertexId) -> bool {
        self.visited[vertex.get()]
    }

    pub(super) fn visit(&mut self, vertex: VertexId) {
        self.visited[vertex.get()] = true;
    }

    /// Lowers the key of `edge.dest()` when it is unvisited and `edge` is
    /// strictly lighter than its current key. Returns whether it did.
    pub(super) fn relax(&mut self, edge: &EdgeRecord) -> bool {
        let target = edge.dest().get();
        let weight = edge.weight();
        if self.visited[target] || self.key[target].is_some_and(|key| key <= weight) {
            return false;
        }
        self.parent[target] = Some(edge.src());
        self.key[target] = Some(weight);
        true
    }

    /// Finds the unvisited vertex with the smallest finite key; the lowest
    /// index wins ties.
    pub(super) fn lightest_unvisited(&self) -> Option<(VertexId, Weight)> {
        let mut best: Option<(VertexId, Weight)> = None;
        for (index, (visited, key)) in self.visited.iter().zip(&self.key).enumerate() {
            let Some(key) = *key else { continue };
            if *visited || best.is_some_and(|(_, lightest)| lightest <= key) {
                continue;
            }
            best = Some((VertexId::from_checked(index), key));
        }
        best
    }

    pub(super) fn parent_of(&self, vertex: VertexId) -> Option<VertexId> {
        self.parent[vertex.get()]
    }

    pub(super) fn push(&mut self, frontier: &mut OrderedEdgeList, edge: EdgeRecord) {
        self.stats.pushes = self.stats.pushes.saturating_add(1);
        frontier.insert(edge);
    }

    /// Pops the lightest frontier entry, counting it as stale when its
    /// vertex was already visited.
    pub(super) fn pop(&mut self, frontier: &mut OrderedEdgeList) -> Result<EdgeRecord> {
        let edge = frontier.remove_front()?;
        self.record_pop(edge.dest());
        Ok(edge)
    }

    pub(super) fn record_pop(&mut self, vertex: VertexId) {
        self.stats.pops = self.stats.pops.saturating_add(1);
        if self.is_visited(vertex) {
            self.stats.stale_pops = self.stats.stale_pops.saturating_add(1);
        }
    }

    pub(super) fn into_parts(self) -> (Vec<Option<VertexId>>, Vec<Option<Weight>>, FrontierStats) {
        (self.parent, self.key, self.stats)
    }
}
