//! Prim-style minimum spanning tree construction over a [`Graph`].
//!
//! The default engine grows the tree from vertex 0 using an
//! [`OrderedEdgeList`] as its frontier. After relaxing the neighbours of each
//! popped vertex it also scans every key and re-queues the lightest
//! unvisited vertex, so the frontier carries duplicate and stale entries and
//! the loop only stops once the frontier drains. That behaviour is kept as
//! [`FrontierSelection::Blended`]; [`FrontierSelection::FrontierOnly`] and
//! [`FrontierSelection::KeyScan`] are the two single-mechanism variants.
//!
//! All three produce a tree of minimum total weight on a connected graph.
//! `Blended` and `FrontierOnly` also agree on every parent pointer because
//! equal weights leave the frontier in insertion order, which keeps each
//! re-queued entry behind the one relaxation already queued for the same
//! vertex. `KeyScan` breaks ties by lowest vertex index instead and may pick
//! different parents on graphs with repeated weights.

mod state;

use std::fmt;

use tracing::{Span, debug, field, instrument, warn};

use crate::edge::{EdgeRecord, VertexId, Weight, WeightSum};
use crate::error::Result;
use crate::graph::Graph;
use crate::list::OrderedEdgeList;

use self::state::PrimState;

/// How the next vertex to attach is chosen.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum FrontierSelection {
    /// Frontier pops plus an independent key scan that re-queues the lightest
    /// unvisited vertex after every relaxation round. Popped entries are
    /// processed even when their vertex is already visited.
    #[default]
    Blended,
    /// Lazy Prim: only relaxations feed the frontier and entries for visited
    /// vertices are discarded when popped.
    FrontierOnly,
    /// Array Prim: no frontier; each round attaches the unvisited vertex with
    /// the smallest finite key.
    KeyScan,
}

impl FrontierSelection {
    /// Every selection mode, in declaration order.
    pub const ALL: [Self; 3] = [Self::Blended, Self::FrontierOnly, Self::KeyScan];

    /// Returns the stable label used in logs and reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blended => "blended",
            Self::FrontierOnly => "frontier-only",
            Self::KeyScan => "key-scan",
        }
    }
}

impl fmt::Display for FrontierSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Frontier traffic observed during one run.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct FrontierStats {
    /// Entries inserted into the frontier.
    pub pushes: u64,
    /// Entries removed from the frontier (rounds, for [`FrontierSelection::KeyScan`]).
    pub pops: u64,
    /// Removed entries whose vertex had already been visited.
    pub stale_pops: u64,
}

/// One edge of a [`SpanningTree`], oriented from parent to child.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct TreeEdge {
    /// Vertex already in the tree when `child` was attached.
    pub parent: VertexId,
    /// Attached vertex.
    pub child: VertexId,
    /// Weight of the connecting edge.
    pub weight: Weight,
}

/// Parent-pointer representation of the tree grown from [`SpanningTree::root`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SpanningTree {
    root: VertexId,
    parent: Vec<Option<VertexId>>,
    key: Vec<Option<Weight>>,
    selection: FrontierSelection,
    stats: FrontierStats,
}

impl SpanningTree {
    /// Returns the vertex the tree was grown from.
    #[must_use]
    #[rustfmt::skip]
    pub const fn root(&self) -> VertexId { self.root }

    /// Returns the number of vertices covered by the parent mapping.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.parent.len()
    }

    /// Returns the parent of `vertex`, or `None` for the root and for
    /// vertices the tree never reached.
    #[must_use]
    pub fn parent(&self, vertex: VertexId) -> Option<VertexId> {
        self.parent.get(vertex.get()).copied().flatten()
    }

    /// Returns the final key of `vertex`; `None` means it was never reached.
    #[must_use]
    pub fn key(&self, vertex: VertexId) -> Option<Weight> {
        self.key.get(vertex.get()).copied().flatten()
    }

    /// Returns the parent mapping indexed by vertex id.
    #[must_use]
    #[rustfmt::skip]
    pub fn parents(&self) -> &[Option<VertexId>] { &self.parent }

    /// Returns the tree edges in child order.
    pub fn edges(&self) -> impl Iterator<Item = TreeEdge> + '_ {
        self.parent
            .iter()
            .zip(&self.key)
            .enumerate()
            .filter_map(|(child, (parent, key))| {
                Some(TreeEdge {
                    parent: (*parent)?,
                    child: VertexId::from_checked(child),
                    weight: (*key)?,
                })
            })
    }

    /// Returns the number of tree edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.parent.iter().filter(|parent| parent.is_some()).count()
    }

    /// Returns the summed weight of the tree edges.
    ///
    /// The sum is widened to [`WeightSum`], so trees whose edges sit near the
    /// `Weight` bounds report their exact total.
    #[must_use]
    pub fn total_weight(&self) -> WeightSum {
        self.edges().map(|edge| WeightSum::from(edge.weight)).sum()
    }

    /// Returns `true` when every vertex other than the root has a parent.
    #[must_use]
    pub fn is_spanning(&self) -> bool {
        self.edge_count() == self.vertex_count().saturating_sub(1)
    }

    /// Returns the selection mode that produced the tree.
    #[must_use]
    #[rustfmt::skip]
    pub const fn selection(&self) -> FrontierSelection { self.selection }

    /// Returns the frontier traffic of the run.
    #[must_use]
    #[rustfmt::skip]
    pub const fn stats(&self) -> FrontierStats { self.stats }
}

impl Graph {
    /// Computes the spanning tree rooted at vertex 0 with
    /// [`FrontierSelection::Blended`].
    ///
    /// Connectivity is not checked; vertices unreachable from vertex 0 keep
    /// no parent.
    ///
    /// # Errors
    /// Returns [`crate::MstError::VertexOutOfRange`] when the graph has no
    /// vertices.
    ///
    /// # Examples
    /// ```
    /// use sortprim_core::Graph;
    ///
    /// let graph = Graph::from_edges(3, [(0, 1, 5), (0, 2, 3), (1, 2, 1)])
    ///     .expect("edges are valid");
    /// let tree = graph.compute_mst().expect("graph has vertices");
    ///
    /// let parent_of = |v| tree.parent(graph.vertex(v).expect("vertex exists")).map(|p| p.get());
    /// assert_eq!(parent_of(0), None);
    /// assert_eq!(parent_of(1), Some(2));
    /// assert_eq!(parent_of(2), Some(0));
    /// assert_eq!(tree.total_weight(), 4);
    /// ```
    pub fn compute_mst(&self) -> Result<SpanningTree> {
        self.compute_mst_with(FrontierSelection::Blended)
    }

    /// Computes the spanning tree rooted at vertex 0 with `selection`.
    ///
    /// # Errors
    /// Returns [`crate::MstError::VertexOutOfRange`] when the graph has no
    /// vertices.
    #[instrument(
        name = "core.mst",
        err,
        skip(self, selection),
        fields(vertices = self.vertex_count(), selection = %selection, tree_weight = field::Empty),
    )]
    pub fn compute_mst_with(&self, selection: FrontierSelection) -> Result<SpanningTree> {
        let root = self.vertex(0)?;
        let state = match selection {
            FrontierSelection::Blended => self.grow_blended(root)?,
            FrontierSelection::FrontierOnly => self.grow_frontier_only(root)?,
            FrontierSelection::KeyScan => self.grow_key_scan(root)?,
        };

        let (parent, key, stats) = state.into_parts();
        let tree = SpanningTree {
            root,
            parent,
            key,
            selection,
            stats,
        };
        Span::current().record("tree_weight", tree.total_weight());
        record_metrics(&stats);
        debug!(
            pushes = stats.pushes,
            pops = stats.pops,
            stale_pops = stats.stale_pops,
            tree_edges = tree.edge_count(),
            "spanning tree computed"
        );
        if !tree.is_spanning() {
            warn!(
                reached = tree.edge_count().saturating_add(1),
                vertices = tree.vertex_count(),
                "graph is not connected; some vertices have no parent"
            );
        }
        Ok(tree)
    }

    fn grow_blended(&self, root: VertexId) -> Result<PrimState> {
        let mut state = PrimState::new(self.vertex_count(), root);
        let mut frontier = OrderedEdgeList::new();
        state.push(&mut frontier, EdgeRecord::new(root, root, 0));

        while !frontier.is_empty() {
            let vertex = state.pop(&mut frontier)?.dest();
            state.visit(vertex);

            for edge in self.adjacency_of(vertex)? {
                if state.relax(edge) {
                    state.push(&mut frontier, *edge);
                }
            }

            if let Some((lightest, key)) = state.lightest_unvisited() {
                let parent = state.parent_of(lightest).unwrap_or(lightest);
                state.push(&mut frontier, EdgeRecord::new(parent, lightest, key));
            }
        }
        Ok(state)
    }

    fn grow_frontier_only(&self, root: VertexId) -> Result<PrimState> {
        let mut state = PrimState::new(self.vertex_count(), root);
        let mut frontier = OrderedEdgeList::new();
        state.push(&mut frontier, EdgeRecord::new(root, root, 0));

        while !frontier.is_empty() {
            let vertex = state.pop(&mut frontier)?.dest();
            if state.is_visited(vertex) {
                continue;
            }
            state.visit(vertex);

            for edge in self.adjacency_of(vertex)? {
                if state.relax(edge) {
                    state.push(&mut frontier, *edge);
                }
            }
        }
        Ok(state)
    }

    fn grow_key_scan(&self, root: VertexId) -> Result<PrimState> {
        let mut state = PrimState::new(self.vertex_count(), root);

        while let Some((vertex, _)) = state.lightest_unvisited() {
            state.record_pop(vertex);
            state.visit(vertex);
            for edge in self.adjacency_of(vertex)? {
                state.relax(edge);
            }
        }
        Ok(state)
    }
}

#[cfg(feature = "metrics")]
fn record_metrics(stats: &FrontierStats) {
    metrics::counter!("mst_frontier_pushes").increment(stats.pushes);
    metrics::counter!("mst_frontier_pops").increment(stats.pops);
    metrics::counter!("mst_frontier_stale_pops").increment(stats.stale_pops);
}

#[cfg(not(feature = "metrics"))]
const fn record_metrics(_stats: &FrontierStats) {}

#[cfg(test)]
mod property;
