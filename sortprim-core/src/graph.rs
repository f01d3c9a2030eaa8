//! Undirected weighted graph stored as per-vertex ordered adjacency lists.

use tracing::{debug, instrument};

use crate::edge::{EdgeRecord, VertexId, Weight};
use crate::error::Result;
use crate::list::{self, OrderedEdgeList};

/// Undirected graph with a fixed vertex count.
///
/// Every logical edge is stored twice, once in each endpoint's
/// [`OrderedEdgeList`], so each adjacency list is sorted by weight.
///
/// # Examples
/// ```
/// use sortprim_core::Graph;
///
/// let mut graph = Graph::new(3);
/// graph.add_edge(0, 1, 5).expect("endpoints are in range");
/// graph.add_edge(0, 2, 3).expect("endpoints are in range");
///
/// let zero = graph.vertex(0).expect("vertex 0 exists");
/// let weights: Vec<i64> = graph
///     .neighbours(zero)
///     .expect("vertex belongs to the graph")
///     .map(|edge| edge.weight())
///     .collect();
/// assert_eq!(weights, vec![3, 5]);
/// assert!(graph.add_edge(0, 3, 1).is_err());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    adjacency: Vec<OrderedEdgeList>,
}

impl Graph {
    /// Creates a graph with `vertex_count` isolated vertices.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![OrderedEdgeList::new(); vertex_count],
        }
    }

    /// Builds a graph by feeding `edges` to [`Graph::add_edge`] in order.
    ///
    /// # Errors
    /// Returns [`crate::MstError::VertexOutOfRange`] for the first edge with
    /// an endpoint outside `[0, vertex_count)`.
    #[instrument(name = "core.graph.from_edges", level = "debug", err, skip(edges))]
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, Weight)>,
    {
        let mut graph = Self::new(vertex_count);
        for (src, dest, weight) in edges {
            graph.add_edge(src, dest, weight)?;
        }
        debug!(edges = graph.edge_count(), "graph constructed");
        Ok(graph)
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of logical (undirected) edges added so far.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(OrderedEdgeList::len).sum::<usize>() / 2
    }

    /// Validates a raw vertex index against this graph.
    ///
    /// # Errors
    /// Returns [`crate::MstError::VertexOutOfRange`] when `index` is not a
    /// vertex of this graph.
    pub fn vertex(&self, index: usize) -> Result<VertexId> {
        VertexId::new(index, self.vertex_count())
    }

    /// Adds the undirected edge `{src, dest}` with `weight`.
    ///
    /// Both endpoints are validated before either list changes, so a failed
    /// call leaves the graph untouched. Self-loops are stored twice in the
    /// same list.
    ///
    /// # Errors
    /// Returns [`crate::MstError::VertexOutOfRange`] when either endpoint is
    /// not a vertex of this graph.
    pub fn add_edge(&mut self, src: usize, dest: usize, weight: Weight) -> Result<()> {
        let src = self.vertex(src)?;
        let dest = self.vertex(dest)?;
        self.insert_symmetric(EdgeRecord::new(src, dest, weight));
        Ok(())
    }

    /// Adds `record` and its reverse, re-validating both endpoints against
    /// this graph.
    ///
    /// # Errors
    /// Returns [`crate::MstError::VertexOutOfRange`] when the record was
    /// built for a larger graph.
    pub fn add_record(&mut self, record: &EdgeRecord) -> Result<()> {
        self.add_edge(record.src().get(), record.dest().get(), record.weight())
    }

    /// Returns the adjacency list of `vertex`, lightest edge first.
    ///
    /// # Errors
    /// Returns [`crate::MstError::VertexOutOfRange`] when `vertex` was
    /// validated against a larger graph.
    pub fn neighbours(&self, vertex: VertexId) -> Result<list::Iter<'_>> {
        Ok(self.adjacency_of(vertex)?.iter())
    }

    pub(crate) fn adjacency_of(&self, vertex: VertexId) -> Result<&OrderedEdgeList> {
        let index = self.vertex(vertex.get())?.get();
        Ok(&self.adjacency[index])
    }

    fn insert_symmetric(&mut self, record: EdgeRecord) {
        self.adjacency[record.src().get()].insert(record);
        self.adjacency[record.dest().get()].insert(record.reversed());
    }
}
