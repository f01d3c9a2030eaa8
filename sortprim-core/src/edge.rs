//! Vertex identifiers and weighted edge records.

use std::fmt;

use crate::error::{MstError, Result};

/// Integer edge weight.
pub type Weight = i64;

/// Sum of edge weights.
///
/// Wide enough that adding up to `usize::MAX` weights of either sign cannot
/// overflow.
pub type WeightSum = i128;

/// Identifier of a vertex inside a graph with a known vertex count.
///
/// Construction is validated against the vertex count, so holding a
/// `VertexId` means the index was in range for the graph it came from.
///
/// # Examples
/// ```
/// use sortprim_core::{MstError, VertexId};
///
/// let vertex = VertexId::new(2, 3).expect("2 is inside a 3-vertex graph");
/// assert_eq!(vertex.get(), 2);
/// assert!(matches!(
///     VertexId::new(3, 3),
///     Err(MstError::VertexOutOfRange { vertex: 3, vertex_count: 3 })
/// ));
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct VertexId(usize);

impl VertexId {
    /// Validates `index` against `vertex_count`.
    ///
    /// # Errors
    /// Returns [`MstError::VertexOutOfRange`] when `index >= vertex_count`.
    pub const fn new(index: usize, vertex_count: usize) -> Result<Self> {
        if index < vertex_count {
            Ok(Self(index))
        } else {
            Err(MstError::VertexOutOfRange {
                vertex: index,
                vertex_count,
            })
        }
    }

    /// Wraps an index the caller has already checked.
    pub(crate) const fn from_checked(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw index.
    #[must_use]
    #[rustfmt::skip]
    pub const fn get(self) -> usize { self.0 }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A directed half of an undirected weighted edge.
///
/// Records carry no identity beyond their field values, so identical records
/// may coexist in the same list.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct EdgeRecord {
    src: VertexId,
    dest: VertexId,
    weight: Weight,
}

impl EdgeRecord {
    /// Creates a record from validated endpoints.
    #[must_use]
    pub const fn new(src: VertexId, dest: VertexId, weight: Weight) -> Self {
        Self { src, dest, weight }
    }

    /// Returns the endpoint the record was stored from.
    #[must_use]
    #[rustfmt::skip]
    pub const fn src(&self) -> VertexId { self.src }

    /// Returns the endpoint the record points at.
    #[must_use]
    #[rustfmt::skip]
    pub const fn dest(&self) -> VertexId { self.dest }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> Weight { self.weight }

    /// Returns the same edge seen from the other endpoint.
    #[must_use]
    pub const fn reversed(&self) -> Self {
        Self {
            src: self.dest,
            dest: self.src,
            weight: self.weight,
        }
    }
}
