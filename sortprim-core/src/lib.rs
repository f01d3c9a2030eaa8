//! Minimum spanning trees grown with Prim's algorithm over a sorted
//! linked-list frontier.
//!
//! [`OrderedEdgeList`] keeps [`EdgeRecord`]s in ascending weight order and
//! serves both as a vertex's adjacency list and as the Prim frontier.
//! [`Graph`] stores one list per vertex and [`Graph::compute_mst`] returns the
//! [`SpanningTree`] rooted at vertex 0. With the `generator` feature,
//! [`GraphGenerator`] produces seeded complete graphs to feed it.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod edge;
mod error;
#[cfg(feature = "generator")]
mod generator;
mod graph;
pub mod list;
mod mst;

#[cfg(feature = "generator")]
#[cfg_attr(docsrs, doc(cfg(feature = "generator")))]
pub use crate::generator::GraphGenerator;
pub use crate::{
    edge::{EdgeRecord, VertexId, Weight, WeightSum},
    error::{MstError, MstErrorCode, Result},
    graph::Graph,
    list::OrderedEdgeList,
    mst::{FrontierSelection, FrontierStats, SpanningTree, TreeEdge},
};
