//! Property 2: Structural invariant verification.
//!
//! For any tree produced by any selection mode, verifies:
//!
//! - **Root**: vertex 0 has no parent and key 0.
//! - **Backed edges**: every `(parent, child)` pair is an edge of the graph
//!   whose weight equals the child's key.
//! - **Acyclicity**: following parents from any vertex reaches the root.
//! - **Reach**: a vertex has a key exactly when it has a parent or is the
//!   root.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::edge::VertexId;
use crate::graph::Graph;
use crate::mst::{FrontierSelection, SpanningTree};

use super::helpers::{build_graph, context};
use super::types::MstFixture;

/// Runs the structural invariant property for the given fixture.
pub(super) fn run_structural_invariants_property(fixture: &MstFixture) -> TestCaseResult {
    let graph = build_graph(fixture)?;

    for selection in FrontierSelection::ALL {
        let tree = graph.compute_mst_with(selection).map_err(|e| {
            TestCaseError::fail(format!("{selection} failed: {e} ({})", context(fixture)))
        })?;

        let describe = |msg: String| {
            TestCaseError::fail(format!("{selection}: {msg} ({})", context(fixture)))
        };
        validate_root(&tree).map_err(describe)?;
        validate_backed_edges(&graph, &tree).map_err(describe)?;
        validate_acyclicity(&tree).map_err(describe)?;
        validate_reach(&tree).map_err(describe)?;
    }

    Ok(())
}

// ── Validation helpers ──────────────────────────────────────────────────

fn validate_root(tree: &SpanningTree) -> Result<(), String> {
    let root = tree.root();
    if root.get() != 0 {
        return Err(format!("root is {root}, expected 0"));
    }
    if let Some(parent) = tree.parent(root) {
        return Err(format!("root has parent {parent}"));
    }
    if tree.key(root) != Some(0) {
        return Err(format!("root key is {:?}, expected Some(0)", tree.key(root)));
    }
    Ok(())
}

fn validate_backed_edges(graph: &Graph, tree: &SpanningTree) -> Result<(), String> {
    for edge in tree.edges() {
        let backed = graph
            .neighbours(edge.parent)
            .map_err(|e| format!("parent {} is not a vertex: {e}", edge.parent))?
            .any(|record| record.dest() == edge.child && record.weight() == edge.weight);
        if !backed {
            return Err(format!(
                "tree edge {} - {} (weight {}) is not in the graph",
                edge.parent, edge.child, edge.weight,
            ));
        }
    }
    Ok(())
}

fn validate_acyclicity(tree: &SpanningTree) -> Result<(), String> {
    let parents = tree.parents();
    for start in 0..parents.len() {
        let mut current = start;
        let mut steps = 0_usize;
        while let Some(parent) = parents[current] {
            current = parent.get();
            steps += 1;
            if steps > parents.len() {
                return Err(format!("parent chain from {start} does not terminate"));
            }
        }
        if steps > 0 && current != tree.root().get() {
            return Err(format!("parent chain from {start} ends at {current}, not the root"));
        }
    }
    Ok(())
}

fn validate_reach(tree: &SpanningTree) -> Result<(), String> {
    for (index, parent) in tree.parents().iter().enumerate() {
        let Ok(vertex) = VertexId::new(index, tree.vertex_count()) else {
            return Err(format!("vertex {index} is out of range"));
        };
        let reached = parent.is_some() || vertex == tree.root();
        if reached != tree.key(vertex).is_some() {
            return Err(format!(
                "vertex {index}: reached={reached} but key={:?}",
                tree.key(vertex)
            ));
        }
    }
    Ok(())
}
