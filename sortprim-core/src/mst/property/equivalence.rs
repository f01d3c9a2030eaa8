//! Property 1: Equivalence with the sequential oracle.
//!
//! For any generated input graph, verifies that every selection mode grows a
//! tree with the same total weight and edge count as the minimum spanning
//! forest restricted to vertex 0's component, and that the blended and
//! frontier-only modes produce the same parent mapping.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::mst::FrontierSelection;

use super::helpers::{build_graph, context};
use super::oracle::sequential_kruskal;
use super::types::MstFixture;

/// Runs the oracle equivalence property for the given fixture.
pub(super) fn run_oracle_equivalence_property(fixture: &MstFixture) -> TestCaseResult {
    let graph = build_graph(fixture)?;
    let oracle = sequential_kruskal(fixture.vertex_count, &fixture.edges);

    let mut trees = Vec::with_capacity(FrontierSelection::ALL.len());
    for selection in FrontierSelection::ALL {
        let tree = graph.compute_mst_with(selection).map_err(|e| {
            TestCaseError::fail(format!(
                "{selection} failed: {e} ({})",
                context(fixture)
            ))
        })?;

        if tree.total_weight() != oracle.root_component_weight {
            return Err(TestCaseError::fail(format!(
                "total weight mismatch: {selection}={}, oracle={} ({})",
                tree.total_weight(),
                oracle.root_component_weight,
                context(fixture),
            )));
        }

        let expected_edges = oracle.root_component_size.saturating_sub(1);
        if tree.edge_count() != expected_edges {
            return Err(TestCaseError::fail(format!(
                "edge count mismatch: {selection}={}, oracle={expected_edges} ({})",
                tree.edge_count(),
                context(fixture),
            )));
        }

        if tree.is_spanning() != (oracle.component_count == 1) {
            return Err(TestCaseError::fail(format!(
                "spanning mismatch: {selection} spanning={}, oracle components={} ({})",
                tree.is_spanning(),
                oracle.component_count,
                context(fixture),
            )));
        }

        trees.push(tree);
    }

    let (blended, frontier_only) = match trees.as_slice() {
        [blended, frontier_only, ..] => (blended, frontier_only),
        _ => return Err(TestCaseError::fail("expected a tree per selection mode")),
    };
    if blended.parents() != frontier_only.parents() {
        return Err(TestCaseError::fail(format!(
            "blended and frontier-only parents differ: {:?} vs {:?} ({})",
            blended.parents(),
            frontier_only.parents(),
            context(fixture),
        )));
    }

    Ok(())
}
