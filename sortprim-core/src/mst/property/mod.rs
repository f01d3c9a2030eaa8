//! Property-based tests for the Prim engines.
//!
//! Checks every [`super::FrontierSelection`] against a sequential Kruskal
//! oracle, validates the structure of the parent mapping (rooted, acyclic,
//! backed by real graph edges), and verifies that repeated construction and
//! repeated runs are deterministic across graph topologies with varied
//! weight distributions.

mod equivalence;
mod strategies;
mod structural;
