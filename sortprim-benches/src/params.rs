//! Benchmark parameter labels.

use std::fmt;

use sortprim_core::FrontierSelection;

use crate::workload::InsertPattern;

/// Parameters for a spanning-tree benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct MstBenchParams {
    /// Number of vertices in the complete graph.
    pub vertex_count: usize,
    /// Frontier selection under test.
    pub selection: FrontierSelection,
}

impl fmt::Display for MstBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},{}", self.vertex_count, self.selection)
    }
}

/// Parameters for an ordered-list insertion benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct ListBenchParams {
    /// Number of edges inserted.
    pub len: usize,
    /// Order in which the weights arrive.
    pub pattern: InsertPattern,
}

impl fmt::Display for ListBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},{}", self.len, self.pattern)
    }
}
