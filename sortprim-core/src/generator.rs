//! Seedable complete-graph generator.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

use crate::edge::{EdgeRecord, VertexId, Weight};
use crate::error::{MstError, Result};
use crate::graph::Graph;

/// Produces complete graphs with uniformly drawn integer weights.
///
/// Edges are emitted as `(i, j)` for every `i < j`, row by row, each with a
/// weight drawn from the inclusive weight range. A fixed seed makes the
/// output reproducible; without one the generator draws from OS entropy.
///
/// # Examples
/// ```
/// use sortprim_core::GraphGenerator;
///
/// let generator = GraphGenerator::new()
///     .with_vertex_count(4)
///     .with_weight_range(1, 10)
///     .with_seed(7);
/// let edges = generator.generate().expect("weight range is valid");
/// assert_eq!(edges.len(), 6);
/// assert!(edges.iter().all(|edge| (1..=10).contains(&edge.weight())));
/// assert_eq!(edges, generator.generate().expect("weight range is valid"));
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GraphGenerator {
    vertex_count: usize,
    min_weight: Weight,
    max_weight: Weight,
    seed: Option<u64>,
}

impl Default for GraphGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphGenerator {
    /// Vertex count used when none is configured.
    pub const DEFAULT_VERTEX_COUNT: usize = 50;
    /// Smallest weight drawn by default.
    pub const DEFAULT_MIN_WEIGHT: Weight = 1;
    /// Largest weight drawn by default.
    pub const DEFAULT_MAX_WEIGHT: Weight = 10;

    /// Creates a generator for 50 vertices with weights in `1..=10` and no
    /// fixed seed.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertex_count: Self::DEFAULT_VERTEX_COUNT,
            min_weight: Self::DEFAULT_MIN_WEIGHT,
            max_weight: Self::DEFAULT_MAX_WEIGHT,
            seed: None,
        }
    }

    /// Sets the number of vertices.
    #[must_use]
    pub const fn with_vertex_count(mut self, vertex_count: usize) -> Self {
        self.vertex_count = vertex_count;
        self
    }

    /// Sets the inclusive weight range. It is validated on generation.
    #[must_use]
    pub const fn with_weight_range(mut self, min: Weight, max: Weight) -> Self {
        self.min_weight = min;
        self.max_weight = max;
        self
    }

    /// Fixes the random seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Returns the configured vertex count.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the configured inclusive weight range as `(min, max)`.
    #[must_use]
    pub const fn weight_range(&self) -> (Weight, Weight) {
        (self.min_weight, self.max_weight)
    }

    /// Returns the fixed seed, if any.
    #[must_use]
    #[rustfmt::skip]
    pub const fn seed(&self) -> Option<u64> { self.seed }

    /// Draws one weight per vertex pair.
    ///
    /// # Errors
    /// Returns [`MstError::InvalidWeightRange`] when the minimum weight
    /// exceeds the maximum.
    #[instrument(
        name = "core.generator",
        level = "debug",
        err,
        skip(self),
        fields(vertices = self.vertex_count, seeded = self.seed.is_some()),
    )]
    pub fn generate(&self) -> Result<Vec<EdgeRecord>> {
        if self.min_weight > self.max_weight {
            return Err(MstError::InvalidWeightRange {
                min: self.min_weight,
                max: self.max_weight,
            });
        }

        let mut rng = self
            .seed
            .map_or_else(SmallRng::from_entropy, SmallRng::seed_from_u64);
        let n = self.vertex_count;
        let mut edges = Vec::with_capacity(n.saturating_mul(n.saturating_sub(1)) / 2);
        for i in 0..n {
            for j in (i + 1)..n {
                let weight = rng.gen_range(self.min_weight..=self.max_weight);
                edges.push(EdgeRecord::new(
                    VertexId::from_checked(i),
                    VertexId::from_checked(j),
                    weight,
                ));
            }
        }
        debug!(edges = edges.len(), "complete graph generated");
        Ok(edges)
    }

    /// Generates the edges and feeds them to [`Graph::add_record`].
    ///
    /// # Errors
    /// Returns [`MstError::InvalidWeightRange`] when the minimum weight
    /// exceeds the maximum.
    pub fn build_graph(&self) -> Result<Graph> {
        let mut graph = Graph::new(self.vertex_count);
        for edge in self.generate()? {
            graph.add_record(&edge)?;
        }
        Ok(graph)
    }
}
