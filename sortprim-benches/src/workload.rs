//! Seeded edge workloads for the list benchmarks.

use std::fmt;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use sortprim_core::{EdgeRecord, MstError, VertexId, Weight};

/// Arrival order of inserted weights.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InsertPattern {
    /// Non-decreasing weights; every insert appends at the tail.
    Ascending,
    /// Strictly decreasing weights; every insert becomes the new head.
    Descending,
    /// Uniform weights in `1..=10`, the CLI's default range.
    Random,
}

impl InsertPattern {
    /// Every pattern, in declaration order.
    pub const ALL: [Self; 3] = [Self::Ascending, Self::Descending, Self::Random];
}

impl fmt::Display for InsertPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
            Self::Random => "random",
        })
    }
}

/// Builds `len` edges from vertex 0 to vertex 1 whose weights follow
/// `pattern`.
///
/// # Errors
/// Propagates [`MstError::VertexOutOfRange`] from endpoint validation.
pub fn edges(len: usize, pattern: InsertPattern, seed: u64) -> Result<Vec<EdgeRecord>, MstError> {
    let src = VertexId::new(0, 2)?;
    let dest = VertexId::new(1, 2)?;
    let mut rng = SmallRng::seed_from_u64(seed);
    let upper = Weight::try_from(len).unwrap_or(Weight::MAX);
    Ok((0..upper)
        .map(|step| {
            let weight = match pattern {
                InsertPattern::Ascending => step,
                InsertPattern::Descending => upper.saturating_sub(step),
                InsertPattern::Random => rng.gen_range(1..=10),
            };
            EdgeRecord::new(src, dest, weight)
        })
        .collect())
}
