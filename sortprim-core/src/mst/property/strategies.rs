//! Strategy builders for MST property-based tests.
//!
//! Provides graph generation strategies that produce varied weight
//! distributions and topologies. Each generator emits `(src, dest, weight)`
//! triples in the order they are fed to the graph, so adjacency-list tie
//! order is part of the fixture.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::edge::Weight;

use super::types::{MstFixture, WeightDistribution};

/// Minimum vertex count for most generated graphs.
const MIN_VERTICES: usize = 2;
/// Maximum vertex count for most generated graphs.
const MAX_VERTICES: usize = 40;
/// Maximum vertex count for complete graphs (kept smaller because the
/// sorted-list frontier makes dense inputs quadratic per insert).
const COMPLETE_MAX_VERTICES: usize = 24;
/// Weights at and next to the `Weight` bounds, plus the values around zero.
const EXTREME_WEIGHTS: [Weight; 7] = [
    Weight::MIN,
    Weight::MIN + 1,
    -1,
    0,
    1,
    Weight::MAX - 1,
    Weight::MAX,
];

/// Generates MST fixtures covering every weight distribution.
pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates a fixture for a specific weight distribution.
///
/// Useful for targeted rstest cases where the distribution is chosen
/// explicitly rather than sampled by proptest.
pub(super) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> MstFixture {
    match distribution {
        WeightDistribution::Distinct => generate_distinct_weights(rng),
        WeightDistribution::ManyIdentical => generate_identical_weights(rng),
        WeightDistribution::Sparse => generate_sparse(rng),
        WeightDistribution::Complete => generate_complete(rng),
        WeightDistribution::Disconnected => generate_disconnected(rng),
        WeightDistribution::Extreme => generate_extreme_weights(rng),
    }
}

// ── Distinct weights ────────────────────────────────────────────────────

/// Generates a random graph over a random spanning path where every edge
/// gets a different weight.
fn generate_distinct_weights(rng: &mut SmallRng) -> MstFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let mut pairs = spanning_path(vertex_count, rng);
    let edge_probability: f64 = rng.gen_range(0.2..=0.6);
    pairs.extend(all_pairs(0, vertex_count).filter(|_| rng.gen_bool(edge_probability)));

    let mut weights: Vec<Weight> = (1..).take(pairs.len()).collect();
    shuffle(&mut weights, rng);
    let edges = pairs
        .into_iter()
        .zip(weights)
        .map(|((s, t), w)| oriented(s, t, w, rng))
        .collect();

    MstFixture {
        vertex_count,
        edges,
        distribution: WeightDistribution::Distinct,
    }
}

// ── Many identical weights ──────────────────────────────────────────────

/// Generates a connected graph where large groups of edges share the same
/// weight, so frontier order decides which parent each vertex receives.
fn generate_identical_weights(rng: &mut SmallRng) -> MstFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let pool_size = rng.gen_range(1..=3);
    let pool: Vec<Weight> = (0..pool_size).map(|_| rng.gen_range(1..=10)).collect();
    let edge_probability: f64 = rng.gen_range(0.3..=0.7);

    let mut pairs = spanning_path(vertex_count, rng);
    pairs.extend(all_pairs(0, vertex_count).filter(|_| rng.gen_bool(edge_probability)));
    let edges = pairs
        .into_iter()
        .map(|(s, t)| {
            let weight = pool[rng.gen_range(0..pool.len())];
            oriented(s, t, weight, rng)
        })
        .collect();

    MstFixture {
        vertex_count,
        edges,
        distribution: WeightDistribution::ManyIdentical,
    }
}

// ── Sparse ──────────────────────────────────────────────────────────────

/// Generates a sparse graph by first building a random spanning tree
/// (guaranteeing connectivity) and then adding a small number of extra
/// edges, including the occasional self-loop and parallel edge.
fn generate_sparse(rng: &mut SmallRng) -> MstFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let mut edges: Vec<(usize, usize, Weight)> = spanning_path(vertex_count, rng)
        .into_iter()
        .map(|(s, t)| {
            let weight = rng.gen_range(-50..=50);
            oriented(s, t, weight, rng)
        })
        .collect();

    let extra_count = rng.gen_range(vertex_count / 2..=vertex_count);
    for _ in 0..extra_count {
        let s = rng.gen_range(0..vertex_count);
        let t = rng.gen_range(0..vertex_count);
        edges.push((s, t, rng.gen_range(-50..=50)));
    }

    MstFixture {
        vertex_count,
        edges,
        distribution: WeightDistribution::Sparse,
    }
}

// ── Complete ────────────────────────────────────────────────────────────

/// Generates a complete graph with weights in `1..=10`, listed as `(i, j)`
/// for every `i < j`.
fn generate_complete(rng: &mut SmallRng) -> MstFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=COMPLETE_MAX_VERTICES);
    let edges = all_pairs(0, vertex_count)
        .map(|(s, t)| (s, t, rng.gen_range(1..=10)))
        .collect();

    MstFixture {
        vertex_count,
        edges,
        distribution: WeightDistribution::Complete,
    }
}

// ── Disconnected ────────────────────────────────────────────────────────

/// Generates a graph with 2-5 components, each connected internally. No
/// cross-component edges are created, so the tree only spans vertex 0's
/// component.
fn generate_disconnected(rng: &mut SmallRng) -> MstFixture {
    let component_count = rng.gen_range(2..=5);
    let component_sizes: Vec<usize> = (0..component_count)
        .map(|_| rng.gen_range(1..=10))
        .collect();
    let vertex_count: usize = component_sizes.iter().sum();
    let mut edges = Vec::new();
    let mut offset = 0;

    for &size in &component_sizes {
        let edge_probability: f64 = rng.gen_range(0.3..=0.8);
        for step in 1..size {
            edges.push((offset + step - 1, offset + step, rng.gen_range(1..=20)));
        }
        for (s, t) in all_pairs(offset, size) {
            if rng.gen_bool(edge_probability) {
                edges.push((s, t, rng.gen_range(1..=20)));
            }
        }
        offset += size;
    }
    shuffle(&mut edges, rng);

    MstFixture {
        vertex_count,
        edges,
        distribution: WeightDistribution::Disconnected,
    }
}

// ── Extreme weights ─────────────────────────────────────────────────────

/// Generates a connected graph whose weights come from [`EXTREME_WEIGHTS`],
/// so tree totals can run past the range of a single `Weight` in either
/// direction. Extra edges may repeat a pair or loop on one vertex.
fn generate_extreme_weights(rng: &mut SmallRng) -> MstFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let mut edges: Vec<(usize, usize, Weight)> = spanning_path(vertex_count, rng)
        .into_iter()
        .map(|(s, t)| {
            let weight = extreme_weight(rng);
            oriented(s, t, weight, rng)
        })
        .collect();

    let extra_count = rng.gen_range(0..=vertex_count);
    for _ in 0..extra_count {
        let s = rng.gen_range(0..vertex_count);
        let t = rng.gen_range(0..vertex_count);
        edges.push((s, t, extreme_weight(rng)));
    }

    MstFixture {
        vertex_count,
        edges,
        distribution: WeightDistribution::Extreme,
    }
}

fn extreme_weight(rng: &mut SmallRng) -> Weight {
    EXTREME_WEIGHTS[rng.gen_range(0..EXTREME_WEIGHTS.len())]
}

// ── Helpers ─────────────────────────────────────────────────────────────

/// Returns the consecutive pairs of a random permutation, which together
/// connect every vertex.
fn spanning_path(vertex_count: usize, rng: &mut SmallRng) -> Vec<(usize, usize)> {
    let mut perm: Vec<usize> = (0..vertex_count).collect();
    shuffle(&mut perm, rng);
    perm.windows(2).map(|pair| (pair[0], pair[1])).collect()
}

/// Returns all unique undirected pairs `(offset + i, offset + j)` where
/// `i < j < size`.
fn all_pairs(offset: usize, size: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..size).flat_map(move |i| ((i + 1)..size).map(move |j| (offset + i, offset + j)))
}

/// Randomly flips the endpoint order so both orientations reach `add_edge`.
fn oriented(s: usize, t: usize, weight: Weight, rng: &mut SmallRng) -> (usize, usize, Weight) {
    if rng.gen_bool(0.5) {
        (s, t, weight)
    } else {
        (t, s, weight)
    }
}

/// Fisher-Yates shuffle using the provided RNG.
fn shuffle<T>(slice: &mut [T], rng: &mut SmallRng) {
    for i in (1..slice.len()).rev() {
        let j = rng.gen_range(0..=i);
        slice.swap(i, j);
    }
}

// Proptest `Arbitrary` implementation for `WeightDistribution` is provided
// manually because we want biased weighting (ManyIdentical is the most
// important stress case for tie-breaking).
impl proptest::arbitrary::Arbitrary for WeightDistribution {
    type Parameters = ();
    type Strategy = proptest::strategy::TupleUnion<(
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
    )>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            2 => Just(Self::Distinct),
            3 => Just(Self::ManyIdentical),
            2 => Just(Self::Sparse),
            2 => Just(Self::Complete),
            2 => Just(Self::Disconnected),
            2 => Just(Self::Extreme),
        ]
    }
}
