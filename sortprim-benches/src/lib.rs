//! Benchmark support crate for sortprim.
//!
//! Provides seeded workloads and parameter labels for the Criterion
//! benchmarks over ordered-list insertion and spanning-tree construction.

pub mod error;
pub mod params;
pub mod workload;
