//! Benchmark setup error type.

use sortprim_core::MstError;

/// Errors that may occur while preparing benchmark inputs.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Graph generation or tree construction failed.
    #[error("MST setup failed: {0}")]
    Mst(#[from] MstError),
}
