//! Error types for the sortprim core library.
//!
//! Defines the error enum exposed by the public API, its stable machine-readable
//! codes, and a convenient result alias.

use std::fmt;

use thiserror::Error;

use crate::edge::Weight;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Errors returned by edge lists, graphs, and the MST engine.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum MstError {
    /// Front removal was attempted on an empty edge list.
    #[error("cannot remove the front of an empty edge list")]
    EmptyQueue,
    /// A vertex id fell outside `[0, vertex_count)`.
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange {
        /// The offending vertex id, as provided.
        vertex: usize,
        /// The number of vertices in the graph.
        vertex_count: usize,
    },
    /// A generator was configured with an empty weight range.
    #[error("weight range is empty: min {min} exceeds max {max}")]
    InvalidWeightRange {
        /// Configured lower bound (inclusive).
        min: Weight,
        /// Configured upper bound (inclusive).
        max: Weight,
    },
}

define_error_codes! {
    /// Stable codes describing [`MstError`] variants.
    enum MstErrorCode for MstError {
        /// Front removal was attempted on an empty edge list.
        EmptyQueue => EmptyQueue => "EMPTY_QUEUE",
        /// A vertex id fell outside the graph.
        VertexOutOfRange => VertexOutOfRange { .. } => "VERTEX_OUT_OF_RANGE",
        /// A generator was configured with an empty weight range.
        InvalidWeightRange => InvalidWeightRange { .. } => "INVALID_WEIGHT_RANGE",
    }
}

/// Convenient result alias for sortprim operations.
pub type Result<T, E = MstError> = std::result::Result<T, E>;
