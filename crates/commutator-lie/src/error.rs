//! Error types for Lie-algebra construction and arithmetic.

use thiserror::Error;

/// An error from constructing or operating on a Lie algebra.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LieError {
    /// Construction was given an empty generator sequence.
    #[error("need at least one generator")]
    EmptyGenerators,

    /// Division by a scalar with no multiplicative inverse in the base ring.
    #[error("{0} is not a unit in the base ring")]
    NoInverse(String),

    /// A value with no image in the ambient algebra.
    #[error("value cannot be coerced into the ambient algebra")]
    NotCoercible,
}
