//! # Commutator
//!
//! Lie algebras realized inside associative algebras, written in Rust.
//!
//! Any associative algebra `A` over a commutative ring becomes a Lie
//! algebra under the commutator bracket `[a, b] = a*b - b*a`. This
//! workspace implements the Lie subalgebra generated by a chosen sequence
//! of elements of `A`, with canonical construction (equal generator
//! sequences share one instance) and exact arithmetic throughout.
//!
//! ## Features
//!
//! - **Canonical structures**: parent identity is a pointer comparison
//! - **Exact scalars**: arbitrary precision `Z` and `Q` over `dashu`
//! - **Ambient algebras**: square matrices and free associative algebras
//! - **Coercion-aware scalar action**: incoercible scalars report
//!   "not applicable" instead of failing, for dispatch chains
//!
//! ## Quick Start
//!
//! ```rust
//! use commutator::prelude::*;
//!
//! let free = FreeAlgebra::<Q>::new(&["p", "q"]);
//! let lie = LieAlgebraFromAssociative::new(free.generators()).unwrap();
//! let gens = lie.lie_algebra_generators();
//! let (p, q) = (&gens[0], &gens[1]);
//!
//! assert_eq!(p.bracket(q).to_string(), "p*q - q*p");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use commutator_algebra as algebra;
pub use commutator_lie as lie;
pub use commutator_rings as rings;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use commutator_algebra::{AssociativeElement, FreeAlgebra, FreeElement, SquareMatrix, Word};
    pub use commutator_lie::{
        Family, LieAlgebraFromAssociative, LieElement, LieError, ScalarAction,
    };
    pub use commutator_rings::{Coerce, CommutativeRing, Field, Ring, Q, Z};
}
