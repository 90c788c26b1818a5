//! # commutator-algebra
//!
//! Ambient associative algebras for the commutator workspace.
//!
//! This crate provides:
//! - The `AssociativeElement` interface consumed by the Lie-algebra layer
//! - Square matrices `M_n(R)` over a commutative ring
//! - The free associative algebra on named letters

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod free;
pub mod matrix;
pub mod traits;

pub use free::{FreeAlgebra, FreeElement, Word};
pub use matrix::SquareMatrix;
pub use traits::AssociativeElement;
