//! # commutator-lie
//!
//! Lie algebras realized inside an associative algebra.
//!
//! The bracket is the associative commutator `[a, b] = a*b - b*a`. A
//! [`LieAlgebraFromAssociative`] is the Lie subalgebra generated by a
//! fixed sequence of elements of some ambient algebra; construction is
//! canonical, so equal generator sequences share one instance and parent
//! identity is a pointer comparison.
//!
//! This crate provides:
//! - [`LieAlgebraFromAssociative`] and its element type [`LieElement`]
//! - [`Family`], the ordered generator view
//! - [`ScalarAction`], the dispatch outcome of acting with a scalar
//! - the process-wide canonicalization [`registry`]

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod action;
pub mod algebra;
pub mod element;
pub mod error;
pub mod family;
pub mod registry;

#[cfg(test)]
mod proptests;

pub use action::ScalarAction;
pub use algebra::{LieAlgebraFromAssociative, Scalar};
pub use element::LieElement;
pub use error::LieError;
pub use family::Family;
