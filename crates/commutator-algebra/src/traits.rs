//! The ambient-algebra interface.

use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::ops::{Add, Mul, Neg, Sub};

use commutator_rings::CommutativeRing;

/// An element of an associative algebra over a commutative base ring.
///
/// This is the full interface a Lie-algebra layer needs from its ambient
/// algebra: ring arithmetic (multiplication need not commute), an additive
/// identity, a zero test, the two-sided module action of the base ring,
/// and subscript access into the element's own representation.
///
/// The additive identity is exposed as `zero_like` rather than an
/// associated function because the identity can depend on runtime shape:
/// the dimension of a matrix algebra, or the generator table of a free
/// algebra. That shape travels with each element.
pub trait AssociativeElement:
    Clone
    + Eq
    + Hash
    + Debug
    + Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    /// The commutative base ring acting on the algebra.
    type Scalar: CommutativeRing;

    /// The index type accepted by `entry`.
    type Index;

    /// The value produced by `entry`.
    type Entry;

    /// The additive identity of the algebra this element belongs to.
    #[must_use]
    fn zero_like(&self) -> Self;

    /// Returns true if this is the additive identity.
    fn is_zero(&self) -> bool;

    /// The left action `scalar * self`.
    #[must_use]
    fn scale_left(&self, scalar: &Self::Scalar) -> Self;

    /// The right action `self * scalar`.
    #[must_use]
    fn scale_right(&self, scalar: &Self::Scalar) -> Self;

    /// Subscript access, delegating to the element's own representation.
    ///
    /// Returns `None` for an index outside the representation.
    fn entry(&self, index: Self::Index) -> Option<Self::Entry>;

    /// Short description of the algebra this element belongs to, for
    /// diagnostics only.
    fn algebra_description(&self) -> String;
}
