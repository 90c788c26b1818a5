//! Algebraic structure traits.
//!
//! This module defines the trait ladder shared by every scalar ring in the
//! workspace, together with the coercion capability used to move values
//! between rings.

use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::ops::{Add, Mul, Neg, Sub};

/// A ring is a set with addition and multiplication operations.
///
/// Elements are hashable and displayable so that downstream structures can
/// be keyed on them and rendered in diagnostics.
///
/// # Laws
///
/// - Addition is associative and commutative with identity `zero()`
/// - Multiplication is associative with identity `one()`
/// - Multiplication distributes over addition
/// - Every element has an additive inverse (`neg`)
pub trait Ring:
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
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Returns true if this is the additive identity.
    fn is_zero(&self) -> bool;

    /// Returns true if this is the multiplicative identity.
    fn is_one(&self) -> bool;

    /// Returns the multiplicative inverse if this element is a unit.
    ///
    /// Returns `None` for non-units (in particular for zero).
    fn inverse(&self) -> Option<Self>;

    /// Short name of the ring, for diagnostics only.
    fn ring_name() -> &'static str;
}

/// A commutative ring where multiplication is commutative.
pub trait CommutativeRing: Ring {}

/// A field is a commutative ring where every non-zero element is a unit.
///
/// # Laws
///
/// `inverse()` returns `Some` exactly for non-zero elements.
pub trait Field: CommutativeRing {}

/// Coercion of values into the ring `R`.
///
/// Implementing `Coerce<R>` declares that values of a type have a
/// well-defined interpretation in `R`. The capability is a property of the
/// type; the conversion of an individual value may still fail, in which
/// case `coerce` returns `None` (for example `Q -> Z` on a proper
/// fraction).
pub trait Coerce<R> {
    /// Converts this value into `R`, or `None` if this value has no image.
    fn coerce(&self) -> Option<R>;
}

/// Every value trivially coerces into its own type.
impl<T: Clone> Coerce<T> for T {
    fn coerce(&self) -> Option<T> {
        Some(self.clone())
    }
}
