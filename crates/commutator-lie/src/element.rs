//! Elements of a Lie algebra realized inside an associative algebra.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::sync::Arc;

use commutator_algebra::AssociativeElement;
use commutator_rings::{Coerce, Ring};

use crate::action::ScalarAction;
use crate::algebra::{LieAlgebraFromAssociative, Scalar};
use crate::error::LieError;

/// An element of a [`LieAlgebraFromAssociative`].
///
/// Wraps one value of the ambient associative algebra together with a
/// handle on the owning structure. Elements are immutable: every
/// operation builds a new element of the *same* structure.
///
/// Binary arithmetic requires both operands to come from the same
/// canonical structure instance; mixing parents is a contract violation
/// and panics. Unifying operands from different structures is the job of
/// an upstream coercion layer, not of this type.
#[derive(Clone, Debug)]
pub struct LieElement<A: AssociativeElement> {
    parent: Arc<LieAlgebraFromAssociative<A>>,
    value: A,
}

impl<A: AssociativeElement> LieElement<A> {
    pub(crate) fn new(parent: Arc<LieAlgebraFromAssociative<A>>, value: A) -> Self {
        Self { parent, value }
    }

    /// Returns the wrapped ambient-algebra value.
    #[must_use]
    pub fn value(&self) -> &A {
        &self.value
    }

    /// Unwraps into the ambient-algebra value.
    #[must_use]
    pub fn into_value(self) -> A {
        self.value
    }

    /// Returns the structure this element belongs to.
    #[must_use]
    pub fn parent(&self) -> &Arc<LieAlgebraFromAssociative<A>> {
        &self.parent
    }

    /// Returns true if this is the zero element.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Returns true if this is not the zero element.
    #[must_use]
    pub fn is_nonzero(&self) -> bool {
        !self.is_zero()
    }

    fn wrap(&self, value: A) -> Self {
        Self {
            parent: Arc::clone(&self.parent),
            value,
        }
    }

    fn assert_same_parent(&self, rhs: &Self) {
        assert!(
            Arc::ptr_eq(&self.parent, &rhs.parent),
            "elements belong to different Lie algebras"
        );
    }

    /// Returns the Lie bracket `[self, rhs] = self*rhs - rhs*self`,
    /// computed in the ambient algebra.
    ///
    /// Antisymmetry, `[x, x] = 0`, bilinearity and the Jacobi identity
    /// all follow from associativity of the ambient product.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` belongs to a different structure.
    #[must_use]
    pub fn bracket(&self, rhs: &Self) -> Self {
        self.assert_same_parent(rhs);
        let vw = self.value.clone() * rhs.value.clone();
        let wv = rhs.value.clone() * self.value.clone();
        self.wrap(vw - wv)
    }

    /// Acts on this element with a scalar, coercing the scalar into the
    /// base ring first.
    ///
    /// If the scalar value has no image in the base ring the outcome is
    /// [`ScalarAction::NotApplicable`], signaling an outer dispatch chain
    /// to try another interpretation of the operand. With `self_on_left`
    /// the result is `value * scalar`, otherwise `scalar * value`; the
    /// side matters because the ambient algebra may be noncommutative.
    pub fn scalar_action<S>(&self, scalar: &S, self_on_left: bool) -> ScalarAction<Self>
    where
        S: Coerce<Scalar<A>>,
    {
        let Some(scalar) = scalar.coerce() else {
            return ScalarAction::NotApplicable;
        };
        let value = if self_on_left {
            self.value.scale_right(&scalar)
        } else {
            self.value.scale_left(&scalar)
        };
        ScalarAction::Applied(self.wrap(value))
    }

    /// Divides by a scalar, multiplying by its inverse in the base ring.
    ///
    /// # Errors
    ///
    /// Returns [`LieError::NoInverse`] if `x` is not a unit.
    pub fn divide(&self, x: &Scalar<A>) -> Result<Self, LieError> {
        let inv = x
            .inverse()
            .ok_or_else(|| LieError::NoInverse(x.to_string()))?;
        Ok(self.wrap(self.value.scale_right(&inv)))
    }

    /// Subscript access, delegated to the wrapped value's own indexing.
    ///
    /// Returns whatever the ambient representation returns; `None` means
    /// the index lies outside it.
    pub fn entry(&self, index: A::Index) -> Option<A::Entry> {
        self.value.entry(index)
    }
}

/// Equality is intentionally strict: elements are equal when they have
/// the same parent and equal values. Elements of different structures
/// are never equal unless both are zero.
impl<A: AssociativeElement> PartialEq for LieElement<A> {
    fn eq(&self, other: &Self) -> bool {
        if Arc::ptr_eq(&self.parent, &other.parent) {
            self.value == other.value
        } else {
            self.value.is_zero() && other.value.is_zero()
        }
    }
}

impl<A: AssociativeElement> Eq for LieElement<A> {}

/// Comparison against a raw ambient-algebra value is the cross-type
/// zero comparison only: it holds exactly when both sides are zero.
impl<A: AssociativeElement> PartialEq<A> for LieElement<A> {
    fn eq(&self, other: &A) -> bool {
        self.value.is_zero() && other.is_zero()
    }
}

impl<A: AssociativeElement> Add for &LieElement<A> {
    type Output = LieElement<A>;

    /// # Panics
    ///
    /// Panics if the operands belong to different structures.
    fn add(self, rhs: Self) -> Self::Output {
        self.assert_same_parent(rhs);
        self.wrap(self.value.clone() + rhs.value.clone())
    }
}

impl<A: AssociativeElement> Add for LieElement<A> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl<A: AssociativeElement> Sub for &LieElement<A> {
    type Output = LieElement<A>;

    /// # Panics
    ///
    /// Panics if the operands belong to different structures.
    fn sub(self, rhs: Self) -> Self::Output {
        self.assert_same_parent(rhs);
        self.wrap(self.value.clone() - rhs.value.clone())
    }
}

impl<A: AssociativeElement> Sub for LieElement<A> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        &self - &rhs
    }
}

impl<A: AssociativeElement> Neg for &LieElement<A> {
    type Output = LieElement<A>;

    fn neg(self) -> Self::Output {
        self.wrap(-self.value.clone())
    }
}

impl<A: AssociativeElement> Neg for LieElement<A> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        -&self
    }
}

impl<A> Mul<&LieElement<A>> for i64
where
    A: AssociativeElement,
    i64: Coerce<Scalar<A>>,
{
    type Output = LieElement<A>;

    /// # Panics
    ///
    /// Panics if the integer has no image in the base ring.
    fn mul(self, rhs: &LieElement<A>) -> LieElement<A> {
        rhs.scalar_action(&self, false)
            .applied()
            .expect("integer scalar has no image in the base ring")
    }
}

impl<A> Mul<LieElement<A>> for i64
where
    A: AssociativeElement,
    i64: Coerce<Scalar<A>>,
{
    type Output = LieElement<A>;

    fn mul(self, rhs: LieElement<A>) -> LieElement<A> {
        self * &rhs
    }
}

impl<A> Mul<i64> for &LieElement<A>
where
    A: AssociativeElement,
    i64: Coerce<Scalar<A>>,
{
    type Output = LieElement<A>;

    /// # Panics
    ///
    /// Panics if the integer has no image in the base ring.
    fn mul(self, rhs: i64) -> LieElement<A> {
        self.scalar_action(&rhs, true)
            .applied()
            .expect("integer scalar has no image in the base ring")
    }
}

impl<A> Mul<i64> for LieElement<A>
where
    A: AssociativeElement,
    i64: Coerce<Scalar<A>>,
{
    type Output = Self;

    fn mul(self, rhs: i64) -> Self {
        &self * rhs
    }
}

impl<A> Div<i64> for &LieElement<A>
where
    A: AssociativeElement,
    i64: Coerce<Scalar<A>>,
{
    type Output = LieElement<A>;

    /// # Panics
    ///
    /// Panics if the integer has no image in the base ring, or its image
    /// is not a unit there.
    fn div(self, rhs: i64) -> LieElement<A> {
        let scalar = rhs
            .coerce()
            .expect("integer scalar has no image in the base ring");
        self.divide(&scalar).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl<A> Div<i64> for LieElement<A>
where
    A: AssociativeElement,
    i64: Coerce<Scalar<A>>,
{
    type Output = Self;

    fn div(self, rhs: i64) -> Self {
        &self / rhs
    }
}

impl<A: AssociativeElement> fmt::Display for LieElement<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
