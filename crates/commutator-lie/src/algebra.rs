//! Lie algebras realized inside an associative algebra.

use std::fmt;
use std::sync::Arc;

use commutator_algebra::AssociativeElement;
use commutator_rings::{Coerce, Ring};

use crate::element::LieElement;
use crate::error::LieError;
use crate::family::Family;
use crate::registry;

/// The base ring of the ambient algebra `A`.
pub type Scalar<A> = <A as AssociativeElement>::Scalar;

/// A Lie algebra generated by elements of an associative algebra.
///
/// Let `R` be a commutative ring and `A` an associative `R`-algebra. `A`
/// becomes a Lie algebra under the commutator bracket `[a, b] = a*b - b*a`;
/// this structure is the Lie subalgebra generated by a fixed, ordered,
/// nonempty sequence of elements of `A`. It allows computing inside the
/// subalgebra, but offers no membership test for arbitrary elements of `A`.
///
/// Construction is canonical: two requests with equal generator sequences
/// return the same `Arc`, so parents can be compared by pointer identity.
///
/// # Examples
///
/// A model of sl2 from 2x2 matrices:
///
/// ```
/// use commutator_algebra::SquareMatrix;
/// use commutator_lie::LieAlgebraFromAssociative;
/// use commutator_rings::Q;
///
/// let n = |v| Q::from_integer(v);
/// let gens = vec![
///     SquareMatrix::from_rows(vec![vec![n(0), n(1)], vec![n(0), n(0)]]),
///     SquareMatrix::from_rows(vec![vec![n(0), n(0)], vec![n(1), n(0)]]),
///     SquareMatrix::from_rows(vec![vec![n(1), n(0)], vec![n(0), n(-1)]]),
/// ];
/// let lie = LieAlgebraFromAssociative::new(gens).unwrap();
/// let gens = lie.lie_algebra_generators();
/// let (e, f, h) = (&gens[0], &gens[1], &gens[2]);
///
/// assert_eq!(e.bracket(f), *h);
/// assert_eq!(h.bracket(e), 2 * e);
/// assert_eq!(h.bracket(f), -2 * f);
/// ```
#[derive(Debug)]
pub struct LieAlgebraFromAssociative<A: AssociativeElement> {
    gens: Vec<A>,
}

impl<A> LieAlgebraFromAssociative<A>
where
    A: AssociativeElement + Send + Sync + 'static,
{
    /// Returns the canonical Lie algebra generated by `gens` inside their
    /// associative algebra.
    ///
    /// The generator sequence is normalized into an immutable ordered
    /// sequence and looked up in the canonicalization registry; a
    /// structurally equal request returns the already-live instance.
    ///
    /// # Errors
    ///
    /// Returns [`LieError::EmptyGenerators`] if `gens` yields no elements.
    pub fn new(gens: impl IntoIterator<Item = A>) -> Result<Arc<Self>, LieError> {
        let gens: Vec<A> = gens.into_iter().collect();
        if gens.is_empty() {
            return Err(LieError::EmptyGenerators);
        }
        Ok(registry::lookup_or_insert(
            registry::hash_key(&gens),
            |candidate: &Self| candidate.gens == gens,
            || Arc::new(Self { gens: gens.clone() }),
        ))
    }
}

impl<A: AssociativeElement> LieAlgebraFromAssociative<A> {
    /// Returns the generators as elements of the ambient algebra.
    #[must_use]
    pub fn gens(&self) -> &[A] {
        &self.gens
    }

    /// Returns the number of generators.
    #[must_use]
    pub fn ngens(&self) -> usize {
        self.gens.len()
    }

    /// Short name of the base ring, for diagnostics.
    #[must_use]
    pub fn base_ring_name(&self) -> &'static str {
        Scalar::<A>::ring_name()
    }

    /// Returns the zero element.
    #[must_use]
    pub fn zero(self: &Arc<Self>) -> LieElement<A> {
        LieElement::new(Arc::clone(self), self.gens[0].zero_like())
    }

    /// Returns the `i`-th generator as a Lie algebra element, if any.
    #[must_use]
    pub fn generator(self: &Arc<Self>, i: usize) -> Option<LieElement<A>> {
        self.gens
            .get(i)
            .map(|g| LieElement::new(Arc::clone(self), g.clone()))
    }

    /// Returns the generators of `self` as a Lie algebra.
    ///
    /// The family preserves construction order: index `i` is the wrapped
    /// `i`-th generator.
    #[must_use]
    pub fn lie_algebra_generators(self: &Arc<Self>) -> Family<LieElement<A>> {
        Family::new(
            self.gens
                .iter()
                .map(|g| LieElement::new(Arc::clone(self), g.clone()))
                .collect(),
        )
    }

    /// Wraps a value coercible into the ambient algebra as an element of
    /// this Lie algebra.
    ///
    /// # Errors
    ///
    /// Returns [`LieError::NotCoercible`] if `value` has no image in the
    /// ambient algebra.
    pub fn element_from<V>(self: &Arc<Self>, value: &V) -> Result<LieElement<A>, LieError>
    where
        V: Coerce<A>,
    {
        let value = value.coerce().ok_or(LieError::NotCoercible)?;
        Ok(LieElement::new(Arc::clone(self), value))
    }
}

impl<A: AssociativeElement> fmt::Display for LieAlgebraFromAssociative<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let gens: Vec<String> = self.gens.iter().map(ToString::to_string).collect();
        write!(
            f,
            "Lie algebra inside {} generated by ({})",
            self.gens[0].algebra_description(),
            gens.join(", ")
        )
    }
}
