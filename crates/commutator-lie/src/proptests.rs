//! Property-based tests for the Lie algebra axioms.
//!
//! All properties are exercised over the free associative algebra on two
//! letters with rational coefficients, where commutators do not collapse.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use proptest::prelude::*;

    use commutator_algebra::{FreeAlgebra, FreeElement};
    use commutator_rings::Q;

    use crate::{LieAlgebraFromAssociative, LieElement};

    type L = Arc<LieAlgebraFromAssociative<FreeElement<Q>>>;

    fn algebra() -> L {
        LieAlgebraFromAssociative::new(FreeAlgebra::<Q>::new(&["p", "q"]).generators()).unwrap()
    }

    // A sampled element c0*p + c1*q + c2*p*q + c3*q*p with small integer
    // coefficients.
    fn combo(lie: &L, coeffs: [i64; 4]) -> LieElement<FreeElement<Q>> {
        let gens = lie.lie_algebra_generators();
        let (p, q) = (&gens[0], &gens[1]);
        let pq = lie.element_from(&(p.value().clone() * q.value().clone())).unwrap();
        let qp = lie.element_from(&(q.value().clone() * p.value().clone())).unwrap();

        &(&(coeffs[0] * p) + &(coeffs[1] * q)) + &(&(coeffs[2] * &pq) + &(coeffs[3] * &qp))
    }

    fn small_coeffs() -> impl Strategy<Value = [i64; 4]> {
        proptest::array::uniform4(-5i64..=5)
    }

    proptest! {
        #[test]
        fn bracket_is_antisymmetric(a in small_coeffs(), b in small_coeffs()) {
            let lie = algebra();
            let x = combo(&lie, a);
            let y = combo(&lie, b);
            prop_assert_eq!(x.bracket(&y), -y.bracket(&x));
        }

        #[test]
        fn self_bracket_vanishes(a in small_coeffs()) {
            let lie = algebra();
            let x = combo(&lie, a);
            prop_assert!(x.bracket(&x).is_zero());
        }

        #[test]
        fn jacobi_identity(a in small_coeffs(), b in small_coeffs(), c in small_coeffs()) {
            let lie = algebra();
            let x = combo(&lie, a);
            let y = combo(&lie, b);
            let z = combo(&lie, c);

            let cycle = &(&x.bracket(&y.bracket(&z)) + &y.bracket(&z.bracket(&x)))
                + &z.bracket(&x.bracket(&y));
            prop_assert!(cycle.is_zero());
        }

        #[test]
        fn bracket_is_bilinear_in_scalars(s in -5i64..=5, a in small_coeffs(), b in small_coeffs()) {
            let lie = algebra();
            let x = combo(&lie, a);
            let y = combo(&lie, b);
            prop_assert_eq!((s * &x).bracket(&y), s * &x.bracket(&y));
        }

        #[test]
        fn bracket_distributes_over_addition(a in small_coeffs(), b in small_coeffs(), c in small_coeffs()) {
            let lie = algebra();
            let x = combo(&lie, a);
            let y = combo(&lie, b);
            let z = combo(&lie, c);
            prop_assert_eq!(
                (&x + &y).bracket(&z),
                &x.bracket(&z) + &y.bracket(&z)
            );
        }

        #[test]
        fn addition_is_commutative_and_associative(a in small_coeffs(), b in small_coeffs(), c in small_coeffs()) {
            let lie = algebra();
            let x = combo(&lie, a);
            let y = combo(&lie, b);
            let z = combo(&lie, c);

            prop_assert_eq!(&x + &y, &y + &x);
            prop_assert_eq!(&(&x + &y) + &z, &x + &(&y + &z));
        }

        #[test]
        fn zero_is_the_additive_identity(a in small_coeffs()) {
            let lie = algebra();
            let x = combo(&lie, a);

            prop_assert_eq!(&x + &lie.zero(), x.clone());
            prop_assert!((&x - &x).is_zero());
            prop_assert!((&x + &(-&x)).is_zero());
        }
    }
}
