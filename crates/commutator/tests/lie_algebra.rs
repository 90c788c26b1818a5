//! End-to-end tests across the whole stack.

use std::sync::Arc;

use commutator::prelude::*;

fn qmat(rows: [[i64; 2]; 2]) -> SquareMatrix<Q> {
    SquareMatrix::from_rows(
        rows.iter()
            .map(|r| r.iter().map(|&n| Q::from_integer(n)).collect())
            .collect(),
    )
}

fn sl2_gens() -> Vec<SquareMatrix<Q>> {
    vec![
        qmat([[0, 1], [0, 0]]),
        qmat([[0, 0], [1, 0]]),
        qmat([[1, 0], [0, -1]]),
    ]
}

#[test]
fn sl2_scenario() {
    let lie = LieAlgebraFromAssociative::new(sl2_gens()).unwrap();
    let gens = lie.lie_algebra_generators();
    let (e, f, h) = (&gens[0], &gens[1], &gens[2]);

    assert_eq!(e.bracket(f), *h);
    assert_eq!(h.bracket(e), 2 * e);
    assert_eq!(h.bracket(f), -2 * f);

    // Entry access reaches through to the matrix.
    assert_eq!(h.entry((0, 0)), Some(Q::from_integer(1)));
    assert_eq!(h.entry((1, 1)), Some(Q::from_integer(-1)));
    assert_eq!(h.entry((0, 1)), Some(Q::from_integer(0)));
}

#[test]
fn free_algebra_scenario() {
    let free = FreeAlgebra::<Q>::new(&["p", "q"]);
    let lie = LieAlgebraFromAssociative::new(free.generators()).unwrap();
    let gens = lie.lie_algebra_generators();
    let (p, q) = (&gens[0], &gens[1]);

    assert_eq!((p + q).to_string(), "p + q");
    assert_eq!((p - q).to_string(), "p - q");
    assert_eq!((3 * p).to_string(), "3*p");
    assert_eq!((q / 4).to_string(), "1/4*q");
}

#[test]
fn construction_is_canonical() {
    let first = LieAlgebraFromAssociative::new(sl2_gens()).unwrap();
    let second = LieAlgebraFromAssociative::new(sl2_gens()).unwrap();
    assert!(Arc::ptr_eq(&first, &second));

    // A different generator order is a different structure.
    let mut reversed = sl2_gens();
    reversed.reverse();
    let third = LieAlgebraFromAssociative::new(reversed).unwrap();
    assert!(!Arc::ptr_eq(&first, &third));
}

#[test]
fn concurrent_construction_yields_one_instance() {
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(|| LieAlgebraFromAssociative::new(sl2_gens()).unwrap()))
        .collect();
    let instances: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    for instance in &instances[1..] {
        assert!(Arc::ptr_eq(&instances[0], instance));
    }
}

#[test]
fn empty_generators_fail_fast() {
    let err = LieAlgebraFromAssociative::<SquareMatrix<Q>>::new(vec![]).unwrap_err();
    assert_eq!(err, LieError::EmptyGenerators);
}

#[test]
fn jacobi_identity_on_sl2() {
    let lie = LieAlgebraFromAssociative::new(sl2_gens()).unwrap();
    let gens = lie.lie_algebra_generators();
    let (e, f, h) = (&gens[0], &gens[1], &gens[2]);

    let cycle = &(&e.bracket(&f.bracket(h)) + &f.bracket(&h.bracket(e)))
        + &h.bracket(&e.bracket(f));
    assert!(cycle.is_zero());
}
