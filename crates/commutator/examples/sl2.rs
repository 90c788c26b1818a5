//! A model of sl2 built from 2x2 rational matrices.
//!
//! The generators are the standard basis e, f, h with the relations
//! [e, f] = h, [h, e] = 2e, [h, f] = -2f.
//!
//! Run with: cargo run --example sl2

use commutator::prelude::*;

fn qmat(rows: [[i64; 2]; 2]) -> SquareMatrix<Q> {
    SquareMatrix::from_rows(
        rows.iter()
            .map(|r| r.iter().map(|&n| Q::from_integer(n)).collect())
            .collect(),
    )
}

fn main() {
    let lie = LieAlgebraFromAssociative::new(vec![
        qmat([[0, 1], [0, 0]]),
        qmat([[0, 0], [1, 0]]),
        qmat([[1, 0], [0, -1]]),
    ])
    .unwrap();

    println!("{lie}");
    println!();

    let gens = lie.lie_algebra_generators();
    let (e, f, h) = (&gens[0], &gens[1], &gens[2]);

    println!("e = {e}");
    println!("f = {f}");
    println!("h = {h}");
    println!();

    println!("[e, f] = {}", e.bracket(f));
    println!("[h, e] = {}", h.bracket(e));
    println!("[h, f] = {}", h.bracket(f));

    assert_eq!(e.bracket(f), *h);
    assert_eq!(h.bracket(e), 2 * e);
    assert_eq!(h.bracket(f), -2 * f);
    println!();
    println!("sl2 relations verified");
}
