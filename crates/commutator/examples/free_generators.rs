//! Commutator arithmetic over a free associative algebra.
//!
//! Coefficients are exact rationals, so scaling and division display
//! precisely.
//!
//! Run with: cargo run --example free_generators

use commutator::prelude::*;

fn main() {
    let free = FreeAlgebra::<Q>::new(&["p", "q"]);
    let lie = LieAlgebraFromAssociative::new(free.generators()).unwrap();

    println!("{lie}");
    println!();

    let gens = lie.lie_algebra_generators();
    let (p, q) = (&gens[0], &gens[1]);

    println!("p + q   = {}", p + q);
    println!("p - q   = {}", p - q);
    println!("3*p     = {}", 3 * p);
    println!("q/4     = {}", q / 4);
    println!("[p, q]  = {}", p.bracket(q));
    println!("[p, p]  = {}", p.bracket(p));

    // A scalar from the wrong ring reports "not applicable" instead of
    // failing, so a dispatcher could try another interpretation.
    let elt = p.bracket(q);
    match elt.scalar_action(&Q::new(2, 1), false) {
        ScalarAction::Applied(scaled) => println!("2*[p, q] = {scaled}"),
        ScalarAction::NotApplicable => println!("scalar action did not apply"),
    }
}
