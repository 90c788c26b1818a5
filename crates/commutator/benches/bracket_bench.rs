//! Benchmarks for commutator arithmetic.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use commutator::prelude::*;

/// Builds the n-dimensional analogue of the sl2 triple: a single
/// superdiagonal, a single subdiagonal, and a diagonal matrix.
fn band_generators(n: usize) -> Vec<SquareMatrix<Q>> {
    let mut upper = vec![vec![Q::from_integer(0); n]; n];
    let mut lower = vec![vec![Q::from_integer(0); n]; n];
    let mut diag = vec![vec![Q::from_integer(0); n]; n];
    for i in 0..n - 1 {
        upper[i][i + 1] = Q::from_integer(1);
        lower[i + 1][i] = Q::from_integer(1);
    }
    for (i, row) in diag.iter_mut().enumerate() {
        let v = i64::try_from(n).unwrap() - 2 * i64::try_from(i).unwrap();
        row[i] = Q::from_integer(v);
    }
    vec![
        SquareMatrix::from_rows(upper),
        SquareMatrix::from_rows(lower),
        SquareMatrix::from_rows(diag),
    ]
}

fn bench_matrix_bracket(c: &mut Criterion) {
    let mut group = c.benchmark_group("matrix_bracket");

    for size in [2, 4, 8, 16] {
        let lie = LieAlgebraFromAssociative::new(band_generators(size)).unwrap();
        let gens = lie.lie_algebra_generators();
        let (e, f) = (gens[0].clone(), gens[1].clone());

        group.bench_with_input(BenchmarkId::new("SquareMatrix<Q>", size), &size, |b, _| {
            b.iter(|| black_box(e.bracket(&f)))
        });
    }

    group.finish();
}

fn bench_free_bracket(c: &mut Criterion) {
    let mut group = c.benchmark_group("free_bracket");

    let free = FreeAlgebra::<Q>::new(&["p", "q"]);
    let lie = LieAlgebraFromAssociative::new(free.generators()).unwrap();
    let gens = lie.lie_algebra_generators();
    let (p, q) = (&gens[0], &gens[1]);

    // Nested brackets blow up the number of words, which stresses the
    // term-map arithmetic.
    for depth in [1usize, 3, 5] {
        let mut x = p.bracket(q);
        for _ in 1..depth {
            x = x.bracket(q);
        }
        group.bench_with_input(BenchmarkId::new("FreeElement<Q>", depth), &depth, |b, _| {
            b.iter(|| black_box(x.bracket(p)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_matrix_bracket, bench_free_bracket);
criterion_main!(benches);
