//! Square matrices over a commutative ring.
//!
//! The matrix algebra M_n(R) is the standard noncommutative test bed for
//! commutator arithmetic; for n >= 2 the product genuinely fails to
//! commute.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use commutator_rings::{CommutativeRing, Ring};

use crate::traits::AssociativeElement;

/// A square matrix stored in row-major order.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct SquareMatrix<R> {
    /// Matrix entries in row-major order.
    data: Vec<R>,
    /// Number of rows and columns.
    dim: usize,
}

impl<R: CommutativeRing> SquareMatrix<R> {
    /// Creates a new matrix filled with zeros.
    #[must_use]
    pub fn zeros(dim: usize) -> Self {
        Self {
            data: vec![R::zero(); dim * dim],
            dim,
        }
    }

    /// Creates an identity matrix.
    #[must_use]
    pub fn identity(dim: usize) -> Self {
        let mut m = Self::zeros(dim);
        for i in 0..dim {
            m.data[i * dim + i] = R::one();
        }
        m
    }

    /// Creates a matrix from rows of entries.
    ///
    /// # Panics
    ///
    /// Panics if the rows do not form a square matrix.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<R>>) -> Self {
        let dim = rows.len();
        for row in &rows {
            assert_eq!(row.len(), dim, "rows must form a square matrix");
        }
        Self {
            data: rows.into_iter().flatten().collect(),
            dim,
        }
    }

    /// Returns the dimension.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Returns a reference to the entry at (row, col).
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&R> {
        if row < self.dim && col < self.dim {
            Some(&self.data[row * self.dim + col])
        } else {
            None
        }
    }

    /// Returns true if every entry is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|x| x.is_zero())
    }
}

impl<R: CommutativeRing> Add for SquareMatrix<R> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        assert_eq!(self.dim, rhs.dim, "matrix dimensions must match");
        Self {
            data: self
                .data
                .into_iter()
                .zip(rhs.data)
                .map(|(a, b)| a + b)
                .collect(),
            dim: self.dim,
        }
    }
}

impl<R: CommutativeRing> Sub for SquareMatrix<R> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        assert_eq!(self.dim, rhs.dim, "matrix dimensions must match");
        Self {
            data: self
                .data
                .into_iter()
                .zip(rhs.data)
                .map(|(a, b)| a - b)
                .collect(),
            dim: self.dim,
        }
    }
}

impl<R: CommutativeRing> Neg for SquareMatrix<R> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            data: self.data.into_iter().map(|a| -a).collect(),
            dim: self.dim,
        }
    }
}

impl<R: CommutativeRing> Mul for SquareMatrix<R> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        assert_eq!(self.dim, rhs.dim, "matrix dimensions must match");
        let n = self.dim;
        let mut result = Self::zeros(n);
        for i in 0..n {
            for j in 0..n {
                let mut acc = R::zero();
                for k in 0..n {
                    acc = acc + self.data[i * n + k].clone() * rhs.data[k * n + j].clone();
                }
                result.data[i * n + j] = acc;
            }
        }
        result
    }
}

impl<R: CommutativeRing> fmt::Display for SquareMatrix<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<String> = (0..self.dim)
            .map(|i| {
                let entries: Vec<String> = (0..self.dim)
                    .map(|j| self.data[i * self.dim + j].to_string())
                    .collect();
                format!("[{}]", entries.join(", "))
            })
            .collect();
        write!(f, "[{}]", rows.join(", "))
    }
}

impl<R: CommutativeRing> AssociativeElement for SquareMatrix<R> {
    type Scalar = R;
    type Index = (usize, usize);
    type Entry = R;

    fn zero_like(&self) -> Self {
        Self::zeros(self.dim)
    }

    fn is_zero(&self) -> bool {
        SquareMatrix::is_zero(self)
    }

    fn scale_left(&self, scalar: &R) -> Self {
        Self {
            data: self
                .data
                .iter()
                .map(|x| scalar.clone() * x.clone())
                .collect(),
            dim: self.dim,
        }
    }

    fn scale_right(&self, scalar: &R) -> Self {
        Self {
            data: self
                .data
                .iter()
                .map(|x| x.clone() * scalar.clone())
                .collect(),
            dim: self.dim,
        }
    }

    fn entry(&self, (row, col): (usize, usize)) -> Option<R> {
        self.get(row, col).cloned()
    }

    fn algebra_description(&self) -> String {
        format!("{n}x{n} matrices over {r}", n = self.dim, r = R::ring_name())
    }
}
