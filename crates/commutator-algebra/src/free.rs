//! The free associative algebra on a finite set of letters.
//!
//! Elements are finite R-linear combinations of words in the letters,
//! multiplied by concatenation. Nothing commutes: `p*q` and `q*p` are
//! distinct basis words, which makes this algebra a convenient source of
//! nonzero commutators with exactly tracked coefficients.

use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, Mul, Neg, Sub};
use std::sync::Arc;

use commutator_rings::{CommutativeRing, Ring};
use smallvec::SmallVec;

use crate::traits::AssociativeElement;

/// A word in the letters of a free algebra, as letter indices.
pub type Word = SmallVec<[u32; 8]>;

/// The free associative algebra R<x_1, ..., x_n> on named letters.
///
/// This is a lightweight handle: it owns the letter-name table and mints
/// elements. The table is shared into every element it creates.
#[derive(Clone, Debug)]
pub struct FreeAlgebra<R> {
    letters: Arc<[String]>,
    coeff: PhantomData<R>,
}

impl<R: CommutativeRing> FreeAlgebra<R> {
    /// Creates the free algebra on the given letters.
    ///
    /// # Panics
    ///
    /// Panics if no letters are given or a letter name repeats.
    #[must_use]
    pub fn new(letters: &[&str]) -> Self {
        assert!(!letters.is_empty(), "need at least one letter");
        for (i, name) in letters.iter().enumerate() {
            assert!(
                !letters[..i].contains(name),
                "letter names must be distinct"
            );
        }
        Self {
            letters: letters.iter().map(|s| (*s).to_string()).collect(),
            coeff: PhantomData,
        }
    }

    /// Returns the letter names.
    #[must_use]
    pub fn letters(&self) -> &[String] {
        &self.letters
    }

    /// Returns the zero element.
    #[must_use]
    pub fn zero(&self) -> FreeElement<R> {
        FreeElement {
            letters: Arc::clone(&self.letters),
            terms: BTreeMap::new(),
        }
    }

    /// Returns the unit element.
    #[must_use]
    pub fn one(&self) -> FreeElement<R> {
        self.scalar(R::one())
    }

    /// Embeds a base-ring scalar as a multiple of the empty word.
    #[must_use]
    pub fn scalar(&self, c: R) -> FreeElement<R> {
        let mut terms = BTreeMap::new();
        if !c.is_zero() {
            terms.insert(Word::new(), c);
        }
        FreeElement {
            letters: Arc::clone(&self.letters),
            terms,
        }
    }

    /// Returns the i-th letter as an element, or `None` if out of range.
    #[must_use]
    pub fn generator(&self, i: usize) -> Option<FreeElement<R>> {
        self.monomial(&[u32::try_from(i).ok()?], R::one())
    }

    /// Returns all letters as elements, in declaration order.
    #[must_use]
    pub fn generators(&self) -> Vec<FreeElement<R>> {
        (0..self.letters.len())
            .map(|i| self.generator(i).unwrap())
            .collect()
    }

    /// Builds `c * word`, or `None` if the word uses an unknown letter.
    #[must_use]
    pub fn monomial(&self, word: &[u32], c: R) -> Option<FreeElement<R>> {
        if word.iter().any(|&i| i as usize >= self.letters.len()) {
            return None;
        }
        let mut terms = BTreeMap::new();
        if !c.is_zero() {
            terms.insert(Word::from_slice(word), c);
        }
        Some(FreeElement {
            letters: Arc::clone(&self.letters),
            terms,
        })
    }
}

/// An element of a free associative algebra.
///
/// Terms map words to coefficients; zero coefficients are never stored.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct FreeElement<R> {
    letters: Arc<[String]>,
    terms: BTreeMap<Word, R>,
}

impl<R: CommutativeRing> FreeElement<R> {
    /// Returns the coefficient of a word.
    #[must_use]
    pub fn coefficient(&self, word: &[u32]) -> R {
        self.terms
            .get(&Word::from_slice(word))
            .map_or_else(R::zero, Clone::clone)
    }

    /// Returns the number of terms with a nonzero coefficient.
    #[must_use]
    pub fn num_terms(&self) -> usize {
        self.terms.len()
    }

    fn assert_same_algebra(&self, rhs: &Self) {
        assert_eq!(
            self.letters, rhs.letters,
            "elements belong to different free algebras"
        );
    }

    fn normalized(letters: Arc<[String]>, mut terms: BTreeMap<Word, R>) -> Self {
        terms.retain(|_, c| !c.is_zero());
        Self { letters, terms }
    }
}

impl<R: CommutativeRing> Add for FreeElement<R> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.assert_same_algebra(&rhs);
        let mut terms = self.terms;
        for (word, c) in rhs.terms {
            let entry = terms.entry(word).or_insert_with(R::zero);
            *entry = entry.clone() + c;
        }
        Self::normalized(self.letters, terms)
    }
}

impl<R: CommutativeRing> Sub for FreeElement<R> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self + (-rhs)
    }
}

impl<R: CommutativeRing> Neg for FreeElement<R> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            letters: self.letters,
            terms: self.terms.into_iter().map(|(w, c)| (w, -c)).collect(),
        }
    }
}

impl<R: CommutativeRing> Mul for FreeElement<R> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.assert_same_algebra(&rhs);
        let mut terms: BTreeMap<Word, R> = BTreeMap::new();
        for (w1, c1) in &self.terms {
            for (w2, c2) in &rhs.terms {
                let mut word = w1.clone();
                word.extend_from_slice(w2);
                let c = c1.clone() * c2.clone();
                let entry = terms.entry(word).or_insert_with(R::zero);
                *entry = entry.clone() + c;
            }
        }
        Self::normalized(self.letters, terms)
    }
}

fn word_string(letters: &[String], word: &[u32]) -> String {
    let mut parts = Vec::new();
    let mut i = 0;
    while i < word.len() {
        let letter = word[i] as usize;
        let mut run = 1;
        while i + run < word.len() && word[i + run] as usize == letter {
            run += 1;
        }
        if run == 1 {
            parts.push(letters[letter].clone());
        } else {
            parts.push(format!("{}^{run}", letters[letter]));
        }
        i += run;
    }
    parts.join("*")
}

impl<R: CommutativeRing> fmt::Display for FreeElement<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "0");
        }

        for (i, (word, coeff)) in self.terms.iter().enumerate() {
            let term = if word.is_empty() {
                coeff.to_string()
            } else if coeff.is_one() {
                word_string(&self.letters, word)
            } else if (-coeff.clone()).is_one() {
                format!("-{}", word_string(&self.letters, word))
            } else {
                format!("{}*{}", coeff, word_string(&self.letters, word))
            };

            if i == 0 {
                write!(f, "{term}")?;
            } else if let Some(rest) = term.strip_prefix('-') {
                write!(f, " - {rest}")?;
            } else {
                write!(f, " + {term}")?;
            }
        }
        Ok(())
    }
}

impl<R: CommutativeRing> AssociativeElement for FreeElement<R> {
    type Scalar = R;
    type Index = Word;
    type Entry = R;

    fn zero_like(&self) -> Self {
        Self {
            letters: Arc::clone(&self.letters),
            terms: BTreeMap::new(),
        }
    }

    fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    fn scale_left(&self, scalar: &R) -> Self {
        Self::normalized(
            Arc::clone(&self.letters),
            self.terms
                .iter()
                .map(|(w, c)| (w.clone(), scalar.clone() * c.clone()))
                .collect(),
        )
    }

    fn scale_right(&self, scalar: &R) -> Self {
        Self::normalized(
            Arc::clone(&self.letters),
            self.terms
                .iter()
                .map(|(w, c)| (w.clone(), c.clone() * scalar.clone()))
                .collect(),
        )
    }

    fn entry(&self, index: Word) -> Option<R> {
        if index.iter().any(|&i| i as usize >= self.letters.len()) {
            return None;
        }
        Some(self.coefficient(&index))
    }

    fn algebra_description(&self) -> String {
        format!(
            "free associative algebra on {} over {}",
            self.letters.join(", "),
            R::ring_name()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use commutator_rings::Q;

    fn pq() -> (FreeElement<Q>, FreeElement<Q>) {
        let a = FreeAlgebra::<Q>::new(&["p", "q"]);
        let gens = a.generators();
        (gens[0].clone(), gens[1].clone())
    }

    #[test]
    fn test_concatenation_product() {
        let (p, q) = pq();
        let paq = p.clone() * q.clone();
        assert_eq!(paq.coefficient(&[0, 1]), Q::from_integer(1));
        assert_ne!(paq, q * p);
    }

    #[test]
    fn test_display_sum_and_difference() {
        let (p, q) = pq();
        assert_eq!((p.clone() + q.clone()).to_string(), "p + q");
        assert_eq!((p.clone() - q.clone()).to_string(), "p - q");
        assert_eq!((q - p).to_string(), "-p + q");
    }

    #[test]
    fn test_display_scaled() {
        let (p, q) = pq();
        assert_eq!(p.scale_left(&Q::from_integer(3)).to_string(), "3*p");
        assert_eq!(q.scale_left(&Q::new(1, 4)).to_string(), "1/4*q");
    }

    #[test]
    fn test_display_powers() {
        let (p, q) = pq();
        let w = p.clone() * p * q;
        assert_eq!(w.to_string(), "p^2*q");
    }

    #[test]
    fn test_cancellation() {
        let (p, _) = pq();
        let zero = p.clone() - p.clone();
        assert!(AssociativeElement::is_zero(&zero));
        assert_eq!(zero.to_string(), "0");
    }

    #[test]
    fn test_scalar_embedding() {
        let a = FreeAlgebra::<Q>::new(&["p", "q"]);
        let c = a.scalar(Q::from_integer(5));
        assert_eq!(c.to_string(), "5");
        assert_eq!(c.coefficient(&[]), Q::from_integer(5));
        assert!(AssociativeElement::is_zero(&a.scalar(Q::from_integer(0))));
    }

    #[test]
    fn test_entry_unknown_letter() {
        let (p, _) = pq();
        assert_eq!(p.entry(Word::from_slice(&[7])), None);
        assert_eq!(p.entry(Word::from_slice(&[0])), Some(Q::from_integer(1)));
    }
}
