//! Polynomials over GF(256)
//!
//! Coefficients are stored in ascending order: `coeffs[i]` multiplies x^i.
//! Leading zeros are always stripped, so the zero polynomial is the empty
//! coefficient vector and two equal polynomials compare equal.
//!
//! QR blocks store the highest-degree coefficient first (message bytes
//! before EC bytes); [`Poly::from_block`] and [`Poly::to_block`] convert.

use std::ops::{Add, Mul, Sub};

use super::gf256::Gf256;

/// Errors from polynomial arithmetic
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PolyError {
    #[error("polynomial division by the zero polynomial")]
    DivisionByZero,
}

/// Polynomial over GF(256), lowest degree first
#[derive(Debug, Clone, PartialEq, Eq, Default, Hash)]
pub struct Poly {
    coeffs: Vec<u8>,
}

impl Poly {
    /// Build from ascending coefficients, trimming leading zeros
    pub fn new(mut coeffs: Vec<u8>) -> Self {
        while coeffs.last() == Some(&0) {
            coeffs.pop();
        }
        Self { coeffs }
    }

    pub fn zero() -> Self {
        Self { coeffs: Vec::new() }
    }

    pub fn one() -> Self {
        Self { coeffs: vec![1] }
    }

    /// c·x^k
    pub fn monomial(c: u8, k: usize) -> Self {
        if c == 0 {
            return Self::zero();
        }
        let mut coeffs = vec![0u8; k + 1];
        coeffs[k] = c;
        Self { coeffs }
    }

    /// Interpret a QR block (first byte = highest degree) as a polynomial
    pub fn from_block(block: &[u8]) -> Self {
        Self::new(block.iter().rev().copied().collect())
    }

    /// Write back as a block of exactly `len` bytes, highest degree first.
    ///
    /// Coefficients above x^(len-1) are dropped; callers only pass lengths
    /// at least `degree + 1`.
    pub fn to_block(&self, len: usize) -> Vec<u8> {
        (0..len).rev().map(|i| self.coeff(i)).collect()
    }

    /// Ascending coefficients without leading zeros
    pub fn coeffs(&self) -> &[u8] {
        &self.coeffs
    }

    /// Coefficient of x^i (zero beyond the degree)
    pub fn coeff(&self, i: usize) -> u8 {
        self.coeffs.get(i).copied().unwrap_or(0)
    }

    /// `None` for the zero polynomial
    pub fn degree(&self) -> Option<usize> {
        self.coeffs.len().checked_sub(1)
    }

    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Highest-degree coefficient (0 for the zero polynomial)
    pub fn leading(&self) -> u8 {
        self.coeffs.last().copied().unwrap_or(0)
    }

    pub fn scale(&self, k: u8) -> Self {
        Self::new(self.coeffs.iter().map(|&c| Gf256::mul(c, k)).collect())
    }

    /// Multiply by x^k
    pub fn shift(&self, k: usize) -> Self {
        if self.is_zero() {
            return Self::zero();
        }
        let mut coeffs = vec![0u8; k];
        coeffs.extend_from_slice(&self.coeffs);
        Self { coeffs }
    }

    /// Reduce modulo x^n
    pub fn truncated(&self, n: usize) -> Self {
        Self::new(self.coeffs.iter().take(n).copied().collect())
    }

    /// Evaluate at `x` with Horner's method
    pub fn eval(&self, x: u8) -> u8 {
        self.coeffs
            .iter()
            .rev()
            .fold(0u8, |acc, &c| Gf256::add(Gf256::mul(acc, x), c))
    }

    /// Formal derivative in characteristic 2.
    ///
    /// d/dx c·x^i = i·c·x^(i-1), and i·c is c for odd i and 0 for even i,
    /// so odd-power terms move down one degree unchanged and even-power
    /// terms vanish.
    pub fn derivative(&self) -> Self {
        Self::new(
            self.coeffs
                .iter()
                .enumerate()
                .skip(1)
                .map(|(i, &c)| if i % 2 == 1 { c } else { 0 })
                .collect(),
        )
    }

    /// Long division: returns `(quotient, remainder)` with
    /// `self = quotient * divisor + remainder` and
    /// `deg(remainder) < deg(divisor)`.
    pub fn div_rem(&self, divisor: &Poly) -> Result<(Poly, Poly), PolyError> {
        let div_deg = divisor.degree().ok_or(PolyError::DivisionByZero)?;
        let lead_inv = Gf256::inv(divisor.leading()).map_err(|_| PolyError::DivisionByZero)?;

        let mut rem = self.coeffs.clone();
        let Some(num_deg) = self.degree().filter(|&d| d >= div_deg) else {
            return Ok((Poly::zero(), self.clone()));
        };

        let mut quot = vec![0u8; num_deg - div_deg + 1];
        for d in (div_deg..=num_deg).rev() {
            let c = Gf256::mul(rem[d], lead_inv);
            if c == 0 {
                continue;
            }
            let offset = d - div_deg;
            quot[offset] = c;
            for (j, &dc) in divisor.coeffs.iter().enumerate() {
                rem[offset + j] ^= Gf256::mul(c, dc);
            }
        }
        rem.truncate(div_deg);

        Ok((Poly::new(quot), Poly::new(rem)))
    }

    /// Synthetic division by (x - a): returns `(q, r)` with
    /// `self - (x - a)·q = r`.
    pub fn reduce_by_horner(&self, a: u8) -> (Poly, u8) {
        if self.coeffs.len() <= 1 {
            return (Poly::zero(), self.coeff(0));
        }
        let n = self.coeffs.len();
        let mut quot = vec![0u8; n - 1];
        let mut acc = 0u8;
        for i in (1..n).rev() {
            acc = Gf256::add(Gf256::mul(acc, a), self.coeffs[i]);
            quot[i - 1] = acc;
        }
        let rem = Gf256::add(Gf256::mul(acc, a), self.coeffs[0]);
        (Poly::new(quot), rem)
    }
}

impl From<Vec<u8>> for Poly {
    fn from(coeffs: Vec<u8>) -> Self {
        Poly::new(coeffs)
    }
}

impl Add for &Poly {
    type Output = Poly;

    fn add(self, rhs: &Poly) -> Poly {
        let (long, short) = if self.coeffs.len() >= rhs.coeffs.len() {
            (&self.coeffs, &rhs.coeffs)
        } else {
            (&rhs.coeffs, &self.coeffs)
        };
        let mut out = long.clone();
        for (o, &s) in out.iter_mut().zip(short.iter()) {
            *o ^= s;
        }
        Poly::new(out)
    }
}

impl Sub for &Poly {
    type Output = Poly;

    fn sub(self, rhs: &Poly) -> Poly {
        self + rhs
    }
}

impl Mul for &Poly {
    type Output = Poly;

    fn mul(self, rhs: &Poly) -> Poly {
        if self.is_zero() || rhs.is_zero() {
            return Poly::zero();
        }
        let mut out = vec![0u8; self.coeffs.len() + rhs.coeffs.len() - 1];
        for (i, &a) in self.coeffs.iter().enumerate() {
            if a == 0 {
                continue;
            }
            for (j, &b) in rhs.coeffs.iter().enumerate() {
                out[i + j] ^= Gf256::mul(a, b);
            }
        }
        Poly::new(out)
    }
}
