//! Reed-Solomon decoding of QR code codeword blocks
//!
//! Leaf-to-root:
//! - GF(256) arithmetic and polynomials
//! - Syndrome, evaluator and errata-locator polynomials
//! - Locator solvers (Euclidean / Berlekamp-Massey), root search, Forney
//! - The block decoder and the QR block adapter

/// QR block de-interleaving and parallel correction
pub mod blocks;
pub mod config;
pub mod error;
/// Forney error magnitudes
pub mod forney;
/// GF(256) field arithmetic
pub mod gf256;
/// Errata locator solvers
pub mod locator;
/// Polynomials over GF(256)
pub mod poly;
/// Reed-Solomon decoder
pub mod reed_solomon;
/// Locator root search
pub mod roots;
/// Syndrome computation
pub mod syndrome;
/// QR Model 2 block tables (ECC codewords/blocks)
pub mod tables;

#[cfg(test)]
pub(crate) mod test_support;
