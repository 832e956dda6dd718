//! RustQR ECC - Reed-Solomon error correction for QR code payloads
//!
//! Takes the codeword blocks a QR reader extracts from a symbol and returns
//! them corrected, or a typed failure when the damage exceeds what the EC
//! codewords can repair. Two locator algorithms are available, Sugiyama's
//! Euclidean algorithm and Berlekamp-Massey, both with erasure support.
//!
//! # Example
//! ```
//! use rust_qr_ecc::{ReedSolomonAlgorithm, ReedSolomonDecoder};
//!
//! // "hello" followed by 6 EC codewords, with two bytes damaged
//! let mut block = vec![0x68, 0x65, 0x6c, 0x6c, 0x6f, 0xdf, 0x79, 0x63, 0xbb, 0xfb, 0xe7];
//! block[1] ^= 0x20;
//! block[7] ^= 0x01;
//!
//! let decoder = ReedSolomonDecoder::new(6).with_algorithm(ReedSolomonAlgorithm::BerlekampMassey);
//! let correction = decoder.decode(&mut block).unwrap();
//! assert_eq!(correction.count(), 2);
//! assert_eq!(&block[..5], b"hello");
//! ```

pub(crate) mod debug;
/// Reed-Solomon decoding (field, polynomials, locators, Forney, blocks)
pub mod decoder;
/// Core data structures (EC level, codeword blocks)
pub mod models;
/// CLI and bench helpers (hex parsing, logging setup)
pub mod tools;

pub use decoder::blocks::{BlockError, correct_codewords, correct_message, deinterleave};
pub use decoder::config::DecoderConfig;
pub use decoder::error::{DecodeError, UncorrectableReason};
pub use decoder::locator::ReedSolomonAlgorithm;
pub use decoder::poly::Poly;
pub use decoder::reed_solomon::{Correction, ReedSolomonDecoder};
pub use models::{CodewordBlock, ECLevel};

/// Correct `block` in place using `nsym` EC codewords and the
/// environment-configured decoder (see [`DecoderConfig::from_env`])
pub fn decode_block(block: &mut [u8], nsym: usize) -> Result<Correction, DecodeError> {
    ReedSolomonDecoder::with_config(nsym, DecoderConfig::from_env()).decode(block)
}

/// Like [`decode_block`] with known-bad block indices
pub fn decode_block_with_erasures(
    block: &mut [u8],
    nsym: usize,
    erasures: &[usize],
) -> Result<Correction, DecodeError> {
    ReedSolomonDecoder::with_config(nsym, DecoderConfig::from_env())
        .decode_with_erasures(block, erasures)
}
