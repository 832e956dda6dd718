//! Reed-Solomon decoding for QR code blocks
//!
//! The decoder wires the pieces together: syndrome, errata locator from the
//! selected [`ReedSolomonAlgorithm`], locator validation, root search,
//! Forney magnitudes, and an optional final syndrome check. A block is only
//! written back after every step succeeded.

use tracing::debug;

use super::config::DecoderConfig;
use super::error::{DecodeError, UncorrectableReason};
use super::forney::forney_algorithm;
use super::gf256::FIELD_ORDER;
use super::locator::ReedSolomonAlgorithm;
use super::poly::Poly;
use super::roots::get_positions;
use super::syndrome::{evaluator_polynomial, has_errors, syndrome_polynomial};

/// Longest block a GF(256) code can address
pub const MAX_BLOCK_LEN: usize = FIELD_ORDER;

/// What the decoder changed in a block
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Correction {
    /// Block indices that were modified, ascending
    pub positions: Vec<usize>,
    /// Value XORed into each position
    pub magnitudes: Vec<u8>,
    /// Number of erasures the caller declared
    pub erasures: usize,
}

impl Correction {
    /// Number of symbols that were changed
    pub fn count(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Result of a polynomial-level decode
#[derive(Debug, Clone, PartialEq, Eq)]
struct Decoded {
    corrected: Poly,
    /// (degree position, magnitude) for every nonzero correction
    errata: Vec<(usize, u8)>,
}

fn validate_erasures(erasures: &[usize], len: usize) -> Result<(), DecodeError> {
    let mut seen = vec![false; len];
    for &pos in erasures {
        if pos >= len {
            return Err(DecodeError::InvalidInput(format!(
                "erasure position {pos} outside block of {len} symbols"
            )));
        }
        if std::mem::replace(&mut seen[pos], true) {
            return Err(DecodeError::InvalidInput(format!(
                "erasure position {pos} listed twice"
            )));
        }
    }
    Ok(())
}

fn decode_poly(
    received: &Poly,
    len: usize,
    erasures: &[usize],
    nsym: usize,
    config: &DecoderConfig,
) -> Result<Decoded, DecodeError> {
    validate_erasures(erasures, len)?;

    let syndrome = syndrome_polynomial(received, nsym);
    if syndrome.is_zero() {
        return Ok(Decoded {
            corrected: received.clone(),
            errata: Vec::new(),
        });
    }

    let solver = config.algorithm.solver();
    let locator = solver.checked_locator(&syndrome, erasures, nsym)?;

    let positions = get_positions(&locator);
    // Nonzero syndrome here, so something must be located
    if positions.is_empty() {
        return Err(UncorrectableReason::DegenerateLocator.into());
    }
    if let Some(&position) = positions.iter().find(|&&p| p >= len) {
        return Err(UncorrectableReason::PositionOutOfRange { position, len }.into());
    }

    let evaluator = evaluator_polynomial(&syndrome, &locator, nsym);
    let magnitudes = forney_algorithm(&locator, &evaluator, &positions)?;

    let errata: Vec<(usize, u8)> = positions
        .into_iter()
        .zip(magnitudes)
        .filter(|&(_, m)| m != 0)
        .collect();
    let correction = errata
        .iter()
        .fold(Poly::zero(), |acc, &(pos, mag)| &acc + &Poly::monomial(mag, pos));
    let corrected = received + &correction;

    if config.verify && has_errors(&corrected, nsym) {
        return Err(UncorrectableReason::ResidualSyndrome.into());
    }

    Ok(Decoded { corrected, errata })
}

fn decode_with_policy(
    received: &Poly,
    len: usize,
    erasures: &[usize],
    nsym: usize,
    config: &DecoderConfig,
) -> Result<Decoded, DecodeError> {
    let decoded = decode_poly(received, len, erasures, nsym, config).inspect_err(|e| {
        debug!(algorithm = %config.algorithm, nsym, erasures = erasures.len(), error = %e, "RS decode failed");
    })?;

    if config.noerror && !decoded.errata.is_empty() {
        return Err(DecodeError::CorrectionRequired {
            corrected: decoded.errata.len(),
        });
    }
    if !decoded.errata.is_empty() {
        debug!(
            algorithm = %config.algorithm,
            nsym,
            corrected = decoded.errata.len(),
            "RS decode corrected block"
        );
    }
    Ok(decoded)
}

/// Polynomial-level entry points cover degrees 0..=254 only; higher
/// degrees alias in the syndrome.
fn decode_received(
    received: &Poly,
    erasures: &[usize],
    nsym: usize,
    config: &DecoderConfig,
) -> Result<Poly, DecodeError> {
    if let Some(degree) = received.degree().filter(|&d| d >= MAX_BLOCK_LEN) {
        return Err(DecodeError::InvalidInput(format!(
            "received polynomial of degree {degree} exceeds a {MAX_BLOCK_LEN} symbol block"
        )));
    }
    decode_with_policy(received, MAX_BLOCK_LEN, erasures, nsym, config).map(|d| d.corrected)
}

/// Decode `received` with the given algorithm and no erasures.
///
/// Positions are polynomial degrees; any block up to 255 symbols is
/// accepted.
pub fn rs_decoder(
    received: &Poly,
    nsym: usize,
    algorithm: ReedSolomonAlgorithm,
) -> Result<Poly, DecodeError> {
    let config = DecoderConfig::new().with_algorithm(algorithm);
    decode_received(received, &[], nsym, &config)
}

/// Euclidean (Sugiyama) decoding; `erasures` are degree positions
pub fn euclidean_decoder(
    received: &Poly,
    erasures: &[usize],
    nsym: usize,
) -> Result<Poly, DecodeError> {
    let config = DecoderConfig::new().with_algorithm(ReedSolomonAlgorithm::Euclidean);
    decode_received(received, erasures, nsym, &config)
}

/// Berlekamp-Massey decoding; `erasures` are degree positions
pub fn berlekamp_massey_decoder(
    received: &Poly,
    erasures: &[usize],
    nsym: usize,
) -> Result<Poly, DecodeError> {
    let config = DecoderConfig::new().with_algorithm(ReedSolomonAlgorithm::BerlekampMassey);
    decode_received(received, erasures, nsym, &config)
}

/// Reed-Solomon decoder for QR code blocks
#[derive(Debug, Clone)]
pub struct ReedSolomonDecoder {
    num_ecc_codewords: usize,
    config: DecoderConfig,
}

impl ReedSolomonDecoder {
    pub fn new(num_ecc_codewords: usize) -> Self {
        Self::with_config(num_ecc_codewords, DecoderConfig::new())
    }

    pub fn with_config(num_ecc_codewords: usize, config: DecoderConfig) -> Self {
        Self {
            num_ecc_codewords,
            config,
        }
    }

    pub fn with_algorithm(mut self, algorithm: ReedSolomonAlgorithm) -> Self {
        self.config.algorithm = algorithm;
        self
    }

    /// Refuse to correct: any needed correction becomes
    /// [`DecodeError::CorrectionRequired`]
    pub fn strict(mut self, noerror: bool) -> Self {
        self.config.noerror = noerror;
        self
    }

    pub fn num_ecc_codewords(&self) -> usize {
        self.num_ecc_codewords
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// True if the block's syndrome is nonzero (see
    /// [`has_errors`](super::syndrome::has_errors) for the limits)
    pub fn has_errors(&self, received: &[u8]) -> bool {
        has_errors(&Poly::from_block(received), self.num_ecc_codewords)
    }

    /// Correct `received` in place
    pub fn decode(&self, received: &mut [u8]) -> Result<Correction, DecodeError> {
        self.decode_with_erasures(received, &[])
    }

    /// Correct `received` in place given known-bad block indices.
    ///
    /// `erasures` index the block from its first byte. On error `received`
    /// is left unmodified.
    pub fn decode_with_erasures(
        &self,
        received: &mut [u8],
        erasures: &[usize],
    ) -> Result<Correction, DecodeError> {
        let len = received.len();
        if len > MAX_BLOCK_LEN {
            return Err(DecodeError::InvalidInput(format!(
                "block of {len} symbols exceeds {MAX_BLOCK_LEN}"
            )));
        }
        if self.num_ecc_codewords > len {
            return Err(DecodeError::InvalidInput(format!(
                "{} EC symbols do not fit in a block of {len}",
                self.num_ecc_codewords
            )));
        }
        validate_erasures(erasures, len)?;

        let degrees: Vec<usize> = erasures.iter().map(|&i| len - 1 - i).collect();
        let poly = Poly::from_block(received);
        let decoded =
            decode_with_policy(&poly, len, &degrees, self.num_ecc_codewords, &self.config)?;

        let mut fixes: Vec<(usize, u8)> = decoded
            .errata
            .iter()
            .map(|&(deg, mag)| (len - 1 - deg, mag))
            .collect();
        fixes.sort_unstable();
        for &(idx, mag) in &fixes {
            received[idx] ^= mag;
        }

        Ok(Correction {
            positions: fixes.iter().map(|&(i, _)| i).collect(),
            magnitudes: fixes.iter().map(|&(_, m)| m).collect(),
            erasures: erasures.len(),
        })
    }
}
