//! Decoder configuration with environment overrides
//!
//! `QR_RS_ALGORITHM` (`euclidean` | `bm`) and `QR_RS_VERIFY` (0/1) are
//! read once per process.

use std::sync::OnceLock;

use super::locator::ReedSolomonAlgorithm;

fn parse_env_bool_u8(name: &str, default: bool) -> bool {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u8>().ok())
        .map(|v| v != 0)
        .unwrap_or(default)
}

static RS_ALGORITHM: OnceLock<ReedSolomonAlgorithm> = OnceLock::new();

pub(crate) fn rs_algorithm() -> ReedSolomonAlgorithm {
    *RS_ALGORITHM.get_or_init(|| {
        std::env::var("QR_RS_ALGORITHM")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_default()
    })
}

static RS_VERIFY: OnceLock<bool> = OnceLock::new();

pub(crate) fn rs_verify() -> bool {
    *RS_VERIFY.get_or_init(|| parse_env_bool_u8("QR_RS_VERIFY", true))
}

/// Options for one decoder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Locator strategy
    pub algorithm: ReedSolomonAlgorithm,
    /// Recompute the syndrome of the corrected block
    pub verify: bool,
    /// Fail with `CorrectionRequired` if any symbol had to be corrected
    pub noerror: bool,
}

impl DecoderConfig {
    pub fn new() -> Self {
        Self {
            algorithm: ReedSolomonAlgorithm::Euclidean,
            verify: true,
            noerror: false,
        }
    }

    /// Defaults overridden by the `QR_RS_*` environment variables
    pub fn from_env() -> Self {
        Self {
            algorithm: rs_algorithm(),
            verify: rs_verify(),
            noerror: false,
        }
    }

    pub fn with_algorithm(mut self, algorithm: ReedSolomonAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    pub fn with_noerror(mut self, noerror: bool) -> Self {
        self.noerror = noerror;
        self
    }
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self::new()
    }
}
