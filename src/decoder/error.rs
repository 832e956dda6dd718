use super::gf256::FieldError;
use super::poly::PolyError;

/// Why a block could not be corrected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UncorrectableReason {
    /// 2·errors + erasures exceeds the number of EC symbols
    #[error("{errors} error(s) and {erasures} erasure(s) exceed capacity of {nsym} EC symbols")]
    TooManyErrata {
        errors: usize,
        erasures: usize,
        nsym: usize,
    },
    /// Λ(x) has repeated roots or roots outside GF(256)
    #[error("locator of degree {degree} has {found} distinct root(s) in GF(256)")]
    RootCountMismatch { degree: usize, found: usize },
    /// Λ(x) is zero or has a zero constant term
    #[error("locator polynomial is degenerate")]
    DegenerateLocator,
    /// A root points outside the received block
    #[error("error position {position} lies outside a block of {len} symbols")]
    PositionOutOfRange { position: usize, len: usize },
    /// The corrected block still fails the syndrome check
    #[error("corrected block still has a nonzero syndrome")]
    ResidualSyndrome,
}

/// Reed-Solomon decoding failure
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// Terminal failure for this block; the input is left untouched
    #[error("uncorrectable block: {0}")]
    Uncorrectable(UncorrectableReason),
    /// The block was correctable but the caller asked for zero tolerance
    #[error("block needed {corrected} correction(s) but error correction is disabled")]
    CorrectionRequired { corrected: usize },
    #[error("invalid decoder input: {0}")]
    InvalidInput(String),
    /// Λ'(X⁻¹) vanished at a located root; indicates a decoder bug
    #[error("Forney denominator is zero at position {position}")]
    ForneyDenominatorZero { position: usize },
    #[error(transparent)]
    Field(#[from] FieldError),
    #[error(transparent)]
    Poly(#[from] PolyError),
}

impl DecodeError {
    /// True for failures caused by the data rather than the setup
    pub fn is_uncorrectable(&self) -> bool {
        matches!(self, DecodeError::Uncorrectable(_))
    }
}

impl From<UncorrectableReason> for DecodeError {
    fn from(reason: UncorrectableReason) -> Self {
        DecodeError::Uncorrectable(reason)
    }
}
