//! Error/erasure locator construction
//!
//! Two interchangeable strategies compute the errata locator
//! Ψ(x) = Γ(x)·Λ(x), where Γ is the locator of the known erasures and Λ
//! covers the errors discovered from the syndrome. On error-only input both
//! return the same polynomial.

/// Berlekamp-Massey shift-register synthesis
pub mod berlekamp_massey;
/// Sugiyama's extended Euclidean algorithm
pub mod euclidean;

use std::fmt;
use std::str::FromStr;

use super::error::{DecodeError, UncorrectableReason};
use super::poly::Poly;
use super::roots::distinct_roots;

pub use berlekamp_massey::BerlekampMassey;
pub use euclidean::Euclidean;

/// A way of turning a syndrome into an errata locator
pub trait LocatorSolver: Sync {
    fn name(&self) -> &'static str;

    /// Compute Ψ(x) from the syndrome and the erasure positions (degrees).
    ///
    /// The returned polynomial has constant term 1 on success. Validation of
    /// its roots is left to [`check_locator`].
    fn locator(&self, syndrome: &Poly, erasures: &[usize], nsym: usize)
    -> Result<Poly, DecodeError>;

    /// [`LocatorSolver::locator`] followed by [`check_locator`]
    fn checked_locator(
        &self,
        syndrome: &Poly,
        erasures: &[usize],
        nsym: usize,
    ) -> Result<Poly, DecodeError> {
        let locator = self.locator(syndrome, erasures, nsym)?;
        check_locator(&locator, erasures.len(), nsym)?;
        Ok(locator)
    }
}

/// Selects the locator strategy used by the decoder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum ReedSolomonAlgorithm {
    #[default]
    Euclidean,
    BerlekampMassey,
}

impl ReedSolomonAlgorithm {
    pub fn solver(self) -> &'static dyn LocatorSolver {
        match self {
            ReedSolomonAlgorithm::Euclidean => &Euclidean,
            ReedSolomonAlgorithm::BerlekampMassey => &BerlekampMassey,
        }
    }

    /// The other algorithm, for callers that retry on failure
    pub fn alternate(self) -> Self {
        match self {
            ReedSolomonAlgorithm::Euclidean => ReedSolomonAlgorithm::BerlekampMassey,
            ReedSolomonAlgorithm::BerlekampMassey => ReedSolomonAlgorithm::Euclidean,
        }
    }
}

impl fmt::Display for ReedSolomonAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.solver().name())
    }
}

impl FromStr for ReedSolomonAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "euclidean" | "euclid" | "sugiyama" => Ok(ReedSolomonAlgorithm::Euclidean),
            "bm" | "berlekamp-massey" | "berlekamp_massey" | "berlekampmassey" => {
                Ok(ReedSolomonAlgorithm::BerlekampMassey)
            }
            other => Err(format!("unknown Reed-Solomon algorithm: {other}")),
        }
    }
}

/// Check that an errata locator can be trusted.
///
/// Rejects a locator whose constant term is not 1, whose error part is
/// larger than `⌊(nsym - erasures)/2⌋`, or which does not split into
/// distinct linear factors over GF(256).
pub fn check_locator(
    locator: &Poly,
    num_erasures: usize,
    nsym: usize,
) -> Result<(), UncorrectableReason> {
    let degree = locator
        .degree()
        .filter(|&d| d >= num_erasures && locator.coeff(0) == 1)
        .ok_or(UncorrectableReason::DegenerateLocator)?;

    let errors = degree - num_erasures;
    if 2 * errors + num_erasures > nsym {
        return Err(UncorrectableReason::TooManyErrata {
            errors,
            erasures: num_erasures,
            nsym,
        });
    }

    let found = distinct_roots(locator).len();
    if found != degree {
        return Err(UncorrectableReason::RootCountMismatch { degree, found });
    }
    Ok(())
}
