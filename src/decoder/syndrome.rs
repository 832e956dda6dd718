//! Syndrome, evaluator and errata-locator polynomials
//!
//! The QR generator polynomial has roots α^0 .. α^(nsym-1), so a valid
//! codeword evaluates to zero at each of them.

use super::gf256::Gf256;
use super::poly::Poly;

/// S(x) with S_i = R(α^i) for i in 0..nsym
pub fn syndrome_polynomial(received: &Poly, nsym: usize) -> Poly {
    Poly::new((0..nsym).map(|i| received.eval(Gf256::exp(i))).collect())
}

/// Returns true if the received polynomial has errors.
///
/// A zero syndrome only proves that the received word is *a* codeword.
/// When the error pattern is itself a nonzero codeword (which needs more
/// than `nsym` corrupted symbols) every syndrome vanishes and the errors go
/// undetected. This is a property of the code, not of this function.
pub fn has_errors(received: &Poly, nsym: usize) -> bool {
    (0..nsym).any(|i| received.eval(Gf256::exp(i)) != 0)
}

/// Ω(x) ≡ S(x)Λ(x) mod x^nsym
pub fn evaluator_polynomial(syndrome: &Poly, locator: &Poly, nsym: usize) -> Poly {
    (syndrome * locator).truncated(nsym)
}

/// Λ(x) = ∏ (1 + α^p x) over the given degree positions
pub fn erratalocator_polynomial(positions: &[usize]) -> Poly {
    positions.iter().fold(Poly::one(), |acc, &p| {
        &acc * &Poly::new(vec![1, Gf256::exp(p)])
    })
}
