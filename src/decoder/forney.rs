//! Forney error-magnitude evaluation

use super::error::DecodeError;
use super::gf256::{FIELD_ORDER, Gf256};
use super::poly::Poly;
use super::syndrome::{erratalocator_polynomial, evaluator_polynomial, syndrome_polynomial};

/// Error magnitudes for each position in `errpos`.
///
/// e_k = X_k · Ω(X_k⁻¹) / Λ'(X_k⁻¹) with X_k = α^(i_k). The leading X_k
/// comes from the first generator root being α^0.
pub fn forney_algorithm(
    locator: &Poly,
    evaluator: &Poly,
    errpos: &[usize],
) -> Result<Vec<u8>, DecodeError> {
    let derivative = locator.derivative();

    errpos
        .iter()
        .map(|&position| {
            let x_k = Gf256::exp(position);
            let x_inv = Gf256::exp(FIELD_ORDER - position % FIELD_ORDER);

            let denominator = derivative.eval(x_inv);
            if denominator == 0 {
                return Err(DecodeError::ForneyDenominatorZero { position });
            }
            let numerator = Gf256::mul(x_k, evaluator.eval(x_inv));
            Ok(Gf256::mul(numerator, Gf256::inv(denominator)?))
        })
        .collect()
}

/// Correct `received` assuming `errpos` lists every corrupted position.
///
/// Warning: if `errpos` is incomplete the returned polynomial is wrong, and
/// nothing here detects it. Only call this with a full position set, or
/// check the syndrome of the result.
pub fn fill_erasures(received: &Poly, errpos: &[usize], nsym: usize) -> Result<Poly, DecodeError> {
    let syndrome = syndrome_polynomial(received, nsym);
    let locator = erratalocator_polynomial(errpos);
    let evaluator = evaluator_polynomial(&syndrome, &locator, nsym);
    let magnitudes = forney_algorithm(&locator, &evaluator, errpos)?;

    let correction = errpos
        .iter()
        .zip(magnitudes)
        .fold(Poly::zero(), |acc, (&pos, mag)| &acc + &Poly::monomial(mag, pos));
    Ok(received + &correction)
}
