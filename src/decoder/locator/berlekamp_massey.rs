use tracing::trace;

use super::LocatorSolver;
use crate::decoder::error::{DecodeError, UncorrectableReason};
use crate::decoder::gf256::Gf256;
use crate::decoder::poly::Poly;
use crate::decoder::syndrome::erratalocator_polynomial;

/// Massey's shift-register synthesis
#[derive(Debug, Clone, Copy, Default)]
pub struct BerlekampMassey;

impl LocatorSolver for BerlekampMassey {
    fn name(&self) -> &'static str {
        "berlekamp-massey"
    }

    /// With `e` erasures the register starts as Γ(x) with length `e` and the
    /// recurrence runs over syndromes `e..nsym`; a length change happens when
    /// `2L <= i + e`.
    fn locator(
        &self,
        syndrome: &Poly,
        erasures: &[usize],
        nsym: usize,
    ) -> Result<Poly, DecodeError> {
        let e = erasures.len();
        if e > nsym {
            return Err(UncorrectableReason::TooManyErrata {
                errors: 0,
                erasures: e,
                nsym,
            }
            .into());
        }

        let gamma = erratalocator_polynomial(erasures);
        // Current connection polynomial C(x) and the copy B(x) saved at the
        // last length change
        let mut sigma = gamma.clone();
        let mut b = gamma;
        let mut delta_b: u8 = 1;
        let mut l = e;
        let mut m = 1usize;

        for i in e..nsym {
            let mut delta = syndrome.coeff(i);
            let top = sigma.degree().unwrap_or(0).min(i);
            for j in 1..=top {
                delta ^= Gf256::mul(sigma.coeff(j), syndrome.coeff(i - j));
            }

            if delta == 0 {
                m += 1;
                continue;
            }

            let d = Gf256::div(delta, delta_b)?;
            let sigma_old = sigma.clone();
            // sigma = sigma - d * x^m * b
            sigma = &sigma - &b.scale(d).shift(m);

            if 2 * l <= i + e {
                l = i + 1 + e - l;
                b = sigma_old;
                delta_b = delta;
                m = 1;
            } else {
                m += 1;
            }
        }

        trace!(register_length = l, degree = ?sigma.degree(), erasures = e, "berlekamp-massey locator");

        // A register whose polynomial is shorter than its length cannot
        // describe the observed syndrome
        if sigma.degree() != Some(l) {
            return Err(UncorrectableReason::DegenerateLocator.into());
        }
        Ok(sigma)
    }
}
