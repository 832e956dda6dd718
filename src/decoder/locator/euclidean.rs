use tracing::trace;

use super::LocatorSolver;
use crate::decoder::error::{DecodeError, UncorrectableReason};
use crate::decoder::gf256::Gf256;
use crate::decoder::poly::{Poly, PolyError};
use crate::decoder::syndrome::{erratalocator_polynomial, evaluator_polynomial};

/// Sugiyama's key-equation solver
#[derive(Debug, Clone, Copy, Default)]
pub struct Euclidean;

/// Extended Euclidean algorithm.
///
/// Returns `(u, v, g)` with `u·r1 + v·r2 = g`, where `g` is a (not
/// necessarily monic) gcd of `r1` and `r2`. Each step divides
/// r_{k-1} = q_k·r_k + r_{k+1} and carries the Bézout coefficients along:
/// u_{k+1} = u_{k-1} - q_k·u_k, v_{k+1} = v_{k-1} - q_k·v_k, starting from
/// (u, v) = (1, 0) for r1 and (0, 1) for r2.
pub fn extended_euclidean_divide(r1: &Poly, r2: &Poly) -> Result<(Poly, Poly, Poly), PolyError> {
    let state = run_remainder_sequence(r1, r2, |r| !r.is_zero())?;
    Ok((state.u_prev, state.v_prev, state.r_prev))
}

/// Sugiyama's adaptation of the extended Euclidean algorithm.
///
/// Same recurrence as [`extended_euclidean_divide`] but stops at the first
/// remainder with `deg(r) <= upperdeg`, returning `(u, v, r)` with
/// `r = u·r1 + v·r2`.
pub fn sugiyama_euclidean_divide(
    r1: &Poly,
    r2: &Poly,
    upperdeg: usize,
) -> Result<(Poly, Poly, Poly), PolyError> {
    let state = run_remainder_sequence(r1, r2, |r| r.degree().is_some_and(|d| d > upperdeg))?;
    Ok((state.u, state.v, state.r))
}

struct RemainderState {
    r_prev: Poly,
    r: Poly,
    u_prev: Poly,
    u: Poly,
    v_prev: Poly,
    v: Poly,
}

fn run_remainder_sequence(
    r1: &Poly,
    r2: &Poly,
    keep_going: impl Fn(&Poly) -> bool,
) -> Result<RemainderState, PolyError> {
    let mut s = RemainderState {
        r_prev: r1.clone(),
        r: r2.clone(),
        u_prev: Poly::one(),
        u: Poly::zero(),
        v_prev: Poly::zero(),
        v: Poly::one(),
    };

    while keep_going(&s.r) {
        let (q, rem) = s.r_prev.div_rem(&s.r)?;
        let u_next = &s.u_prev - &(&q * &s.u);
        let v_next = &s.v_prev - &(&q * &s.v);
        s.r_prev = std::mem::replace(&mut s.r, rem);
        s.u_prev = std::mem::replace(&mut s.u, u_next);
        s.v_prev = std::mem::replace(&mut s.v, v_next);
    }
    Ok(s)
}

impl LocatorSolver for Euclidean {
    fn name(&self) -> &'static str {
        "euclidean"
    }

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

        // Fold the known erasures into the syndrome: T(x) = S(x)Γ(x) mod x^nsym
        let gamma = erratalocator_polynomial(erasures);
        let seeded = evaluator_polynomial(syndrome, &gamma, nsym);

        // deg Ω < (nsym + e)/2
        let upperdeg = (nsym + e).saturating_sub(1) / 2;
        let (_, v, r) = sugiyama_euclidean_divide(&Poly::monomial(1, nsym), &seeded, upperdeg)?;

        let v0 = v.coeff(0);
        if v0 == 0 {
            trace!(degree = ?v.degree(), "sugiyama locator has zero constant term");
            return Err(UncorrectableReason::DegenerateLocator.into());
        }
        let lambda = v.scale(Gf256::inv(v0)?);
        trace!(
            errors = ?lambda.degree(),
            erasures = e,
            remainder_degree = ?r.degree(),
            "sugiyama locator"
        );

        // r is Ω up to the factor v(0); a valid errata locator has
        // deg Ω < deg Ψ, and Ω vanishes only when the syndrome does
        let psi = &lambda * &gamma;
        match (r.degree(), psi.degree()) {
            (Some(omega), Some(psi_degree)) if omega < psi_degree => Ok(psi),
            _ => Err(UncorrectableReason::DegenerateLocator.into()),
        }
    }
}
