//! Root search for locator polynomials
//!
//! Brute force over the 255 nonzero field elements. A locator has
//! constant term 1, so zero is never a root.

use super::gf256::{FIELD_ORDER, Gf256};
use super::poly::Poly;

/// Every distinct nonzero root of `p`, in increasing element order.
///
/// Each root found is divided out with Horner's rule so the search can stop
/// once the quotient is constant.
pub fn distinct_roots(p: &Poly) -> Vec<u8> {
    let mut roots = Vec::new();
    let mut rest = p.clone();

    for a in 1..=255u8 {
        if rest.degree().is_none_or(|d| d == 0) {
            break;
        }
        let (q, r) = rest.reduce_by_horner(a);
        if r == 0 {
            roots.push(a);
            rest = q;
        }
    }
    roots
}

/// Roots of `p`, or an empty vector if `p` does not split into distinct
/// linear factors over GF(256).
///
/// A repeated root deflates only once, so the count falls short of the
/// degree and nothing is returned.
pub fn find_roots(p: &Poly) -> Vec<u8> {
    let roots = distinct_roots(p);
    match p.degree() {
        Some(d) if d == roots.len() => roots,
        _ => Vec::new(),
    }
}

/// Error positions (degrees, 0 = last block symbol) from the locator.
///
/// A root r = X⁻¹ = α^(-i) yields position i = 255 - log r (mod 255).
/// Returns an empty vector when the locator has no usable root set.
pub fn get_positions(locator: &Poly) -> Vec<usize> {
    find_roots(locator)
        .into_iter()
        .filter_map(|r| Gf256::log(r).ok())
        .map(|log| (FIELD_ORDER - log) % FIELD_ORDER)
        .collect()
}
