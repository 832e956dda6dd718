//! Systematic RS encoder used by unit tests only

use super::gf256::Gf256;
use super::poly::Poly;

/// Generator polynomial with roots α^0 .. α^(nsym-1)
pub(crate) fn generator_poly(nsym: usize) -> Poly {
    (0..nsym).fold(Poly::one(), |g, i| &g * &Poly::new(vec![Gf256::exp(i), 1]))
}

/// Append `nsym` EC bytes to `data`, message first like a QR block
pub(crate) fn encode_block(data: &[u8], nsym: usize) -> Vec<u8> {
    let shifted = Poly::from_block(data).shift(nsym);
    let (_, rem) = shifted
        .div_rem(&generator_poly(nsym))
        .expect("generator is nonzero");
    (&shifted + &rem).to_block(data.len() + nsym)
}

/// XOR `magnitude` into the byte at each block index
pub(crate) fn corrupt(block: &[u8], errors: &[(usize, u8)]) -> Vec<u8> {
    let mut out = block.to_vec();
    for &(idx, magnitude) in errors {
        out[idx] ^= magnitude;
    }
    out
}
