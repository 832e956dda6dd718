//! Test-only encoder and corruption helpers
#![allow(dead_code)]

use rand::Rng;
use rand::seq::index::sample;
use rust_qr_ecc::decoder::gf256::Gf256;
use rust_qr_ecc::decoder::poly::Poly;
use rust_qr_ecc::decoder::tables::EcBlockInfo;

/// g(x) = ∏ (x + α^i) for i < nsym
pub fn generator_poly(nsym: usize) -> Poly {
    (0..nsym).fold(Poly::one(), |g, i| &g * &Poly::new(vec![Gf256::exp(i), 1]))
}

/// Systematic encoder: `data` followed by `nsym` EC bytes
pub fn encode_block(data: &[u8], nsym: usize) -> Vec<u8> {
    let shifted = Poly::from_block(data).shift(nsym);
    let (_, rem) = shifted
        .div_rem(&generator_poly(nsym))
        .expect("generator is nonzero");
    (&shifted + &rem).to_block(data.len() + nsym)
}

/// XOR each magnitude into its block index
pub fn corrupt(block: &[u8], errors: &[(usize, u8)]) -> Vec<u8> {
    let mut out = block.to_vec();
    for &(idx, magnitude) in errors {
        out[idx] ^= magnitude;
    }
    out
}

/// `count` distinct indices below `len`, each with a nonzero magnitude
pub fn random_errors<R: Rng>(rng: &mut R, len: usize, count: usize) -> Vec<(usize, u8)> {
    sample(rng, len, count)
        .into_iter()
        .map(|idx| (idx, rng.random_range(1..=255u8)))
        .collect()
}

pub fn random_data<R: Rng>(rng: &mut R, len: usize) -> Vec<u8> {
    (0..len).map(|_| rng.random::<u8>()).collect()
}

/// Encoder-side symbol layout: split `data`, encode each block, interleave
pub fn build_symbol(data: &[u8], info: &EcBlockInfo) -> Vec<u8> {
    let mut offset = 0;
    let blocks: Vec<Vec<u8>> = (0..info.num_blocks)
        .map(|b| {
            let len = info.data_len(b);
            let block = encode_block(&data[offset..offset + len], info.ecc_per_block);
            offset += len;
            block
        })
        .collect();

    let mut out = Vec::with_capacity(info.total_codewords);
    for i in 0..info.short_data_len() + 1 {
        for (b, block) in blocks.iter().enumerate() {
            if i < info.data_len(b) {
                out.push(block[i]);
            }
        }
    }
    for i in 0..info.ecc_per_block {
        for (b, block) in blocks.iter().enumerate() {
            out.push(block[info.data_len(b) + i]);
        }
    }
    out
}
