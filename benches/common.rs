use rust_qr_ecc::decoder::gf256::Gf256;
use rust_qr_ecc::decoder::poly::Poly;

/// Systematic encoder: `data` followed by `nsym` EC bytes
pub fn encode_block(data: &[u8], nsym: usize) -> Vec<u8> {
    let generator = (0..nsym).fold(Poly::one(), |g, i| &g * &Poly::new(vec![Gf256::exp(i), 1]));
    let shifted = Poly::from_block(data).shift(nsym);
    let (_, rem) = shifted.div_rem(&generator).expect("generator is nonzero");
    (&shifted + &rem).to_block(data.len() + nsym)
}

/// A `len` byte block with `errors` corrupted symbols spread across it
pub fn damaged_block(len: usize, nsym: usize, errors: usize) -> Vec<u8> {
    let data: Vec<u8> = (0..len - nsym).map(|i| (i * 31 + 7) as u8).collect();
    let mut block = encode_block(&data, nsym);
    let stride = (len / errors.max(1)).max(1);
    for k in 0..errors {
        block[(k * stride) % len] ^= 0xA5;
    }
    block
}
