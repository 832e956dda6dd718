//! Integration tests for Reed-Solomon block decoding
//!
//! Both locator algorithms are driven through the public API with fixed
//! vectors and seeded random sweeps.

mod common;

use common::{corrupt, encode_block, generator_poly, random_data, random_errors};
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;
use rayon::prelude::*;
use rust_qr_ecc::decoder::poly::Poly;
use rust_qr_ecc::decoder::reed_solomon::{berlekamp_massey_decoder, euclidean_decoder, rs_decoder};
use rust_qr_ecc::decoder::roots::{distinct_roots, find_roots};
use rust_qr_ecc::decoder::syndrome::{erratalocator_polynomial, has_errors};
use rust_qr_ecc::{
    DecodeError, DecoderConfig, ReedSolomonAlgorithm, ReedSolomonDecoder, UncorrectableReason,
};

const ALGORITHMS: [ReedSolomonAlgorithm; 2] = [
    ReedSolomonAlgorithm::Euclidean,
    ReedSolomonAlgorithm::BerlekampMassey,
];

#[test]
fn test_encoder_reference_vector() {
    let expected = [
        0x51, 0x52, 0x2d, 0x43, 0x6f, 0x64, 0x65, 0x2d, 0x31, 0x30, 0x97, 0xa4, 0xa0, 0x57, 0xde,
        0x99, 0xdc, 0x3e, 0xf0, 0xbe,
    ];
    assert_eq!(encode_block(b"QR-Code-10", 10), expected);
    assert_eq!(
        generator_poly(10).coeffs(),
        &[193, 157, 113, 95, 94, 199, 111, 159, 194, 216, 1]
    );
}

#[test]
fn test_single_error_at_index_5() {
    let original = encode_block(b"QR-Code-10", 10);
    assert_eq!(original.len(), 20);

    for alg in ALGORITHMS {
        let mut block = corrupt(&original, &[(5, 0x5a)]);
        let correction = ReedSolomonDecoder::new(10)
            .with_algorithm(alg)
            .decode(&mut block)
            .unwrap();
        assert_eq!(block, original, "{alg}");
        assert_eq!(correction.count(), 1);
        assert_eq!(correction.positions, vec![5]);
        assert_eq!(correction.magnitudes, vec![0x5a]);
    }
}

#[test]
fn test_six_errors_are_uncorrectable() {
    let original = encode_block(b"0123456789", 10);
    let damaged = corrupt(
        &original,
        &[
            (0, 0x11),
            (3, 0x22),
            (6, 0x33),
            (9, 0x44),
            (12, 0x55),
            (15, 0x66),
        ],
    );

    for alg in ALGORITHMS {
        let mut block = damaged.clone();
        let err = ReedSolomonDecoder::new(10)
            .with_algorithm(alg)
            .decode(&mut block)
            .unwrap_err();
        assert!(err.is_uncorrectable(), "{alg}: {err}");
        assert_eq!(block, damaged, "failed decode must not touch the block");
    }
}

#[test]
fn test_codeword_sized_error_goes_undetected() {
    // Adding g(x) moves a codeword onto another codeword: 11 symbols change
    // and the syndrome stays zero
    let original = encode_block(b"0123456789", 10);
    let len = original.len();
    let pattern: Vec<(usize, u8)> = generator_poly(10)
        .coeffs()
        .iter()
        .enumerate()
        .map(|(degree, &c)| (len - 1 - degree, c))
        .collect();
    let damaged = corrupt(&original, &pattern);
    assert_ne!(damaged, original);
    assert!(!has_errors(&Poly::from_block(&damaged), 10));

    for alg in ALGORITHMS {
        let mut block = damaged.clone();
        let correction = ReedSolomonDecoder::new(10)
            .with_algorithm(alg)
            .decode(&mut block)
            .unwrap();
        assert!(correction.is_empty());
        assert_eq!(block, damaged);
    }
}

#[test]
fn test_erasures_extend_capacity() {
    let original = encode_block(b"erasure-test", 10);
    let damaged = corrupt(
        &original,
        &[
            (1, 0x10),
            (4, 0x20),
            (7, 0x30),
            (13, 0x40),
            (16, 0x50),
            (20, 0x60),
        ],
    );

    for alg in ALGORITHMS {
        let decoder = ReedSolomonDecoder::new(10).with_algorithm(alg);

        // 6 blind errors exceed t = 5
        let mut blind = damaged.clone();
        assert!(decoder.decode(&mut blind).is_err(), "{alg}");

        // 3 erasures + 3 errors: 2*3 + 3 <= 10
        let mut block = damaged.clone();
        let correction = decoder.decode_with_erasures(&mut block, &[1, 4, 7]).unwrap();
        assert_eq!(block, original, "{alg}");
        assert_eq!(correction.count(), 6);
        assert_eq!(correction.erasures, 3);

        // 4 erasures + 2 errors hits the bound exactly
        let mut block = damaged.clone();
        decoder
            .decode_with_erasures(&mut block, &[1, 4, 7, 13])
            .unwrap();
        assert_eq!(block, original, "{alg}");
    }
}

#[test]
fn test_erasures_only_at_full_capacity() {
    let original = encode_block(b"erasure-test", 10);
    let erasures: Vec<usize> = (0..20).step_by(2).collect();
    let pattern: Vec<(usize, u8)> = erasures.iter().map(|&i| (i, 0x77)).collect();
    let damaged = corrupt(&original, &pattern);

    for alg in ALGORITHMS {
        let mut block = damaged.clone();
        let correction = ReedSolomonDecoder::new(10)
            .with_algorithm(alg)
            .decode_with_erasures(&mut block, &erasures)
            .unwrap();
        assert_eq!(block, original, "{alg}");
        assert_eq!(correction.count(), 10);
    }
}

#[test]
fn test_random_errors_within_capacity() {
    let mut rng = StdRng::seed_from_u64(0x5152);
    for round in 0..200 {
        let nsym = 1 + round % 30;
        let data_len = 1 + (round * 7) % 60;
        let original = encode_block(&random_data(&mut rng, data_len), nsym);
        let t = (round / 15) % (nsym / 2 + 1);
        let damaged = corrupt(&original, &random_errors(&mut rng, original.len(), t));

        let mut results = Vec::new();
        for alg in ALGORITHMS {
            let mut block = damaged.clone();
            let correction = ReedSolomonDecoder::new(nsym)
                .with_algorithm(alg)
                .decode(&mut block)
                .unwrap_or_else(|e| panic!("round {round} {alg}: {e}"));
            assert_eq!(block, original, "round {round} {alg}");
            assert_eq!(correction.count(), t);
            results.push(correction);
        }
        assert_eq!(results[0], results[1], "round {round}");
    }
}

#[test]
fn test_random_errata_within_capacity() {
    let mut rng = StdRng::seed_from_u64(7);
    for round in 0..200 {
        let nsym = 4 + round % 27;
        let original = encode_block(&random_data(&mut rng, 20), nsym);
        let len = original.len();

        let erasures_count = round % (nsym + 1);
        let errors_count = (nsym - erasures_count) / 2;
        let errata = random_errors(&mut rng, len, erasures_count + errors_count);
        let erasures: Vec<usize> = errata[..erasures_count].iter().map(|&(i, _)| i).collect();
        let damaged = corrupt(&original, &errata);

        for alg in ALGORITHMS {
            let mut block = damaged.clone();
            ReedSolomonDecoder::new(nsym)
                .with_algorithm(alg)
                .decode_with_erasures(&mut block, &erasures)
                .unwrap_or_else(|e| panic!("round {round} {alg}: {e}"));
            assert_eq!(block, original, "round {round} {alg}");
        }
    }
}

#[test]
fn test_unverified_decode_never_returns_a_noncodeword() {
    let mut rng = StdRng::seed_from_u64(0xBEEF);
    for round in 0..600 {
        let nsym = 1 + round % 16;
        let original = encode_block(&random_data(&mut rng, 1 + round % 20), nsym);
        let len = original.len();
        let erasures_count = rng.random_range(0..=nsym.min(len));
        let min_errors = (nsym - erasures_count) / 2 + 1;
        let max_errors = len - erasures_count;
        let errors_count = rng
            .random_range(min_errors..=max_errors.max(min_errors))
            .min(max_errors);
        let errata = random_errors(&mut rng, len, erasures_count + errors_count);
        let erasures: Vec<usize> = errata[..erasures_count].iter().map(|&(i, _)| i).collect();
        let damaged = corrupt(&original, &errata);

        let mut outcomes = Vec::new();
        for alg in ALGORITHMS {
            let config = DecoderConfig::new().with_algorithm(alg).with_verify(false);
            let decoder = ReedSolomonDecoder::with_config(nsym, config);
            let mut block = damaged.clone();
            match decoder.decode_with_erasures(&mut block, &erasures) {
                Ok(correction) => {
                    // Beyond capacity a decoder may land on another codeword,
                    // never on a word with a nonzero syndrome
                    assert!(!decoder.has_errors(&block), "round {round} {alg}");
                    if decoder.has_errors(&damaged) {
                        assert!(!correction.is_empty(), "round {round} {alg}");
                    }
                    outcomes.push(Some(block));
                }
                Err(err) => {
                    assert!(err.is_uncorrectable(), "round {round} {alg}: {err}");
                    assert_eq!(block, damaged);
                    outcomes.push(None);
                }
            }
        }
        assert_eq!(outcomes[0], outcomes[1], "round {round}");
    }
}

#[test]
fn test_unverified_single_symbol_code() {
    let original = encode_block(b"abc", 1);
    let damaged = corrupt(&original, &[(2, 0x40)]);
    for alg in ALGORITHMS {
        let config = DecoderConfig::new().with_algorithm(alg).with_verify(false);
        let mut block = damaged.clone();
        let err = ReedSolomonDecoder::with_config(1, config)
            .decode(&mut block)
            .unwrap_err();
        assert!(err.is_uncorrectable(), "{alg}: {err}");
    }
}

#[test]
fn test_corrected_block_has_zero_syndrome() {
    let mut rng = StdRng::seed_from_u64(99);
    let original = encode_block(&random_data(&mut rng, 40), 16);
    let damaged = corrupt(&original, &random_errors(&mut rng, original.len(), 8));

    for alg in ALGORITHMS {
        let decoder = ReedSolomonDecoder::new(16).with_algorithm(alg);
        let mut block = damaged.clone();
        decoder.decode(&mut block).unwrap();
        assert!(!decoder.has_errors(&block));

        let again = decoder.decode(&mut block).unwrap();
        assert!(again.is_empty());
        assert_eq!(block, original);
    }
}

#[test]
fn test_strict_mode_reports_needed_corrections() {
    let original = encode_block(b"strict", 4);
    let damaged = corrupt(&original, &[(0, 1), (9, 2)]);

    for alg in ALGORITHMS {
        let decoder = ReedSolomonDecoder::new(4).with_algorithm(alg).strict(true);

        let mut clean = original.clone();
        assert!(decoder.decode(&mut clean).unwrap().is_empty());

        let mut block = damaged.clone();
        assert_eq!(
            decoder.decode(&mut block).unwrap_err(),
            DecodeError::CorrectionRequired { corrected: 2 }
        );
        assert_eq!(block, damaged);
    }
}

#[test]
fn test_polynomial_level_decoders_agree() {
    let original = Poly::from_block(&encode_block(b"polynomial", 8));
    let errors = &original + &(&Poly::monomial(0x42, 3) + &Poly::monomial(0x9c, 12));
    let erased = &original + &Poly::monomial(0x17, 0);

    for alg in ALGORITHMS {
        assert_eq!(rs_decoder(&errors, 8, alg).unwrap(), original);
    }
    assert_eq!(euclidean_decoder(&erased, &[0], 8).unwrap(), original);
    assert_eq!(berlekamp_massey_decoder(&erased, &[0], 8).unwrap(), original);
}

#[test]
fn test_duplicated_root_is_rejected() {
    let single = erratalocator_polynomial(&[4]);
    let squared = &single * &single;
    assert_eq!(squared.degree(), Some(2));
    assert_eq!(distinct_roots(&squared).len(), 1);
    assert!(find_roots(&squared).is_empty());
    assert_eq!(find_roots(&single).len(), 1);
}

#[test]
fn test_parallel_decoding_matches_sequential() {
    let mut rng = StdRng::seed_from_u64(2024);
    let cases: Vec<(Vec<u8>, Vec<u8>)> = (0..64)
        .map(|_| {
            let original = encode_block(&random_data(&mut rng, 30), 12);
            let damaged = corrupt(&original, &random_errors(&mut rng, original.len(), 6));
            (original, damaged)
        })
        .collect();

    let decoder = ReedSolomonDecoder::new(12).with_algorithm(ReedSolomonAlgorithm::BerlekampMassey);
    let decoded: Vec<Vec<u8>> = cases
        .par_iter()
        .map(|(_, damaged)| {
            let mut block = damaged.clone();
            decoder.decode(&mut block).map(|_| block)
        })
        .collect::<Result<_, _>>()
        .unwrap();

    for ((original, _), block) in cases.iter().zip(&decoded) {
        assert_eq!(block, original);
    }
}

#[test]
fn test_invalid_inputs() {
    let decoder = ReedSolomonDecoder::new(10);
    assert!(matches!(
        decoder.decode(&mut [0u8; 256]),
        Err(DecodeError::InvalidInput(_))
    ));
    assert!(matches!(
        decoder.decode(&mut [0u8; 8]),
        Err(DecodeError::InvalidInput(_))
    ));

    let mut block = encode_block(b"abc", 10);
    assert!(matches!(
        decoder.decode_with_erasures(&mut block, &[13]),
        Err(DecodeError::InvalidInput(_))
    ));
    assert!(matches!(
        decoder.decode_with_erasures(&mut block, &[2, 2]),
        Err(DecodeError::InvalidInput(_))
    ));
}

#[test]
fn test_too_many_erasures_is_uncorrectable() {
    let original = encode_block(b"abcdef", 4);
    let damaged = corrupt(&original, &[(0, 1), (1, 1), (2, 1), (3, 1), (4, 1)]);
    for alg in ALGORITHMS {
        let mut block = damaged.clone();
        let err = ReedSolomonDecoder::new(4)
            .with_algorithm(alg)
            .decode_with_erasures(&mut block, &[0, 1, 2, 3, 4])
            .unwrap_err();
        assert!(
            matches!(
                err,
                DecodeError::Uncorrectable(UncorrectableReason::TooManyErrata { .. })
                    | DecodeError::Uncorrectable(UncorrectableReason::DegenerateLocator)
            ),
            "{alg}: {err}"
        );
    }
}
