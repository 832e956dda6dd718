//! QR codeword stream to corrected data codewords
//!
//! A symbol's codewords are interleaved across blocks: first the data
//! codewords column by column (short blocks run out one column early), then
//! the EC codewords. Each block is an independent RS codeword, so blocks
//! are corrected in parallel.

use rayon::prelude::*;
use tracing::debug;

use super::config::DecoderConfig;
use super::error::DecodeError;
use super::locator::ReedSolomonAlgorithm;
use super::reed_solomon::ReedSolomonDecoder;
use super::tables::ec_block_info;
use crate::models::{CodewordBlock, ECLevel};

/// Failure while splitting or correcting a full symbol
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BlockError {
    #[error("unsupported QR version {0}")]
    UnsupportedVersion(u8),
    #[error("version {version}-{level} holds {expected} codewords, got {got}")]
    LengthMismatch {
        version: u8,
        level: ECLevel,
        expected: usize,
        got: usize,
    },
    #[error("block {index}: {source}")]
    Block {
        index: usize,
        #[source]
        source: DecodeError,
    },
}

/// Split an interleaved codeword stream into its `(msg, ec)` blocks
pub fn deinterleave(
    codewords: &[u8],
    version: u8,
    ec_level: ECLevel,
) -> Result<Vec<CodewordBlock>, BlockError> {
    let info = ec_block_info(version, ec_level).ok_or(BlockError::UnsupportedVersion(version))?;
    if codewords.len() != info.total_codewords {
        return Err(BlockError::LengthMismatch {
            version,
            level: ec_level,
            expected: info.total_codewords,
            got: codewords.len(),
        });
    }

    let mut blocks: Vec<CodewordBlock> = (0..info.num_blocks)
        .map(|b| {
            CodewordBlock::new(
                Vec::with_capacity(info.data_len(b)),
                Vec::with_capacity(info.ecc_per_block),
            )
        })
        .collect();

    let mut stream = codewords.iter().copied();
    let long_len = info.short_data_len() + 1;
    for i in 0..long_len {
        for (b, block) in blocks.iter_mut().enumerate() {
            if i < info.data_len(b) {
                // Length was checked against the table above
                if let Some(c) = stream.next() {
                    block.msg.push(c);
                }
            }
        }
    }
    for _ in 0..info.ecc_per_block {
        for block in blocks.iter_mut() {
            if let Some(c) = stream.next() {
                block.ec.push(c);
            }
        }
    }

    Ok(blocks)
}

/// Error-correct one block and return its message part.
///
/// With `noerror` set, a block that needs any correction fails with
/// [`DecodeError::CorrectionRequired`].
pub fn correct_message(
    msgblock: &[u8],
    ecblock: &[u8],
    algorithm: ReedSolomonAlgorithm,
    noerror: bool,
) -> Result<Vec<u8>, DecodeError> {
    let config = DecoderConfig::new()
        .with_algorithm(algorithm)
        .with_noerror(noerror);
    correct_with_config(msgblock, ecblock, &config)
}

fn correct_with_config(
    msgblock: &[u8],
    ecblock: &[u8],
    config: &DecoderConfig,
) -> Result<Vec<u8>, DecodeError> {
    let mut codeword = Vec::with_capacity(msgblock.len() + ecblock.len());
    codeword.extend_from_slice(msgblock);
    codeword.extend_from_slice(ecblock);

    ReedSolomonDecoder::with_config(ecblock.len(), *config).decode(&mut codeword)?;
    codeword.truncate(msgblock.len());
    Ok(codeword)
}

/// Correct every block in parallel and concatenate the message parts.
///
/// If several blocks fail, the error of the lowest block index is returned.
pub fn correct_blocks(
    blocks: &[CodewordBlock],
    config: &DecoderConfig,
) -> Result<Vec<u8>, BlockError> {
    let results: Vec<Result<Vec<u8>, DecodeError>> = blocks
        .par_iter()
        .map(|block| correct_with_config(&block.msg, &block.ec, config))
        .collect();

    let mut data = Vec::with_capacity(blocks.iter().map(|b| b.msg.len()).sum());
    for (index, result) in results.into_iter().enumerate() {
        match result {
            Ok(msg) => data.extend_from_slice(&msg),
            Err(source) => {
                debug!(index, error = %source, "block correction failed");
                return Err(BlockError::Block { index, source });
            }
        }
    }
    Ok(data)
}

/// De-interleave and correct a full symbol's codewords
pub fn correct_codewords(
    codewords: &[u8],
    version: u8,
    ec_level: ECLevel,
    config: &DecoderConfig,
) -> Result<Vec<u8>, BlockError> {
    let blocks = deinterleave(codewords, version, ec_level)?;
    correct_blocks(&blocks, config)
}

/// MSB-first bits of `bytes`, as consumed by the mode decoders
pub fn block_to_bits(bytes: &[u8]) -> Vec<bool> {
    bytes
        .iter()
        .flat_map(|&byte| (0..8).rev().map(move |i| (byte >> i) & 1 != 0))
        .collect()
}
