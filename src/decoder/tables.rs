use crate::models::ECLevel;

/// Block layout of one version/EC-level combination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EcBlockInfo {
    pub num_blocks: usize,
    pub ecc_per_block: usize,
    /// All codewords in the symbol (data + EC)
    pub total_codewords: usize,
}

impl EcBlockInfo {
    pub fn data_codewords(&self) -> usize {
        self.total_codewords - self.num_blocks * self.ecc_per_block
    }

    /// Blocks with the shorter data length come first
    pub fn num_short_blocks(&self) -> usize {
        self.num_blocks - self.data_codewords() % self.num_blocks
    }

    pub fn short_data_len(&self) -> usize {
        self.data_codewords() / self.num_blocks
    }

    /// Data length of block `b`
    pub fn data_len(&self, b: usize) -> usize {
        if b < self.num_short_blocks() {
            self.short_data_len()
        } else {
            self.short_data_len() + 1
        }
    }
}

// QR Code Model 2 tables, indexed [ec_level][version]
const ECC_CODEWORDS_PER_BLOCK: [[u8; 41]; 4] = [
    [
        0, 7, 10, 15, 20, 26, 18, 20, 24, 30, 18, 20, 24, 26, 30, 22, 24, 28, 30, 28, 28, 28, 28,
        30, 30, 26, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ],
    [
        0, 10, 16, 26, 18, 24, 16, 18, 22, 22, 26, 30, 22, 22, 24, 24, 28, 28, 26, 26, 26, 26, 28,
        28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28,
    ],
    [
        0, 13, 22, 18, 26, 18, 24, 18, 22, 20, 24, 28, 26, 24, 20, 30, 24, 28, 28, 26, 30, 28, 30,
        30, 30, 30, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ],
    [
        0, 17, 28, 22, 16, 22, 28, 26, 26, 24, 28, 24, 28, 22, 24, 24, 30, 28, 28, 26, 28, 30, 24,
        30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ],
];

const NUM_ERROR_CORRECTION_BLOCKS: [[u8; 41]; 4] = [
    [
        0, 1, 1, 1, 1, 1, 2, 2, 2, 2, 4, 4, 4, 4, 4, 6, 6, 6, 6, 7, 8, 8, 9, 9, 10, 12, 12, 12,
        13, 14, 15, 16, 17, 18, 19, 19, 20, 21, 22, 24, 25,
    ],
    [
        0, 1, 1, 1, 2, 2, 4, 4, 4, 5, 5, 5, 8, 9, 9, 10, 10, 11, 13, 14, 16, 17, 17, 18, 20, 21,
        23, 25, 26, 28, 29, 31, 33, 35, 37, 38, 40, 43, 45, 47, 49,
    ],
    [
        0, 1, 1, 2, 2, 4, 4, 6, 6, 8, 8, 8, 10, 12, 16, 12, 17, 16, 18, 21, 20, 23, 23, 25, 27,
        29, 34, 34, 35, 38, 40, 43, 45, 48, 51, 53, 56, 59, 62, 65, 68,
    ],
    [
        0, 1, 1, 2, 4, 4, 4, 5, 6, 8, 8, 11, 11, 16, 16, 18, 16, 19, 21, 25, 25, 25, 34, 30, 32,
        35, 37, 40, 42, 45, 48, 51, 54, 57, 60, 63, 66, 70, 74, 77, 81,
    ],
];

/// Codewords in a symbol: data modules left after function patterns, / 8
pub fn total_codewords(version: u8) -> Option<usize> {
    if !(1..=40).contains(&version) {
        return None;
    }
    let v = version as usize;
    let mut modules = (16 * v + 128) * v + 64;
    if v >= 2 {
        let num_align = v / 7 + 2;
        modules -= (25 * num_align - 10) * num_align - 55;
        if v >= 7 {
            // version information blocks
            modules -= 36;
        }
    }
    Some(modules / 8)
}

pub fn ec_block_info(version: u8, ec_level: ECLevel) -> Option<EcBlockInfo> {
    let total_codewords = total_codewords(version)?;
    let idx = ec_level.index();
    Some(EcBlockInfo {
        num_blocks: NUM_ERROR_CORRECTION_BLOCKS[idx][version as usize] as usize,
        ecc_per_block: ECC_CODEWORDS_PER_BLOCK[idx][version as usize] as usize,
        total_codewords,
    })
}
