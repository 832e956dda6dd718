//! GF(256) field arithmetic using log/exp tables
//!
//! QR codes use the primitive polynomial x^8 + x^4 + x^3 + x^2 + 1 (0x11D)
//! with generator α = 2. The tables are built once per process and are
//! read-only afterwards, so any number of threads may share them.

use std::sync::OnceLock;

/// QR code primitive polynomial x^8 + x^4 + x^3 + x^2 + 1
pub const PRIMITIVE_POLY: u16 = 0x11D;

/// Order of the multiplicative group
pub const FIELD_ORDER: usize = 255;

/// Errors raised by field arithmetic or table construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// The generator polynomial does not produce a cycle of length 255
    #[error("polynomial {poly:#05x} is not primitive (cycle length {cycle}, expected 255)")]
    NotPrimitive {
        /// Rejected polynomial
        poly: u16,
        /// Observed multiplicative cycle length of x
        cycle: usize,
    },
    /// Zero has no inverse or logarithm
    #[error("zero has no multiplicative inverse in GF(256)")]
    ZeroInverse,
}

/// Log and antilog tables for one primitive polynomial
#[derive(Debug, Clone)]
pub struct GfTables {
    // Doubled so log a + log b indexes without a modulo
    exp: [u8; 2 * FIELD_ORDER],
    log: [u8; 256],
}

impl GfTables {
    /// Build the tables by repeated multiplication by x.
    ///
    /// Rejects polynomials whose powers of x do not visit all 255 nonzero
    /// elements before returning to 1.
    pub fn build(primitive: u16) -> Result<Self, FieldError> {
        let mut exp = [0u8; 2 * FIELD_ORDER];
        let mut log = [0u8; 256];
        let mut seen = [false; 256];
        let mut x: u16 = 1;

        for i in 0..FIELD_ORDER {
            let value = x as u8;
            if x == 0 || x > 0xFF || seen[value as usize] {
                return Err(FieldError::NotPrimitive {
                    poly: primitive,
                    cycle: i,
                });
            }
            seen[value as usize] = true;
            exp[i] = value;
            log[value as usize] = i as u8;

            x <<= 1;
            if x & 0x100 != 0 {
                x ^= primitive;
            }
        }

        // After 255 steps we must be back at 1
        if x != 1 {
            return Err(FieldError::NotPrimitive {
                poly: primitive,
                cycle: FIELD_ORDER + 1,
            });
        }

        for i in FIELD_ORDER..2 * FIELD_ORDER {
            exp[i] = exp[i - FIELD_ORDER];
        }

        Ok(Self { exp, log })
    }
}

static TABLES: OnceLock<GfTables> = OnceLock::new();

fn tables() -> &'static GfTables {
    TABLES.get_or_init(|| match GfTables::build(PRIMITIVE_POLY) {
        Ok(t) => t,
        Err(e) => panic!("GF(256) table construction failed: {e}"),
    })
}

/// GF(256) field operations
pub struct Gf256;

impl Gf256 {
    #[inline]
    pub fn add(a: u8, b: u8) -> u8 {
        a ^ b
    }

    /// Same as [`Gf256::add`] in characteristic 2
    #[inline]
    pub fn sub(a: u8, b: u8) -> u8 {
        a ^ b
    }

    #[inline]
    pub fn mul(a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }
        let t = tables();
        t.exp[t.log[a as usize] as usize + t.log[b as usize] as usize]
    }

    pub fn inv(a: u8) -> Result<u8, FieldError> {
        if a == 0 {
            return Err(FieldError::ZeroInverse);
        }
        let t = tables();
        Ok(t.exp[FIELD_ORDER - t.log[a as usize] as usize])
    }

    pub fn div(a: u8, b: u8) -> Result<u8, FieldError> {
        Ok(Self::mul(a, Self::inv(b)?))
    }

    /// a^n for any exponent; 0^0 is 1
    pub fn pow(a: u8, n: usize) -> u8 {
        if n == 0 {
            return 1;
        }
        if a == 0 {
            return 0;
        }
        let t = tables();
        let e = (t.log[a as usize] as usize * (n % FIELD_ORDER)) % FIELD_ORDER;
        t.exp[e]
    }

    /// α^i with i taken modulo 255
    #[inline]
    pub fn exp(i: usize) -> u8 {
        tables().exp[i % FIELD_ORDER]
    }

    /// Discrete logarithm base α
    pub fn log(a: u8) -> Result<usize, FieldError> {
        if a == 0 {
            return Err(FieldError::ZeroInverse);
        }
        Ok(tables().log[a as usize] as usize)
    }
}
