//! Decimal writers for arbitrary-precision integers.
//!
//! A big integer is reduced to base-10⁹ chunks with `div_rem`: each chunk is
//! a `u32` holding nine decimal digits, so the expensive bignum division runs
//! once per nine digits and the digits themselves come from the same cheap
//! machine-word loop as the bounded writer. The most significant chunk is
//! written without leading zeros; every lower chunk is zero-padded to nine.
//!
//! Length bound per value: `⌈bits·5/16⌉ + 2` (digit over-approximation plus
//! sign slack), computed from `BigUint::bits`.

use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};

use crate::buffer::checked;
use crate::builder::Builder;

/// Decimal digits per chunk; `CHUNK_BASE == 10^CHUNK_DIGITS` fits in `u32`.
const CHUNK_DIGITS: usize = 9;
const CHUNK_BASE: u32 = 1_000_000_000;

/// Splits `value` into base-10⁹ chunks, least significant first.
///
/// Zero yields a single zero chunk so the writer always has a top chunk.
fn chunks_le(value: &BigUint) -> Vec<u32> {
    if value.is_zero() {
        return vec![0];
    }
    let base = BigUint::from(CHUNK_BASE);
    let mut rest = value.clone();
    let mut out = Vec::new();
    while !rest.is_zero() {
        let (q, r) = rest.div_rem(&base);
        // The remainder is below 10^9 and always fits a u32.
        out.push(r.to_u32().expect("remainder below chunk base"));
        rest = q;
    }
    out
}

/// Upper bound on the rendered length of a value with `bits` significant bits.
fn max_dec_len(bits: u64) -> usize {
    let bits = usize::try_from(bits).unwrap_or(usize::MAX);
    checked(bits.checked_mul(5)).div_ceil(16) + 2
}

/// Writes the chunks into the tail of `buf`, returning the byte count.
fn write_chunks_rtl(chunks: &[u32], negative: bool, buf: &mut [u8]) -> usize {
    let mut i = buf.len();
    let (&top, rest) = chunks.split_last().expect("chunk list is never empty");
    for &chunk in rest {
        let mut v = chunk;
        for _ in 0..CHUNK_DIGITS {
            i -= 1;
            buf[i] = b'0' + (v % 10) as u8;
            v /= 10;
        }
    }
    let mut v = top;
    loop {
        i -= 1;
        buf[i] = b'0' + (v % 10) as u8;
        v /= 10;
        if v == 0 {
            break;
        }
    }
    if negative {
        i -= 1;
        buf[i] = b'-';
    }
    buf.len() - i
}

impl Builder {
    /// Appends an arbitrary-precision unsigned integer in decimal.
    pub fn append_big_uint(mut self, value: &BigUint) -> Self {
        let chunks = chunks_le(value);
        self.buf.append_rtl(max_dec_len(value.bits()), |dst| {
            write_chunks_rtl(&chunks, false, dst)
        });
        self
    }

    /// Prepends an arbitrary-precision unsigned integer in decimal.
    pub fn prepend_big_uint(mut self, value: &BigUint) -> Self {
        let chunks = chunks_le(value);
        self.buf.prepend_bounded(max_dec_len(value.bits()), |dst| {
            write_chunks_rtl(&chunks, false, dst)
        });
        self
    }

    /// Appends an arbitrary-precision signed integer in decimal.
    pub fn append_big(mut self, value: &BigInt) -> Self {
        let negative = value.sign() == Sign::Minus;
        let chunks = chunks_le(value.magnitude());
        self.buf.append_rtl(max_dec_len(value.bits()), |dst| {
            write_chunks_rtl(&chunks, negative, dst)
        });
        self
    }

    /// Prepends an arbitrary-precision signed integer in decimal.
    pub fn prepend_big(mut self, value: &BigInt) -> Self {
        let negative = value.sign() == Sign::Minus;
        let chunks = chunks_le(value.magnitude());
        self.buf.prepend_bounded(max_dec_len(value.bits()), |dst| {
            write_chunks_rtl(&chunks, negative, dst)
        });
        self
    }
}
