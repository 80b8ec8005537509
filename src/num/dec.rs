//! Decimal writers for the primitive integers.
//!
//! # Length bound
//! An unsigned `b`-bit value has at most `1 + ⌊b·5/16⌋` decimal digits:
//! `5/16 = 0.3125` over-approximates `log₁₀ 2 ≈ 0.30103`. Signed types get
//! one more byte for the sign. The bound is what the engine reserves; the
//! writer reports how much it actually used.
//!
//! # Emission
//! Digits come out of `divmod(v, 10)` least significant first and are written
//! right to left into the tail of the scratch slice. Division by the constant
//! 10 compiles to a multiply-shift sequence, so there is no hardware divide
//! on this path. The minimum signed value is handled by widening through
//! `unsigned_abs`, which cannot overflow.

use crate::builder::Builder;
use crate::num::Sealed;

/// Primitive integers that can be written in decimal.
///
/// Implemented for all built-in integer types. The members are an internal
/// contract between the formatter and the buffer engine.
pub trait Decimal: Sealed + Copy {
    /// Upper bound on the formatted length in bytes.
    #[doc(hidden)]
    const MAX_DEC_LEN: usize;

    /// Writes the value into the tail of `buf`, returning the byte count.
    #[doc(hidden)]
    fn write_dec_rtl(self, buf: &mut [u8]) -> usize;
}

macro_rules! impl_decimal_unsigned {
    ($($t:ty)*) => {$(
        impl Decimal for $t {
            const MAX_DEC_LEN: usize = 1 + (<$t>::BITS as usize) * 5 / 16;

            fn write_dec_rtl(self, buf: &mut [u8]) -> usize {
                let mut v = self;
                let mut i = buf.len();
                loop {
                    i -= 1;
                    buf[i] = b'0' + (v % 10) as u8;
                    v /= 10;
                    if v == 0 {
                        break;
                    }
                }
                buf.len() - i
            }
        }
    )*};
}

macro_rules! impl_decimal_signed {
    ($($t:ty)*) => {$(
        impl Decimal for $t {
            const MAX_DEC_LEN: usize = 2 + (<$t>::BITS as usize) * 5 / 16;

            fn write_dec_rtl(self, buf: &mut [u8]) -> usize {
                let mut used = self.unsigned_abs().write_dec_rtl(buf);
                if self < 0 {
                    let i = buf.len() - used - 1;
                    buf[i] = b'-';
                    used += 1;
                }
                used
            }
        }
    )*};
}

impl_decimal_unsigned!(u8 u16 u32 u64 u128 usize);
impl_decimal_signed!(i8 i16 i32 i64 i128 isize);

impl Builder {
    /// Appends an integer in decimal.
    pub fn append_dec<T: Decimal>(mut self, value: T) -> Self {
        self.buf
            .append_rtl(T::MAX_DEC_LEN, |dst| value.write_dec_rtl(dst));
        self
    }

    /// Prepends an integer in decimal.
    pub fn prepend_dec<T: Decimal>(mut self, value: T) -> Self {
        self.buf
            .prepend_bounded(T::MAX_DEC_LEN, |dst| value.write_dec_rtl(dst));
        self
    }
}
