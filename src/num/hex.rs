//! Lower-case hexadecimal writers for the primitive integers.
//!
//! Same right-to-left scheme as the decimal writer, base 16: a nibble falls
//! out per shift, so the bound is `⌈bits/4⌉` digits, plus one for the sign on
//! signed types. No `0x` prefix, no padding, no upper-case.

use crate::builder::Builder;
use crate::num::Sealed;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Primitive integers that can be written in lower-case hexadecimal.
pub trait Hexadecimal: Sealed + Copy {
    /// Upper bound on the formatted length in bytes.
    #[doc(hidden)]
    const MAX_HEX_LEN: usize;

    /// Writes the value into the tail of `buf`, returning the byte count.
    #[doc(hidden)]
    fn write_hex_rtl(self, buf: &mut [u8]) -> usize;
}

macro_rules! impl_hex_unsigned {
    ($($t:ty)*) => {$(
        impl Hexadecimal for $t {
            const MAX_HEX_LEN: usize = (<$t>::BITS as usize).div_ceil(4);

            fn write_hex_rtl(self, buf: &mut [u8]) -> usize {
                let mut v = self;
                let mut i = buf.len();
                loop {
                    i -= 1;
                    buf[i] = HEX_DIGITS[(v & 0xf) as usize];
                    v >>= 4;
                    if v == 0 {
                        break;
                    }
                }
                buf.len() - i
            }
        }
    )*};
}

macro_rules! impl_hex_signed {
    ($($t:ty)*) => {$(
        impl Hexadecimal for $t {
            const MAX_HEX_LEN: usize = (<$t>::BITS as usize).div_ceil(4) + 1;

            fn write_hex_rtl(self, buf: &mut [u8]) -> usize {
                let mut used = self.unsigned_abs().write_hex_rtl(buf);
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

impl_hex_unsigned!(u8 u16 u32 u64 u128 usize);
impl_hex_signed!(i8 i16 i32 i64 i128 isize);

impl Builder {
    /// Appends an integer in lower-case hexadecimal.
    pub fn append_hex<T: Hexadecimal>(mut self, value: T) -> Self {
        self.buf
            .append_rtl(T::MAX_HEX_LEN, |dst| value.write_hex_rtl(dst));
        self
    }

    /// Prepends an integer in lower-case hexadecimal.
    pub fn prepend_hex<T: Hexadecimal>(mut self, value: T) -> Self {
        self.buf
            .prepend_bounded(T::MAX_HEX_LEN, |dst| value.write_hex_rtl(dst));
        self
    }
}
