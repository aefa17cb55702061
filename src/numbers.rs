//! Fixed-width number rendering into stack buffers.
//!
//! Integers are written as plain decimal, floats in the six-significant-digit
//! `%.6g` style, and 64-bit values as zero-padded hex. Every routine writes
//! into a caller-provided buffer and returns how much of it was used; nothing
//! here allocates.

use core::fmt::Write;

use crate::stack_fmt::StackFmt;

/// Scratch size for any integer, padded hex/dec, or float rendering.
pub const FAST_TO_BUFFER_SIZE: usize = 32;

/// Scratch size for [`six_digits_to_buffer`] (`"-1.23457e-308"` is 13 bytes).
pub const SIX_DIGITS_TO_BUFFER_SIZE: usize = 16;

pub(crate) const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

// "00" "01" ... "99", two digits per division step
const DIGIT_PAIRS: [u8; 200] = {
    let mut table = [0u8; 200];
    let mut i = 0;
    while i < 100 {
        table[2 * i] = b'0' + (i / 10) as u8;
        table[2 * i + 1] = b'0' + (i % 10) as u8;
        i += 1;
    }
    table
};

mod sealed {
    pub trait Sealed {}
}

/// Native integers up to 64 bits wide.
///
/// The magnitude is taken in the unsigned domain, so `i64::MIN` maps to
/// `9223372036854775808` without overflowing.
pub trait FastInt: Copy + sealed::Sealed {
    fn is_negative(self) -> bool;
    fn magnitude(self) -> u64;
}

macro_rules! impl_fast_int_unsigned {
    ($($t:ty),*) => {$(
        impl sealed::Sealed for $t {}
        impl FastInt for $t {
            #[inline]
            fn is_negative(self) -> bool {
                false
            }
            #[inline]
            fn magnitude(self) -> u64 {
                self as u64
            }
        }
    )*};
}

macro_rules! impl_fast_int_signed {
    ($($t:ty),*) => {$(
        impl sealed::Sealed for $t {}
        impl FastInt for $t {
            #[inline]
            fn is_negative(self) -> bool {
                self < 0
            }
            #[inline]
            fn magnitude(self) -> u64 {
                self.unsigned_abs() as u64
            }
        }
    )*};
}

impl_fast_int_unsigned!(u8, u16, u32, u64, usize);
impl_fast_int_signed!(i8, i16, i32, i64, isize);

/// Number of decimal digits in `value`; 1 for zero.
#[inline]
pub const fn count_digits(value: u64) -> usize {
    match value.checked_ilog10() {
        Some(d) => d as usize + 1,
        None => 1,
    }
}

/// Rendered length of `value` including a leading `-`.
#[inline]
pub fn signed_digit_len<T: FastInt>(value: T) -> usize {
    count_digits(value.magnitude()) + value.is_negative() as usize
}

/// Write the decimal digits of `value` so they end at `out.len()`.
///
/// Returns the index of the first digit. `out` must hold at least
/// [`count_digits`]`(value)` bytes.
pub fn write_digits_backward(mut value: u64, out: &mut [u8]) -> usize {
    let mut pos = out.len();
    while value >= 100 {
        let pair = (value % 100) as usize * 2;
        value /= 100;
        pos -= 2;
        out[pos..pos + 2].copy_from_slice(&DIGIT_PAIRS[pair..pair + 2]);
    }
    if value >= 10 {
        let pair = value as usize * 2;
        pos -= 2;
        out[pos..pos + 2].copy_from_slice(&DIGIT_PAIRS[pair..pair + 2]);
    } else {
        pos -= 1;
        out[pos] = b'0' + value as u8;
    }
    pos
}

/// Render `value` in decimal at the start of `out`; returns bytes written.
pub fn fast_int_to_buffer<T: FastInt>(value: T, out: &mut [u8; FAST_TO_BUFFER_SIZE]) -> usize {
    let magnitude = value.magnitude();
    let mut end = count_digits(magnitude);
    if value.is_negative() {
        out[0] = b'-';
        end += 1;
    }
    write_digits_backward(magnitude, &mut out[..end]);
    end
}

/// Write all 16 nibbles of `value` as lowercase hex into `out`.
///
/// Returns the significant digit count (at least 1), i.e. the rendering
/// without leading zeros is the last `n` bytes of `out`.
pub fn fast_hex_to_buffer_zero_pad16(value: u64, out: &mut [u8; 16]) -> usize {
    for (i, slot) in out.iter_mut().enumerate() {
        let nibble = (value >> (60 - i * 4)) & 0xf;
        *slot = HEX_DIGITS[nibble as usize];
    }
    (16 - value.leading_zeros() as usize / 4).max(1)
}

/// Render `d` like printf `"%.6g"`; returns bytes written.
///
/// Six significant digits, fixed notation for decimal exponents in
/// `-4..6` and exponential otherwise, trailing zeros trimmed, exponent at
/// least two digits wide.
pub fn six_digits_to_buffer(d: f64, out: &mut [u8; SIX_DIGITS_TO_BUFFER_SIZE]) -> usize {
    if d.is_nan() {
        out[..3].copy_from_slice(b"nan");
        return 3;
    }
    let mut len = 0;
    if d.is_sign_negative() {
        out[0] = b'-';
        len = 1;
    }
    let d = d.abs();
    if d.is_infinite() {
        out[len..len + 3].copy_from_slice(b"inf");
        return len + 3;
    }
    if d == 0.0 {
        out[len] = b'0';
        return len + 1;
    }

    // core::fmt rounds to six significant digits and reports the exponent
    // of the rounded value, which is what picks fixed vs exponential
    let mut sci = StackFmt::<24>::new();
    let parsed = match write!(sci, "{:.5e}", d) {
        Ok(()) => parse_scientific(sci.as_bytes()),
        Err(_) => None,
    };
    let Some((digits, exp)) = parsed else {
        // unreachable for finite input; keep whatever core produced
        let raw = sci.as_bytes();
        let n = raw.len().min(out.len() - len);
        out[len..len + n].copy_from_slice(&raw[..n]);
        return len + n;
    };

    let mut sig = digits.len();
    while sig > 1 && digits[sig - 1] == b'0' {
        sig -= 1;
    }

    if (-4..6).contains(&exp) {
        if exp >= 0 {
            let int_len = exp as usize + 1;
            out[len..len + int_len].copy_from_slice(&digits[..int_len]);
            len += int_len;
            if sig > int_len {
                out[len] = b'.';
                len += 1;
                let frac = &digits[int_len..sig];
                out[len..len + frac.len()].copy_from_slice(frac);
                len += frac.len();
            }
        } else {
            let zeros = (-exp - 1) as usize;
            out[len..len + 2].copy_from_slice(b"0.");
            len += 2;
            out[len..len + zeros].fill(b'0');
            len += zeros;
            out[len..len + sig].copy_from_slice(&digits[..sig]);
            len += sig;
        }
        return len;
    }

    out[len] = digits[0];
    len += 1;
    if sig > 1 {
        out[len] = b'.';
        len += 1;
        out[len..len + sig - 1].copy_from_slice(&digits[1..sig]);
        len += sig - 1;
    }
    out[len] = b'e';
    out[len + 1] = if exp < 0 { b'-' } else { b'+' };
    len += 2;
    let mag = exp.unsigned_abs() as u64;
    let width = count_digits(mag).max(2);
    out[len..len + width].fill(b'0');
    write_digits_backward(mag, &mut out[len..len + width]);
    len + width
}

// "d.ddddde[-]x" -> (six digits, exponent)
fn parse_scientific(s: &[u8]) -> Option<([u8; 6], i32)> {
    let (mantissa, exponent) = s.split_at_checked(7)?;
    if mantissa.get(1) != Some(&b'.') {
        return None;
    }
    let mut digits = [0u8; 6];
    digits[0] = mantissa[0];
    digits[1..].copy_from_slice(&mantissa[2..7]);

    let exponent = exponent.strip_prefix(b"e")?;
    let (negative, body) = match exponent.strip_prefix(b"-") {
        Some(rest) => (true, rest),
        None => (false, exponent),
    };
    if body.is_empty() {
        return None;
    }
    let mut exp: i32 = 0;
    for &b in body {
        if !b.is_ascii_digit() {
            return None;
        }
        exp = exp * 10 + (b - b'0') as i32;
    }
    Some((digits, if negative { -exp } else { exp }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int_str<T: FastInt>(v: T) -> alloc::string::String {
        let mut buf = [0u8; FAST_TO_BUFFER_SIZE];
        let n = fast_int_to_buffer(v, &mut buf);
        alloc::string::String::from_utf8(buf[..n].to_vec()).unwrap()
    }

    fn g(d: f64) -> alloc::string::String {
        let mut buf = [0u8; SIX_DIGITS_TO_BUFFER_SIZE];
        let n = six_digits_to_buffer(d, &mut buf);
        alloc::string::String::from_utf8(buf[..n].to_vec()).unwrap()
    }

    #[test]
    fn digit_counts() {
        assert_eq!(count_digits(0), 1);
        assert_eq!(count_digits(9), 1);
        assert_eq!(count_digits(10), 2);
        assert_eq!(count_digits(99_999), 5);
        assert_eq!(count_digits(100_000), 6);
        assert_eq!(count_digits(u64::MAX), 20);
        assert_eq!(signed_digit_len(-1i8), 2);
        assert_eq!(signed_digit_len(i64::MIN), 20);
        assert_eq!(signed_digit_len(0u32), 1);
    }

    #[test]
    fn integers() {
        assert_eq!(int_str(0u8), "0");
        assert_eq!(int_str(7i32), "7");
        assert_eq!(int_str(-7i32), "-7");
        assert_eq!(int_str(100u16), "100");
        assert_eq!(int_str(u64::MAX), "18446744073709551615");
        assert_eq!(int_str(i64::MIN), "-9223372036854775808");
        assert_eq!(int_str(i8::MIN), "-128");
        assert_eq!(int_str(isize::MAX), alloc::format!("{}", isize::MAX));
    }

    #[test]
    fn backward_writer_fills_tail_only() {
        let mut buf = [b'x'; 8];
        let start = write_digits_backward(1234, &mut buf);
        assert_eq!(start, 4);
        assert_eq!(&buf, b"xxxx1234");
    }

    #[test]
    fn hex_zero_pad16() {
        let mut buf = [0u8; 16];
        assert_eq!(fast_hex_to_buffer_zero_pad16(0, &mut buf), 1);
        assert_eq!(&buf, b"0000000000000000");
        assert_eq!(fast_hex_to_buffer_zero_pad16(0xbeef, &mut buf), 4);
        assert_eq!(&buf[12..], b"beef");
        assert_eq!(fast_hex_to_buffer_zero_pad16(u64::MAX, &mut buf), 16);
        assert_eq!(&buf, b"ffffffffffffffff");
    }

    #[test]
    fn six_digit_fixed() {
        assert_eq!(g(0.1), "0.1");
        assert_eq!(g(1.0), "1");
        assert_eq!(g(-2.5), "-2.5");
        assert_eq!(g(3.14159265), "3.14159");
        assert_eq!(g(100000.0), "100000");
        assert_eq!(g(123456.4), "123456");
        assert_eq!(g(0.0001), "0.0001");
        assert_eq!(g(0.000123456789), "0.000123457");
        assert_eq!(g(1.0 / 3.0), "0.333333");
    }

    #[test]
    fn six_digit_exponential() {
        assert_eq!(g(999999.5), "1e+06");
        assert_eq!(g(1234567.0), "1.23457e+06");
        assert_eq!(g(0.00001), "1e-05");
        assert_eq!(g(1.5e-7), "1.5e-07");
        assert_eq!(g(1e100), "1e+100");
        assert_eq!(g(-1e-300), "-1e-300");
        assert_eq!(g(f64::MAX), "1.79769e+308");
    }

    #[test]
    fn six_digit_specials() {
        assert_eq!(g(0.0), "0");
        assert_eq!(g(-0.0), "-0");
        assert_eq!(g(f64::NAN), "nan");
        assert_eq!(g(f64::INFINITY), "inf");
        assert_eq!(g(f64::NEG_INFINITY), "-inf");
        assert_eq!(g(5e-324), "4.94066e-324");
    }
}
