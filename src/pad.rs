//! Padded hexadecimal and decimal values.
//!
//! [`Hex`] and [`Dec`] capture a 64-bit value together with a [`PadSpec`]
//! (minimum width plus fill character). Rendering is right-aligned into a
//! [`FAST_TO_BUFFER_SIZE`] stack buffer: digits are written backward from
//! the end, then fill is extended leftward until the width is met. Real
//! digits are never truncated.

use core::fmt;
use core::ptr::NonNull;

use crate::numbers::{self, FAST_TO_BUFFER_SIZE, FastInt};
use crate::stringify::{Sink, Stringify};

/// Widest field a [`PadSpec`] can request.
pub const MAX_PAD_WIDTH: u8 = 20;

// space-fill ordinals sit at zero-fill ordinal + 64
const SPACE_BASE: u8 = 64;

/// Minimum field width and fill character for [`Hex`] and [`Dec`].
///
/// `ZeroPad5` renders `0x1f` as `"0001f"`, `SpacePad5` as `"   1f"`.
/// Out-of-range widths are unrepresentable.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PadSpec {
    #[default]
    NoPad = 1,
    ZeroPad2,
    ZeroPad3,
    ZeroPad4,
    ZeroPad5,
    ZeroPad6,
    ZeroPad7,
    ZeroPad8,
    ZeroPad9,
    ZeroPad10,
    ZeroPad11,
    ZeroPad12,
    ZeroPad13,
    ZeroPad14,
    ZeroPad15,
    ZeroPad16,
    ZeroPad17,
    ZeroPad18,
    ZeroPad19,
    ZeroPad20,

    SpacePad2 = 2 + SPACE_BASE,
    SpacePad3,
    SpacePad4,
    SpacePad5,
    SpacePad6,
    SpacePad7,
    SpacePad8,
    SpacePad9,
    SpacePad10,
    SpacePad11,
    SpacePad12,
    SpacePad13,
    SpacePad14,
    SpacePad15,
    SpacePad16,
    SpacePad17,
    SpacePad18,
    SpacePad19,
    SpacePad20,
}

const ZERO_PADS: [PadSpec; 19] = [
    PadSpec::ZeroPad2,
    PadSpec::ZeroPad3,
    PadSpec::ZeroPad4,
    PadSpec::ZeroPad5,
    PadSpec::ZeroPad6,
    PadSpec::ZeroPad7,
    PadSpec::ZeroPad8,
    PadSpec::ZeroPad9,
    PadSpec::ZeroPad10,
    PadSpec::ZeroPad11,
    PadSpec::ZeroPad12,
    PadSpec::ZeroPad13,
    PadSpec::ZeroPad14,
    PadSpec::ZeroPad15,
    PadSpec::ZeroPad16,
    PadSpec::ZeroPad17,
    PadSpec::ZeroPad18,
    PadSpec::ZeroPad19,
    PadSpec::ZeroPad20,
];

const SPACE_PADS: [PadSpec; 19] = [
    PadSpec::SpacePad2,
    PadSpec::SpacePad3,
    PadSpec::SpacePad4,
    PadSpec::SpacePad5,
    PadSpec::SpacePad6,
    PadSpec::SpacePad7,
    PadSpec::SpacePad8,
    PadSpec::SpacePad9,
    PadSpec::SpacePad10,
    PadSpec::SpacePad11,
    PadSpec::SpacePad12,
    PadSpec::SpacePad13,
    PadSpec::SpacePad14,
    PadSpec::SpacePad15,
    PadSpec::SpacePad16,
    PadSpec::SpacePad17,
    PadSpec::SpacePad18,
    PadSpec::SpacePad19,
    PadSpec::SpacePad20,
];

impl PadSpec {
    /// Zero-fill spec for `width`; width 0 or 1 is `NoPad`.
    pub const fn zero(width: u8) -> Option<Self> {
        match width {
            0 | 1 => Some(PadSpec::NoPad),
            2..=MAX_PAD_WIDTH => Some(ZERO_PADS[(width - 2) as usize]),
            _ => None,
        }
    }

    /// Space-fill spec for `width`; width 0 or 1 is `NoPad`.
    pub const fn space(width: u8) -> Option<Self> {
        match width {
            0 | 1 => Some(PadSpec::NoPad),
            2..=MAX_PAD_WIDTH => Some(SPACE_PADS[(width - 2) as usize]),
            _ => None,
        }
    }

    /// Minimum field width, 1 for `NoPad`.
    pub const fn width(self) -> u8 {
        let ordinal = self as u8;
        if ordinal >= PadSpec::SpacePad2 as u8 {
            ordinal - SPACE_BASE
        } else {
            ordinal
        }
    }

    /// `b' '` for the space-pad family, `b'0'` otherwise.
    pub const fn fill(self) -> u8 {
        if self as u8 >= PadSpec::SpacePad2 as u8 {
            b' '
        } else {
            b'0'
        }
    }
}

/// Values [`Hex`] accepts, reinterpreted as their unsigned bit pattern.
///
/// `-1i8` becomes `0xff`, not `0xffffffffffffffff`: the width of the source
/// type is kept. Pointers contribute their address.
pub trait HexBits: Copy {
    fn bit_pattern(self) -> u64;
}

macro_rules! impl_hex_bits {
    ($($t:ty => $u:ty),*) => {$(
        impl HexBits for $t {
            #[inline]
            fn bit_pattern(self) -> u64 {
                self as $u as u64
            }
        }
    )*};
}

impl_hex_bits!(
    u8 => u8, u16 => u16, u32 => u32, u64 => u64, usize => usize,
    i8 => u8, i16 => u16, i32 => u32, i64 => u64, isize => usize
);

impl<T: ?Sized> HexBits for *const T {
    #[inline]
    fn bit_pattern(self) -> u64 {
        self.addr() as u64
    }
}

impl<T: ?Sized> HexBits for *mut T {
    #[inline]
    fn bit_pattern(self) -> u64 {
        self.addr() as u64
    }
}

impl<T: ?Sized> HexBits for NonNull<T> {
    #[inline]
    fn bit_pattern(self) -> u64 {
        self.as_ptr().addr() as u64
    }
}

/// Lowercase hexadecimal rendering of a value's bit pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hex {
    value: u64,
    width: u8,
    fill: u8,
}

impl Hex {
    pub fn new<V: HexBits>(value: V) -> Self {
        Self::with_pad(value, PadSpec::NoPad)
    }

    pub fn with_pad<V: HexBits>(value: V, spec: PadSpec) -> Self {
        Self {
            value: value.bit_pattern(),
            width: spec.width(),
            fill: spec.fill(),
        }
    }

    pub const fn value(&self) -> u64 {
        self.value
    }

    pub const fn width(&self) -> u8 {
        self.width
    }

    pub const fn fill(&self) -> u8 {
        self.fill
    }

    /// Right-align into `buf`; returns the start index (the end is `buf.len()`).
    pub fn write_right_aligned(&self, buf: &mut [u8; FAST_TO_BUFFER_SIZE]) -> usize {
        let end = FAST_TO_BUFFER_SIZE;
        let mut nibbles = [0u8; 16];
        let real_width = numbers::fast_hex_to_buffer_zero_pad16(self.value, &mut nibbles);
        buf[end - real_width..].copy_from_slice(&nibbles[16 - real_width..]);

        let width = self.width as usize;
        if real_width >= width {
            return end - real_width;
        }
        buf[end - width..end - real_width].fill(self.fill);
        end - width
    }

    pub fn render<'b>(&self, buf: &'b mut [u8; FAST_TO_BUFFER_SIZE]) -> &'b str {
        let start = self.write_right_aligned(buf);
        core::str::from_utf8(&buf[start..]).unwrap_or("")
    }
}

/// Decimal rendering with a minimum width and sign-aware fill.
///
/// Zero fill goes between the sign and the digits (`"-007"`), space fill
/// before the sign (`"  -7"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dec {
    value: u64,
    width: u8,
    fill: u8,
    neg: bool,
}

impl Dec {
    pub fn new<T: FastInt>(value: T) -> Self {
        Self::with_pad(value, PadSpec::NoPad)
    }

    pub fn with_pad<T: FastInt>(value: T, spec: PadSpec) -> Self {
        Self {
            value: value.magnitude(),
            width: spec.width(),
            fill: spec.fill(),
            neg: value.is_negative(),
        }
    }

    /// Absolute value of the source integer.
    pub const fn value(&self) -> u64 {
        self.value
    }

    pub const fn width(&self) -> u8 {
        self.width
    }

    pub const fn fill(&self) -> u8 {
        self.fill
    }

    pub const fn is_negative(&self) -> bool {
        self.neg
    }

    /// Right-align into `buf`; returns the start index (the end is `buf.len()`).
    pub fn write_right_aligned(&self, buf: &mut [u8; FAST_TO_BUFFER_SIZE]) -> usize {
        let end = FAST_TO_BUFFER_SIZE;
        let mut writer = numbers::write_digits_backward(self.value, buf);
        if self.neg {
            writer -= 1;
            buf[writer] = b'-';
        }

        let min_fill = end - self.width as usize;
        if writer > min_fill {
            let fillers = writer - min_fill;
            // zero fill goes after the sign: drop it, pad, put it back in front
            let resign = self.neg && self.fill == b'0';
            if resign {
                writer += 1;
            }
            writer -= fillers;
            buf[writer..writer + fillers].fill(self.fill);
            if resign {
                writer -= 1;
                buf[writer] = b'-';
            }
        }
        writer
    }

    pub fn render<'b>(&self, buf: &'b mut [u8; FAST_TO_BUFFER_SIZE]) -> &'b str {
        let start = self.write_right_aligned(buf);
        core::str::from_utf8(&buf[start..]).unwrap_or("")
    }
}

/// `Hex::with_pad(value, spec)`.
pub fn hex<V: HexBits>(value: V, spec: PadSpec) -> Hex {
    Hex::with_pad(value, spec)
}

/// `Dec::with_pad(value, spec)`.
pub fn dec<T: FastInt>(value: T, spec: PadSpec) -> Dec {
    Dec::with_pad(value, spec)
}

impl Stringify for Hex {
    fn stringify<S: Sink>(&self, sink: &mut S) {
        let mut buf = [0u8; FAST_TO_BUFFER_SIZE];
        sink.append(self.render(&mut buf));
    }
}

impl Stringify for Dec {
    fn stringify<S: Sink>(&self, sink: &mut S) {
        let mut buf = [0u8; FAST_TO_BUFFER_SIZE];
        sink.append(self.render(&mut buf));
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = [0u8; FAST_TO_BUFFER_SIZE];
        f.write_str(self.render(&mut buf))
    }
}

impl fmt::Display for Dec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = [0u8; FAST_TO_BUFFER_SIZE];
        f.write_str(self.render(&mut buf))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    fn h(v: impl HexBits, spec: PadSpec) -> alloc::string::String {
        hex(v, spec).to_string()
    }

    fn d(v: impl FastInt, spec: PadSpec) -> alloc::string::String {
        dec(v, spec).to_string()
    }

    #[test]
    fn spec_ordinals() {
        assert_eq!(PadSpec::NoPad as u8, 1);
        assert_eq!(PadSpec::ZeroPad20 as u8, 20);
        assert_eq!(PadSpec::SpacePad2 as u8, 66);
        assert_eq!(PadSpec::SpacePad20 as u8, 84);
        assert_eq!(PadSpec::default(), PadSpec::NoPad);
    }

    #[test]
    fn spec_width_and_fill() {
        assert_eq!(PadSpec::NoPad.width(), 1);
        assert_eq!(PadSpec::NoPad.fill(), b'0');
        assert_eq!(PadSpec::ZeroPad7.width(), 7);
        assert_eq!(PadSpec::ZeroPad7.fill(), b'0');
        assert_eq!(PadSpec::SpacePad13.width(), 13);
        assert_eq!(PadSpec::SpacePad13.fill(), b' ');
    }

    #[test]
    fn spec_lookup() {
        assert_eq!(PadSpec::zero(1), Some(PadSpec::NoPad));
        assert_eq!(PadSpec::zero(4), Some(PadSpec::ZeroPad4));
        assert_eq!(PadSpec::space(20), Some(PadSpec::SpacePad20));
        assert_eq!(PadSpec::space(21), None);
        for w in 2..=MAX_PAD_WIDTH {
            assert_eq!(PadSpec::zero(w).map(PadSpec::width), Some(w));
            assert_eq!(PadSpec::space(w).map(PadSpec::width), Some(w));
        }
    }

    #[test]
    fn hex_padding() {
        assert_eq!(h(10u32, PadSpec::ZeroPad2), "0a");
        assert_eq!(h(255u32, PadSpec::ZeroPad2), "ff");
        assert_eq!(h(1u32, PadSpec::SpacePad5), "    1");
        assert_eq!(h(0u8, PadSpec::NoPad), "0");
        assert_eq!(h(0xdead_beefu64, PadSpec::ZeroPad4), "deadbeef");
    }

    #[test]
    fn hex_wide_fill_beyond_sixteen() {
        assert_eq!(h(1u64, PadSpec::ZeroPad20), "00000000000000000001");
        assert_eq!(h(u64::MAX, PadSpec::SpacePad20), "    ffffffffffffffff");
    }

    #[test]
    fn hex_keeps_source_width() {
        assert_eq!(h(-1i8, PadSpec::NoPad), "ff");
        assert_eq!(h(-1i16, PadSpec::NoPad), "ffff");
        assert_eq!(h(-1i32, PadSpec::NoPad), "ffffffff");
        assert_eq!(h(i64::MIN, PadSpec::NoPad), "8000000000000000");
    }

    #[test]
    fn hex_pointer_address() {
        let x = 5u32;
        let p = &x as *const u32;
        assert_eq!(Hex::new(p).value(), p.addr() as u64);
        assert_eq!(Hex::new(NonNull::from(&x)).value(), p.addr() as u64);
    }

    #[test]
    fn dec_sign_and_fill() {
        assert_eq!(d(-7, PadSpec::ZeroPad4), "-007");
        assert_eq!(d(-7, PadSpec::SpacePad4), "  -7");
        assert_eq!(d(7, PadSpec::NoPad), "7");
        assert_eq!(d(7, PadSpec::ZeroPad3), "007");
        assert_eq!(d(0, PadSpec::ZeroPad2), "00");
        assert_eq!(d(-7, PadSpec::ZeroPad2), "-7");
    }

    #[test]
    fn dec_never_truncates() {
        assert_eq!(d(12345, PadSpec::ZeroPad2), "12345");
        assert_eq!(d(-12345, PadSpec::SpacePad3), "-12345");
        assert_eq!(d(i64::MIN, PadSpec::ZeroPad20), "-9223372036854775808");
        assert_eq!(d(u64::MAX, PadSpec::ZeroPad20), "18446744073709551615");
        assert_eq!(d(i64::MIN + 1, PadSpec::ZeroPad20), "-9223372036854775807");
    }

    #[test]
    fn dec_magnitude_from_unsigned_domain() {
        let v = Dec::new(i64::MIN);
        assert!(v.is_negative());
        assert_eq!(v.value(), 1u64 << 63);
    }
}
