//! `AlphaNum`: the argument type of the concatenation engine.
//!
//! Built from a number, bool, text, `Hex`/`Dec`, or any [`Stringify`] type,
//! an `AlphaNum` either borrows the caller's text or owns the rendered
//! bytes. Numbers render eagerly into an inline [`FAST_TO_BUFFER_SIZE`]
//! buffer, so the common case never touches the heap.
//!
//! There is deliberately no `From<char>`: `':'` would otherwise turn into
//! `"58"` instead of `":"`.
//!
//! ```compile_fail
//! let _ = smol_strcat::AlphaNum::from(':');
//! ```
//!
//! `AlphaNum` is neither `Clone` nor `Copy`; build it at the call site and
//! let it drop with the call.

use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use crate::numbers::{self, FAST_TO_BUFFER_SIZE, SIX_DIGITS_TO_BUFFER_SIZE};
use crate::pad::{Dec, Hex};
use crate::stringify::Stringify;

pub struct AlphaNum<'a> {
    piece: Piece<'a>,
}

enum Piece<'a> {
    Borrowed(&'a str),
    // rendered number: the text is buf[start..end]
    Inline {
        buf: [u8; FAST_TO_BUFFER_SIZE],
        start: u8,
        end: u8,
    },
    Owned(String),
}

impl<'a> AlphaNum<'a> {
    #[inline]
    pub fn as_str(&self) -> &str {
        match &self.piece {
            Piece::Borrowed(s) => *s,
            Piece::Inline { buf, start, end } => {
                core::str::from_utf8(&buf[*start as usize..*end as usize]).unwrap_or("")
            }
            Piece::Owned(s) => s.as_str(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        match &self.piece {
            Piece::Borrowed(s) => s.len(),
            Piece::Inline { start, end, .. } => (*end - *start) as usize,
            Piece::Owned(s) => s.len(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when the text lives in the caller's storage (no copy was made).
    pub fn is_borrowed(&self) -> bool {
        matches!(self.piece, Piece::Borrowed(_))
    }

    #[inline]
    fn borrowed(s: &'a str) -> Self {
        Self {
            piece: Piece::Borrowed(s),
        }
    }

    // render into a fresh inline buffer; `f` returns the used range
    #[inline]
    fn inline(f: impl FnOnce(&mut [u8; FAST_TO_BUFFER_SIZE]) -> (usize, usize)) -> Self {
        let mut buf = [0u8; FAST_TO_BUFFER_SIZE];
        let (start, end) = f(&mut buf);
        Self {
            piece: Piece::Inline {
                buf,
                start: start as u8,
                end: end as u8,
            },
        }
    }
}

impl fmt::Debug for AlphaNum<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AlphaNum").field(&self.as_str()).finish()
    }
}

impl fmt::Display for AlphaNum<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {$(
        impl From<$t> for AlphaNum<'_> {
            #[inline]
            fn from(v: $t) -> Self {
                Self::inline(|buf| (0, numbers::fast_int_to_buffer(v, buf)))
            }
        }
    )*};
}

impl_from_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl From<f64> for AlphaNum<'_> {
    fn from(v: f64) -> Self {
        Self::inline(|buf| {
            let mut six = [0u8; SIX_DIGITS_TO_BUFFER_SIZE];
            let n = numbers::six_digits_to_buffer(v, &mut six);
            buf[..n].copy_from_slice(&six[..n]);
            (0, n)
        })
    }
}

impl From<f32> for AlphaNum<'_> {
    #[inline]
    fn from(v: f32) -> Self {
        Self::from(v as f64)
    }
}

impl From<bool> for AlphaNum<'_> {
    #[inline]
    fn from(v: bool) -> Self {
        Self::borrowed(if v { "1" } else { "0" })
    }
}

impl From<Hex> for AlphaNum<'_> {
    #[inline]
    fn from(v: Hex) -> Self {
        Self::inline(|buf| (v.write_right_aligned(buf), FAST_TO_BUFFER_SIZE))
    }
}

impl From<Dec> for AlphaNum<'_> {
    #[inline]
    fn from(v: Dec) -> Self {
        Self::inline(|buf| (v.write_right_aligned(buf), FAST_TO_BUFFER_SIZE))
    }
}

impl<'a> From<&'a str> for AlphaNum<'a> {
    #[inline]
    fn from(s: &'a str) -> Self {
        Self::borrowed(s)
    }
}

// None is the null source: it renders as nothing
impl<'a> From<Option<&'a str>> for AlphaNum<'a> {
    #[inline]
    fn from(s: Option<&'a str>) -> Self {
        Self::borrowed(s.unwrap_or(""))
    }
}

impl<'a> From<&'a String> for AlphaNum<'a> {
    #[inline]
    fn from(s: &'a String) -> Self {
        Self::borrowed(s.as_str())
    }
}

impl<'a> From<&'a Box<str>> for AlphaNum<'a> {
    #[inline]
    fn from(s: &'a Box<str>) -> Self {
        Self::borrowed(s)
    }
}

impl<'a> From<&'a Cow<'_, str>> for AlphaNum<'a> {
    #[inline]
    fn from(s: &'a Cow<'_, str>) -> Self {
        Self::borrowed(s)
    }
}

impl From<String> for AlphaNum<'_> {
    #[inline]
    fn from(s: String) -> Self {
        Self {
            piece: Piece::Owned(s),
        }
    }
}

impl<'a> From<Cow<'a, str>> for AlphaNum<'a> {
    #[inline]
    fn from(s: Cow<'a, str>) -> Self {
        match s {
            Cow::Borrowed(s) => Self::borrowed(s),
            Cow::Owned(s) => Self::from(s),
        }
    }
}

impl<'a, const N: usize> From<&'a AlphaNumBuffer<N>> for AlphaNum<'a> {
    #[inline]
    fn from(b: &'a AlphaNumBuffer<N>) -> Self {
        Self::borrowed(b.as_str())
    }
}

impl<'a, T: Stringify + ?Sized> From<&'a T> for AlphaNum<'a> {
    fn from(v: &'a T) -> Self {
        let mut sink = String::new();
        v.stringify(&mut sink);
        Self::from(sink)
    }
}

#[cfg(feature = "std")]
impl<'a> From<&'a std::path::Path> for AlphaNum<'a> {
    // lossy: invalid UTF-8 becomes U+FFFD and forces a copy
    fn from(p: &'a std::path::Path) -> Self {
        Self::from(p.to_string_lossy())
    }
}

#[cfg(feature = "std")]
impl<'a> From<&'a std::ffi::OsStr> for AlphaNum<'a> {
    fn from(s: &'a std::ffi::OsStr) -> Self {
        Self::from(s.to_string_lossy())
    }
}

/// Fixed-capacity pre-rendered text that `AlphaNum` borrows.
pub struct AlphaNumBuffer<const N: usize> {
    data: [u8; N],
    len: usize,
}

impl<const N: usize> AlphaNumBuffer<N> {
    #[inline]
    pub fn as_str(&self) -> &str {
        core::str::from_utf8(&self.data[..self.len]).unwrap_or("")
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// `d` rendered in the `%.6g` style, ready to hand to `str_cat!` by reference.
pub fn six_digits(d: f64) -> AlphaNumBuffer<SIX_DIGITS_TO_BUFFER_SIZE> {
    let mut data = [0u8; SIX_DIGITS_TO_BUFFER_SIZE];
    let len = numbers::six_digits_to_buffer(d, &mut data);
    AlphaNumBuffer { data, len }
}

/// Let a fieldless enum convert through its integer representation.
///
/// ```
/// use smol_strcat::{impl_alpha_num_for_enum, str_cat};
///
/// #[derive(Clone, Copy)]
/// #[repr(u8)]
/// enum Level {
///     Low = 1,
///     High = 9,
/// }
/// impl_alpha_num_for_enum!(Level => u8);
///
/// assert_eq!(str_cat!("level ", Level::High), "level 9");
/// # let _ = Level::Low;
/// ```
#[macro_export]
macro_rules! impl_alpha_num_for_enum {
    ($($ty:ty => $repr:ty),+ $(,)?) => {$(
        impl ::core::convert::From<$ty> for $crate::AlphaNum<'_> {
            #[inline]
            fn from(v: $ty) -> Self {
                $crate::AlphaNum::from(v as $repr)
            }
        }
    )+};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pad::PadSpec;
    use crate::stringify::{Displayed, Sink};

    #[derive(Clone, Copy)]
    #[repr(i16)]
    enum Signed {
        Minus = -3,
    }
    impl_alpha_num_for_enum!(Signed => i16);

    struct Tag;

    impl Stringify for Tag {
        fn stringify<S: Sink>(&self, sink: &mut S) {
            sink.append("<tag>");
        }
    }

    #[test]
    fn integers_render_inline() {
        let a = AlphaNum::from(-42i32);
        assert_eq!(a.as_str(), "-42");
        assert_eq!(a.len(), 3);
        assert!(!a.is_borrowed());
        assert_eq!(AlphaNum::from(u64::MAX).as_str(), "18446744073709551615");
        assert_eq!(AlphaNum::from(i64::MIN).as_str(), "-9223372036854775808");
        assert_eq!(AlphaNum::from(0usize).as_str(), "0");
    }

    #[test]
    fn floats_use_six_digits() {
        assert_eq!(AlphaNum::from(0.1).as_str(), "0.1");
        assert_eq!(AlphaNum::from(0.1f32).as_str(), "0.1");
        assert_eq!(AlphaNum::from(1e10).as_str(), "1e+10");
    }

    #[test]
    fn bools_are_digits() {
        assert_eq!(AlphaNum::from(true).as_str(), "1");
        assert_eq!(AlphaNum::from(false).as_str(), "0");
    }

    #[test]
    fn text_is_borrowed() {
        let owned = String::from("abc");
        let a = AlphaNum::from(&owned);
        assert!(a.is_borrowed());
        assert_eq!(a.as_str().as_ptr(), owned.as_ptr());

        let b = AlphaNum::from("lit");
        assert!(b.is_borrowed());

        let boxed: Box<str> = "bx".into();
        assert_eq!(AlphaNum::from(&boxed).as_str(), "bx");

        let cow: Cow<'_, str> = Cow::Borrowed("cw");
        assert!(AlphaNum::from(cow).is_borrowed());
    }

    #[test]
    fn owned_string_is_moved_in() {
        let s = String::from("moved");
        let ptr = s.as_ptr();
        let a = AlphaNum::from(s);
        assert_eq!(a.as_str(), "moved");
        assert_eq!(a.as_str().as_ptr(), ptr);
    }

    #[test]
    fn null_source_is_empty() {
        let a = AlphaNum::from(None::<&str>);
        assert!(a.is_empty());
        assert_eq!(a.as_str(), "");
        assert_eq!(AlphaNum::from(Some("x")).as_str(), "x");
    }

    #[test]
    fn padded_values() {
        assert_eq!(AlphaNum::from(Hex::with_pad(10u8, PadSpec::ZeroPad2)).as_str(), "0a");
        assert_eq!(AlphaNum::from(Dec::with_pad(-7, PadSpec::ZeroPad4)).as_str(), "-007");
        assert_eq!(AlphaNum::from(Dec::with_pad(-7, PadSpec::SpacePad4)).len(), 4);
    }

    #[test]
    fn stringify_types_and_enums() {
        assert_eq!(AlphaNum::from(&Tag).as_str(), "<tag>");
        assert_eq!(AlphaNum::from(&Displayed(1.5f32)).as_str(), "1.5");
        assert_eq!(AlphaNum::from(Signed::Minus).as_str(), "-3");
    }

    #[test]
    fn six_digits_buffer() {
        let b = six_digits(2.0 / 3.0);
        assert_eq!(b.as_str(), "0.666667");
        assert_eq!(b.len(), 8);
        assert_eq!(AlphaNum::from(&b).as_str(), "0.666667");
    }

    #[cfg(feature = "std")]
    #[test]
    fn paths_borrow_when_valid_utf8() {
        let p = std::path::Path::new("/tmp/x.log");
        let a = AlphaNum::from(p);
        assert!(a.is_borrowed());
        assert_eq!(a.as_str(), "/tmp/x.log");
        assert_eq!(AlphaNum::from(std::ffi::OsStr::new("os")).as_str(), "os");
    }

    #[test]
    fn debug_shows_text() {
        assert_eq!(alloc::format!("{:?}", AlphaNum::from(5u8)), "AlphaNum(\"5\")");
    }
}
