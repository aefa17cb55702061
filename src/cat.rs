//! Concatenation and append engine.
//!
//! Every entry point measures all pieces first, grows the destination once,
//! then copies the pieces in order. Appends grow geometrically (at least
//! doubling), so n appends to one `String` reallocate O(log n) times.
//!
//! The macros are the front door:
//!
//! ```
//! use smol_strcat::{Dec, Hex, PadSpec, str_append, str_cat};
//!
//! let mut line = str_cat!("id=", 42, " ok=", true);
//! str_append!(&mut line, " crc=", Hex::with_pad(0xbeefu32, PadSpec::ZeroPad8));
//! str_append!(&mut line, " t=", Dec::with_pad(-7, PadSpec::ZeroPad4), "s");
//! assert_eq!(line, "id=42 ok=1 crc=0000beef t=-007s");
//! ```
//!
//! No argument of an append may borrow from the destination. The borrow
//! checker enforces this:
//!
//! ```compile_fail
//! let mut s = String::from("abc");
//! smol_strcat::str_append!(&mut s, &s);
//! ```

use alloc::string::String;

use crate::alpha_num::AlphaNum;
use crate::error::CatError;
use crate::numbers::{self, FastInt};

/// Make room for `additional` more bytes, at least doubling capacity when
/// growth is needed.
pub fn reserve_amortized(dest: &mut String, additional: usize) {
    let cap = dest.capacity();
    let needed = dest.len().saturating_add(additional);
    if needed <= cap {
        return;
    }
    let target = needed.max(cap.saturating_mul(2));
    log::trace!("strcat: grow {} -> {} bytes", cap, target);
    dest.reserve_exact(target - dest.len());
}

/// Fallible [`reserve_amortized`]; `dest` is untouched on error.
pub fn try_reserve_amortized(dest: &mut String, additional: usize) -> Result<(), CatError> {
    let cap = dest.capacity();
    let needed = dest
        .len()
        .checked_add(additional)
        .ok_or(CatError::CapacityOverflow)?;
    if needed <= cap {
        return Ok(());
    }
    let target = needed.max(cap.saturating_mul(2));
    log::trace!("strcat: grow {} -> {} bytes", cap, target);
    if dest.try_reserve_exact(target - dest.len()).is_ok() {
        return Ok(());
    }
    // doubling may ask for more than the allocator has; the exact need may fit
    dest.try_reserve_exact(additional).map_err(|_| {
        log::warn!("strcat: cannot grow to {} bytes", needed);
        CatError::Alloc { requested: needed }
    })
}

fn total_len(pieces: &[&str]) -> Result<usize, CatError> {
    pieces.iter().try_fold(0usize, |acc, p| {
        acc.checked_add(p.len()).ok_or(CatError::CapacityOverflow)
    })
}

/// Join `pieces` into a new `String` allocated at its exact final size.
pub fn concat_pieces(pieces: &[&str]) -> String {
    let total = pieces.iter().map(|p| p.len()).sum();
    let mut out = String::with_capacity(total);
    for p in pieces {
        out.push_str(p);
    }
    debug_assert_eq!(out.len(), total);
    out
}

pub fn try_concat_pieces(pieces: &[&str]) -> Result<String, CatError> {
    let total = total_len(pieces)?;
    let mut out = String::new();
    out.try_reserve_exact(total).map_err(|_| {
        log::warn!("strcat: cannot allocate {} bytes", total);
        CatError::Alloc { requested: total }
    })?;
    for p in pieces {
        out.push_str(p);
    }
    Ok(out)
}

/// Append `pieces` to `dest` with a single amortized growth.
pub fn append_pieces(dest: &mut String, pieces: &[&str]) {
    let total: usize = pieces.iter().map(|p| p.len()).sum();
    if total == 0 {
        return;
    }
    reserve_amortized(dest, total);
    for p in pieces {
        dest.push_str(p);
    }
}

pub fn try_append_pieces(dest: &mut String, pieces: &[&str]) -> Result<(), CatError> {
    let total = total_len(pieces)?;
    if total == 0 {
        return Ok(());
    }
    try_reserve_amortized(dest, total)?;
    for p in pieces {
        dest.push_str(p);
    }
    Ok(())
}

// Fixed-arity paths used by the macros for one to four arguments.

#[inline]
pub fn cat1(a: &AlphaNum<'_>) -> String {
    String::from(a.as_str())
}

pub fn cat2(a: &AlphaNum<'_>, b: &AlphaNum<'_>) -> String {
    let (a, b) = (a.as_str(), b.as_str());
    let mut out = String::with_capacity(a.len() + b.len());
    out.push_str(a);
    out.push_str(b);
    out
}

pub fn cat3(a: &AlphaNum<'_>, b: &AlphaNum<'_>, c: &AlphaNum<'_>) -> String {
    let (a, b, c) = (a.as_str(), b.as_str(), c.as_str());
    let mut out = String::with_capacity(a.len() + b.len() + c.len());
    out.push_str(a);
    out.push_str(b);
    out.push_str(c);
    out
}

pub fn cat4(a: &AlphaNum<'_>, b: &AlphaNum<'_>, c: &AlphaNum<'_>, d: &AlphaNum<'_>) -> String {
    let (a, b, c, d) = (a.as_str(), b.as_str(), c.as_str(), d.as_str());
    let mut out = String::with_capacity(a.len() + b.len() + c.len() + d.len());
    out.push_str(a);
    out.push_str(b);
    out.push_str(c);
    out.push_str(d);
    out
}

pub fn append1(dest: &mut String, a: &AlphaNum<'_>) {
    let a = a.as_str();
    reserve_amortized(dest, a.len());
    dest.push_str(a);
}

pub fn append2(dest: &mut String, a: &AlphaNum<'_>, b: &AlphaNum<'_>) {
    let (a, b) = (a.as_str(), b.as_str());
    reserve_amortized(dest, a.len() + b.len());
    dest.push_str(a);
    dest.push_str(b);
}

pub fn append3(dest: &mut String, a: &AlphaNum<'_>, b: &AlphaNum<'_>, c: &AlphaNum<'_>) {
    let (a, b, c) = (a.as_str(), b.as_str(), c.as_str());
    reserve_amortized(dest, a.len() + b.len() + c.len());
    dest.push_str(a);
    dest.push_str(b);
    dest.push_str(c);
}

pub fn append4(
    dest: &mut String,
    a: &AlphaNum<'_>,
    b: &AlphaNum<'_>,
    c: &AlphaNum<'_>,
    d: &AlphaNum<'_>,
) {
    let (a, b, c, d) = (a.as_str(), b.as_str(), c.as_str(), d.as_str());
    reserve_amortized(dest, a.len() + b.len() + c.len() + d.len());
    dest.push_str(a);
    dest.push_str(b);
    dest.push_str(c);
    dest.push_str(d);
}

/// An integer argument for the all-numeric append path.
///
/// Holds only sign and magnitude; nothing is rendered until
/// [`append_ints`] writes the digits into their final position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntArg {
    magnitude: u64,
    negative: bool,
}

impl IntArg {
    #[inline]
    pub fn new<T: FastInt>(value: T) -> Self {
        Self {
            magnitude: value.magnitude(),
            negative: value.is_negative(),
        }
    }

    /// Bytes this value occupies once rendered, sign included.
    #[inline]
    pub const fn rendered_len(self) -> usize {
        numbers::count_digits(self.magnitude) + self.negative as usize
    }

    // `field` is exactly rendered_len() bytes
    #[inline]
    fn write_exact(self, field: &mut [u8]) {
        if self.negative {
            field[0] = b'-';
        }
        numbers::write_digits_backward(self.magnitude, field);
    }
}

macro_rules! impl_int_arg_from {
    ($($t:ty),*) => {$(
        impl From<$t> for IntArg {
            #[inline]
            fn from(v: $t) -> Self {
                Self::new(v)
            }
        }
    )*};
}

impl_int_arg_from!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

/// Append integers without intermediate buffers.
///
/// Digit counts are computed up front, the destination grows once, and
/// each value's digits are written backward straight into its slot.
pub fn append_ints(dest: &mut String, args: &[IntArg]) {
    let total: usize = args.iter().map(|a| a.rendered_len()).sum();
    if total == 0 {
        return;
    }
    let old_len = dest.len();
    reserve_amortized(dest, total);

    // SAFETY: the new tail is filled with b'0' and then overwritten with
    // ASCII digits and '-', so the buffer is valid UTF-8 at every point,
    // including if anything below were to unwind.
    let bytes = unsafe { dest.as_mut_vec() };
    bytes.resize(old_len + total, b'0');
    let mut pos = old_len;
    for arg in args {
        let n = arg.rendered_len();
        arg.write_exact(&mut bytes[pos..pos + n]);
        pos += n;
    }
}

/// Single integer to a new `String` of exactly its rendered length.
pub fn cat_int<T: FastInt>(value: T) -> String {
    let mut out = String::new();
    append_ints(&mut out, &[IntArg::new(value)]);
    out
}

pub fn append_int<T: FastInt>(dest: &mut String, value: T) {
    append_ints(dest, &[IntArg::new(value)]);
}

/// Concatenate values into a new `String`.
///
/// Each argument goes through `AlphaNum::from`, so numbers, bools, text,
/// `Hex`/`Dec` and `&impl Stringify` all work. No arguments yields an empty
/// `String` without allocating.
#[macro_export]
macro_rules! str_cat {
    () => {
        $crate::cat::concat_pieces(&[])
    };
    ($a:expr $(,)?) => {
        $crate::cat::cat1(&$crate::AlphaNum::from($a))
    };
    ($a:expr, $b:expr $(,)?) => {
        $crate::cat::cat2(&$crate::AlphaNum::from($a), &$crate::AlphaNum::from($b))
    };
    ($a:expr, $b:expr, $c:expr $(,)?) => {
        $crate::cat::cat3(
            &$crate::AlphaNum::from($a),
            &$crate::AlphaNum::from($b),
            &$crate::AlphaNum::from($c),
        )
    };
    ($a:expr, $b:expr, $c:expr, $d:expr $(,)?) => {
        $crate::cat::cat4(
            &$crate::AlphaNum::from($a),
            &$crate::AlphaNum::from($b),
            &$crate::AlphaNum::from($c),
            &$crate::AlphaNum::from($d),
        )
    };
    ($($v:expr),+ $(,)?) => {
        $crate::cat::concat_pieces(&[$($crate::AlphaNum::from($v).as_str()),+])
    };
}

/// Append values to a `&mut String`.
///
/// Arguments must not borrow from the destination.
#[macro_export]
macro_rules! str_append {
    ($dest:expr $(,)?) => {
        $crate::cat::append_pieces($dest, &[])
    };
    ($dest:expr, $a:expr $(,)?) => {
        $crate::cat::append1($dest, &$crate::AlphaNum::from($a))
    };
    ($dest:expr, $a:expr, $b:expr $(,)?) => {
        $crate::cat::append2($dest, &$crate::AlphaNum::from($a), &$crate::AlphaNum::from($b))
    };
    ($dest:expr, $a:expr, $b:expr, $c:expr $(,)?) => {
        $crate::cat::append3(
            $dest,
            &$crate::AlphaNum::from($a),
            &$crate::AlphaNum::from($b),
            &$crate::AlphaNum::from($c),
        )
    };
    ($dest:expr, $a:expr, $b:expr, $c:expr, $d:expr $(,)?) => {
        $crate::cat::append4(
            $dest,
            &$crate::AlphaNum::from($a),
            &$crate::AlphaNum::from($b),
            &$crate::AlphaNum::from($c),
            &$crate::AlphaNum::from($d),
        )
    };
    ($dest:expr, $($v:expr),+ $(,)?) => {
        $crate::cat::append_pieces($dest, &[$($crate::AlphaNum::from($v).as_str()),+])
    };
}

/// Append integers through [`append_ints`](crate::cat::append_ints).
///
/// ```
/// let mut s = String::from("v");
/// smol_strcat::str_append_ints!(&mut s, 1u8, -20i64, 300usize);
/// assert_eq!(s, "v1-20300");
/// ```
#[macro_export]
macro_rules! str_append_ints {
    ($dest:expr, $($v:expr),+ $(,)?) => {
        $crate::cat::append_ints($dest, &[$($crate::IntArg::from($v)),+])
    };
}

/// `str_cat!` that reports allocation failure instead of aborting.
#[macro_export]
macro_rules! try_str_cat {
    ($($v:expr),* $(,)?) => {
        $crate::cat::try_concat_pieces(&[$($crate::AlphaNum::from($v).as_str()),*])
    };
}

/// `str_append!` that reports allocation failure instead of aborting.
#[macro_export]
macro_rules! try_str_append {
    ($dest:expr $(, $v:expr)* $(,)?) => {
        $crate::cat::try_append_pieces($dest, &[$($crate::AlphaNum::from($v).as_str()),*])
    };
}
