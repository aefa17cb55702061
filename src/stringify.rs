//! Extension point for user types.
//!
//! A type joins `str_cat!`/`str_append!` by implementing [`Stringify`]:
//! it receives a [`Sink`] and writes its own text into it. Dispatch is
//! generic over the sink, so every call is resolved at compile time.
//!
//! ```
//! use smol_strcat::{Sink, Stringify, str_cat};
//!
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! impl Stringify for Point {
//!     fn stringify<S: Sink>(&self, sink: &mut S) {
//!         sink.append("(");
//!         sink.append_value(self.x);
//!         sink.append(", ");
//!         sink.append_value(self.y);
//!         sink.append(")");
//!     }
//! }
//!
//! let p = Point { x: 3, y: -4 };
//! assert_eq!(str_cat!("p=", &p), "p=(3, -4)");
//! ```

use alloc::string::String;
use core::fmt;

use crate::alpha_num::AlphaNum;
use crate::stack_fmt::StackFmt;

/// Text output channel handed to [`Stringify::stringify`].
///
/// `fmt::Write` is a supertrait so `write!` works on any sink.
pub trait Sink: fmt::Write {
    fn append(&mut self, s: &str);

    /// Append `count` copies of `ch`.
    fn append_fill(&mut self, count: usize, ch: char) {
        let mut utf8 = [0u8; 4];
        let s: &str = ch.encode_utf8(&mut utf8);
        for _ in 0..count {
            self.append(s);
        }
    }

    /// Append anything `AlphaNum` accepts (numbers, bools, text, `Hex`, ...).
    fn append_value<'a>(&mut self, value: impl Into<AlphaNum<'a>>)
    where
        Self: Sized,
    {
        self.append(value.into().as_str());
    }
}

/// A type that can render itself into a [`Sink`].
pub trait Stringify {
    fn stringify<S: Sink>(&self, sink: &mut S);
}

impl Sink for String {
    #[inline]
    fn append(&mut self, s: &str) {
        self.push_str(s);
    }

    fn append_fill(&mut self, count: usize, ch: char) {
        self.extend(core::iter::repeat_n(ch, count));
    }
}

// clips at N; check `overflowed()` afterwards
impl<const N: usize> Sink for StackFmt<N> {
    #[inline]
    fn append(&mut self, s: &str) {
        self.push_bytes(s.as_bytes());
    }
}

/// Render `value` into a fresh `String`.
pub fn stringify_to_string<T: Stringify + ?Sized>(value: &T) -> String {
    let mut sink = String::new();
    value.stringify(&mut sink);
    sink
}

/// Adapter for any `Display` type.
///
/// `str_cat!("addr=", &Displayed(addr))` goes through the type's `Display`
/// impl. A `Display` error leaves whatever was written before it.
#[derive(Debug, Clone, Copy)]
pub struct Displayed<T>(pub T);

impl<T: fmt::Display> Stringify for Displayed<T> {
    fn stringify<S: Sink>(&self, sink: &mut S) {
        let _ = write!(sink, "{}", self.0);
    }
}

impl<T: Stringify + ?Sized> Stringify for &T {
    #[inline]
    fn stringify<S: Sink>(&self, sink: &mut S) {
        (**self).stringify(sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pad::{Dec, Hex, PadSpec};

    struct Pair(u8, u8);

    impl Stringify for Pair {
        fn stringify<S: Sink>(&self, sink: &mut S) {
            sink.append_value(self.0);
            sink.append_fill(2, '-');
            sink.append_value(Hex::with_pad(self.1, PadSpec::ZeroPad2));
        }
    }

    #[test]
    fn custom_type_into_string() {
        assert_eq!(stringify_to_string(&Pair(4, 10)), "4--0a");
    }

    #[test]
    fn custom_type_into_stack_buffer() {
        let mut buf = StackFmt::<8>::new();
        Pair(200, 255).stringify(&mut buf);
        assert_eq!(buf.as_str(), "200--ff");
        assert!(!buf.overflowed());

        let mut tiny = StackFmt::<4>::new();
        Pair(200, 255).stringify(&mut tiny);
        assert_eq!(tiny.as_str(), "200-");
        assert!(tiny.overflowed());
    }

    #[test]
    fn padded_values_stringify() {
        assert_eq!(stringify_to_string(&Dec::with_pad(-3, PadSpec::ZeroPad3)), "-03");
        assert_eq!(stringify_to_string(&Hex::new(0xabcu32)), "abc");
    }

    #[test]
    fn displayed_adapter() {
        let addr = core::net::Ipv4Addr::new(10, 0, 0, 1);
        assert_eq!(stringify_to_string(&Displayed(addr)), "10.0.0.1");
        assert_eq!(stringify_to_string(&&Displayed('x')), "x");
    }

    #[test]
    fn fill_with_multibyte_char() {
        let mut s = String::new();
        let mut sink = StackFmt::<8>::new();
        s.append_fill(3, 'é');
        sink.append_fill(3, 'é');
        assert_eq!(s, "ééé");
        assert_eq!(sink.as_str(), "ééé");
    }
}
