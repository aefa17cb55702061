// smol-strcat: no_std string concatenation with one allocation per call.
// numbers:   stack rendering of integers, %.6g floats, zero-padded hex
// pad:       PadSpec, Hex and Dec (right-aligned, sign-aware fill)
// stringify: Sink/Stringify extension point for user types
// alpha_num: AlphaNum argument type (borrowed text or inline digits)
// cat:       str_cat!/str_append! engine, amortized growth, int fast path
// stack_fmt: fixed-capacity fmt::Write scratch buffer
// error:     CatError for the try_* entry points

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod alpha_num;
pub mod cat;
pub mod error;
pub mod numbers;
pub mod pad;
pub mod stack_fmt;
pub mod stringify;

pub use alpha_num::{AlphaNum, AlphaNumBuffer, six_digits};
pub use cat::{
    IntArg, append_int, append_ints, append_pieces, cat_int, concat_pieces, try_append_pieces,
    try_concat_pieces,
};
pub use error::CatError;
pub use numbers::{FAST_TO_BUFFER_SIZE, FastInt, SIX_DIGITS_TO_BUFFER_SIZE};
pub use pad::{Dec, Hex, HexBits, MAX_PAD_WIDTH, PadSpec, dec, hex};
pub use stack_fmt::StackFmt;
pub use stringify::{Displayed, Sink, Stringify, stringify_to_string};
