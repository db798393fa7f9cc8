//! Terminal colors: conversions, hashing and escape sequences

pub(crate) mod ansi;
pub(crate) mod convert;
pub(crate) mod hash;

pub use ansi::{colored, true_color, true_colored, AnsiColor, Painter, RESET};
pub use convert::{Hsl, Rgb};
pub use hash::color_hash;
