//! Stable colors derived from strings

use super::{Hsl, Rgb};

/// Lightness range that stays readable on a dark background
const MIN_LIGHTNESS: f64 = 0.3;
const MAX_LIGHTNESS: f64 = 0.85;

/// Derives a readable color from the MD5 digest of `input`.
///
/// The first three digest bytes give the hue and saturation; lightness is
/// rescaled into `[0.3, 0.85]`. Equal inputs always map to equal colors,
/// so terminals on different hosts are easy to tell apart.
pub fn color_hash(input: &str) -> Rgb {
    let digest = md5::compute(input.as_bytes());
    let Hsl { h, s, l } = Rgb::new(digest[0], digest[1], digest[2]).to_hsl();

    let l = l * (MAX_LIGHTNESS - MIN_LIGHTNESS) + MIN_LIGHTNESS;
    Hsl { h, s, l }.to_rgb()
}
