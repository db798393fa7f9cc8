//! RGB, HSL and hex color conversions

/// A 24-bit RGB color
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// An HSL color with every channel in `[0, 1]`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Packs the color as `0xRRGGBB`
    pub fn to_hex(self) -> u32 {
        (u32::from(self.r) << 16) | (u32::from(self.g) << 8) | u32::from(self.b)
    }

    /// Unpacks `0xRRGGBB`; higher bits are ignored
    pub fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex & 0xff0000) >> 16) as u8,
            g: ((hex & 0x00ff00) >> 8) as u8,
            b: (hex & 0x0000ff) as u8,
        }
    }

    pub fn to_hsl(self) -> Hsl {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g.max(b));
        let min = r.min(g.min(b));
        let l = (max + min) / 2.0;

        if max == min {
            return Hsl { h: 0.0, s: 0.0, l };
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Hsl { h: h / 6.0, s, l }
    }
}

fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn to_channel(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

impl Hsl {
    pub fn to_rgb(self) -> Rgb {
        let Hsl { h, s, l } = self;

        // Achromatic
        if s == 0.0 {
            let v = to_channel(l);
            return Rgb::new(v, v, v);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        Rgb::new(
            to_channel(hue_to_channel(p, q, h + 1.0 / 3.0)),
            to_channel(hue_to_channel(p, q, h)),
            to_channel(hue_to_channel(p, q, h - 1.0 / 3.0)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_round_trip() {
        let c = Rgb::new(0x12, 0xab, 0xef);
        assert_eq!(c.to_hex(), 0x12abef);
        assert_eq!(Rgb::from_hex(0x12abef), c);
        assert_eq!(Rgb::from_hex(0xff_000000), Rgb::new(0, 0, 0));
    }

    #[test]
    fn test_primary_colors_to_hsl() {
        let red = Rgb::new(255, 0, 0).to_hsl();
        assert_eq!((red.h, red.s, red.l), (0.0, 1.0, 0.5));

        let green = Rgb::new(0, 255, 0).to_hsl();
        assert!((green.h - 1.0 / 3.0).abs() < 1e-9);

        let blue = Rgb::new(0, 0, 255).to_hsl();
        assert!((blue.h - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_grey_is_achromatic() {
        let grey = Rgb::new(128, 128, 128);
        let hsl = grey.to_hsl();
        assert_eq!(hsl.s, 0.0);
        assert_eq!(hsl.to_rgb(), grey);
    }

    #[test]
    fn test_rgb_hsl_round_trip() {
        for c in [
            Rgb::new(255, 0, 0),
            Rgb::new(0, 255, 0),
            Rgb::new(0, 0, 255),
            Rgb::new(255, 255, 255),
            Rgb::new(0, 0, 0),
            Rgb::new(137, 180, 250),
            Rgb::new(243, 139, 168),
            Rgb::new(12, 200, 77),
        ] {
            assert_eq!(c.to_hsl().to_rgb(), c, "round trip of {c:?}");
        }
    }
}
