use crate::foundation::error::{AquaglowError, AquaglowResult};

/// Straight (non-premultiplied) RGB color, one byte per channel.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, Default,
)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Pure white, the idle background.
    pub const WHITE: Self = Self {
        r: 255,
        g: 255,
        b: 255,
    };

    /// Construct from channel values.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Lowercase `#rrggbb` form. A pure function of the triple.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Parse a `#rrggbb` string (case-insensitive).
    pub fn from_hex(hex: &str) -> AquaglowResult<Self> {
        let digits = hex
            .strip_prefix('#')
            .ok_or_else(|| AquaglowError::validation(format!("hex color must start with '#': {hex:?}")))?;
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(AquaglowError::validation(format!(
                "hex color must be exactly six hex digits: {hex:?}"
            )));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| AquaglowError::validation(format!("invalid hex digits: {hex:?}")))
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Euclidean distance in RGB space.
    pub fn distance(self, other: Self) -> f64 {
        let dr = f64::from(self.r) - f64::from(other.r);
        let dg = f64::from(self.g) - f64::from(other.g);
        let db = f64::from(self.b) - f64::from(other.b);
        (dr * dr + dg * dg + db * db).sqrt()
    }

    /// Blend each channel toward white: `c + (255 - c) * t`, rounded.
    ///
    /// `t = 0` returns `self` unchanged, `t = 1` returns [`Rgb::WHITE`].
    pub fn toward_white(self, t: f64) -> Self {
        fn blend(c: u8, t: f64) -> u8 {
            let c = f64::from(c);
            (c + (255.0 - c) * t).round().clamp(0.0, 255.0) as u8
        }
        let t = t.clamp(0.0, 1.0);
        Self {
            r: blend(self.r, t),
            g: blend(self.g, t),
            b: blend(self.b, t),
        }
    }
}
