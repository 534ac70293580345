/// An 8-bit-per-channel output pixel.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A base colour with every channel in `[0, 1]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct NormalisedRgb {
    r: f64,
    g: f64,
    b: f64,
}

fn clamp_unit(channel: f64) -> f64 {
    if channel.is_nan() {
        0.0
    } else {
        channel.clamp(0.0, 1.0)
    }
}

impl NormalisedRgb {
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };

    /// Channels outside `[0, 1]` are clamped; NaN becomes `0`.
    #[must_use]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: clamp_unit(r),
            g: clamp_unit(g),
            b: clamp_unit(b),
        }
    }

    #[must_use]
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self {
            r: f64::from(rgb.r) / 255.0,
            g: f64::from(rgb.g) / 255.0,
            b: f64::from(rgb.b) / 255.0,
        }
    }

    #[must_use]
    pub fn r(&self) -> f64 {
        self.r
    }

    #[must_use]
    pub fn g(&self) -> f64 {
        self.g
    }

    #[must_use]
    pub fn b(&self) -> f64 {
        self.b
    }
}
