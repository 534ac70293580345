use crate::core::actions::generate_pixel_buffer::ports::colour_palette::ColourPalette;
use crate::core::data::colour::{NormalisedRgb, Rgb};
use crate::core::palette::kinds::BaseColour;

/// Fixed 8-bit swatches for each [`BaseColour`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardPalette;

impl StandardPalette {
    #[must_use]
    pub const fn swatch(colour: BaseColour) -> Rgb {
        match colour {
            BaseColour::White => Rgb::new(255, 255, 255),
            BaseColour::Red => Rgb::new(255, 0, 0),
            BaseColour::Green => Rgb::new(0, 255, 0),
            BaseColour::Blue => Rgb::new(0, 0, 255),
            BaseColour::Yellow => Rgb::new(255, 255, 0),
            BaseColour::Cyan => Rgb::new(0, 255, 255),
            BaseColour::Magenta => Rgb::new(255, 0, 255),
            BaseColour::Orange => Rgb::new(255, 165, 0),
        }
    }
}

impl ColourPalette for StandardPalette {
    type Token = BaseColour;

    fn normalise(&self, token: BaseColour) -> NormalisedRgb {
        NormalisedRgb::from_rgb(Self::swatch(token))
    }
}
