use crate::core::data::colour::NormalisedRgb;

/// Turns an opaque colour token into a base colour for the colourizer.
pub trait ColourPalette {
    type Token;

    fn normalise(&self, token: Self::Token) -> NormalisedRgb;
}
