use rayon::prelude::*;

use crate::core::data::colour::{NormalisedRgb, Rgb};
use crate::core::data::escape_values::EscapeValues;
use crate::core::data::pixel_buffer::{CHANNELS, PixelBuffer};

fn scale_channel(value: u8, channel: f64) -> u8 {
    (f64::from(value) * channel).round().clamp(0.0, 255.0) as u8
}

/// Scales `colour` by an escape value, channel by channel.
#[must_use]
pub fn colourize(value: u8, colour: NormalisedRgb) -> Rgb {
    Rgb {
        r: scale_channel(value, colour.r()),
        g: scale_channel(value, colour.g()),
        b: scale_channel(value, colour.b()),
    }
}

/// Builds the frame for a set of escape values.
///
/// Rows are filled in parallel. Pixel `[row][col]` takes the value of the
/// sample at column `col`, row `row`.
#[must_use]
pub fn generate_pixel_buffer(values: &EscapeValues, colour: NormalisedRgb) -> PixelBuffer {
    let grid_size = values.grid_size() as usize;
    let raw = values.values();
    let mut buffer = PixelBuffer::new(values.grid_size());
    let stride = buffer.row_stride();

    buffer
        .as_bytes_mut()
        .par_chunks_mut(stride)
        .enumerate()
        .for_each(|(row, bytes)| {
            for (col, px) in bytes.chunks_exact_mut(CHANNELS).enumerate() {
                let Rgb { r, g, b } = colourize(raw[col * grid_size + row], colour);
                px[0] = r;
                px[1] = g;
                px[2] = b;
            }
        });

    buffer
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_white_copies_value_to_every_channel() {
        for value in [0u8, 1, 36, 128, 254, 255] {
            assert_eq!(
                colourize(value, NormalisedRgb::WHITE),
                Rgb::new(value, value, value)
            );
        }
    }

    #[test]
    fn test_zero_is_black_for_any_colour() {
        for colour in [
            NormalisedRgb::WHITE,
            NormalisedRgb::new(1.0, 0.0, 0.0),
            NormalisedRgb::new(0.3, 0.6, 0.9),
        ] {
            assert_eq!(colourize(0, colour), Rgb::BLACK);
        }
    }

    #[test]
    fn test_channels_are_scaled_and_rounded() {
        let colour = NormalisedRgb::new(0.5, 0.25, 0.0);

        assert_eq!(colourize(255, colour), Rgb::new(128, 64, 0));
        assert_eq!(colourize(10, colour), Rgb::new(5, 3, 0));
    }

    #[test]
    fn test_buffer_is_transposed_from_sample_order() {
        // sample order is column-major: [x0y0, x0y1, x1y0, x1y1]
        let values = EscapeValues::from_data(2, vec![10, 20, 30, 40]).unwrap();

        let buffer = generate_pixel_buffer(&values, NormalisedRgb::WHITE);

        assert_eq!(buffer.pixel(0, 0), Some(Rgb::new(10, 10, 10)));
        assert_eq!(buffer.pixel(1, 0), Some(Rgb::new(20, 20, 20)));
        assert_eq!(buffer.pixel(0, 1), Some(Rgb::new(30, 30, 30)));
        assert_eq!(buffer.pixel(1, 1), Some(Rgb::new(40, 40, 40)));
    }

    #[test]
    fn test_buffer_shape_matches_grid() {
        let values = EscapeValues::from_data(37, vec![7; 37 * 37]).unwrap();

        let buffer = generate_pixel_buffer(&values, NormalisedRgb::new(0.0, 1.0, 0.0));

        assert_eq!(buffer.grid_size(), 37);
        assert_eq!(buffer.as_bytes().len(), 37 * 37 * 3);
        assert!(
            buffer
                .to_rows()
                .iter()
                .flatten()
                .all(|&px| px == Rgb::new(0, 7, 0))
        );
    }
}
