pub mod colour_palette;
