use crate::core::data::complex::Complex;

pub trait EscapeTimeAlgorithm {
    fn escape_value(&self, z0: Complex) -> u8;
}
