#[allow(clippy::module_inception)]
pub mod generate_escape_values;
pub mod ports;
