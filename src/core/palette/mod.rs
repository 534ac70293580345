pub mod kinds;
pub mod standard;
