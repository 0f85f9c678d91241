pub mod bbox;
pub mod grid;
