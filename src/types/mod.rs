pub mod config;
pub mod controls;
pub mod player;

mod property_value;
pub use property_value::*;
