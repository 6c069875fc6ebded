pub mod attrs;
pub mod config;
pub mod geo;
