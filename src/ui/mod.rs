pub mod control;
pub mod overlay;
