// src/gui/actions/mod.rs
pub mod load;
pub mod pair;
pub mod select;

pub use load::load;
