// src/gui/components/mod.rs
pub mod artwork_grid;
pub mod header_bar;
pub mod pairing_panel;
