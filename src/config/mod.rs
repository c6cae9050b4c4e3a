// src/config/mod.rs
pub mod consts;
pub mod markers;
pub mod options;
pub mod state;
