// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;

pub mod authwatch;
pub mod extract;
pub mod fetch;
pub mod gui;
pub mod nfc;
pub mod pairing;
pub mod progress;
pub mod resolve;
pub mod store;

#[cfg(feature = "cli")]
pub mod cli;
