// src/config/consts.rs

// Net config
pub const HOST: &str = "www.thestreetlamp.com";
pub const PREFIX: &str = "/apps/verisart/";
pub const USER_AGENT: &str = "veripanel/0.2";
pub const NET_TIMEOUT_SECS: u64 = 15;

// Debug log
pub const LOG_FILE: &str = ".store/debug.log";

// Embedded-auth re-check (see authwatch.rs)
pub const AUTH_POLL_SECS: u64 = 60;
pub const AUTH_POLL_STEP_MS: u64 = 100;

// Display defaults for sparse upstream cards
pub const UNTITLED: &str = "Untitled";
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";
