// src/gui/actions/pair.rs
use std::time::{SystemTime, UNIX_EPOCH};

use crate::{
    config::state::View,
    gui::app::App,
    nfc::TagHandle,
    pairing::{PairError, Phase},
};

pub fn begin_scan(app: &mut App) {
    match app.pairing.begin_scan() {
        Ok(token) => {
            app.scan_token = Some(token);
            app.banner = None;
            app.status("Hold a tag near the reader…");
            logf!("Pair: scanning");
        }
        Err(e @ PairError::MissingLink) => {
            // precondition failure, state untouched
            app.status(e.to_string());
        }
        Err(e @ PairError::UnsupportedPlatform) => {
            loge!("Pair: {}", e);
            app.banner = Some(format!("{}.", e));
        }
        Err(e) => {
            loge!("Pair: {}", e);
            app.status(e.to_string());
        }
    }
}

/// A tag tap from the simulated device (stand-in until a host tag bridge
/// implements TagDevice for real hardware).
pub fn simulate_tap(app: &mut App) {
    let Some(token) = app.scan_token else { return };

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let tag = TagHandle::new(format!("SIM-{:x}", nanos));

    let phase = app.pairing.tag_detected(token, &tag, &mut app.store).clone();
    match phase {
        Phase::Success => {
            app.scan_token = None;
            app.status("Tag paired — artwork verified");
            logf!("Pair: success ({})", tag.uid);
        }
        Phase::Error(e) => {
            app.scan_token = None;
            app.status(format!("Write failed: {}", e));
            loge!("Pair: write failed: {}", e);
        }
        _ => {}
    }
}

pub fn reset(app: &mut App) {
    app.pairing.reset_session();
    app.scan_token = None;
    app.status("Idle");
}

/// Navigating back cancels the session and any in-flight resolve.
pub fn back_to_dashboard(app: &mut App) {
    logf!("View: back to dashboard");
    reset(app);
    app.resolve_rx = None;
    app.resolving = false;
    app.state.gui.view = View::Dashboard;
}
