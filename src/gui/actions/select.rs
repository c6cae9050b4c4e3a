// src/gui/actions/select.rs
//
// Artwork selection → pairing session + background link resolve. Selecting
// a different artwork replaces the session and the result channel, so a
// late resolve for the old selection has nowhere to land.

use std::{sync::Arc, sync::mpsc, thread};

use crate::{
    config::state::View,
    gui::app::App,
    resolve::{self, ResolveError},
};

pub fn select(app: &mut App, artwork_id: &str) {
    logf!("Select: {}", artwork_id);
    app.pairing.select(artwork_id);
    app.scan_token = None;
    app.state.gui.view = View::Authentication;
    resolve_link(app);
}

/// Kick off (or retry) the resolve for the current session's artwork.
pub fn resolve_link(app: &mut App) {
    let Some(artwork_id) = app.pairing.session().map(|s| s.artwork_id.clone()) else {
        return;
    };
    app.resolving = true;
    app.banner = None;
    app.status("Resolving certificate link…");

    let (tx, rx) = mpsc::channel();
    app.resolve_rx = Some(rx);

    let source = Arc::clone(&app.source);
    let markers = app.state.options.markers.clone();

    thread::spawn(move || {
        let result = resolve::resolve(source.as_ref(), &markers, &artwork_id);
        let _ = tx.send((artwork_id, result));
    });
}

pub fn apply_resolved(app: &mut App, artwork_id: String, result: Result<String, ResolveError>) {
    match result {
        Ok(link) => {
            if app.pairing.attach_link(&artwork_id, link) {
                logf!("Resolve: OK for {}", artwork_id);
                app.status("Link ready — pair a tag");
            } else {
                logd!("Resolve: stale result for {}, dropped", artwork_id);
            }
        }
        Err(ResolveError::LinkNotFound) => {
            loge!("Resolve: no canonical link for {}", artwork_id);
            app.banner = Some(s!("Details unavailable for this artwork — try again."));
            app.status("Details unavailable");
        }
        Err(ResolveError::FetchFailed(e)) => {
            loge!("Resolve: fetch failed for {}: {}", artwork_id, e);
            app.banner = Some(format!("Couldn't fetch details: {}. Try again.", e));
            app.status("Fetch failed");
        }
    }
}
