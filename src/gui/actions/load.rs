// src/gui/actions/load.rs
//
// Dashboard load: fetch + extract on a worker thread, result handed back
// over a channel and applied on the UI thread so the store is replaced in
// one step — no partial state is ever visible.

use std::{sync::Arc, thread, sync::mpsc};

use crate::{
    extract::{self, ArtworkRecord, ExtractError},
    gui::app::{App, LOGIN_PROMPT},
    gui::progress::GuiProgress,
    progress::Progress,
};

pub enum LoadResult {
    Artworks(Vec<ArtworkRecord>),
    LoggedOut,
    Empty,
    Failed(String),
}

pub fn load(app: &mut App) {
    if app.running {
        return;
    }
    app.running = true;
    app.banner = None;

    logf!("Load: begin");

    let (tx, rx) = mpsc::channel();
    app.load_rx = Some(rx);

    let source = Arc::clone(&app.source);
    let opts = app.state.options.extract;
    let markers = app.state.options.markers.clone();
    let mut progress = GuiProgress::new(app.status.clone());

    thread::spawn(move || {
        progress.log("Fetching dashboard…");
        let result = match source.dashboard_markup() {
            Err(e) => LoadResult::Failed(e.to_string()),
            Ok(doc) => {
                progress.log("Extracting artworks…");
                let mut trace = |m: &str| logd!("Extract: {}", m);
                match extract::extract_traced(&doc, &opts, &markers, Some(&mut trace)) {
                    Ok(records) => LoadResult::Artworks(records),
                    Err(ExtractError::NotAuthenticated) => LoadResult::LoggedOut,
                    Err(ExtractError::NoItemsFound) => LoadResult::Empty,
                }
            }
        };
        progress.finish();
        let _ = tx.send(result);
    });
}

pub fn apply(app: &mut App, result: LoadResult) {
    match result {
        LoadResult::Artworks(records) => {
            logf!("Load: OK ({} artworks)", records.len());
            app.store.load(records);
            app.status(format!("{} artwork(s)", app.store.len()));
        }
        LoadResult::LoggedOut => {
            loge!("Load: logged-out render");
            app.store.load(Vec::new());
            app.banner = Some(s!(LOGIN_PROMPT));
            app.status("Not signed in");
        }
        LoadResult::Empty => {
            // informational, not an error banner
            logf!("Load: dashboard has no artworks");
            app.store.load(Vec::new());
            app.status("No artworks found");
        }
        LoadResult::Failed(e) => {
            loge!("Load: {}", e);
            app.banner = Some(format!("Load failed: {}. Reload to retry.", e));
            app.status("Load failed");
        }
    }
}
