// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex, mpsc},
    time::Duration,
};

use eframe::egui;

use crate::{
    authwatch::{AuthState, AuthWatch},
    config::{
        consts::AUTH_POLL_SECS,
        state::{AppState, View},
    },
    extract::ArtworkRecord,
    fetch::{HttpSource, MarkupSource},
    nfc::SimDevice,
    pairing::{PairingController, ScanToken},
    resolve::ResolveError,
    store::ArtworkStore,
};

use super::actions::{self, load::LoadResult};

pub const LOGIN_PROMPT: &str =
    "Upstream session expired — sign in to the registry, then reload.";

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Artwork Panel",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,
    pub store: ArtworkStore,
    pub pairing: PairingController<SimDevice>,
    pub source: Arc<dyn MarkupSource>,

    // status line (workers write here through GuiProgress)
    pub status: Arc<Mutex<String>>,
    pub running: bool,
    pub resolving: bool,
    pub banner: Option<String>,
    pub scan_token: Option<ScanToken>,

    // worker result channels, polled each frame
    pub load_rx: Option<mpsc::Receiver<LoadResult>>,
    pub resolve_rx: Option<mpsc::Receiver<(String, Result<String, ResolveError>)>>,
    auth_rx: mpsc::Receiver<AuthState>,
    _auth_watch: AuthWatch,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let source: Arc<dyn MarkupSource> = Arc::new(HttpSource);

        let (auth_tx, auth_rx) = mpsc::channel();
        let auth_watch = AuthWatch::start(
            Arc::clone(&source),
            state.options.extract,
            state.options.markers.clone(),
            Duration::from_secs(AUTH_POLL_SECS),
            auth_tx,
        );

        logf!("Init: view={:?}", state.gui.view);

        let mut app = Self {
            state,
            store: ArtworkStore::new(),
            pairing: PairingController::new(SimDevice::new()),
            source,
            status: Arc::new(Mutex::new(s!("Idle"))),
            running: false,
            resolving: false,
            banner: None,
            scan_token: None,
            load_rx: None,
            resolve_rx: None,
            auth_rx,
            _auth_watch: auth_watch,
        };
        actions::load(&mut app);
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        *self.status.lock().unwrap() = msg.into();
    }

    /// The record behind the active pairing session, if it survived the
    /// last reload.
    pub fn selected_record(&self) -> Option<&ArtworkRecord> {
        self.pairing
            .session()
            .and_then(|s| self.store.get(&s.artwork_id))
    }

    fn poll_workers(&mut self) {
        let polled = self.load_rx.as_ref().map(|rx| rx.try_recv());
        match polled {
            Some(Ok(result)) => {
                self.running = false;
                self.load_rx = None;
                actions::load::apply(self, result);
            }
            Some(Err(mpsc::TryRecvError::Disconnected)) => {
                self.running = false;
                self.load_rx = None;
                loge!("Load: worker channel dropped");
                self.status("Load failed");
            }
            _ => {}
        }

        let polled = self.resolve_rx.as_ref().map(|rx| rx.try_recv());
        match polled {
            Some(Ok((artwork_id, result))) => {
                self.resolving = false;
                self.resolve_rx = None;
                actions::select::apply_resolved(self, artwork_id, result);
            }
            Some(Err(mpsc::TryRecvError::Disconnected)) => {
                self.resolving = false;
                self.resolve_rx = None;
                loge!("Resolve: worker channel dropped");
                self.status("Resolve failed");
            }
            _ => {}
        }

        while let Ok(state) = self.auth_rx.try_recv() {
            self.apply_auth_state(state);
        }
    }

    fn apply_auth_state(&mut self, state: AuthState) {
        match state {
            AuthState::Authenticated(n) => {
                logd!("Auth check: ok ({} artworks)", n);
                if self.banner.as_deref() == Some(LOGIN_PROMPT) {
                    self.banner = None;
                }
            }
            AuthState::LoggedOut => {
                loge!("Auth check: upstream session gone");
                self.banner = Some(s!(LOGIN_PROMPT));
            }
            AuthState::Unreachable(e) => {
                logd!("Auth check: unreachable ({})", e);
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_workers();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            crate::gui::components::header_bar::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.state.gui.view {
            View::Dashboard => crate::gui::components::artwork_grid::draw(ui, self),
            View::Authentication => crate::gui::components::pairing_panel::draw(ui, self),
        });

        // Keep polling while background work or a scan is pending; channel
        // sends don't wake the event loop on their own.
        if self.running || self.resolving || self.scan_token.is_some() {
            ctx.request_repaint_after(Duration::from_millis(150));
        }
    }
}
