// src/authwatch.rs
//
// Periodic re-check of the embedded authentication state. The upstream
// session can expire underneath the panel at any time; this is an explicit,
// cancellable repeating task owned by the embedding GUI — never a timer
// hidden inside the extractor.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
    mpsc,
};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::config::consts::AUTH_POLL_STEP_MS;
use crate::config::markers::MarkerSet;
use crate::config::options::ExtractOptions;
use crate::extract::{self, ExtractError};
use crate::fetch::MarkupSource;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthState {
    /// Dashboard container present; carries the artwork count seen.
    Authenticated(usize),
    /// Logged-out render came back: the upstream session is gone.
    LoggedOut,
    /// Could not reach upstream at all (transient).
    Unreachable(String),
}

pub fn classify(
    source: &dyn MarkupSource,
    opts: &ExtractOptions,
    markers: &MarkerSet,
) -> AuthState {
    match source.dashboard_markup() {
        Err(e) => AuthState::Unreachable(e.to_string()),
        Ok(doc) => match extract::extract(&doc, opts, markers) {
            Ok(records) => AuthState::Authenticated(records.len()),
            Err(ExtractError::NoItemsFound) => AuthState::Authenticated(0),
            Err(ExtractError::NotAuthenticated) => AuthState::LoggedOut,
        },
    }
}

pub struct AuthWatch {
    cancel: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl AuthWatch {
    /// Spawn the repeating check. States arrive on `tx`; the first check
    /// runs after one full interval (the initial load already classified).
    pub fn start(
        source: Arc<dyn MarkupSource>,
        opts: ExtractOptions,
        markers: MarkerSet,
        interval: Duration,
        tx: mpsc::Sender<AuthState>,
    ) -> Self {
        let cancel = Arc::new(AtomicBool::new(false));
        let stop = Arc::clone(&cancel);

        let handle = thread::spawn(move || {
            let step = Duration::from_millis(AUTH_POLL_STEP_MS);
            loop {
                // Sleep in small steps so stop() returns promptly.
                let mut slept = Duration::ZERO;
                while slept < interval {
                    if stop.load(Ordering::Relaxed) {
                        return;
                    }
                    thread::sleep(step);
                    slept += step;
                }
                if stop.load(Ordering::Relaxed) {
                    return;
                }
                let state = classify(source.as_ref(), &opts, &markers);
                if tx.send(state).is_err() {
                    return; // receiver gone; nothing left to report to
                }
            }
        });

        Self { cancel, handle: Some(handle) }
    }

    pub fn stop(&mut self) {
        self.cancel.store(true, Ordering::Relaxed);
        if let Some(h) = self.handle.take() {
            let _ = h.join();
        }
    }
}

impl Drop for AuthWatch {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::FetchError;

    struct LoggedOutSource;
    impl MarkupSource for LoggedOutSource {
        fn dashboard_markup(&self) -> Result<String, FetchError> {
            Ok(s!("<html><body>Please sign in</body></html>"))
        }
        fn detail_markup(&self, _id: &str) -> Result<String, FetchError> {
            Err(FetchError::Transport(s!("unused")))
        }
    }

    #[test]
    fn classify_logged_out_markup() {
        let state = classify(
            &LoggedOutSource,
            &ExtractOptions::default(),
            &MarkerSet::upstream(),
        );
        assert_eq!(state, AuthState::LoggedOut);
    }

    #[test]
    fn watch_reports_and_stops() {
        let (tx, rx) = mpsc::channel();
        let mut watch = AuthWatch::start(
            Arc::new(LoggedOutSource),
            ExtractOptions::default(),
            MarkerSet::upstream(),
            Duration::from_millis(50),
            tx,
        );
        let first = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(first, AuthState::LoggedOut);
        watch.stop();
    }
}
