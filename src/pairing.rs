// src/pairing.rs
//
// The tag-pairing state machine: Idle → Scanning → Encoding → Success,
// Error reachable from Scanning/Encoding, reset back to Idle. One session
// at a time; detection events and resolver results are guarded so nothing
// stale ever lands on the wrong artwork.

use thiserror::Error;

use crate::extract::ArtworkStatus;
use crate::nfc::{TagDevice, TagHandle, WriteError};
use crate::store::ArtworkStore;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Scanning,
    Encoding,
    Success,
    Error(PairError),
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PairError {
    /// Scan requested before the link resolved. State stays put.
    #[error("no resolved link for the selected artwork")]
    MissingLink,
    /// The host has no tag hardware at all. Not retryable as-is.
    #[error("this host has no tag hardware")]
    UnsupportedPlatform,
    /// Write failed; the user may re-present the tag.
    #[error(transparent)]
    Write(#[from] WriteError),
}

/// Ephemeral per-selection state. Created on selection, dropped on reset.
#[derive(Clone, Debug)]
pub struct PairingSession {
    pub artwork_id: String,
    pub resolved_link: Option<String>,
    token: u64,
}

/// Returned by `begin_scan`; detection events must carry it back. A stale
/// token (session replaced or rescanned since) makes the event a no-op.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanToken(u64);

pub struct PairingController<D: TagDevice> {
    device: D,
    session: Option<PairingSession>,
    phase: Phase,
    token_seq: u64,
}

impl<D: TagDevice> PairingController<D> {
    pub fn new(device: D) -> Self {
        Self {
            device,
            session: None,
            phase: Phase::Idle,
            token_seq: 0,
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn session(&self) -> Option<&PairingSession> {
        self.session.as_ref()
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    pub fn device_mut(&mut self) -> &mut D {
        &mut self.device
    }

    /// Has the resolver delivered a link for the current session?
    pub fn link_ready(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|s| s.resolved_link.is_some())
    }

    /// Start a session for one artwork. Any in-flight session for a prior
    /// selection is discarded first, which also invalidates its scan token.
    pub fn select(&mut self, artwork_id: &str) {
        self.token_seq += 1;
        self.session = Some(PairingSession {
            artwork_id: s!(artwork_id),
            resolved_link: None,
            token: self.token_seq,
        });
        self.phase = Phase::Idle;
    }

    /// Deliver a resolver result. Applied only when the session still
    /// belongs to the artwork it was resolved for; late results from a
    /// cancelled selection report false and change nothing.
    pub fn attach_link(&mut self, artwork_id: &str, link: String) -> bool {
        match &mut self.session {
            Some(s) if s.artwork_id == artwork_id => {
                s.resolved_link = Some(link);
                true
            }
            _ => false,
        }
    }

    /// Enter Scanning. Capability absence and a missing link both fail
    /// without any state change; callable again from Error for a retry
    /// without re-resolving. While already Scanning/Encoding the current
    /// token is simply handed back.
    pub fn begin_scan(&mut self) -> Result<ScanToken, PairError> {
        if !self.device.is_supported() {
            return Err(PairError::UnsupportedPlatform);
        }
        let Some(sess) = self.session.as_mut() else {
            return Err(PairError::MissingLink);
        };
        if sess.resolved_link.is_none() {
            return Err(PairError::MissingLink);
        }
        if matches!(self.phase, Phase::Scanning | Phase::Encoding) {
            return Ok(ScanToken(sess.token));
        }
        self.token_seq += 1;
        sess.token = self.token_seq;
        self.phase = Phase::Scanning;
        Ok(ScanToken(sess.token))
    }

    /// A tag showed up. The first detection for the active token drives the
    /// write; anything else (stale token, not Scanning) is ignored until
    /// the session resets. On write success the artwork flips to Verified
    /// through the store; on failure the session is retained so `begin_scan`
    /// can retry with the link already in hand.
    pub fn tag_detected(
        &mut self,
        token: ScanToken,
        tag: &TagHandle,
        store: &mut ArtworkStore,
    ) -> &Phase {
        let (artwork_id, link) = match &self.session {
            Some(s) if s.token == token.0 && self.phase == Phase::Scanning => {
                match &s.resolved_link {
                    Some(link) => (s.artwork_id.clone(), link.clone()),
                    None => return &self.phase,
                }
            }
            _ => return &self.phase,
        };

        self.phase = Phase::Encoding;
        self.phase = match self.device.write_link(tag, &link) {
            Ok(()) => {
                // By-id update: if a reload replaced the collection since
                // selection, the status lands nowhere rather than on some
                // other record.
                let _ = store.update_status(&artwork_id, ArtworkStatus::Verified);
                Phase::Success
            }
            Err(e) => Phase::Error(PairError::Write(e)),
        };
        &self.phase
    }

    /// Back to Idle, discarding the session (navigating back, or done).
    pub fn reset_session(&mut self) {
        self.token_seq += 1;
        self.session = None;
        self.phase = Phase::Idle;
    }
}
