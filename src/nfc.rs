// src/nfc.rs
//
// Proximity-tag hardware seam. The panel only ever needs two things from a
// tag stack: "does this host have one" and "write a single link record".
// Detection events are delivered to the pairing controller by whoever owns
// the event loop (GUI thread here), not polled from this trait.

use thiserror::Error;

/// Handle to a tag currently in the field, as reported by a detection event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagHandle {
    pub uid: String,
}

impl TagHandle {
    pub fn new(uid: impl Into<String>) -> Self {
        Self { uid: uid.into() }
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum WriteError {
    #[error("tag left the field during write")]
    TagLost,
    #[error("tag rejected the payload: {0}")]
    Rejected(String),
}

pub trait TagDevice {
    /// False when the platform offers no tag I/O at all.
    fn is_supported(&self) -> bool;

    /// Write one link-type record to the tag.
    fn write_link(&mut self, tag: &TagHandle, url: &str) -> Result<(), WriteError>;
}

/// Host without any tag stack. `is_supported` gates before scanning ever
/// starts, so `write_link` is unreachable in practice.
pub struct NoDevice;

impl TagDevice for NoDevice {
    fn is_supported(&self) -> bool {
        false
    }

    fn write_link(&mut self, _tag: &TagHandle, _url: &str) -> Result<(), WriteError> {
        Err(WriteError::TagLost)
    }
}

/// In-process stand-in for a real tag stack: always supported, records
/// every write, and can be armed to fail the next one. Drives the GUI's
/// simulated tap and the pairing tests.
#[derive(Default)]
pub struct SimDevice {
    pub written: Vec<(String, String)>,
    pub fail_next: Option<WriteError>,
}

impl SimDevice {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TagDevice for SimDevice {
    fn is_supported(&self) -> bool {
        true
    }

    fn write_link(&mut self, tag: &TagHandle, url: &str) -> Result<(), WriteError> {
        if let Some(e) = self.fail_next.take() {
            return Err(e);
        }
        self.written.push((tag.uid.clone(), s!(url)));
        Ok(())
    }
}
