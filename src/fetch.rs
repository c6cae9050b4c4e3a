// src/fetch.rs
//
// The markup fetch collaborator. Everything downstream treats it as a
// black box returning raw markup text or a typed transport failure; the
// session cookie side of upstream auth is the embedding browser's problem,
// not ours (we only classify the markup we get back).

use thiserror::Error;

use crate::core::net;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("transport: {0}")]
    Transport(String),
    #[error("upstream returned {0}")]
    Status(String),
}

impl FetchError {
    pub fn transport(e: impl std::fmt::Display) -> Self {
        Self::Transport(e.to_string())
    }
}

/// Source of rendered markup: the dashboard itself, or one artwork's
/// detail page.
pub trait MarkupSource: Send + Sync {
    fn dashboard_markup(&self) -> Result<String, FetchError>;
    fn detail_markup(&self, work_id: &str) -> Result<String, FetchError>;
}

/// Live upstream over plain HTTP (see core/net.rs).
pub struct HttpSource;

impl MarkupSource for HttpSource {
    fn dashboard_markup(&self) -> Result<String, FetchError> {
        net::http_get("")
    }

    fn detail_markup(&self, work_id: &str) -> Result<String, FetchError> {
        net::http_get(&format!("works/{}", work_id))
    }
}
