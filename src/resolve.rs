// src/resolve.rs
//
// Detail-page link resolution: given an artwork id, fetch its detail markup
// and pull the canonical registry link out of the certificate region.

use thiserror::Error;

use crate::config::markers::MarkerSet;
use crate::core::html;
use crate::fetch::{FetchError, MarkupSource};

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    /// Transient: the fetch collaborator failed. Retry the resolve.
    #[error("detail fetch failed: {0}")]
    FetchFailed(#[from] FetchError),
    /// The region or link is absent — likely an upstream markup change.
    /// Surfaced as "details unavailable".
    #[error("canonical link not found in detail markup")]
    LinkNotFound,
}

pub fn resolve(
    source: &dyn MarkupSource,
    markers: &MarkerSet,
    artwork_id: &str,
) -> Result<String, ResolveError> {
    let doc = source.detail_markup(artwork_id)?;
    extract_link(&doc, markers).ok_or(ResolveError::LinkNotFound)
}

/// First href with the canonical prefix, at or after the certificate
/// region marker. Pure; split out so drift tests need no fetcher.
pub fn extract_link(doc: &str, markers: &MarkerSet) -> Option<String> {
    let lc = html::to_lower(doc);
    let mut pos = lc.find(&html::to_lower(markers.detail_region))?;

    loop {
        let a = lc[pos..].find("<a")? + pos;
        let open_end = doc[a..].find('>')? + a + 1;
        if let Some(href) = html::attr_value_ci(&doc[a..open_end], "href") {
            if href.starts_with(markers.link_prefix) {
                return Some(href);
            }
        }
        pos = open_end;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail(region: &str, href: &str) -> String {
        format!(
            r#"<html><body><div class="{}"><a class="ver-btn" href="{}">View certificate</a></div></body></html>"#,
            region, href
        )
    }

    #[test]
    fn extract_link_finds_canonical_href() {
        let m = MarkerSet::upstream();
        let doc = detail(m.detail_region, "https://verisart.com/works/abc123");
        assert_eq!(
            extract_link(&doc, &m).as_deref(),
            Some("https://verisart.com/works/abc123")
        );
    }

    #[test]
    fn extract_link_skips_foreign_hrefs() {
        let m = MarkerSet::upstream();
        let doc = format!(
            r#"<div class="{}"><a href="https://example.com/x">x</a><a href="https://verisart.com/works/ok">ok</a></div>"#,
            m.detail_region
        );
        assert_eq!(extract_link(&doc, &m).as_deref(), Some("https://verisart.com/works/ok"));
    }

    #[test]
    fn extract_link_none_without_region() {
        let m = MarkerSet::upstream();
        let doc = r#"<a href="https://verisart.com/works/loose">loose</a>"#;
        assert_eq!(extract_link(doc, &m), None);
    }
}
