// src/extract.rs
//
// Markup → artwork records. Pure: raw text in, parsed records or a typed
// failure out. No I/O, no logging; diagnostics go through the optional
// trace callback and nowhere else.

use std::collections::HashSet;

use thiserror::Error;

use crate::config::consts::{UNKNOWN_ARTIST, UNTITLED};
use crate::config::markers::MarkerSet;
use crate::config::options::{ExtractOptions, IdMode, InclusionMode};
use crate::core::html::{
    self, attr_value_ci, inner_after_open_tag, next_block_with_marker_ci, strip_tags,
};
use crate::core::sanitize::{normalize_entities, normalize_year, slug_id};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArtworkStatus {
    Unverified,
    Verified,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArtworkRecord {
    pub id: String,
    pub title: String,
    pub artist: String,
    /// Opaque display text, trailing comma already stripped. May be empty.
    pub year: String,
    /// Empty when the card has no image.
    pub image_url: String,
    pub status: ArtworkStatus,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    /// The dashboard container marker is missing: we got the logged-out
    /// render. Callers surface this as a "log in upstream" prompt, not as
    /// a generic error.
    #[error("not authenticated: dashboard container missing from markup")]
    NotAuthenticated,
    /// Container present, zero preview cards. Informational, not a banner.
    #[error("no artworks found on the dashboard")]
    NoItemsFound,
}

pub fn extract(
    doc: &str,
    opts: &ExtractOptions,
    markers: &MarkerSet,
) -> Result<Vec<ArtworkRecord>, ExtractError> {
    extract_traced(doc, opts, markers, None)
}

/// Same contract as [`extract`], with an injected diagnostic side channel.
pub fn extract_traced(
    doc: &str,
    opts: &ExtractOptions,
    markers: &MarkerSet,
    mut trace: Option<&mut dyn FnMut(&str)>,
) -> Result<Vec<ArtworkRecord>, ExtractError> {
    let lc = html::to_lower(doc);
    let container = lc
        .find(&html::to_lower(markers.dashboard_container))
        .ok_or(ExtractError::NotAuthenticated)?;

    // Cards only ever live inside the wrapper; scanning from its open tag
    // to the end of the document is scope enough without tracking the
    // wrapper's own close tag through nested divs.
    let scope = &doc[container..];

    let lenient = opts.inclusion == InclusionMode::Lenient;
    let mut out: Vec<ArtworkRecord> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    let mut cards_seen = 0usize;

    let mut pos = 0usize;
    while let Some((cs, ce)) = next_block_with_marker_ci(scope, markers.card_tag, markers.card_marker, pos)
    {
        let card = &scope[cs..ce];
        pos = ce;
        cards_seen += 1;

        let title = text_field(card, markers.title_tag, markers.title_marker);
        let artist = text_field(card, markers.artist_tag, markers.artist_marker);
        let year = text_field(card, markers.year_tag, markers.year_marker)
            .map(|y| normalize_year(&y))
            .unwrap_or_default();
        let image_url = image_url(card, markers).unwrap_or_default();

        // Inclusion bar: title required; lenient mode also takes
        // artist-only cards. Cards with neither are dropped.
        let include = title.is_some() || (lenient && artist.is_some());
        if !include {
            note(&mut trace, &format!("card {} dropped: no title", cards_seen));
            continue;
        }
        let title = title.unwrap_or_else(|| s!(UNTITLED));
        let artist = artist.unwrap_or_else(|| s!(UNKNOWN_ARTIST));

        let index = out.len();
        let mut id = derive_id(&title, &year, index, opts.id_mode);
        while !seen.insert(id.clone()) {
            // Collision: disambiguate the later item by position. Never
            // drop a card over an id clash.
            note(&mut trace, &format!("id collision on {:?}", id));
            id = format!("{}-{}", id, index);
        }

        out.push(ArtworkRecord {
            id,
            title,
            artist,
            year,
            image_url,
            status: ArtworkStatus::Unverified,
        });
    }

    if cards_seen == 0 {
        return Err(ExtractError::NoItemsFound);
    }
    note(&mut trace, &format!("{} of {} cards kept", out.len(), cards_seen));
    Ok(out)
}

/// `slug(title-year)`, falling back to the discovery index when the card
/// has no year or discovery-id mode is on.
fn derive_id(title: &str, year: &str, index: usize, mode: IdMode) -> String {
    match mode {
        IdMode::TitleYear if !year.is_empty() => slug_id(&format!("{}-{}", title, year)),
        _ => slug_id(&format!("{}-{}", title, index)),
    }
}

/// First `tag` block in the card whose open tag carries `marker`, reduced
/// to clean text. Empty text counts as absent.
fn text_field(card: &str, tag: &str, marker: &str) -> Option<String> {
    let (s, e) = next_block_with_marker_ci(card, tag, marker, 0)?;
    let text = strip_tags(normalize_entities(&inner_after_open_tag(&card[s..e])));
    if text.is_empty() { None } else { Some(text) }
}

/// src of the first <img> after the image-wrapper marker.
fn image_url(card: &str, markers: &MarkerSet) -> Option<String> {
    let lc = html::to_lower(card);
    let at = lc.find(&html::to_lower(markers.image_marker))?;
    let img = lc[at..].find("<img")? + at;
    let open_end = card[img..].find('>')? + img + 1;
    attr_value_ci(&card[img..open_end], "src")
}

fn note(trace: &mut Option<&mut dyn FnMut(&str)>, msg: &str) {
    if let Some(t) = trace.as_deref_mut() {
        t(msg);
    }
}
