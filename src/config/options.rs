// src/config/options.rs
use super::markers::MarkerSet;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub extract: ExtractOptions,
    pub markers: MarkerSet,
}

/// Minimum bar for including a card in the extraction output.
///
/// Strict requires a title (the default; artist-only cards are dropped).
/// Lenient also accepts artist-only cards, with the title defaulted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum InclusionMode {
    #[default]
    Strict,
    Lenient,
}

/// How artwork ids are derived.
///
/// TitleYear concatenates title and year (stable across reloads when the
/// card carries a year). Discovery always uses the card's position in the
/// pass, matching the upstream embed's timestamp-based ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum IdMode {
    #[default]
    TitleYear,
    Discovery,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ExtractOptions {
    pub inclusion: InclusionMode,
    pub id_mode: IdMode,
}
