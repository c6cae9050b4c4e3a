// src/config/markers.rs
//
// Every structural marker we look for in the upstream markup lives here.
// The class names are a brittle contract owned by a third party; when the
// site ships a new build, this is the one file to touch.

/// The active set of upstream structural markers.
///
/// Markers are matched as case-insensitive substrings of an element's open
/// tag, so hashed class suffixes ("Dashboard_DashboardWrapper__Fcs2I") keep
/// matching across upstream rebuilds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarkerSet {
    /// Present only in the authenticated render of the dashboard.
    pub dashboard_container: &'static str,
    /// One artwork entry ("preview card").
    pub card_tag: &'static str,
    pub card_marker: &'static str,
    /// Per-card field markers.
    pub title_tag: &'static str,
    pub title_marker: &'static str,
    pub artist_tag: &'static str,
    pub artist_marker: &'static str,
    pub year_tag: &'static str,
    pub year_marker: &'static str,
    /// Wrapper around the card's image; the first <img> inside it counts.
    pub image_marker: &'static str,
    /// Region of the artwork detail page holding the certificate link.
    pub detail_region: &'static str,
    /// Canonical external link prefix on the detail page.
    pub link_prefix: &'static str,
}

impl MarkerSet {
    /// Marker set for the current upstream build.
    pub const fn upstream() -> Self {
        Self {
            dashboard_container: "Dashboard_DashboardWrapper",
            card_tag: "article",
            card_marker: r#"data-test="previewCard""#,
            title_tag: "p",
            title_marker: "ver-truncate",
            artist_tag: "h2",
            artist_marker: "ver-font-bold",
            year_tag: "p",
            year_marker: "ver-inline",
            image_marker: "ver-min-h-64",
            detail_region: "WorkDetail_CertificateWrapper",
            link_prefix: "https://verisart.com/works/",
        }
    }
}

impl Default for MarkerSet {
    fn default() -> Self {
        Self::upstream()
    }
}
