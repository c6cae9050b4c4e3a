// tests/extract_drift.rs
//
// Extraction against upstream-shaped markup: authentication detection,
// empty dashboards, field defaults, id derivation and collisions.

use veripanel::config::markers::MarkerSet;
use veripanel::config::options::{ExtractOptions, IdMode, InclusionMode};
use veripanel::extract::{ArtworkStatus, ExtractError, extract};

fn card(
    title: Option<&str>,
    artist: Option<&str>,
    year: Option<&str>,
    img: Option<&str>,
) -> String {
    let mut s = String::from(r#"<article class="ver-card" data-test="previewCard">"#);
    if let Some(i) = img {
        s.push_str(&format!(
            r#"<div class="ver-min-h-64"><img src="{}" alt=""></div>"#,
            i
        ));
    }
    if let Some(t) = title {
        s.push_str(&format!(
            r#"<div class="ver-flex-row"><p class="ver-truncate">{}</p></div>"#,
            t
        ));
    }
    if let Some(a) = artist {
        s.push_str(&format!(
            r#"<h2 class="ver-text-base ver-font-bold"><span class="ver-truncate-not">{}</span></h2>"#,
            a
        ));
    }
    if let Some(y) = year {
        s.push_str(&format!(
            r#"<p class="ver-inline ver-flex-shrink-0">{}</p>"#,
            y
        ));
    }
    s.push_str("</article>");
    s
}

fn dashboard(cards: &[String]) -> String {
    format!(
        r#"<html><body><div id="app"><div class="Dashboard_DashboardWrapper__Fcs2I">{}</div></div></body></html>"#,
        cards.concat()
    )
}

fn opts() -> ExtractOptions {
    ExtractOptions::default()
}

fn markers() -> MarkerSet {
    MarkerSet::upstream()
}

#[test]
fn missing_container_is_not_authenticated() {
    let doc = r#"<html><body><main>Please sign in to continue</main></body></html>"#;
    assert_eq!(extract(doc, &opts(), &markers()), Err(ExtractError::NotAuthenticated));
}

#[test]
fn container_without_cards_is_no_items_found() {
    let doc = dashboard(&[]);
    assert_eq!(extract(&doc, &opts(), &markers()), Err(ExtractError::NoItemsFound));
}

#[test]
fn scenario_a_two_cards_years_normalized() {
    let doc = dashboard(&[
        card(Some("Sunset"), Some("Mara Ilic"), Some("2020,"), Some("https://cdn/x.jpg")),
        card(Some("Dawn"), Some("Mara Ilic"), Some("2019"), None),
    ]);
    let out = extract(&doc, &opts(), &markers()).unwrap();

    assert_eq!(out.len(), 2);
    assert_eq!(out[0].id, "sunset-2020");
    assert_eq!(out[0].year, "2020");
    assert_eq!(out[0].image_url, "https://cdn/x.jpg");
    assert_eq!(out[1].id, "dawn-2019");
    assert_eq!(out[1].year, "2019");
    assert_eq!(out[1].image_url, "");
    assert!(out.iter().all(|r| r.status == ArtworkStatus::Unverified));
}

#[test]
fn id_collision_keeps_both_in_source_order() {
    let doc = dashboard(&[
        card(Some("Dusk"), Some("First"), Some("2020"), None),
        card(Some("Dusk"), Some("Second"), Some("2020"), None),
    ]);
    let out = extract(&doc, &opts(), &markers()).unwrap();

    assert_eq!(out.len(), 2);
    assert_eq!(out[0].id, "dusk-2020");
    assert_eq!(out[1].id, "dusk-2020-1");
    assert_eq!(out[0].artist, "First");
    assert_eq!(out[1].artist, "Second");
}

#[test]
fn missing_year_falls_back_to_discovery_index() {
    let doc = dashboard(&[
        card(Some("Alpha"), Some("A"), Some("2001"), None),
        card(Some("Beta"), Some("B"), None, None),
    ]);
    let out = extract(&doc, &opts(), &markers()).unwrap();
    assert_eq!(out[0].id, "alpha-2001");
    assert_eq!(out[1].id, "beta-1");
    assert_eq!(out[1].year, "");
}

#[test]
fn discovery_id_mode_ignores_years() {
    let doc = dashboard(&[
        card(Some("Alpha"), Some("A"), Some("2001"), None),
        card(Some("Beta"), Some("B"), Some("2002"), None),
    ]);
    let o = ExtractOptions { id_mode: IdMode::Discovery, ..opts() };
    let out = extract(&doc, &o, &markers()).unwrap();
    assert_eq!(out[0].id, "alpha-0");
    assert_eq!(out[1].id, "beta-1");
}

#[test]
fn strict_mode_drops_titleless_cards() {
    let doc = dashboard(&[
        card(None, Some("Only Artist"), Some("1999"), None),
        card(Some("Kept"), None, None, None),
    ]);
    let out = extract(&doc, &opts(), &markers()).unwrap();

    assert_eq!(out.len(), 1);
    assert_eq!(out[0].title, "Kept");
    assert_eq!(out[0].artist, "Unknown Artist");
}

#[test]
fn lenient_mode_defaults_missing_title() {
    let doc = dashboard(&[card(None, Some("Only Artist"), Some("1999"), None)]);
    let o = ExtractOptions { inclusion: InclusionMode::Lenient, ..opts() };
    let out = extract(&doc, &o, &markers()).unwrap();

    assert_eq!(out.len(), 1);
    assert_eq!(out[0].title, "Untitled");
    assert_eq!(out[0].artist, "Only Artist");
}

#[test]
fn cards_missing_both_are_dropped_silently() {
    let doc = dashboard(&[
        card(None, None, Some("1999"), None),
        card(Some("Real"), Some("Artist"), None, None),
    ]);
    let o = ExtractOptions { inclusion: InclusionMode::Lenient, ..opts() };
    let out = extract(&doc, &o, &markers()).unwrap();
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].title, "Real");
}

#[test]
fn entities_and_nested_tags_in_fields_are_flattened() {
    let doc = dashboard(&[card(
        Some("Salt &amp; Light"),
        Some("O&#x27;Neill"),
        Some("2021,"),
        None,
    )]);
    let out = extract(&doc, &opts(), &markers()).unwrap();
    assert_eq!(out[0].title, "Salt & Light");
    assert_eq!(out[0].artist, "O'Neill");
    assert_eq!(out[0].id, "salt-light-2021");
}
