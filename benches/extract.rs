// benches/extract.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use veripanel::config::markers::MarkerSet;
use veripanel::config::options::ExtractOptions;
use veripanel::extract::extract;
use veripanel::resolve::extract_link;

fn synthetic_dashboard(cards: usize) -> String {
    let mut doc = String::with_capacity(cards * 400);
    doc.push_str(r#"<html><body><div class="Dashboard_DashboardWrapper__Fcs2I">"#);
    for i in 0..cards {
        doc.push_str(&format!(
            concat!(
                r#"<article class="ver-card" data-test="previewCard">"#,
                r#"<div class="ver-min-h-64"><img src="https://cdn/img-{i}.jpg" alt=""></div>"#,
                r#"<div><p class="ver-truncate">Composition No. {i}</p></div>"#,
                r#"<h2 class="ver-font-bold">Artist {a}</h2>"#,
                r#"<p class="ver-inline">{y},</p>"#,
                r#"</article>"#
            ),
            i = i,
            a = i % 7,
            y = 1990 + (i % 30),
        ));
    }
    doc.push_str("</div></body></html>");
    doc
}

fn bench_extract(c: &mut Criterion) {
    let doc = synthetic_dashboard(120);
    let opts = ExtractOptions::default();
    let markers = MarkerSet::upstream();

    c.bench_function("extract_120_cards", |b| {
        b.iter(|| {
            let rows = extract(black_box(&doc), &opts, &markers).unwrap();
            black_box(rows.len())
        })
    });

    let detail = format!(
        r#"<html><body><div class="{}"><a href="https://verisart.com/works/abc123">certificate</a></div></body></html>"#,
        markers.detail_region
    );
    c.bench_function("extract_link", |b| {
        b.iter(|| black_box(extract_link(black_box(&detail), &markers)))
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
