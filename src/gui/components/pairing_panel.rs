// src/gui/components/pairing_panel.rs
//
// Authentication view: selected artwork, pairing phase, and the controls
// that drive the state machine.

use eframe::egui::{self, RichText, widgets::Spinner};

use crate::{
    gui::{actions, app::App},
    pairing::Phase,
};

enum Act {
    Pair,
    Tap,
    Reset,
    Retry,
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(session) = app.pairing.session().cloned() else {
        ui.label("No artwork selected.");
        return;
    };
    let record = app.selected_record().cloned();
    let phase = app.pairing.phase().clone();
    let link_ready = app.pairing.link_ready();

    let mut act: Option<Act> = None;

    match &record {
        Some(r) => {
            ui.label(RichText::new(&r.title).strong().size(18.0));
            ui.label(format!("{}, {}", r.artist, r.year));
        }
        None => {
            // reload replaced the collection underneath the session
            ui.label(RichText::new(format!("Artwork {} is no longer listed.", session.artwork_id)));
        }
    }
    ui.add_space(8.0);

    match &phase {
        Phase::Idle => {
            if app.resolving {
                ui.horizontal(|ui| {
                    ui.add(Spinner::new().size(14.0));
                    ui.label("Resolving certificate link…");
                });
            } else if link_ready {
                ui.label("Link ready. Pair a tag to authenticate this artwork.");
            } else {
                ui.horizontal(|ui| {
                    ui.label("Certificate link unavailable.");
                    if ui.small_button("Retry resolve").clicked() {
                        act = Some(Act::Retry);
                    }
                });
            }
        }
        Phase::Scanning => {
            ui.horizontal(|ui| {
                ui.add(Spinner::new().size(14.0));
                ui.label("Scanning — hold a tag near the reader…");
            });
        }
        Phase::Encoding => {
            ui.horizontal(|ui| {
                ui.add(Spinner::new().size(14.0));
                ui.label("Writing link to tag…");
            });
        }
        Phase::Success => {
            ui.colored_label(
                egui::Color32::from_rgb(0x16, 0xA3, 0x4A),
                "✔ Tag successfully paired with certificate",
            );
        }
        Phase::Error(e) => {
            ui.colored_label(
                egui::Color32::from_rgb(0xDC, 0x61, 0x49),
                format!("Pairing failed: {}", e),
            );
        }
    }

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        match &phase {
            Phase::Idle | Phase::Error(_) => {
                let enabled = link_ready && !app.resolving;
                if ui
                    .add_enabled(enabled, egui::Button::new("Pair Tag"))
                    .clicked()
                {
                    act = Some(Act::Pair);
                }
            }
            Phase::Scanning => {
                // SimDevice stands in for a hardware bridge; a real tap
                // would arrive as a detection event instead.
                if ui.button("Present tag (simulated)").clicked() {
                    act = Some(Act::Tap);
                }
            }
            _ => {}
        }

        if matches!(phase, Phase::Error(_) | Phase::Success) {
            if ui.button("Reset").clicked() {
                act = Some(Act::Reset);
            }
        }
    });

    match act {
        Some(Act::Pair) => actions::pair::begin_scan(app),
        Some(Act::Tap) => actions::pair::simulate_tap(app),
        Some(Act::Reset) => actions::pair::reset(app),
        Some(Act::Retry) => actions::select::resolve_link(app),
        None => {}
    }
}
