// src/gui/components/artwork_grid.rs
//
// The dashboard table. Purely a view over ArtworkStore; the Authenticate
// button hands selection off to actions::select.

use eframe::egui::{self, RichText};
use egui_extras::{Column, TableBuilder};

use crate::{
    extract::{ArtworkRecord, ArtworkStatus},
    gui::{actions, app::App},
};

const VERIFIED_GREEN: egui::Color32 = egui::Color32::from_rgb(0x16, 0xA3, 0x4A);
const UNVERIFIED_ORANGE: egui::Color32 = egui::Color32::from_rgb(0xEA, 0x58, 0x0C);

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if app.store.is_empty() {
        ui.add_space(24.0);
        ui.vertical_centered(|ui| {
            ui.label(if app.running {
                "Loading artworks…"
            } else {
                "No artworks to show. Reload to fetch the dashboard."
            });
        });
        return;
    }

    // Owned snapshot for display; selection is applied after the table
    // borrows end.
    let records: Vec<ArtworkRecord> = app.store.all().to_vec();
    let mut clicked: Option<String> = None;

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::initial(240.0).at_least(120.0).clip(true)) // Title
        .column(Column::initial(180.0).at_least(100.0).clip(true)) // Artist
        .column(Column::initial(60.0)) // Year
        .column(Column::initial(90.0)) // Status
        .column(Column::remainder()) // action
        .header(24.0, |mut header| {
            for title in ["Title", "Artist", "Year", "Status", ""] {
                header.col(|ui| {
                    ui.label(RichText::new(title).strong());
                });
            }
        })
        .body(|body| {
            body.rows(24.0, records.len(), |mut row| {
                let r = &records[row.index()];

                row.col(|ui| {
                    let label = ui.label(&r.title);
                    if !r.image_url.is_empty() {
                        label.on_hover_text(&r.image_url);
                    }
                });
                row.col(|ui| {
                    ui.label(&r.artist);
                });
                row.col(|ui| {
                    ui.label(&r.year);
                });
                row.col(|ui| {
                    let (text, color) = match r.status {
                        ArtworkStatus::Verified => ("Verified", VERIFIED_GREEN),
                        ArtworkStatus::Unverified => ("Unverified", UNVERIFIED_ORANGE),
                    };
                    ui.colored_label(color, text);
                });
                row.col(|ui| {
                    let enabled = r.status == ArtworkStatus::Unverified;
                    if ui
                        .add_enabled(enabled, egui::Button::new("Authenticate"))
                        .clicked()
                    {
                        clicked = Some(r.id.clone());
                    }
                });
            });
        });

    if let Some(id) = clicked {
        actions::select::select(app, &id);
    }
}
