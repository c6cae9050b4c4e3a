// src/gui/components/header_bar.rs
//
// Top strip: back arrow (authentication view), heading, reload, spinner,
// status line, plus the dismissible error banner underneath.

use eframe::egui::{self, widgets::Spinner};

use crate::{
    config::state::View,
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut go_back = false;
    let mut reload = false;
    let mut dismiss = false;

    ui.horizontal(|ui| {
        if app.state.gui.view == View::Authentication {
            if ui.button("⬅").on_hover_text("Back to dashboard").clicked() {
                go_back = true;
            }
        }

        ui.heading(match app.state.gui.view {
            View::Dashboard => "Artwork Dashboard",
            View::Authentication => "Tag Authentication",
        });

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let reload_btn = ui.add_enabled(!app.running, egui::Button::new("Reload"));
            if reload_btn.clicked() {
                reload = true;
            }

            if app.running || app.resolving {
                ui.add(Spinner::new().size(14.0));
            }

            let status = app.status.lock().unwrap().clone();
            ui.label(status);
        });
    });

    if let Some(banner) = app.banner.clone() {
        ui.horizontal(|ui| {
            ui.colored_label(egui::Color32::from_rgb(0xDC, 0x61, 0x49), banner);
            if ui.small_button("Dismiss").clicked() {
                dismiss = true;
            }
        });
    }

    ui.add_space(4.0);

    // Handle clicks after the borrows above end
    if go_back {
        actions::pair::back_to_dashboard(app);
    }
    if reload {
        actions::load(app);
    }
    if dismiss {
        app.banner = None;
    }
}
