//! Render functions. Each screen reads `SessionState` and pushes
//! `AppAction`s; none of them mutate state directly.

pub mod account_details;
pub mod dashboard;
pub mod header;
pub mod joint_account;
pub mod payments;
pub mod profile;
pub mod widgets;

use banking::{Route, Variant};

use crate::session::{AppAction, SessionState};

pub fn render_screen(ui: &mut egui::Ui, state: &SessionState, actions: &mut Vec<AppAction>) {
    match &state.route {
        Route::Dashboard => dashboard::render(ui, state, actions),
        Route::AccountDetails(_) => account_details::render(ui, state, actions),
        Route::Payments => payments::render(ui, state, actions),
        Route::JointAccountCreation => joint_account::render(ui, state, actions),
        Route::ProfileSettings => profile::render(ui, state, actions),
        Route::NotFound(path) => not_found(ui, path, actions),
    }
}

fn not_found(ui: &mut egui::Ui, path: &str, actions: &mut Vec<AppAction>) {
    ui.vertical_centered(|ui| {
        ui.add_space(48.0);
        ui.heading("404");
        ui.label(format!("Oops! Page not found: {}", path));
        if ui.link("Return to Home").clicked() {
            actions.push(AppAction::Navigate(Route::Dashboard));
        }
    });
}

/// Stacked toasts in the bottom-right corner.
pub fn render_toasts(ctx: &egui::Context, state: &SessionState, actions: &mut Vec<AppAction>) {
    if state.toasts.is_empty() {
        return;
    }

    egui::Area::new(egui::Id::new("toasts"))
        .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -16.0))
        .show(ctx, |ui| {
            for (index, toast) in state.toasts.iter().enumerate() {
                let fill = match toast.notification.variant {
                    Variant::Destructive => egui::Color32::from_rgb(0x7f, 0x1d, 0x1d),
                    Variant::Default => ui.visuals().window_fill(),
                };
                egui::Frame::popup(ui.style()).fill(fill).show(ui, |ui| {
                    ui.set_width(320.0);
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.strong(&toast.notification.title);
                            ui.label(&toast.notification.description);
                        });
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                            if ui.small_button("✕").clicked() {
                                actions.push(AppAction::DismissToast { index });
                            }
                        });
                    });
                });
                ui.add_space(6.0);
            }
        });
}
