use banking::routes::NAV_ITEMS;
use banking::Route;

use crate::session::{AppAction, SessionState};

pub fn render(ui: &mut egui::Ui, app_name: &str, state: &SessionState, actions: &mut Vec<AppAction>) {
    ui.horizontal(|ui| {
        if ui.link(egui::RichText::new(format!("🏦 {}", app_name)).heading()).clicked() {
            actions.push(AppAction::Navigate(Route::Dashboard));
        }
        ui.separator();

        for (label, path) in NAV_ITEMS {
            let target = Route::parse(path);
            if ui.selectable_label(state.route.same_screen(&target), *label).clicked() {
                actions.push(AppAction::Navigate(target));
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("👤").on_hover_text("Profile").clicked() {
                actions.push(AppAction::Navigate(Route::ProfileSettings));
            }
        });
    });
}
