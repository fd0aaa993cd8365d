use banking::Route;

use super::widgets;
use crate::session::{AppAction, SessionState};

pub fn render(ui: &mut egui::Ui, state: &SessionState, actions: &mut Vec<AppAction>) {
    ui.heading("Account Summaries");
    ui.add_space(8.0);
    ui.horizontal_wrapped(|ui| {
        for account in &state.dashboard_accounts {
            widgets::account_summary_card(ui, account, actions);
        }
    });

    ui.add_space(16.0);
    ui.group(|ui| {
        ui.label(egui::RichText::new("Quick Actions").size(18.0).strong());
        ui.horizontal_wrapped(|ui| {
            if ui.button("📤 Transfer Funds").clicked() {
                actions.push(AppAction::Navigate(Route::Payments));
            }
            if ui.button("💳 Pay Bills").clicked() {
                actions.push(AppAction::Navigate(Route::Payments));
            }
            if ui.button("Open Joint Account →").clicked() {
                actions.push(AppAction::Navigate(Route::JointAccountCreation));
            }
        });
    });

    ui.add_space(16.0);
    ui.group(|ui| {
        ui.label(egui::RichText::new(&state.overview.title).size(18.0).strong());
        ui.label(&state.overview.description);
        ui.add_space(8.0);
        widgets::overview_chart(ui, state.chart.as_ref());
    });
}
