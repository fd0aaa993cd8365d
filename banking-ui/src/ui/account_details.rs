use banking::util::format::format_currency;
use banking::Route;

use super::widgets;
use crate::session::{AppAction, SessionState};

pub fn render(ui: &mut egui::Ui, state: &SessionState, actions: &mut Vec<AppAction>) {
    let Some(view) = &state.account_view else {
        ui.label("Account not found.");
        return;
    };
    let account = &view.account;

    ui.horizontal(|ui| {
        if ui.link("Dashboard").clicked() {
            actions.push(AppAction::Navigate(Route::Dashboard));
        }
        ui.label("›");
        ui.label(format!("{} Details", account.name));
    });
    ui.add_space(8.0);

    ui.group(|ui| {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.heading(&account.name);
                ui.small(format!("Account ID: {}", account.id));
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.vertical(|ui| {
                    ui.label(
                        egui::RichText::new(format_currency(account.balance, &account.currency))
                            .size(26.0)
                            .strong(),
                    );
                    ui.small("Current Balance");
                });
            });
        });
    });

    ui.add_space(12.0);
    ui.group(|ui| {
        ui.label(egui::RichText::new("Transaction History").size(18.0).strong());

        let mut term = view.search_term.clone();
        let search = egui::TextEdit::singleline(&mut term).hint_text("Search transactions...");
        if ui.add(search).changed() {
            actions.push(AppAction::SearchTransactions(term));
        }
        ui.add_space(6.0);

        egui::ScrollArea::vertical().max_height(400.0).show(ui, |ui| {
            if view.visible.is_empty() {
                ui.label("No transactions found.");
            }
            for tx in &view.visible {
                widgets::transaction_row(ui, tx);
            }
        });
    });
}
