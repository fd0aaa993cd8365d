use banking::flow::payment::display_date;
use banking::util::format::format_currency;
use banking::{PaymentField, PaymentFlow, PaymentStep};

use super::widgets;
use crate::session::{AppAction, PaymentScreen, SessionState};

// The processing view counts as a third stage on the progress bar.
const STAGES: f32 = 3.0;

pub fn render(ui: &mut egui::Ui, state: &SessionState, actions: &mut Vec<AppAction>) {
    let payment = &state.payment;

    ui.group(|ui| {
        ui.set_max_width(640.0);
        ui.label(egui::RichText::new("Initiate Payment").size(22.0).strong());

        if let Some(submission) = &payment.processing {
            ui.label(PaymentFlow::PROCESSING_DESCRIPTION);
            ui.add(egui::ProgressBar::new(1.0));
            ui.add_space(24.0);
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new("✔").size(48.0).color(widgets::CREDIT));
                ui.label(egui::RichText::new("Payment Processing").size(18.0).strong());
                ui.label("Your payment has been submitted successfully and is now processing.");
                ui.small(format!("Reference {}", submission.reference));
            });
            return;
        }

        let Some(flow) = &payment.flow else {
            return;
        };
        ui.label(flow.current().description);
        ui.add(egui::ProgressBar::new(flow.ordinal() as f32 / STAGES));
        ui.add_space(12.0);

        details_form(ui, state, payment, actions);
    });

    if payment.is_reviewing() {
        review_dialog(ui.ctx(), state, actions);
    }
}

fn details_form(ui: &mut egui::Ui, state: &SessionState, payment: &PaymentScreen, actions: &mut Vec<AppAction>) {
    let Some(flow) = &payment.flow else {
        return;
    };
    let fields = flow.fields();

    ui.add_enabled_ui(!payment.is_reviewing(), |ui| {
        ui.label("Source Account");
        let selected = state
            .funding_sources
            .iter()
            .find(|s| s.id == fields.source_account)
            .map(|s| s.label.clone())
            .unwrap_or_else(|| "Select account".to_string());
        egui::ComboBox::new("source_account", "")
            .selected_text(selected)
            .show_ui(ui, |ui| {
                for source in &state.funding_sources {
                    let text = format!(
                        "{} ({})",
                        source.short_label(),
                        format_currency(source.balance, &source.currency)
                    );
                    if ui.selectable_label(source.id == fields.source_account, text).clicked() {
                        actions.push(AppAction::SetPaymentField(PaymentField::SourceAccount(source.id.clone())));
                    }
                }
            });
        widgets::field_error(ui, payment.message_for("sourceAccount"));
        ui.add_space(6.0);

        let inputs: [(&str, &str, &str, &str, fn(String) -> PaymentField); 5] = [
            ("Recipient Name", fields.recipient_name.as_str(), "John Doe", "recipientName", PaymentField::RecipientName),
            (
                "Recipient Account Number",
                fields.recipient_account.as_str(),
                "000-123-456",
                "recipientAccount",
                PaymentField::RecipientAccount,
            ),
            ("Amount (USD)", fields.amount.as_str(), "0.00", "amount", PaymentField::Amount),
            ("Payment Date", fields.payment_date.as_str(), "YYYY-MM-DD", "paymentDate", PaymentField::PaymentDate),
            ("Notes (Optional)", fields.notes.as_str(), "E.g., Rent for July", "notes", PaymentField::Notes),
        ];
        for (label, value, hint, key, wrap) in inputs {
            if let Some(text) = text_input(ui, label, value, hint, payment.message_for(key)) {
                actions.push(AppAction::SetPaymentField(wrap(text)));
            }
        }

        if ui.button("Review Payment").clicked() {
            actions.push(AppAction::ReviewPayment);
        }
    });
}

/// Labelled single-line input; returns the new text when it was edited.
fn text_input(ui: &mut egui::Ui, label: &str, value: &str, hint: &str, error: Option<&str>) -> Option<String> {
    ui.label(label);
    let mut text = value.to_string();
    let changed = ui.add(egui::TextEdit::singleline(&mut text).hint_text(hint)).changed();
    widgets::field_error(ui, error);
    ui.add_space(6.0);
    changed.then_some(text)
}

fn review_dialog(ctx: &egui::Context, state: &SessionState, actions: &mut Vec<AppAction>) {
    let Some(flow) = &state.payment.flow else {
        return;
    };
    debug_assert_eq!(flow.current_step(), PaymentStep::Review);
    // Review is only reachable once the form parsed.
    let Ok(instruction) = flow.fields().parse() else {
        return;
    };
    let source = state
        .funding_sources
        .iter()
        .find(|s| s.id == instruction.source_account)
        .map(|s| s.short_label())
        .unwrap_or_else(|| instruction.source_account.clone());

    egui::Window::new(flow.current().title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.label("Please review the payment details below before confirming.");
            ui.add_space(8.0);
            egui::Grid::new("payment_review_grid")
                .num_columns(2)
                .spacing([10.0, 6.0])
                .show(ui, |ui| {
                    ui.strong("From:");
                    ui.label(source);
                    ui.end_row();

                    ui.strong("To:");
                    ui.label(format!("{} ({})", instruction.recipient_name, instruction.recipient_account));
                    ui.end_row();

                    ui.strong("Amount:");
                    ui.label(format!("{} USD", format_currency(instruction.amount, "USD")));
                    ui.end_row();

                    ui.strong("Date:");
                    ui.label(display_date(instruction.payment_date));
                    ui.end_row();

                    if let Some(notes) = &instruction.notes {
                        ui.strong("Notes:");
                        ui.label(notes);
                        ui.end_row();
                    }
                });
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Cancel").clicked() {
                    actions.push(AppAction::CancelPayment);
                }
                if ui.button("Confirm & Send").clicked() {
                    actions.push(AppAction::ConfirmPayment);
                }
            });
        });
}
