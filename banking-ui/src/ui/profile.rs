use banking::settings::{SettingsEdit, SettingsSection};

use crate::session::{AppAction, SessionState};

fn toggle(
    ui: &mut egui::Ui,
    actions: &mut Vec<AppAction>,
    label: &str,
    hint: Option<&str>,
    value: bool,
    edit: fn(bool) -> SettingsEdit,
) {
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.strong(label);
            if let Some(hint) = hint {
                ui.small(hint);
            }
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let mut on = value;
            if ui.checkbox(&mut on, "").changed() {
                actions.push(AppAction::EditSettings(edit(on)));
            }
        });
    });
    ui.separator();
}

fn save_button(ui: &mut egui::Ui, actions: &mut Vec<AppAction>, label: &str, section: SettingsSection, dirty: bool) {
    ui.horizontal(|ui| {
        if ui.button(label).clicked() {
            actions.push(AppAction::SaveSettings(section));
        }
        if dirty {
            ui.small("Unsaved changes");
        }
    });
}

pub fn render(ui: &mut egui::Ui, state: &SessionState, actions: &mut Vec<AppAction>) {
    let form = &state.settings;
    let draft = form.draft();

    ui.heading("Profile & Settings");
    ui.add_space(12.0);

    egui::CollapsingHeader::new("👤 Personal Information")
        .default_open(true)
        .show(ui, |ui| {
            egui::Grid::new("profile_grid")
                .num_columns(2)
                .spacing([10.0, 8.0])
                .show(ui, |ui| {
                    ui.label("Full Name");
                    let mut name = draft.profile.full_name.clone();
                    if ui.text_edit_singleline(&mut name).changed() {
                        actions.push(AppAction::EditSettings(SettingsEdit::FullName(name)));
                    }
                    ui.end_row();

                    ui.label("Email Address");
                    ui.add_enabled(false, egui::TextEdit::singleline(&mut draft.profile.email.as_str()));
                    ui.end_row();

                    ui.label("Phone Number");
                    let mut phone = draft.profile.phone_number.clone();
                    if ui.text_edit_singleline(&mut phone).changed() {
                        actions.push(AppAction::EditSettings(SettingsEdit::PhoneNumber(phone)));
                    }
                    ui.end_row();
                });
            save_button(
                ui,
                actions,
                "Save Changes",
                SettingsSection::Profile,
                form.is_dirty(SettingsSection::Profile),
            );
        });

    egui::CollapsingHeader::new("🛡 Security Settings").show(ui, |ui| {
        toggle(
            ui,
            actions,
            "Two-Factor Authentication",
            Some("Enhance your account security."),
            draft.security.two_factor_auth,
            SettingsEdit::TwoFactorAuth,
        );
        toggle(
            ui,
            actions,
            "Biometric Login",
            Some("Use fingerprint or face ID to log in."),
            draft.security.biometric_login,
            SettingsEdit::BiometricLogin,
        );
        save_button(
            ui,
            actions,
            "Save Security Settings",
            SettingsSection::Security,
            form.is_dirty(SettingsSection::Security),
        );
    });

    egui::CollapsingHeader::new("🔔 Notification Preferences").show(ui, |ui| {
        toggle(
            ui,
            actions,
            "Email & Push Notifications",
            None,
            draft.notifications.email_push,
            SettingsEdit::EmailPush,
        );
        toggle(
            ui,
            actions,
            "SMS Alerts for Transactions",
            None,
            draft.notifications.sms_alerts,
            SettingsEdit::SmsAlerts,
        );
        toggle(
            ui,
            actions,
            "Promotional Offers",
            None,
            draft.notifications.promotional_offers,
            SettingsEdit::PromotionalOffers,
        );
        save_button(
            ui,
            actions,
            "Save Notification Settings",
            SettingsSection::Notifications,
            form.is_dirty(SettingsSection::Notifications),
        );
    });

    egui::CollapsingHeader::new("❓ Support").show(ui, |ui| {
        ui.label("Need help? Contact our support team.");
    });
}
