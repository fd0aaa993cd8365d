use banking::{JointAccountField, JointAccountStep};

use crate::session::{AppAction, SessionState};

const TERMS_TEXT: &str = "Both holders have equal access to the account and are jointly responsible \
for every transaction and any overdrawn balance. Either holder may deposit, withdraw or close the \
account. Statements are sent to both holders.";

pub fn render(ui: &mut egui::Ui, state: &SessionState, actions: &mut Vec<AppAction>) {
    let Some(flow) = &state.joint_account else {
        return;
    };

    ui.vertical_centered(|ui| {
        ui.heading("Create a Joint Account");
        ui.label("Seamlessly set up a shared account with another person. Follow the steps below.");
    });
    ui.add_space(12.0);

    ui.group(|ui| {
        ui.set_max_width(520.0);
        let step = flow.current();
        ui.label(egui::RichText::new(step.title).size(20.0).strong());
        ui.label(step.description);
        ui.add(
            egui::ProgressBar::new(flow.progress())
                .text(format!("Step {} of {}", flow.ordinal(), flow.total_steps())),
        );
        ui.add_space(12.0);

        match step.step {
            JointAccountStep::InviteCoholder => {
                ui.label("Co-holder's Email");
                let mut email = flow.fields().coholder_email.clone();
                let input = egui::TextEdit::singleline(&mut email).hint_text("name@example.com");
                if ui.add(input).changed() {
                    actions.push(AppAction::SetJointAccountField(JointAccountField::CoholderEmail(email)));
                }
            }
            JointAccountStep::Verification => {
                ui.label(egui::RichText::new("🛡 Identity Verification").strong());
                ui.label("To ensure security, please complete the verification step.");
                // Verification is simulated; the button confirms it like Next.
                if ui.button("Verify My Identity").clicked() {
                    actions.push(AppAction::JointAccountNext);
                }
            }
            JointAccountStep::AwaitingCoholder => {
                ui.label(egui::RichText::new("⏳ Pending Co-holder").strong());
                ui.label("We've notified your co-holder. We'll let you know once they've completed their part.");
                ui.small("Continue once the co-holder has accepted.");
            }
            JointAccountStep::FinalizeTerms => {
                ui.label("Terms and Conditions");
                egui::ScrollArea::vertical().max_height(120.0).show(ui, |ui| {
                    ui.small(TERMS_TEXT);
                });
                let mut agreed = flow.fields().terms_agreed;
                if ui
                    .checkbox(&mut agreed, "I agree to the terms and conditions for the joint account.")
                    .changed()
                {
                    actions.push(AppAction::SetJointAccountField(JointAccountField::TermsAgreed(agreed)));
                }
            }
        }

        ui.add_space(12.0);
        ui.horizontal(|ui| {
            if ui.add_enabled(flow.can_retreat(), egui::Button::new("Back")).clicked() {
                actions.push(AppAction::JointAccountBack);
            }
            let label = if flow.is_terminal() { "Complete Setup" } else { "Next" };
            if ui.add_enabled(!flow.is_completed(), egui::Button::new(label)).clicked() {
                actions.push(AppAction::JointAccountNext);
            }
        });
    });
}
