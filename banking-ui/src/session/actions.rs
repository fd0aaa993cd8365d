use banking::settings::{SettingsEdit, SettingsSection};
use banking::{JointAccountField, PaymentField, Route};

#[derive(Debug, Clone)]
pub enum AppAction {
    // Navigation
    Navigate(Route),

    // Account details
    SearchTransactions(String),

    // Joint account setup
    SetJointAccountField(JointAccountField),
    JointAccountNext,
    JointAccountBack,

    // Payments
    SetPaymentField(PaymentField),
    ReviewPayment,
    ConfirmPayment,
    CancelPayment,

    // Profile settings
    EditSettings(SettingsEdit),
    SaveSettings(SettingsSection),

    // Toasts
    DismissToast { index: usize },
}

impl AppAction {
    pub fn description(&self) -> &'static str {
        match self {
            AppAction::Navigate(_) => "Navigating",
            AppAction::SearchTransactions(_) => "Filtering transactions",
            AppAction::SetJointAccountField(_) => "Updating joint account form",
            AppAction::JointAccountNext => "Advancing joint account setup",
            AppAction::JointAccountBack => "Going back in joint account setup",
            AppAction::SetPaymentField(_) => "Updating payment form",
            AppAction::ReviewPayment => "Opening payment review",
            AppAction::ConfirmPayment => "Confirming payment",
            AppAction::CancelPayment => "Cancelling payment review",
            AppAction::EditSettings(_) => "Editing settings",
            AppAction::SaveSettings(_) => "Saving settings",
            AppAction::DismissToast { .. } => "Dismissing notification",
        }
    }

    /// Field edits happen on every keystroke and are logged at trace level.
    pub fn is_keystroke(&self) -> bool {
        matches!(
            self,
            AppAction::SearchTransactions(_)
                | AppAction::SetJointAccountField(_)
                | AppAction::SetPaymentField(_)
                | AppAction::EditSettings(_)
        )
    }
}
