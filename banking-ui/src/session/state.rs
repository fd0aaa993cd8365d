use banking::data::{AccountSummary, FinancialOverview, FundingSource, Transaction};
use banking::ledger::{self, ChartFrame};
use banking::settings::SettingsForm;
use banking::{
    FlowController, JointAccountFlow, Notification, PaymentFlow, PaymentSubmission, RedirectTimer, Route,
    ValidationError,
};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub notification: Notification,
    pub shown_at: Duration,
}

/// Account details screen: one account plus its filtered ledger.
#[derive(Debug, Clone)]
pub struct AccountView {
    pub account: AccountSummary,
    pub transactions: Vec<Transaction>,
    pub search_term: String,
    pub visible: Vec<Transaction>,
}

impl AccountView {
    pub fn new(account: AccountSummary, transactions: Vec<Transaction>) -> Self {
        Self {
            account,
            visible: transactions.clone(),
            transactions,
            search_term: String::new(),
        }
    }

    pub fn set_search(&mut self, term: String) {
        self.visible = ledger::search(&self.transactions, &term);
        self.search_term = term;
    }
}

/// Payment screen. The form flow is replaced by the processing view once
/// the payment has been handed over.
#[derive(Debug, Default)]
pub struct PaymentScreen {
    pub flow: Option<FlowController<PaymentFlow>>,
    pub issues: Option<ValidationError>,
    pub processing: Option<PaymentSubmission>,
}

impl PaymentScreen {
    pub fn is_reviewing(&self) -> bool {
        self.flow.as_ref().map_or(false, |f| f.current_step() == banking::PaymentStep::Review)
    }

    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.issues.as_ref().and_then(|issues| issues.message_for(field))
    }
}

/// Everything the screens render from. Only the session manager mutates it.
#[derive(Debug)]
pub struct SessionState {
    pub route: Route,
    pub now: Duration,

    // Dashboard
    pub dashboard_accounts: Vec<AccountSummary>,
    pub overview: FinancialOverview,
    pub chart: Option<ChartFrame>,

    // Account details; `None` when no account resolves
    pub account_view: Option<AccountView>,

    // Flows, mounted while their route is shown
    pub joint_account: Option<FlowController<JointAccountFlow>>,
    pub payment: PaymentScreen,
    pub funding_sources: Vec<FundingSource>,

    pub settings: SettingsForm,

    pub toasts: Vec<Toast>,
    pub redirect: RedirectTimer,
}

impl SessionState {
    pub fn push_toast(&mut self, notification: Notification) {
        self.toasts.push(Toast { notification, shown_at: self.now });
    }

    pub fn expire_toasts(&mut self, ttl: Duration) {
        let now = self.now;
        self.toasts.retain(|toast| now.saturating_sub(toast.shown_at) < ttl);
    }

    pub fn has_errors(&self) -> bool {
        self.toasts.iter().any(|toast| toast.notification.is_error())
    }

    pub fn redirect_pending(&self) -> bool {
        self.redirect.pending().is_some()
    }
}
