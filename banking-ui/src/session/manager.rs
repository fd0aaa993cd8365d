use std::collections::VecDeque;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::time::Duration;

use banking::ledger::ChartFrame;
use banking::settings::{SettingsEdit, SettingsForm, SettingsSection};
use banking::{
    Advance, BankData, Config, FlowController, JointAccountField, JointAccountFields, JointAccountFlow,
    Notification, PaymentField, PaymentFields, PaymentFlow, PaymentStep, Route, ValidationError,
};

use super::state::{AccountView, PaymentScreen, SessionState};
use super::AppAction;

/// Hand-off from a flow's completion callback to the manager.
#[derive(Debug)]
enum Completion {
    JointAccount(JointAccountFields),
    Payment(PaymentFields),
}

pub struct SessionManager {
    // Current state - single source of truth
    state: SessionState,

    bank: Arc<dyn BankData>,
    config: Config,

    // Action queue, drained once per frame
    pending_actions: VecDeque<AppAction>,

    completed_tx: Sender<Completion>,
    completed_rx: Receiver<Completion>,
}

impl SessionManager {
    pub fn new(bank: Arc<dyn BankData>, config: Config) -> Self {
        let overview = bank.overview();
        let state = SessionState {
            route: Route::Dashboard,
            now: Duration::ZERO,
            dashboard_accounts: bank.dashboard_accounts(),
            chart: ChartFrame::from_overview(&overview),
            overview,
            account_view: None,
            joint_account: None,
            payment: PaymentScreen::default(),
            funding_sources: bank.funding_sources(),
            settings: SettingsForm::new(bank.profile()),
            toasts: Vec::new(),
            redirect: Default::default(),
        };
        let (completed_tx, completed_rx) = mpsc::channel();

        Self {
            state,
            bank,
            config,
            pending_actions: VecDeque::new(),
            completed_tx,
            completed_rx,
        }
    }

    /// UI calls this - just queues the action
    pub fn dispatch(&mut self, action: AppAction) {
        if action.is_keystroke() {
            log::trace!("Dispatching action: {}", action.description());
        } else {
            log::debug!("Dispatching action: {}", action.description());
        }
        self.pending_actions.push_back(action);
    }

    /// Call this each frame with the app clock. Applies queued actions,
    /// fires a due redirect and drops expired toasts.
    pub fn update(&mut self, now: Duration) {
        self.state.now = now;

        while let Some(action) = self.pending_actions.pop_front() {
            self.handle_action(action);
            self.collect_completions();
        }

        if let Some(target) = self.state.redirect.poll(now) {
            self.handle_redirect(target);
        }

        self.state.expire_toasts(self.config.toast_ttl());
    }

    /// UI reads this - immutable reference
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Whether the UI should keep repainting without input.
    pub fn has_pending_work(&self) -> bool {
        !self.pending_actions.is_empty() || self.state.redirect_pending() || !self.state.toasts.is_empty()
    }

    fn handle_action(&mut self, action: AppAction) {
        match action {
            AppAction::Navigate(route) => self.navigate(route),
            AppAction::SearchTransactions(term) => {
                if let Some(view) = self.state.account_view.as_mut() {
                    view.set_search(term);
                }
            }

            AppAction::SetJointAccountField(field) => self.handle_joint_account_field(field),
            AppAction::JointAccountNext => self.handle_joint_account_next(),
            AppAction::JointAccountBack => {
                if let Some(flow) = self.state.joint_account.as_mut() {
                    flow.retreat();
                }
            }

            AppAction::SetPaymentField(field) => self.handle_payment_field(field),
            AppAction::ReviewPayment => self.handle_payment_advance(PaymentStep::Details),
            AppAction::ConfirmPayment => self.handle_payment_advance(PaymentStep::Review),
            AppAction::CancelPayment => {
                if let Some(flow) = self.state.payment.flow.as_mut() {
                    flow.retreat();
                }
            }

            AppAction::EditSettings(edit) => self.handle_settings_edit(edit),
            AppAction::SaveSettings(section) => self.handle_save_settings(section),

            AppAction::DismissToast { index } => {
                if index < self.state.toasts.len() {
                    self.state.toasts.remove(index);
                }
            }
        }
    }

    fn collect_completions(&mut self) {
        while let Ok(completion) = self.completed_rx.try_recv() {
            match completion {
                Completion::JointAccount(fields) => self.handle_joint_account_completed(fields),
                Completion::Payment(fields) => self.handle_payment_completed(fields),
            }
        }
    }

    fn report(&mut self, err: &ValidationError) {
        log::debug!("Validation failed: {}", err);
        self.state.push_toast(Notification::from(err));
    }
}

// Navigation
impl SessionManager {
    fn navigate(&mut self, route: Route) {
        if route == self.state.route {
            log::debug!("Already on {}", route.path());
            return;
        }
        if route == Route::Payments && self.state.redirect.cancel(&Route::Payments) {
            log::debug!("Payment form remounted, stale reset cancelled");
        }
        self.mount(route);
    }

    fn mount(&mut self, route: Route) {
        log::info!("Navigating to {}", route.path());

        // Leaving a screen discards its flow.
        self.state.joint_account = None;
        self.state.payment = PaymentScreen::default();
        self.state.account_view = None;

        match &route {
            Route::AccountDetails(id) => {
                self.state.account_view = self.bank.resolve_account(id.as_deref()).map(|account| {
                    let transactions = self.bank.transactions(&account.id);
                    AccountView::new(account, transactions)
                });
            }
            Route::JointAccountCreation => self.mount_joint_account(),
            Route::Payments => self.mount_payment(),
            Route::NotFound(path) => log::warn!("No screen for path {}", path),
            Route::Dashboard | Route::ProfileSettings => {}
        }

        self.state.route = route;
    }

    fn handle_redirect(&mut self, target: Route) {
        // The payment reset only applies while its screen is still shown.
        if target == Route::Payments && self.state.route != Route::Payments {
            log::debug!("Dropping payment reset, screen already left");
            return;
        }
        self.mount(target);
    }

    fn mount_joint_account(&mut self) {
        let tx = self.completed_tx.clone();
        self.state.joint_account = Some(FlowController::new(move |fields| {
            let _ = tx.send(Completion::JointAccount(fields));
        }));
    }

    fn mount_payment(&mut self) {
        let tx = self.completed_tx.clone();
        self.state.payment = PaymentScreen {
            flow: Some(FlowController::new(move |fields| {
                let _ = tx.send(Completion::Payment(fields));
            })),
            ..PaymentScreen::default()
        };
    }
}

// Joint account setup
impl SessionManager {
    fn handle_joint_account_field(&mut self, field: JointAccountField) {
        if let Some(flow) = self.state.joint_account.as_mut() {
            flow.set_field(field);
        }
    }

    fn handle_joint_account_next(&mut self) {
        let Some(flow) = self.state.joint_account.as_mut() else {
            return;
        };
        match flow.advance() {
            Ok(Advance::Moved { notice: Some(notice), .. }) => self.state.push_toast(notice),
            Ok(Advance::Moved { notice: None, .. }) | Ok(Advance::AlreadyCompleted) => {}
            Ok(Advance::Completed) => self.state.push_toast(JointAccountFlow::completion_notice()),
            Err(err) => self.report(&err),
        }
    }

    fn handle_joint_account_completed(&mut self, fields: JointAccountFields) {
        log::info!("Joint account setup handed over for {}", fields.coholder_email);
        self.state.push_toast(JointAccountFlow::initiated_notice(&fields));
        self.state
            .redirect
            .schedule(Route::Dashboard, self.config.redirect_delay(), self.state.now);
    }
}

// Payments
impl SessionManager {
    fn handle_payment_field(&mut self, field: PaymentField) {
        if let Some(flow) = self.state.payment.flow.as_mut() {
            flow.set_field(field);
        }
    }

    /// Advances the payment flow only out of `expected`.
    fn handle_payment_advance(&mut self, expected: PaymentStep) {
        let Some(flow) = self.state.payment.flow.as_mut() else {
            return;
        };
        if flow.current_step() != expected {
            log::debug!("Ignoring payment action for {:?} while on {:?}", expected, flow.current_step());
            return;
        }
        match flow.advance() {
            Ok(_) => self.state.payment.issues = None,
            Err(err) => {
                log::debug!("Payment form invalid: {}", err);
                self.state.payment.issues = Some(err);
            }
        }
    }

    fn handle_payment_completed(&mut self, fields: PaymentFields) {
        match fields.parse() {
            Ok(instruction) => {
                self.state.payment.processing = Some(instruction.submit());
                self.state.payment.flow = None;
                self.state.push_toast(PaymentFlow::processing_notice());
                self.state
                    .redirect
                    .schedule(Route::Payments, self.config.redirect_delay(), self.state.now);
            }
            // The review guard already parsed these fields.
            Err(err) => self.report(&err),
        }
    }
}

// Profile settings
impl SessionManager {
    fn handle_settings_edit(&mut self, edit: SettingsEdit) {
        self.state.settings.apply(edit);
    }

    fn handle_save_settings(&mut self, section: SettingsSection) {
        match self.state.settings.save(section) {
            Ok(notice) => self.state.push_toast(notice),
            Err(err) => self.report(&err),
        }
    }
}
