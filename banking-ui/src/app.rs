use std::sync::Arc;
use std::time::Duration;

use banking::{BankData, Config, InMemoryBank};
use eframe::egui;

use crate::session::SessionManager;
use crate::{ui, wasm_utils};

pub struct BankingApp {
    manager: SessionManager,
    app_name: String,
}

impl BankingApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: Config, bank: Arc<dyn BankData>) -> Self {
        wasm_utils::set_panic_hook();
        wasm_utils::console_log(&format!("Starting {}", config.application.name));

        Self {
            app_name: config.application.name.clone(),
            manager: SessionManager::new(bank, config),
        }
    }

    /// Default config and the compiled-in fixture. Used by the web build,
    /// which has no file system to read from.
    pub fn with_builtin_data(cc: &eframe::CreationContext<'_>) -> Result<Self, banking::BankingError> {
        let bank = InMemoryBank::builtin()?;
        Ok(Self::new(cc, Config::default(), Arc::new(bank)))
    }
}

impl eframe::App for BankingApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Duration::from_secs_f64(ctx.input(|i| i.time));
        self.manager.update(now);

        let mut actions = Vec::new();
        let state = self.manager.state();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(4.0);
            ui::header::render(ui, &self.app_name, state, &mut actions);
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui::render_screen(ui, state, &mut actions);
            });
        });

        ui::render_toasts(ctx, state, &mut actions);

        let has_actions = !actions.is_empty();
        for action in actions {
            self.manager.dispatch(action);
        }

        if has_actions {
            ctx.request_repaint();
        } else if self.manager.has_pending_work() {
            // Keep polling the redirect timer and toast expiry.
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
