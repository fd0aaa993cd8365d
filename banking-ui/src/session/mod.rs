pub mod actions;
pub mod manager;
pub mod state;


pub use actions::AppAction;
pub use manager::SessionManager;
pub use state::{AccountView, PaymentScreen, SessionState, Toast};
