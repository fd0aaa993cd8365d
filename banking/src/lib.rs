pub mod config;
pub mod data;
pub mod flow;
pub mod ledger;
pub mod notify;
pub mod routes;
pub mod runtime;
pub mod settings;
pub mod util;

pub use config::Config;
pub use data::{BankData, InMemoryBank};
pub use flow::joint_account::{JointAccountField, JointAccountFields, JointAccountFlow, JointAccountStep};
pub use flow::payment::{PaymentField, PaymentFields, PaymentFlow, PaymentInstruction, PaymentStep, PaymentSubmission};
pub use flow::{Advance, FlowController, FlowDefinition, StepInfo};
pub use notify::{Notification, Variant};
pub use routes::Route;
pub use runtime::scheduler::{PendingRedirect, RedirectTimer};
pub use util::errors::{BankingError, FieldIssue, ValidationError};
