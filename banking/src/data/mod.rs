//! Read-only bank data behind a trait so screens receive their data source
//! instead of reaching for shared globals.

pub mod loader;
pub mod models;

pub use loader::{load_from_dir, BankFixture};
pub use models::*;

use crate::settings::ProfileSettings;

pub trait BankData: Send + Sync {
    fn accounts(&self) -> Vec<AccountSummary>;

    fn account(&self, id: &str) -> Option<AccountSummary>;

    /// Account shown when no id, or an unknown id, is requested.
    fn default_account_id(&self) -> String;

    /// Transactions for an account, newest first.
    fn transactions(&self, account_id: &str) -> Vec<Transaction>;

    fn funding_sources(&self) -> Vec<FundingSource>;

    fn overview(&self) -> FinancialOverview;

    fn profile(&self) -> ProfileSettings;

    fn dashboard_accounts(&self) -> Vec<AccountSummary> {
        self.accounts().into_iter().filter(|a| a.show_on_dashboard).collect()
    }

    fn resolve_account(&self, id: Option<&str>) -> Option<AccountSummary> {
        id.and_then(|id| self.account(id))
            .or_else(|| self.account(&self.default_account_id()))
    }

    fn funding_source(&self, id: &str) -> Option<FundingSource> {
        self.funding_sources().into_iter().find(|s| s.id == id)
    }
}

/// Fixture-backed implementation.
#[derive(Debug, Clone)]
pub struct InMemoryBank {
    fixture: BankFixture,
}

impl InMemoryBank {
    pub fn new(fixture: BankFixture) -> Self {
        Self { fixture }
    }

    /// Data compiled into the binary.
    pub fn builtin() -> Result<Self, crate::BankingError> {
        Ok(Self::new(BankFixture::builtin()?))
    }
}

impl BankData for InMemoryBank {
    fn accounts(&self) -> Vec<AccountSummary> {
        self.fixture.accounts.clone()
    }

    fn account(&self, id: &str) -> Option<AccountSummary> {
        self.fixture.accounts.iter().find(|a| a.id == id).cloned()
    }

    fn default_account_id(&self) -> String {
        self.fixture.default_account_id.clone()
    }

    // The mock ledger is shared by every account.
    fn transactions(&self, _account_id: &str) -> Vec<Transaction> {
        let mut rows = self.fixture.transactions.clone();
        rows.sort_by(|a, b| b.date.cmp(&a.date));
        rows
    }

    fn funding_sources(&self) -> Vec<FundingSource> {
        self.fixture.funding_sources.clone()
    }

    fn overview(&self) -> FinancialOverview {
        self.fixture.overview.clone()
    }

    fn profile(&self) -> ProfileSettings {
        self.fixture.profile.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_fixture_loads() {
        let bank = InMemoryBank::builtin().unwrap();
        assert_eq!(bank.accounts().len(), 3);
        assert_eq!(bank.dashboard_accounts().len(), 2);
        assert_eq!(bank.transactions("premium-001").len(), 5);
        assert_eq!(bank.funding_sources().len(), 2);
        assert_eq!(bank.overview().points.len(), 6);
        assert_eq!(bank.profile().profile.full_name, "Johnathan Doe");
    }

    #[test]
    fn test_resolve_account_falls_back_to_default() {
        let bank = InMemoryBank::builtin().unwrap();
        assert_eq!(bank.resolve_account(Some("savings-002")).unwrap().name, "High-Yield Savings");
        assert_eq!(bank.resolve_account(Some("nope")).unwrap().id, "default-acc");
        assert_eq!(bank.resolve_account(None).unwrap().name, "My Account");
    }

    #[test]
    fn test_transactions_newest_first() {
        let bank = InMemoryBank::builtin().unwrap();
        let ids: Vec<String> = bank.transactions("x").into_iter().map(|t| t.id).collect();
        assert_eq!(ids, ["txn_1", "txn_2", "txn_3", "txn_4", "txn_5"]);
    }

    #[test]
    fn test_funding_source_label() {
        let bank = InMemoryBank::builtin().unwrap();
        let source = bank.funding_source("acc_savings_002").unwrap();
        assert_eq!(source.short_label(), "Savings - XXXX5678");
    }
}
