use super::models::{AccountSummary, FinancialOverview, FundingSource, Transaction};
use crate::settings::ProfileSettings;
use crate::util::errors::BankingError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

pub const FIXTURE_FILE: &str = "bank.yaml";

const BUILTIN_FIXTURE: &str = include_str!("../../fixtures/bank.yaml");

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankFixture {
    pub default_account_id: String,
    pub accounts: Vec<AccountSummary>,
    pub funding_sources: Vec<FundingSource>,
    pub transactions: Vec<Transaction>,
    pub overview: FinancialOverview,
    pub profile: ProfileSettings,
}

impl BankFixture {
    pub fn from_yaml_str(text: &str) -> Result<Self, BankingError> {
        let fixture: BankFixture = serde_yaml::from_str(text)?;
        if !fixture.accounts.iter().any(|a| a.id == fixture.default_account_id) {
            return Err(BankingError::NotFound(format!(
                "default account {}",
                fixture.default_account_id
            )));
        }
        Ok(fixture)
    }

    pub fn builtin() -> Result<Self, BankingError> {
        Self::from_yaml_str(BUILTIN_FIXTURE)
    }
}

/// Reads `bank.yaml` from a fixtures directory.
pub fn load_from_dir(dir: &Path) -> Result<BankFixture, BankingError> {
    let path = dir.join(FIXTURE_FILE);
    let fixture = BankFixture::from_yaml_str(&std::fs::read_to_string(&path)?)?;
    info!(path = %path.display(), accounts = fixture.accounts.len(), "loaded bank fixture");
    Ok(fixture)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_default_account_is_rejected() {
        let text = BUILTIN_FIXTURE.replace("defaultAccountId: default-acc", "defaultAccountId: ghost");
        let err = BankFixture::from_yaml_str(&text).unwrap_err();
        assert!(matches!(err, BankingError::NotFound(_)));
    }

    #[test]
    fn test_malformed_yaml_is_a_fixture_error() {
        let err = BankFixture::from_yaml_str("accounts: [").unwrap_err();
        assert!(matches!(err, BankingError::Fixture(_)));
    }

    #[test]
    fn test_missing_dir_is_io_error() {
        let err = load_from_dir(Path::new("/definitely/not/here")).unwrap_err();
        assert!(matches!(err, BankingError::Io(_)));
    }
}
