use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummary {
    pub id: String,
    pub name: String,
    pub balance: Decimal,
    pub currency: String,
    #[serde(default = "default_true")]
    pub show_on_dashboard: bool,
}

/// Source account offered on the payment form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FundingSource {
    pub id: String,
    pub label: String,
    pub masked_number: String,
    pub balance: Decimal,
    pub currency: String,
}

impl FundingSource {
    /// `Checking - XXXX1234`
    pub fn short_label(&self) -> String {
        format!("{} - {}", self.label, self.masked_number)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
    Transfer,
    Purchase,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Pending,
    Completed,
    Failed,
}

impl TransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Pending => "pending",
            TransactionStatus::Completed => "completed",
            TransactionStatus::Failed => "failed",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub kind: TransactionKind,
    pub description: String,
    pub amount: Decimal,
    pub currency: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub status: Option<TransactionStatus>,
    #[serde(default)]
    pub merchant_logo_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartSeries {
    pub key: String,
    pub name: String,
    pub stroke: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    pub values: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FinancialOverview {
    pub title: String,
    pub description: String,
    pub series: Vec<ChartSeries>,
    pub points: Vec<ChartPoint>,
}
