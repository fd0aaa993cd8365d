use super::{FlowDefinition, StepInfo};
use crate::notify::Notification;
use crate::util::errors::{FieldIssue, ValidationError};
use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::info;
use uuid::Uuid;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PaymentStep {
    Details,
    Review,
}

/// Raw form input, exactly as typed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentFields {
    pub source_account: String,
    pub recipient_name: String,
    pub recipient_account: String,
    pub amount: String,
    pub payment_date: String,
    pub notes: String,
}

impl Default for PaymentFields {
    fn default() -> Self {
        Self {
            source_account: String::new(),
            recipient_name: String::new(),
            recipient_account: String::new(),
            amount: String::new(),
            payment_date: Local::now().date_naive().format(DATE_FORMAT).to_string(),
            notes: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentField {
    SourceAccount(String),
    RecipientName(String),
    RecipientAccount(String),
    Amount(String),
    PaymentDate(String),
    Notes(String),
}

/// Validated, typed payment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentInstruction {
    pub source_account: String,
    pub recipient_name: String,
    pub recipient_account: String,
    pub amount: Decimal,
    pub payment_date: NaiveDate,
    pub notes: Option<String>,
}

/// A confirmed payment handed over for processing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSubmission {
    pub reference: Uuid,
    #[serde(flatten)]
    pub instruction: PaymentInstruction,
}

impl PaymentInstruction {
    pub fn submit(self) -> PaymentSubmission {
        let reference = Uuid::new_v4();
        info!(%reference, amount = %self.amount, "payment submitted");
        PaymentSubmission { reference, instruction: self }
    }
}

impl PaymentFields {
    /// Checks the whole form and reports every failing field at once.
    pub fn parse(&self) -> Result<PaymentInstruction, ValidationError> {
        let mut issues = Vec::new();
        let mut issue = |field: &'static str, message: &str| {
            issues.push(FieldIssue { field: Some(field), message: message.to_string() });
        };

        let source_account = self.source_account.trim();
        if source_account.is_empty() {
            issue("sourceAccount", "Please select a source account.");
        }

        let recipient_name = self.recipient_name.trim();
        if recipient_name.chars().count() < 2 {
            issue("recipientName", "Recipient name is required.");
        }

        let recipient_account = self.recipient_account.trim();
        if recipient_account.chars().count() < 5 {
            issue("recipientAccount", "Recipient account number is required.");
        }

        // A blank amount reads as zero.
        let raw_amount = match self.amount.trim() {
            "" => "0",
            text => text,
        };
        let amount = match Decimal::from_str(raw_amount) {
            Ok(value) if value > Decimal::ZERO => Some(value),
            Ok(_) => {
                issue("amount", "Amount must be positive.");
                None
            }
            Err(_) => {
                issue("amount", "Amount must be a number.");
                None
            }
        };

        let payment_date = match NaiveDate::parse_from_str(self.payment_date.trim(), DATE_FORMAT) {
            Ok(date) => Some(date),
            Err(_) => {
                issue("paymentDate", "Invalid date.");
                None
            }
        };

        ValidationError::from_issues(issues)?;

        let notes = match self.notes.trim() {
            "" => None,
            text => Some(text.to_string()),
        };

        match (amount, payment_date) {
            (Some(amount), Some(payment_date)) => Ok(PaymentInstruction {
                source_account: source_account.to_string(),
                recipient_name: recipient_name.to_string(),
                recipient_account: recipient_account.to_string(),
                amount,
                payment_date,
                notes,
            }),
            _ => Err(ValidationError::new("Payment details are incomplete.")),
        }
    }
}

pub struct PaymentFlow;

impl FlowDefinition for PaymentFlow {
    type Step = PaymentStep;
    type Fields = PaymentFields;
    type Field = PaymentField;

    const NAME: &'static str = "payment";
    const STEPS: &'static [StepInfo<PaymentStep>] = &[
        StepInfo {
            step: PaymentStep::Details,
            title: "Payment Details",
            description: "Fill in the details to send a payment.",
        },
        StepInfo {
            step: PaymentStep::Review,
            title: "Confirm Payment",
            description: "Please review and confirm your payment details.",
        },
    ];

    fn guard(_step: PaymentStep, fields: &PaymentFields) -> Result<(), ValidationError> {
        fields.parse().map(|_| ())
    }

    fn apply(fields: &mut PaymentFields, field: PaymentField) {
        match field {
            PaymentField::SourceAccount(v) => fields.source_account = v,
            PaymentField::RecipientName(v) => fields.recipient_name = v,
            PaymentField::RecipientAccount(v) => fields.recipient_account = v,
            PaymentField::Amount(v) => fields.amount = v,
            PaymentField::PaymentDate(v) => fields.payment_date = v,
            PaymentField::Notes(v) => fields.notes = v,
        }
    }
}

impl PaymentFlow {
    pub const PROCESSING_DESCRIPTION: &'static str = "Your payment is being processed.";

    pub fn processing_notice() -> Notification {
        Notification::info(
            "Payment Processing",
            "Your payment is being processed. You'll be notified upon completion.",
        )
    }
}

/// US short date, as shown on the confirmation dialog: `7/15/2024`.
pub fn display_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> PaymentFields {
        PaymentFields {
            source_account: "acc_checking_001".into(),
            recipient_name: "John Doe".into(),
            recipient_account: "000-123-456".into(),
            amount: "125.40".into(),
            payment_date: "2024-07-20".into(),
            notes: "  ".into(),
        }
    }

    #[test]
    fn test_parse_valid_form() {
        let instruction = filled().parse().unwrap();
        assert_eq!(instruction.amount, Decimal::new(12540, 2));
        assert_eq!(instruction.payment_date, NaiveDate::from_ymd_opt(2024, 7, 20).unwrap());
        assert_eq!(instruction.notes, None);
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let fields = PaymentFields {
            payment_date: "not a date".into(),
            ..PaymentFields::default()
        };
        let err = fields.parse().unwrap_err();
        assert_eq!(err.message_for("sourceAccount"), Some("Please select a source account."));
        assert_eq!(err.message_for("recipientName"), Some("Recipient name is required."));
        assert_eq!(err.message_for("recipientAccount"), Some("Recipient account number is required."));
        assert_eq!(err.message_for("amount"), Some("Amount must be positive."));
        assert_eq!(err.message_for("paymentDate"), Some("Invalid date."));
        assert_eq!(err.issues().len(), 5);
    }

    #[test]
    fn test_amount_must_be_positive() {
        for raw in ["0", "-10", "0.00"] {
            let fields = PaymentFields { amount: raw.into(), ..filled() };
            let err = fields.parse().unwrap_err();
            assert_eq!(err.message_for("amount"), Some("Amount must be positive."), "amount {raw}");
        }
    }

    #[test]
    fn test_amount_must_be_numeric() {
        let fields = PaymentFields { amount: "12,50".into(), ..filled() };
        let err = fields.parse().unwrap_err();
        assert_eq!(err.issues().len(), 1);
        assert_eq!(err.message_for("amount"), Some("Amount must be a number."));
    }

    #[test]
    fn test_default_date_is_valid() {
        let fields = PaymentFields::default();
        assert!(NaiveDate::parse_from_str(&fields.payment_date, DATE_FORMAT).is_ok());
    }

    #[test]
    fn test_submission_flattens_instruction() {
        let submission = filled().parse().unwrap().submit();
        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(json["reference"], serde_json::json!(submission.reference.to_string()));
        assert_eq!(json["recipientName"], "John Doe");
        assert_eq!(json["paymentDate"], "2024-07-20");
        assert!(json.get("instruction").is_none());
    }

    #[test]
    fn test_display_date() {
        let date = NaiveDate::from_ymd_opt(2024, 7, 5).unwrap();
        assert_eq!(display_date(date), "7/5/2024");
    }
}
