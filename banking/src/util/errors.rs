use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BankingError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid fixture data: {0}")]
    Fixture(#[from] serde_yaml::Error),
    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// One failed check, optionally tied to the form field that caused it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: Option<&'static str>,
    pub message: String,
}

/// A user-correctable validation failure. Carries every issue found by a
/// guard so forms can show a message beside each field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    issues: Vec<FieldIssue>,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            issues: vec![FieldIssue { field: None, message: message.into() }],
        }
    }

    pub fn field(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            issues: vec![FieldIssue { field: Some(field), message: message.into() }],
        }
    }

    /// Collects issues; returns `Ok(())` when none were reported.
    pub fn from_issues(issues: Vec<FieldIssue>) -> Result<(), Self> {
        if issues.is_empty() {
            Ok(())
        } else {
            Err(Self { issues })
        }
    }

    pub fn issues(&self) -> &[FieldIssue] {
        &self.issues
    }

    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.issues
            .iter()
            .find(|issue| issue.field == Some(field))
            .map(|issue| issue.message.as_str())
    }

    pub fn first_message(&self) -> &str {
        self.issues.first().map(|issue| issue.message.as_str()).unwrap_or_default()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.issues.iter().map(|i| i.message.as_str()).collect();
        write!(f, "{}", messages.join(" "))
    }
}
