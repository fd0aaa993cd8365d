use super::{FlowDefinition, StepInfo};
use crate::notify::Notification;
use crate::util::errors::ValidationError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum JointAccountStep {
    InviteCoholder,
    Verification,
    AwaitingCoholder,
    FinalizeTerms,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct JointAccountFields {
    pub coholder_email: String,
    pub terms_agreed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JointAccountField {
    CoholderEmail(String),
    TermsAgreed(bool),
}

pub struct JointAccountFlow;

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"))
}

pub fn is_plausible_email(value: &str) -> bool {
    email_pattern().is_match(value.trim())
}

impl FlowDefinition for JointAccountFlow {
    type Step = JointAccountStep;
    type Fields = JointAccountFields;
    type Field = JointAccountField;

    const NAME: &'static str = "joint-account";
    const STEPS: &'static [StepInfo<JointAccountStep>] = &[
        StepInfo {
            step: JointAccountStep::InviteCoholder,
            title: "Invite Co-holder",
            description: "Enter the email of the person you want to share this account with.",
        },
        StepInfo {
            step: JointAccountStep::Verification,
            title: "Your Verification",
            description: "Confirm your identity to proceed.",
        },
        StepInfo {
            step: JointAccountStep::AwaitingCoholder,
            title: "Awaiting Co-holder",
            description: "Waiting for the co-holder to accept and verify.",
        },
        StepInfo {
            step: JointAccountStep::FinalizeTerms,
            title: "Finalize Terms",
            description: "Review and agree to the joint account terms.",
        },
    ];

    fn guard(step: JointAccountStep, fields: &JointAccountFields) -> Result<(), ValidationError> {
        match step {
            JointAccountStep::InviteCoholder => {
                if fields.coholder_email.trim().is_empty() {
                    Err(ValidationError::field("coholderEmail", "Please enter co-holder's email."))
                } else if !is_plausible_email(&fields.coholder_email) {
                    Err(ValidationError::field("coholderEmail", "Please enter a valid email address."))
                } else {
                    Ok(())
                }
            }
            JointAccountStep::Verification | JointAccountStep::AwaitingCoholder => Ok(()),
            JointAccountStep::FinalizeTerms => {
                if fields.terms_agreed {
                    Ok(())
                } else {
                    Err(ValidationError::field("termsAgreed", "Please agree to the terms and conditions."))
                }
            }
        }
    }

    // Once the invitation is out the co-holder step cannot be undone.
    fn reversible(step: JointAccountStep) -> bool {
        step != JointAccountStep::AwaitingCoholder
    }

    fn apply(fields: &mut JointAccountFields, field: JointAccountField) {
        match field {
            JointAccountField::CoholderEmail(email) => fields.coholder_email = email,
            JointAccountField::TermsAgreed(agreed) => fields.terms_agreed = agreed,
        }
    }

    fn advance_notice(from: JointAccountStep, fields: &JointAccountFields) -> Option<Notification> {
        match from {
            JointAccountStep::InviteCoholder => Some(Notification::info(
                "Invitation Sent",
                format!("Invitation sent to {}.", fields.coholder_email.trim()),
            )),
            _ => None,
        }
    }
}

impl JointAccountFlow {
    pub fn completion_notice() -> Notification {
        Notification::info("Success!", "Joint account setup initiated!")
    }

    /// Notice shown by the parent screen once setup has been handed over.
    pub fn initiated_notice(fields: &JointAccountFields) -> Notification {
        let who = match fields.coholder_email.trim() {
            "" => "co-holder",
            email => email,
        };
        Notification::info(
            "Joint Account Initiated!",
            format!("Successfully started the process with {}.", who),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_plausibility() {
        assert!(is_plausible_email("jane@example.com"));
        assert!(is_plausible_email("  jane.doe+joint@bank.co.uk "));
        assert!(!is_plausible_email("jane"));
        assert!(!is_plausible_email("jane@example"));
        assert!(!is_plausible_email("jane smith@example.com"));
    }

    #[test]
    fn test_invite_guard_messages() {
        let mut fields = JointAccountFields::default();
        let err = JointAccountFlow::guard(JointAccountStep::InviteCoholder, &fields).unwrap_err();
        assert_eq!(err.message_for("coholderEmail"), Some("Please enter co-holder's email."));

        fields.coholder_email = "not-an-email".into();
        let err = JointAccountFlow::guard(JointAccountStep::InviteCoholder, &fields).unwrap_err();
        assert_eq!(err.first_message(), "Please enter a valid email address.");
    }

    #[test]
    fn test_fields_serialize_camel_case() {
        let fields = JointAccountFields {
            coholder_email: "jane@example.com".into(),
            terms_agreed: true,
        };
        let json = serde_json::to_value(&fields).unwrap();
        assert_eq!(json, serde_json::json!({"coholderEmail": "jane@example.com", "termsAgreed": true}));
    }

    #[test]
    fn test_initiated_notice_falls_back_to_generic_name() {
        let notice = JointAccountFlow::initiated_notice(&JointAccountFields::default());
        assert_eq!(notice.description, "Successfully started the process with co-holder.");
    }
}
