use crate::notify::Notification;
use crate::util::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileInfo {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SecuritySettings {
    pub two_factor_auth: bool,
    pub biometric_login: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPreferences {
    pub email_push: bool,
    pub sms_alerts: bool,
    pub promotional_offers: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileSettings {
    pub profile: ProfileInfo,
    pub security: SecuritySettings,
    pub notifications: NotificationPreferences,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SettingsSection {
    Profile,
    Security,
    Notifications,
}

impl fmt::Display for SettingsSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SettingsSection::Profile => "Profile",
            SettingsSection::Security => "Security",
            SettingsSection::Notifications => "Notifications",
        };
        f.write_str(name)
    }
}

/// A single edit from the settings screen. The email address is read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsEdit {
    FullName(String),
    PhoneNumber(String),
    TwoFactorAuth(bool),
    BiometricLogin(bool),
    EmailPush(bool),
    SmsAlerts(bool),
    PromotionalOffers(bool),
}

impl SettingsEdit {
    pub fn section(&self) -> SettingsSection {
        match self {
            SettingsEdit::FullName(_) | SettingsEdit::PhoneNumber(_) => SettingsSection::Profile,
            SettingsEdit::TwoFactorAuth(_) | SettingsEdit::BiometricLogin(_) => SettingsSection::Security,
            SettingsEdit::EmailPush(_) | SettingsEdit::SmsAlerts(_) | SettingsEdit::PromotionalOffers(_) => {
                SettingsSection::Notifications
            }
        }
    }
}

/// Draft settings being edited next to the last saved copy.
#[derive(Debug, Clone)]
pub struct SettingsForm {
    draft: ProfileSettings,
    saved: ProfileSettings,
}

impl SettingsForm {
    pub fn new(initial: ProfileSettings) -> Self {
        Self {
            draft: initial.clone(),
            saved: initial,
        }
    }

    pub fn draft(&self) -> &ProfileSettings {
        &self.draft
    }

    pub fn saved(&self) -> &ProfileSettings {
        &self.saved
    }

    pub fn apply(&mut self, edit: SettingsEdit) {
        match edit {
            SettingsEdit::FullName(v) => self.draft.profile.full_name = v,
            SettingsEdit::PhoneNumber(v) => self.draft.profile.phone_number = v,
            SettingsEdit::TwoFactorAuth(v) => self.draft.security.two_factor_auth = v,
            SettingsEdit::BiometricLogin(v) => self.draft.security.biometric_login = v,
            SettingsEdit::EmailPush(v) => self.draft.notifications.email_push = v,
            SettingsEdit::SmsAlerts(v) => self.draft.notifications.sms_alerts = v,
            SettingsEdit::PromotionalOffers(v) => self.draft.notifications.promotional_offers = v,
        }
    }

    pub fn is_dirty(&self, section: SettingsSection) -> bool {
        match section {
            SettingsSection::Profile => self.draft.profile != self.saved.profile,
            SettingsSection::Security => self.draft.security != self.saved.security,
            SettingsSection::Notifications => self.draft.notifications != self.saved.notifications,
        }
    }

    /// Commits one section of the draft.
    pub fn save(&mut self, section: SettingsSection) -> Result<Notification, ValidationError> {
        match section {
            SettingsSection::Profile => {
                if self.draft.profile.full_name.trim().is_empty() {
                    return Err(ValidationError::field("fullName", "Full name is required."));
                }
                self.saved.profile = self.draft.profile.clone();
            }
            SettingsSection::Security => self.saved.security = self.draft.security.clone(),
            SettingsSection::Notifications => {
                self.saved.notifications = self.draft.notifications.clone()
            }
        }

        info!(%section, "settings saved");
        Ok(Notification::info(
            "Settings Updated",
            format!("{} settings have been saved.", section),
        ))
    }
}
