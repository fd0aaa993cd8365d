use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    /// `None` shows the default account.
    AccountDetails(Option<String>),
    Payments,
    JointAccountCreation,
    ProfileSettings,
    NotFound(String),
}

/// Header navigation entries, in display order.
pub const NAV_ITEMS: &[(&str, &str)] = &[
    ("Dashboard", "/dashboard"),
    ("Accounts", "/accounts"),
    ("Payments", "/payments"),
    ("Profile", "/profile"),
];

impl Route {
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim();
        let normalized = trimmed.trim_end_matches('/');
        let segments: Vec<&str> = normalized.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] | ["dashboard"] => Route::Dashboard,
            ["accounts"] => Route::AccountDetails(None),
            ["accounts", id] => Route::AccountDetails(Some((*id).to_string())),
            ["payments"] => Route::Payments,
            ["joint-account-creation"] => Route::JointAccountCreation,
            ["profile"] | ["profile-settings"] => Route::ProfileSettings,
            _ => Route::NotFound(trimmed.to_string()),
        }
    }

    /// Canonical path for the route.
    pub fn path(&self) -> String {
        match self {
            Route::Dashboard => "/dashboard".to_string(),
            Route::AccountDetails(Some(id)) => format!("/accounts/{}", id),
            Route::AccountDetails(None) => "/accounts".to_string(),
            Route::Payments => "/payments".to_string(),
            Route::JointAccountCreation => "/joint-account-creation".to_string(),
            Route::ProfileSettings => "/profile-settings".to_string(),
            Route::NotFound(path) => path.clone(),
        }
    }

    /// Whether two routes render the same screen, ignoring parameters.
    pub fn same_screen(&self, other: &Route) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_paths() {
        assert_eq!(Route::parse("/"), Route::Dashboard);
        assert_eq!(Route::parse("/dashboard"), Route::Dashboard);
        assert_eq!(Route::parse("/accounts"), Route::AccountDetails(None));
        assert_eq!(
            Route::parse("/accounts/premium-001"),
            Route::AccountDetails(Some("premium-001".into()))
        );
        assert_eq!(Route::parse("/payments/"), Route::Payments);
        assert_eq!(Route::parse("/joint-account-creation"), Route::JointAccountCreation);
        assert_eq!(Route::parse("/profile"), Route::ProfileSettings);
        assert_eq!(Route::parse("/profile-settings"), Route::ProfileSettings);
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        assert_eq!(Route::parse("/loans"), Route::NotFound("/loans".into()));
        assert_eq!(Route::parse("/accounts/a/b"), Route::NotFound("/accounts/a/b".into()));
    }

    #[test]
    fn test_path_round_trips_through_parse() {
        for route in [
            Route::Dashboard,
            Route::AccountDetails(Some("savings-002".into())),
            Route::Payments,
            Route::JointAccountCreation,
            Route::ProfileSettings,
        ] {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }

    #[test]
    fn test_nav_items_resolve() {
        for (_, path) in NAV_ITEMS {
            assert!(!matches!(Route::parse(path), Route::NotFound(_)));
        }
    }
}
