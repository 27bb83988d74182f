//! Slot names in the key-value backend

use std::fmt;

/// Slot holding the signed-in user record
pub const CURRENT_USER_KEY: &str = "crm_current_user";

/// The persisted collections, one backend slot each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Users,
    Organizations,
    Leads,
    Contacts,
    CommunicationLogs,
    Tasks,
}

impl Collection {
    /// Backend key for this collection
    pub fn key(self) -> &'static str {
        match self {
            Self::Users => "crm_users",
            Self::Organizations => "crm_organizations",
            Self::Leads => "crm_leads",
            Self::Contacts => "crm_contacts",
            Self::CommunicationLogs => "crm_logs",
            Self::Tasks => "crm_tasks",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keys_are_distinct() {
        let mut keys: HashSet<&str> = [
            Collection::Users,
            Collection::Organizations,
            Collection::Leads,
            Collection::Contacts,
            Collection::CommunicationLogs,
            Collection::Tasks,
        ]
        .iter()
        .map(|c| c.key())
        .collect();
        keys.insert(CURRENT_USER_KEY);
        assert_eq!(keys.len(), 7);
    }

    #[test]
    fn test_logs_key() {
        assert_eq!(Collection::CommunicationLogs.key(), "crm_logs");
    }
}
