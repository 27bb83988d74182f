//! Contact model definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::record::{require, NewRecord, Record};
use crate::storage::Collection;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    #[serde(default)]
    pub notes: String,
    /// Free-text interaction entries, oldest first
    #[serde(default)]
    pub call_history: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Record for Contact {
    type Patch = ContactPatch;
    const COLLECTION: Collection = Collection::Contacts;

    fn id(&self) -> &str {
        &self.id
    }

    fn apply(&mut self, patch: ContactPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(company) = patch.company {
            self.company = company;
        }
        if let Some(notes) = patch.notes {
            self.notes = notes;
        }
        if let Some(call_history) = patch.call_history {
            self.call_history = call_history;
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub call_history: Vec<String>,
}

impl NewContact {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        company: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            company: company.into(),
            ..Self::default()
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Seed the history with a first entry; blank entries are ignored
    pub fn with_first_interaction(mut self, entry: impl Into<String>) -> Self {
        let entry = entry.into();
        if !entry.trim().is_empty() {
            self.call_history.push(entry);
        }
        self
    }

    pub fn validate(&self) -> crate::Result<()> {
        require(&self.name, "name")?;
        require(&self.email, "email")?;
        require(&self.phone, "phone")?;
        require(&self.company, "company")
    }
}

impl NewRecord for NewContact {
    type Record = Contact;

    fn into_record(self, id: String, created_at: DateTime<Utc>) -> Contact {
        Contact {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            company: self.company,
            notes: self.notes,
            call_history: self.call_history,
            created_at,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ContactPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub notes: Option<String>,
    pub call_history: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_blank_first_interaction_is_dropped() {
        let contact = NewContact::new("Mia", "mia@example.com", "555-0101", "Globex")
            .with_first_interaction("   ");
        assert!(contact.call_history.is_empty());

        let contact = contact.with_first_interaction("2025-10-01 Call - intro");
        assert_eq!(contact.call_history, vec!["2025-10-01 Call - intro"]);
    }

    #[test]
    fn test_validate_requires_company() {
        let contact = NewContact::new("Mia", "mia@example.com", "555-0101", "");
        assert!(matches!(contact.validate(), Err(Error::MissingField("company"))));
    }

    #[test]
    fn test_patch_replaces_notes_only() {
        let mut contact = NewContact::new("Mia", "mia@example.com", "555-0101", "Globex")
            .with_first_interaction("intro call")
            .into_record("c1".to_string(), Utc::now());
        contact.apply(ContactPatch {
            notes: Some("prefers email".to_string()),
            ..ContactPatch::default()
        });

        assert_eq!(contact.notes, "prefers email");
        assert_eq!(contact.call_history.len(), 1);
    }
}
