//! Organization model definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::record::{require, NewRecord, Record};
use crate::storage::Collection;
use crate::Error;

/// An organization owned by one admin user.
///
/// `managers` holds user ids in the order they joined. Duplicates are kept
/// as written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: String,
    pub org_name: String,
    pub address: String,
    pub num_managers: u32,
    pub admin_id: String,
    #[serde(default)]
    pub managers: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Record for Organization {
    type Patch = OrganizationPatch;
    const COLLECTION: Collection = Collection::Organizations;

    fn id(&self) -> &str {
        &self.id
    }

    fn apply(&mut self, patch: OrganizationPatch) {
        if let Some(org_name) = patch.org_name {
            self.org_name = org_name;
        }
        if let Some(address) = patch.address {
            self.address = address;
        }
        if let Some(num_managers) = patch.num_managers {
            self.num_managers = num_managers;
        }
        if let Some(managers) = patch.managers {
            self.managers = managers;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrganization {
    pub org_name: String,
    pub address: String,
    pub num_managers: u32,
    pub admin_id: String,
}

impl NewOrganization {
    pub fn validate(&self) -> crate::Result<()> {
        require(&self.org_name, "orgName")?;
        require(&self.address, "address")?;
        require(&self.admin_id, "adminId")?;
        if self.num_managers == 0 {
            return Err(Error::MissingField("numManagers"));
        }
        Ok(())
    }
}

impl NewRecord for NewOrganization {
    type Record = Organization;

    fn into_record(self, id: String, created_at: DateTime<Utc>) -> Organization {
        Organization {
            id,
            org_name: self.org_name,
            address: self.address,
            num_managers: self.num_managers,
            admin_id: self.admin_id,
            managers: Vec::new(),
            created_at,
        }
    }
}

/// Partial update for an [`Organization`]. The admin cannot be reassigned.
#[derive(Debug, Clone, Default)]
pub struct OrganizationPatch {
    pub org_name: Option<String>,
    pub address: Option<String>,
    pub num_managers: Option<u32>,
    pub managers: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_organization_starts_without_managers() {
        let org = NewOrganization {
            org_name: "Acme".to_string(),
            address: "1 Main St".to_string(),
            num_managers: 3,
            admin_id: "u1".to_string(),
        }
        .into_record("o1".to_string(), Utc::now());

        assert!(org.managers.is_empty());
        assert_eq!(org.admin_id, "u1");
    }

    #[test]
    fn test_validate_requires_manager_count() {
        let new_org = NewOrganization {
            org_name: "Acme".to_string(),
            address: "1 Main St".to_string(),
            num_managers: 0,
            admin_id: "u1".to_string(),
        };
        assert!(matches!(new_org.validate(), Err(Error::MissingField("numManagers"))));
    }

    #[test]
    fn test_missing_managers_field_deserializes_empty() {
        let json = r#"{"id":"o1","orgName":"Acme","address":"x","numManagers":2,
            "adminId":"u1","createdAt":"2025-10-01T10:00:00Z"}"#;
        let org: Organization = serde_json::from_str(json).unwrap();
        assert!(org.managers.is_empty());
    }
}
