//! User model definitions

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::record::{require, NewRecord, Record};
use crate::storage::Collection;
use crate::Error;

/// Role a user takes inside an organization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Manager,
    Agent,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Manager => "manager",
            Self::Agent => "agent",
        }
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "manager" => Ok(Self::Manager),
            "agent" => Ok(Self::Agent),
            _ => Err(Error::InvalidInput(format!("Unsupported role '{}'", value))),
        }
    }
}

/// A registered dashboard user.
///
/// The password is kept as an opaque plaintext string; this crate makes no
/// security claims about it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub password: String,
    /// `None` until organization setup completes
    pub role: Option<Role>,
    pub org_id: Option<String>,
    #[serde(default)]
    pub setup_completed: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Some(Role::Admin)
    }
}

impl Record for User {
    type Patch = UserPatch;
    const COLLECTION: Collection = Collection::Users;

    fn id(&self) -> &str {
        &self.id
    }

    fn apply(&mut self, patch: UserPatch) {
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(password) = patch.password {
            self.password = password;
        }
        if let Some(role) = patch.role {
            self.role = role;
        }
        if let Some(org_id) = patch.org_id {
            self.org_id = org_id;
        }
        if let Some(setup_completed) = patch.setup_completed {
            self.setup_completed = setup_completed;
        }
    }
}

/// Registration payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub email: String,
    pub name: String,
    pub password: String,
}

impl NewUser {
    pub fn new(
        email: impl Into<String>,
        name: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> crate::Result<()> {
        require(&self.email, "email")?;
        require(&self.name, "name")?;
        require(&self.password, "password")
    }
}

impl NewRecord for NewUser {
    type Record = User;

    fn into_record(self, id: String, created_at: DateTime<Utc>) -> User {
        User {
            id,
            email: self.email,
            name: self.name,
            password: self.password,
            role: None,
            org_id: None,
            setup_completed: false,
            created_at,
        }
    }
}

/// Partial update for a [`User`].
///
/// The nullable fields use a nested option: `Some(None)` clears the value.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub email: Option<String>,
    pub name: Option<String>,
    pub password: Option<String>,
    pub role: Option<Option<Role>>,
    pub org_id: Option<Option<String>>,
    pub setup_completed: Option<bool>,
}

impl UserPatch {
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(Some(role));
        self
    }

    pub fn with_org_id(mut self, org_id: impl Into<String>) -> Self {
        self.org_id = Some(Some(org_id.into()));
        self
    }

    pub fn with_setup_completed(mut self, done: bool) -> Self {
        self.setup_completed = Some(done);
        self
    }
}
