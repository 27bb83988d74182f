//! Onboarding flows run after a user registers
//!
//! Unlike the collection primitives these report problems to the caller,
//! since they back a form that has to show an error message.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::CrmStore;
use crate::model::{require, NewOrganization, Organization, Role, User, UserPatch};
use crate::{Error, Result};

/// Details an admin enters to create their organization
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminSetup {
    pub org_name: String,
    pub address: String,
    pub num_managers: u32,
}

/// Details a manager enters to join an existing organization
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagerSetup {
    pub admin_email: String,
    pub org_id: String,
}

impl CrmStore {
    async fn setup_user(&self, user_id: &str) -> Result<User> {
        self.find::<User>(user_id)
            .await
            .ok_or_else(|| Error::NotFound(format!("User {} not found", user_id)))
    }

    /// Create the user's organization and make them its admin.
    ///
    /// The updated user also becomes the current user. The whole flow runs
    /// under the store's write lock.
    pub async fn complete_admin_setup(
        &self,
        user_id: &str,
        setup: AdminSetup,
    ) -> Result<(Organization, User)> {
        let new_org = NewOrganization {
            org_name: setup.org_name,
            address: setup.address,
            num_managers: setup.num_managers,
            admin_id: user_id.to_string(),
        };
        new_org.validate()?;

        let _guard = self.write_lock.lock().await;
        let user = self.setup_user(user_id).await?;
        let org = self.append(new_org).await;

        let patch = UserPatch::default()
            .with_role(Role::Admin)
            .with_org_id(org.id.clone())
            .with_setup_completed(true);
        let user = self
            .patch::<User>(&user.id, patch)
            .await
            .ok_or_else(|| Error::NotFound(format!("User {} not found", user_id)))?;

        self.set_current_user(Some(&user)).await;
        info!("User {} set up organization {}", user.id, org.id);
        Ok((org, user))
    }

    /// Join the user to an existing organization as a manager.
    ///
    /// `admin_email` must belong to a registered user and `org_id` to an
    /// existing organization. The user is appended to the organization's
    /// managers and becomes the current user.
    pub async fn complete_manager_setup(&self, user_id: &str, setup: ManagerSetup) -> Result<User> {
        require(&setup.admin_email, "adminEmail")?;
        require(&setup.org_id, "orgId")?;

        let _guard = self.write_lock.lock().await;
        let user = self.setup_user(user_id).await?;

        if self.find_user_by_email(&setup.admin_email).await.is_none() {
            return Err(Error::NotFound(format!(
                "Admin email {} not found",
                setup.admin_email
            )));
        }
        if self.find::<Organization>(&setup.org_id).await.is_none() {
            return Err(Error::NotFound(format!(
                "Organization {} not found",
                setup.org_id
            )));
        }

        let patch = UserPatch::default()
            .with_role(Role::Manager)
            .with_org_id(setup.org_id.clone())
            .with_setup_completed(true);
        let user = self
            .patch::<User>(&user.id, patch)
            .await
            .ok_or_else(|| Error::NotFound(format!("User {} not found", user_id)))?;

        self.push_manager(&setup.org_id, &user.id).await;
        self.set_current_user(Some(&user)).await;
        info!("User {} joined organization {} as manager", user.id, setup.org_id);
        Ok(user)
    }
}
