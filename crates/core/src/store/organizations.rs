//! Organization operations composed from the collection primitives

use tracing::debug;

use super::CrmStore;
use crate::model::{NewOrganization, Organization, User};

impl CrmStore {
    /// Create an organization with an empty manager list
    pub async fn create_organization(&self, new: NewOrganization) -> Organization {
        self.add(new).await
    }

    /// First organization administered by `admin_id`
    pub async fn organization_by_admin(&self, admin_id: &str) -> Option<Organization> {
        self.get_all::<Organization>()
            .await
            .into_iter()
            .find(|org| org.admin_id == admin_id)
    }

    /// Users listed as managers of `org_id`, in user-collection order.
    ///
    /// Empty when the organization does not exist or has no managers. Ids
    /// that match no user are ignored.
    pub async fn managers_of_organization(&self, org_id: &str) -> Vec<User> {
        let Some(org) = self.find::<Organization>(org_id).await else {
            return Vec::new();
        };
        if org.managers.is_empty() {
            return Vec::new();
        }

        self.get_all::<User>()
            .await
            .into_iter()
            .filter(|user| org.managers.contains(&user.id))
            .collect()
    }

    /// Append `manager_id` to the organization's managers.
    ///
    /// There is no duplicate check: adding the same id twice lists it
    /// twice. An unknown `org_id` leaves every organization unchanged.
    pub async fn add_manager_to_organization(&self, org_id: &str, manager_id: &str) {
        let _guard = self.write_lock.lock().await;
        self.push_manager(org_id, manager_id).await;
    }

    /// Append without taking the write lock; the caller must hold it.
    pub(super) async fn push_manager(&self, org_id: &str, manager_id: &str) {
        let mut orgs = self.load_for_write::<Organization>().await;

        for org in orgs.iter_mut().filter(|org| org.id == org_id) {
            org.managers.push(manager_id.to_string());
            debug!("Added manager {} to organization {}", manager_id, org_id);
        }

        self.persist(&orgs).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acme(admin_id: &str) -> NewOrganization {
        NewOrganization {
            org_name: "Acme".to_string(),
            address: "1 Main St".to_string(),
            num_managers: 2,
            admin_id: admin_id.to_string(),
        }
    }

    #[tokio::test]
    async fn test_organization_by_admin() {
        let store = CrmStore::in_memory();
        let org = store.create_organization(acme("u1")).await;
        store.create_organization(acme("u2")).await;

        assert_eq!(store.organization_by_admin("u1").await, Some(org));
        assert!(store.organization_by_admin("u3").await.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_managers_are_kept() {
        let store = CrmStore::in_memory();
        let org = store.create_organization(acme("admin")).await;

        store.add_manager_to_organization(&org.id, "u1").await;
        store.add_manager_to_organization(&org.id, "u1").await;

        let org = store.find::<Organization>(&org.id).await.unwrap();
        assert_eq!(org.managers, vec!["u1", "u1"]);
    }

    #[tokio::test]
    async fn test_add_manager_to_unknown_org_is_noop() {
        let store = CrmStore::in_memory();
        let org = store.create_organization(acme("admin")).await;

        store.add_manager_to_organization("missing", "u1").await;

        assert_eq!(store.get_all::<Organization>().await, vec![org]);
    }

    #[tokio::test]
    async fn test_managers_resolve_to_users() {
        let store = CrmStore::in_memory();
        let admin = store.register_user("admin@example.com", "Admin", "pw").await;
        let m1 = store.register_user("m1@example.com", "M1", "pw").await;
        let m2 = store.register_user("m2@example.com", "M2", "pw").await;
        let org = store.create_organization(acme(&admin.id)).await;

        store.add_manager_to_organization(&org.id, &m2.id).await;
        store.add_manager_to_organization(&org.id, &m1.id).await;
        store.add_manager_to_organization(&org.id, "ghost").await;

        let managers = store.managers_of_organization(&org.id).await;
        assert_eq!(managers, vec![m1, m2]);
    }

    #[tokio::test]
    async fn test_managers_of_missing_org_is_empty() {
        let store = CrmStore::in_memory();
        store.register_user("m1@example.com", "M1", "pw").await;

        assert!(store.managers_of_organization("missing").await.is_empty());
    }
}
