//! User registration and lookup

use tracing::debug;

use super::CrmStore;
use crate::model::{NewUser, User, UserPatch};

impl CrmStore {
    /// Register a user. The new user has no role or organization yet.
    ///
    /// Email uniqueness is a caller convention: check
    /// [`find_user_by_email`](Self::find_user_by_email) first.
    pub async fn register_user(
        &self,
        email: impl Into<String>,
        name: impl Into<String>,
        password: impl Into<String>,
    ) -> User {
        self.add(NewUser::new(email, name, password)).await
    }

    /// First user whose email and password both match
    pub async fn login(&self, email: &str, password: &str) -> Option<User> {
        let user = self
            .get_all::<User>()
            .await
            .into_iter()
            .find(|u| u.email == email && u.password == password);
        if user.is_none() {
            debug!("Login rejected for {}", email);
        }
        user
    }

    pub async fn find_user_by_email(&self, email: &str) -> Option<User> {
        self.get_all::<User>()
            .await
            .into_iter()
            .find(|u| u.email == email)
    }

    pub async fn update_user(&self, user_id: &str, patch: UserPatch) -> Option<User> {
        self.update::<User>(user_id, patch).await
    }
}
