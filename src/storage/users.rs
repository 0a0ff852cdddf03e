use super::repository::Repository;
use super::types::{EntityKind, NewUser, StorageError, User};

impl Repository {
    // ========================================================================
    // User Operations
    // ========================================================================

    /// Store a new user and return it with its assigned id.
    ///
    /// # Errors
    ///
    /// `StorageError::DuplicateUsername` when duplicate keys are rejected and
    /// the username is taken. Otherwise infallible.
    pub async fn create_user(&self, input: NewUser) -> Result<User, StorageError> {
        let mut store = self.write().await;

        if self.options().reject_duplicate_keys
            && store.users.values().any(|u| u.username == input.username)
        {
            tracing::warn!(username = %input.username, "Rejected user with duplicate username");
            return Err(StorageError::DuplicateUsername {
                username: input.username,
            });
        }

        let id = store.ids.next(EntityKind::User);
        let user = User {
            id,
            username: input.username,
            password: input.password,
        };
        store.users.insert(id, user.clone());
        tracing::debug!(id, username = %user.username, "Created user");
        Ok(user)
    }

    pub async fn get_user(&self, id: i64) -> Option<User> {
        self.read().await.users.get(&id).cloned()
    }

    /// First user whose username matches exactly (case-sensitive).
    pub async fn get_user_by_username(&self, username: &str) -> Option<User> {
        self.read()
            .await
            .users
            .values()
            .find(|u| u.username == username)
            .cloned()
    }
}
