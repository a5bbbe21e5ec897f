use crate::errors::AppError;
use blog_types::domain::user::{NewUser, User};
use blog_types::ports::UserRepository;

pub const USER_NOT_FOUND: &str = "The user with the specified ID does not exist.";
pub const USER_FIELDS_REQUIRED: &str = "Please provide name for the user.";
pub const USERS_RETRIEVE_FAILED: &str = "The users information could not be retrieved.";
pub const USER_RETRIEVE_FAILED: &str = "The user information could not be retrieved.";
pub const USER_SAVE_FAILED: &str = "There was an error while saving the user to the database";
pub const USER_REMOVE_FAILED: &str = "The user could not be removed";
pub const USER_MODIFY_FAILED: &str = "The user information could not be modified.";
pub const USER_DELETED: &str = "The user was deleted";
pub const USER_UPDATED: &str = "The user has been updated";

pub struct UserService<R: UserRepository> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.repo
            .list()
            .await
            .map_err(AppError::persistence(USERS_RETRIEVE_FAILED))
    }

    pub async fn get_user(&self, id: i64) -> Result<User, AppError> {
        self.repo
            .get(id)
            .await
            .map_err(AppError::persistence(USER_RETRIEVE_FAILED))?
            .ok_or(AppError::NotFound(USER_NOT_FOUND))
    }

    /// Inserts, then reads the row back so the response reflects what was stored.
    pub async fn create_user(&self, name: Option<String>) -> Result<User, AppError> {
        let user = NewUser::from_input(name).map_err(|_| AppError::Invalid(USER_FIELDS_REQUIRED))?;
        let id = self
            .repo
            .insert(user)
            .await
            .map_err(AppError::persistence(USER_SAVE_FAILED))?;
        self.repo
            .get(id)
            .await
            .map_err(AppError::persistence(USER_SAVE_FAILED))?
            .ok_or(AppError::Invalid(USER_FIELDS_REQUIRED))
    }

    /// Succeeds whether or not `id` matched a row.
    pub async fn update_user(&self, id: i64, name: Option<String>) -> Result<(), AppError> {
        let user = NewUser::from_input(name).map_err(|_| AppError::Invalid(USER_FIELDS_REQUIRED))?;
        self.repo
            .update(id, user)
            .await
            .map_err(AppError::persistence(USER_MODIFY_FAILED))?;
        Ok(())
    }

    /// Succeeds whether or not `id` matched a row.
    pub async fn delete_user(&self, id: i64) -> Result<(), AppError> {
        self.repo
            .remove(id)
            .await
            .map_err(AppError::persistence(USER_REMOVE_FAILED))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blog_repo::memory::InMemoryUserRepo;

    #[tokio::test]
    async fn create_then_get_user_in_memory() {
        let svc = UserService::new(InMemoryUserRepo::new());
        let user = svc.create_user(Some("ADA".into())).await.unwrap();
        assert_eq!(user, User { id: 1, name: "ADA".into() });

        let got = svc.get_user(user.id).await.unwrap();
        assert_eq!(got.name, "ADA");
    }

    #[tokio::test]
    async fn missing_name_never_reaches_the_gateway() {
        let repo = InMemoryUserRepo::new();
        let svc = UserService::new(repo.clone());

        let created = svc.create_user(None).await;
        assert!(matches!(created, Err(AppError::Invalid(USER_FIELDS_REQUIRED))));

        let updated = svc.update_user(1, Some(String::new())).await;
        assert!(matches!(updated, Err(AppError::Invalid(USER_FIELDS_REQUIRED))));

        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_and_delete_ignore_unknown_ids() {
        let svc = UserService::new(InMemoryUserRepo::new());
        svc.update_user(404, Some("NOBODY".into())).await.unwrap();
        svc.delete_user(404).await.unwrap();
        assert!(svc.list_users().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn not_found_paths() {
        let svc = UserService::new(InMemoryUserRepo::new());
        let missing = svc.get_user(999).await;
        assert!(matches!(missing, Err(AppError::NotFound(USER_NOT_FOUND))));
    }
}
