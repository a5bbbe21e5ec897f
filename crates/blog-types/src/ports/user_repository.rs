use async_trait::async_trait;

use super::RepoError;
use crate::domain::user::{NewUser, User};

#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    async fn list(&self) -> Result<Vec<User>, RepoError>;
    async fn get(&self, id: i64) -> Result<Option<User>, RepoError>;
    /// Stores a new user and returns the id the gateway assigned to it.
    async fn insert(&self, user: NewUser) -> Result<i64, RepoError>;
    /// Replaces the mutable fields; returns the number of rows touched.
    async fn update(&self, id: i64, user: NewUser) -> Result<u64, RepoError>;
    async fn remove(&self, id: i64) -> Result<u64, RepoError>;
}
