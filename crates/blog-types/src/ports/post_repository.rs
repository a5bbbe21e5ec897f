use async_trait::async_trait;

use super::RepoError;
use crate::domain::post::{NewPost, Post};

#[async_trait]
pub trait PostRepository: Send + Sync + 'static {
    async fn list(&self) -> Result<Vec<Post>, RepoError>;
    async fn get(&self, id: i64) -> Result<Option<Post>, RepoError>;
    async fn insert(&self, post: NewPost) -> Result<i64, RepoError>;
    async fn update(&self, id: i64, post: NewPost) -> Result<u64, RepoError>;
    async fn remove(&self, id: i64) -> Result<u64, RepoError>;
}
