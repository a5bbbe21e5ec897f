use crate::errors::AppError;
use blog_types::domain::post::{NewPost, Post};
use blog_types::ports::PostRepository;

pub const POST_NOT_FOUND: &str = "The post with the specified ID does not exist.";
pub const POST_FIELDS_REQUIRED: &str = "Please provide text and userId for the post.";
pub const POSTS_RETRIEVE_FAILED: &str = "The posts information could not be retrieved.";
pub const POST_RETRIEVE_FAILED: &str = "The post information could not be retrieved.";
pub const POST_SAVE_FAILED: &str = "There was an error while saving the post to the database";
pub const POST_REMOVE_FAILED: &str = "The post could not be removed";
pub const POST_MODIFY_FAILED: &str = "The post information could not be modified.";
pub const POST_DELETED: &str = "The post was deleted";
pub const POST_UPDATED: &str = "The post has updated";

pub struct PostService<R: PostRepository> {
    repo: R,
}

impl<R: PostRepository> PostService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub async fn list_posts(&self) -> Result<Vec<Post>, AppError> {
        self.repo
            .list()
            .await
            .map_err(AppError::persistence(POSTS_RETRIEVE_FAILED))
    }

    pub async fn get_post(&self, id: i64) -> Result<Post, AppError> {
        self.repo
            .get(id)
            .await
            .map_err(AppError::persistence(POST_RETRIEVE_FAILED))?
            .ok_or(AppError::NotFound(POST_NOT_FOUND))
    }

    pub async fn create_post(
        &self,
        text: Option<String>,
        user_id: Option<i64>,
    ) -> Result<Post, AppError> {
        let post = NewPost::from_input(text, user_id)
            .map_err(|_| AppError::Invalid(POST_FIELDS_REQUIRED))?;
        let id = self
            .repo
            .insert(post)
            .await
            .map_err(AppError::persistence(POST_SAVE_FAILED))?;
        self.repo
            .get(id)
            .await
            .map_err(AppError::persistence(POST_SAVE_FAILED))?
            .ok_or(AppError::Invalid(POST_FIELDS_REQUIRED))
    }

    pub async fn update_post(
        &self,
        id: i64,
        text: Option<String>,
        user_id: Option<i64>,
    ) -> Result<(), AppError> {
        let post = NewPost::from_input(text, user_id)
            .map_err(|_| AppError::Invalid(POST_FIELDS_REQUIRED))?;
        self.repo
            .update(id, post)
            .await
            .map_err(AppError::persistence(POST_MODIFY_FAILED))?;
        Ok(())
    }

    pub async fn delete_post(&self, id: i64) -> Result<(), AppError> {
        self.repo
            .remove(id)
            .await
            .map_err(AppError::persistence(POST_REMOVE_FAILED))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blog_repo::memory::InMemoryPostRepo;

    #[tokio::test]
    async fn create_update_and_delete_post() {
        let svc = PostService::new(InMemoryPostRepo::new());
        let post = svc.create_post(Some("hi".into()), Some(1)).await.unwrap();
        assert_eq!(
            post,
            Post {
                id: 1,
                text: "hi".into(),
                user_id: 1
            }
        );

        svc.update_post(post.id, Some("bye".into()), Some(2))
            .await
            .unwrap();
        let got = svc.get_post(post.id).await.unwrap();
        assert_eq!(got.text, "bye");
        assert_eq!(got.user_id, 2);

        svc.delete_post(post.id).await.unwrap();
        let missing = svc.get_post(post.id).await;
        assert!(matches!(missing, Err(AppError::NotFound(POST_NOT_FOUND))));
    }

    #[tokio::test]
    async fn validation_errors_propagate() {
        let svc = PostService::new(InMemoryPostRepo::new());
        let res = svc.create_post(Some("hi".into()), None).await;
        assert!(matches!(res, Err(AppError::Invalid(POST_FIELDS_REQUIRED))));

        let res = svc.update_post(1, None, Some(1)).await;
        assert!(matches!(res, Err(AppError::Invalid(POST_FIELDS_REQUIRED))));

        assert!(svc.list_posts().await.unwrap().is_empty());
    }
}
