use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use super::{json_body, parse_id, MessageBody};
use crate::application::post_service::{
    PostService, POST_DELETED, POST_FIELDS_REQUIRED, POST_NOT_FOUND, POST_UPDATED,
};
use crate::errors::AppError;
use blog_types::domain::post::Post;
use blog_types::ports::PostRepository;

#[derive(Deserialize)]
pub struct PostRequest {
    pub text: Option<String>,
    #[serde(rename = "userId")]
    pub user_id: Option<i64>,
}

pub(super) fn routes<R: PostRepository>(service: Arc<PostService<R>>) -> Router {
    Router::new()
        .route("/api/posts", get(list_posts::<R>).post(create_post::<R>))
        .route(
            "/api/posts/{postId}",
            get(get_post::<R>)
                .put(update_post::<R>)
                .delete(delete_post::<R>),
        )
        .with_state(service)
}

async fn list_posts<R: PostRepository>(
    State(service): State<Arc<PostService<R>>>,
) -> Result<Json<Vec<Post>>, AppError> {
    Ok(Json(service.list_posts().await?))
}

async fn get_post<R: PostRepository>(
    State(service): State<Arc<PostService<R>>>,
    Path(id): Path<String>,
) -> Result<Json<Post>, AppError> {
    let id = parse_id(&id).ok_or(AppError::NotFound(POST_NOT_FOUND))?;
    Ok(Json(service.get_post(id).await?))
}

async fn create_post<R: PostRepository>(
    State(service): State<Arc<PostService<R>>>,
    body: Result<Json<PostRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Post>), AppError> {
    let payload = json_body(body, POST_FIELDS_REQUIRED)?;
    let post = service.create_post(payload.text, payload.user_id).await?;
    Ok((StatusCode::CREATED, Json(post)))
}

async fn update_post<R: PostRepository>(
    State(service): State<Arc<PostService<R>>>,
    Path(id): Path<String>,
    body: Result<Json<PostRequest>, JsonRejection>,
) -> Result<Json<MessageBody>, AppError> {
    let id = parse_id(&id).ok_or(AppError::NotFound(POST_NOT_FOUND))?;
    let payload = json_body(body, POST_FIELDS_REQUIRED)?;
    service
        .update_post(id, payload.text, payload.user_id)
        .await?;
    Ok(Json(MessageBody {
        message: POST_UPDATED,
    }))
}

async fn delete_post<R: PostRepository>(
    State(service): State<Arc<PostService<R>>>,
    Path(id): Path<String>,
) -> Result<Json<MessageBody>, AppError> {
    let id = parse_id(&id).ok_or(AppError::NotFound(POST_NOT_FOUND))?;
    service.delete_post(id).await?;
    Ok(Json(MessageBody {
        message: POST_DELETED,
    }))
}
