use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    middleware,
    routing::{get, post, put},
    Json, Router,
};
use serde::Deserialize;

use super::{json_body, normalize::uppercase_name, parse_id, MessageBody};
use crate::application::user_service::{
    UserService, USER_DELETED, USER_FIELDS_REQUIRED, USER_NOT_FOUND, USER_UPDATED,
};
use crate::errors::AppError;
use blog_types::domain::user::User;
use blog_types::ports::UserRepository;

#[derive(Deserialize)]
pub struct UserRequest {
    pub name: Option<String>,
}

pub(super) fn routes<R: UserRepository>(service: Arc<UserService<R>>) -> Router {
    Router::new()
        .route("/api/users", get(list_users::<R>))
        .route(
            "/api/users",
            post(create_user::<R>).route_layer(middleware::from_fn(uppercase_name)),
        )
        .route(
            "/api/users/{userId}",
            get(get_user::<R>).delete(delete_user::<R>),
        )
        .route(
            "/api/users/{userId}",
            put(update_user::<R>).route_layer(middleware::from_fn(uppercase_name)),
        )
        .with_state(service)
}

async fn list_users<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
) -> Result<Json<Vec<User>>, AppError> {
    Ok(Json(service.list_users().await?))
}

async fn get_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Path(id): Path<String>,
) -> Result<Json<User>, AppError> {
    let id = parse_id(&id).ok_or(AppError::NotFound(USER_NOT_FOUND))?;
    Ok(Json(service.get_user(id).await?))
}

async fn create_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    body: Result<Json<UserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<User>), AppError> {
    let payload = json_body(body, USER_FIELDS_REQUIRED)?;
    let user = service.create_user(payload.name).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

async fn update_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Path(id): Path<String>,
    body: Result<Json<UserRequest>, JsonRejection>,
) -> Result<Json<MessageBody>, AppError> {
    let id = parse_id(&id).ok_or(AppError::NotFound(USER_NOT_FOUND))?;
    let payload = json_body(body, USER_FIELDS_REQUIRED)?;
    service.update_user(id, payload.name).await?;
    Ok(Json(MessageBody {
        message: USER_UPDATED,
    }))
}

async fn delete_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Path(id): Path<String>,
) -> Result<Json<MessageBody>, AppError> {
    let id = parse_id(&id).ok_or(AppError::NotFound(USER_NOT_FOUND))?;
    service.delete_user(id).await?;
    Ok(Json(MessageBody {
        message: USER_DELETED,
    }))
}
