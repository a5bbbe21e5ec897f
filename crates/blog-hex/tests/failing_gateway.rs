use async_trait::async_trait;
use blog_hex::application::post_service::PostService;
use blog_hex::application::user_service::UserService;
use blog_hex::domain::post::{NewPost, Post};
use blog_hex::domain::user::{NewUser, User};
use blog_hex::inbound::http::{HttpServer, HttpServerConfig};
use blog_hex::ports::{PostRepository, RepoError, UserRepository};
use reqwest::StatusCode;
use serde_json::{json, Value};

/// Gateway whose every operation rejects.
struct BrokenRepo;

fn broken() -> RepoError {
    RepoError::Db("database is locked".into())
}

#[async_trait]
impl UserRepository for BrokenRepo {
    async fn list(&self) -> Result<Vec<User>, RepoError> {
        Err(broken())
    }
    async fn get(&self, _id: i64) -> Result<Option<User>, RepoError> {
        Err(broken())
    }
    async fn insert(&self, _user: NewUser) -> Result<i64, RepoError> {
        Err(broken())
    }
    async fn update(&self, _id: i64, _user: NewUser) -> Result<u64, RepoError> {
        Err(broken())
    }
    async fn remove(&self, _id: i64) -> Result<u64, RepoError> {
        Err(broken())
    }
}

#[async_trait]
impl PostRepository for BrokenRepo {
    async fn list(&self) -> Result<Vec<Post>, RepoError> {
        Err(broken())
    }
    async fn get(&self, _id: i64) -> Result<Option<Post>, RepoError> {
        Err(broken())
    }
    async fn insert(&self, _post: NewPost) -> Result<i64, RepoError> {
        Err(broken())
    }
    async fn update(&self, _id: i64, _post: NewPost) -> Result<u64, RepoError> {
        Err(broken())
    }
    async fn remove(&self, _id: i64) -> Result<u64, RepoError> {
        Err(broken())
    }
}

/// Gateway that hands out ids for rows it never stores.
struct ForgetfulRepo;

#[async_trait]
impl UserRepository for ForgetfulRepo {
    async fn list(&self) -> Result<Vec<User>, RepoError> {
        Ok(vec![])
    }
    async fn get(&self, _id: i64) -> Result<Option<User>, RepoError> {
        Ok(None)
    }
    async fn insert(&self, _user: NewUser) -> Result<i64, RepoError> {
        Ok(1)
    }
    async fn update(&self, _id: i64, _user: NewUser) -> Result<u64, RepoError> {
        Ok(0)
    }
    async fn remove(&self, _id: i64) -> Result<u64, RepoError> {
        Ok(0)
    }
}

async fn spawn<U: UserRepository, P: PostRepository>(
    users: U,
    posts: P,
) -> (String, tokio::task::JoinHandle<()>) {
    let server = HttpServer::new(
        UserService::new(users),
        PostService::new(posts),
        HttpServerConfig { port: "0".into() },
    )
    .await
    .unwrap();
    let app = server.router();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{}", addr), handle)
}

async fn expect_500(res: reqwest::Response, message: &str) {
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = res.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "error": message,
            "err": { "code": "DB", "message": "database is locked" }
        })
    );
}

#[tokio::test]
async fn gateway_failures_map_to_500_with_raw_error() {
    let (base, handle) = spawn(BrokenRepo, BrokenRepo).await;
    let client = reqwest::Client::new();

    expect_500(
        client.get(format!("{base}/api/users")).send().await.unwrap(),
        "The users information could not be retrieved.",
    )
    .await;
    expect_500(
        client.get(format!("{base}/api/users/1")).send().await.unwrap(),
        "The user information could not be retrieved.",
    )
    .await;
    expect_500(
        client
            .post(format!("{base}/api/users"))
            .json(&json!({ "name": "ada" }))
            .send()
            .await
            .unwrap(),
        "There was an error while saving the user to the database",
    )
    .await;
    expect_500(
        client
            .put(format!("{base}/api/users/1"))
            .json(&json!({ "name": "ada" }))
            .send()
            .await
            .unwrap(),
        "The user information could not be modified.",
    )
    .await;
    expect_500(
        client.delete(format!("{base}/api/users/1")).send().await.unwrap(),
        "The user could not be removed",
    )
    .await;

    expect_500(
        client.get(format!("{base}/api/posts")).send().await.unwrap(),
        "The posts information could not be retrieved.",
    )
    .await;
    expect_500(
        client.get(format!("{base}/api/posts/1")).send().await.unwrap(),
        "The post information could not be retrieved.",
    )
    .await;
    expect_500(
        client
            .post(format!("{base}/api/posts"))
            .json(&json!({ "text": "hi", "userId": 1 }))
            .send()
            .await
            .unwrap(),
        "There was an error while saving the post to the database",
    )
    .await;
    expect_500(
        client
            .put(format!("{base}/api/posts/1"))
            .json(&json!({ "text": "hi", "userId": 1 }))
            .send()
            .await
            .unwrap(),
        "The post information could not be modified.",
    )
    .await;
    expect_500(
        client.delete(format!("{base}/api/posts/1")).send().await.unwrap(),
        "The post could not be removed",
    )
    .await;

    handle.abort();
}

#[tokio::test]
async fn vanished_insert_reports_missing_fields() {
    let (base, handle) = spawn(ForgetfulRepo, BrokenRepo).await;
    let res = reqwest::Client::new()
        .post(format!("{base}/api/users"))
        .json(&json!({ "name": "ada" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(
        body,
        json!({ "errorMessage": "Please provide name for the user." })
    );
    handle.abort();
}
