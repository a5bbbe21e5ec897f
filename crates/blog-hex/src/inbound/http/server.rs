use axum::{body::HttpBody, routing::get, serve, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use super::{posts, security, users};
use crate::application::post_service::PostService;
use crate::application::user_service::UserService;
use blog_types::ports::{PostRepository, UserRepository};

#[derive(Clone)]
pub struct HttpServerConfig {
    pub port: String,
}

pub struct HttpServer<U, P>
where
    U: UserRepository,
    P: PostRepository,
{
    pub users: Arc<UserService<U>>,
    pub posts: Arc<PostService<P>>,
    pub config: HttpServerConfig,
}

impl<U, P> HttpServer<U, P>
where
    U: UserRepository,
    P: PostRepository,
{
    pub async fn new(
        users: UserService<U>,
        posts: PostService<P>,
        config: HttpServerConfig,
    ) -> anyhow::Result<Self> {
        Ok(Self {
            users: Arc::new(users),
            posts: Arc::new(posts),
            config,
        })
    }

    /// The full route table with logging, CORS and security headers applied.
    pub fn router(&self) -> Router {
        let trace_layer = TraceLayer::new_for_http()
            .make_span_with(|request: &axum::extract::Request<_>| {
                let uri = request.uri().to_string();
                let request_id = Uuid::new_v4();
                tracing::info_span!(
                    "http_request",
                    %request_id,
                    method = %request.method(),
                    uri
                )
            })
            .on_request(
                |request: &axum::extract::Request<_>, span: &tracing::Span| {
                    tracing::debug!(
                        parent: span,
                        method = %request.method(),
                        uri = %request.uri(),
                        "request"
                    );
                },
            )
            .on_response(
                |response: &axum::response::Response, latency: Duration, span: &tracing::Span| {
                    let size = response.body().size_hint().exact();
                    tracing::info!(
                        parent: span,
                        status = %response.status(),
                        size,
                        latency_ms = %latency.as_millis(),
                        "response"
                    );
                },
            );

        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        let app = Router::new()
            .route("/", get(welcome))
            .merge(users::routes(self.users.clone()))
            .merge(posts::routes(self.posts.clone()))
            .layer(cors);

        security::with_security_headers(app).layer(trace_layer)
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let app = self.router();
        let addr: SocketAddr = format!("0.0.0.0:{}", self.config.port).parse()?;
        tracing::info!("API running on {}", addr);
        let listener = tokio::net::TcpListener::bind(addr).await?;
        serve(listener, app.into_make_service()).await?;
        Ok(())
    }
}

async fn welcome() -> &'static str {
    "Welcome!"
}
