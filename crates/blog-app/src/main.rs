use blog_hex::application::post_service::PostService;
use blog_hex::application::user_service::UserService;
use blog_hex::config::Config;
use blog_hex::inbound::http::{HttpServer, HttpServerConfig};
use blog_repo::{build_repos, Repos};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env for DATABASE_URL / SERVER_PORT when present.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
        .init();

    let config = Config::from_env()?;
    let Repos { users, posts } = build_repos(config.database_url.as_deref()).await?;

    let server_cfg = HttpServerConfig {
        port: config.server_port.clone(),
    };

    let http = HttpServer::new(UserService::new(users), PostService::new(posts), server_cfg).await?;
    tracing::info!(port = %config.server_port, "blog api configured");
    http.run().await
}
