///  To run :
///  cargo r --example client_example
use blog_client::{BlogClient, PostInput, UserInput};
use blog_hex::application::post_service::PostService;
use blog_hex::application::user_service::UserService;
use blog_hex::inbound::http::{HttpServer, HttpServerConfig};
use blog_repo::{build_repos, Repos};
use tempfile::tempdir;

fn find_free_port() -> anyhow::Result<u16> {
    Ok(std::net::TcpListener::bind("127.0.0.1:0")?
        .local_addr()?
        .port())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let port = find_free_port()?;
    let addr = format!("http://127.0.0.1:{port}/");

    // Use a temp file-backed SQLite DB so multiple connections see the same data.
    let tmp = tempdir()?;
    let db_path = tmp.path().join("blog.db");
    let db_url = format!("sqlite://{}", db_path.display());

    let Repos { users, posts } = build_repos(Some(&db_url)).await?;
    let server = HttpServer::new(
        UserService::new(users),
        PostService::new(posts),
        HttpServerConfig {
            port: port.to_string(),
        },
    )
    .await?;

    let handle = tokio::spawn(async move {
        if let Err(e) = server.run().await {
            eprintln!("server error: {e:?}");
        }
    });
    tokio::time::sleep(std::time::Duration::from_millis(100)).await;

    let client = BlogClient::new(&addr)?;
    println!("{}", client.welcome().await?);

    let user = client
        .create_user(&UserInput {
            name: "ada".into(),
        })
        .await?;
    println!("created user: {user:?}");

    let post = client
        .create_post(&PostInput {
            text: "hello from the client".into(),
            user_id: user.id,
        })
        .await?;
    println!("created post: {post:?}");

    let updated = client
        .update_post(
            post.id,
            &PostInput {
                text: "edited".into(),
                user_id: user.id,
            },
        )
        .await?;
    println!("{}", updated.message);

    println!("posts: {:?}", client.list_posts().await?);
    println!("{}", client.delete_post(post.id).await?.message);
    println!("{}", client.delete_user(user.id).await?.message);

    handle.abort();
    Ok(())
}
