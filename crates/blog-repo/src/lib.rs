#[cfg(not(any(feature = "memory", feature = "sqlite")))]
compile_error!("Enable a repo feature: `memory` or `sqlite`.");

use async_trait::async_trait;
use blog_types::domain::post::{NewPost, Post};
use blog_types::domain::user::{NewUser, User};
use blog_types::ports::{PostRepository, RepoError, UserRepository};

#[cfg(feature = "memory")]
pub mod memory;
#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(all(feature = "sqlite", not(feature = "memory")))]
const DEFAULT_DATABASE_URL: &str = "sqlite://blog.db";

/// User gateway selected at startup from the enabled features and configuration.
#[derive(Clone)]
pub enum UserRepo {
    #[cfg(feature = "memory")]
    Memory(memory::InMemoryUserRepo),
    #[cfg(feature = "sqlite")]
    Sqlite(sqlite::SqliteUserRepo),
}

#[derive(Clone)]
pub enum PostRepo {
    #[cfg(feature = "memory")]
    Memory(memory::InMemoryPostRepo),
    #[cfg(feature = "sqlite")]
    Sqlite(sqlite::SqlitePostRepo),
}

pub struct Repos {
    pub users: UserRepo,
    pub posts: PostRepo,
}

pub async fn build_repos(url: Option<&str>) -> anyhow::Result<Repos> {
    Repos::build(url).await
}

impl Repos {
    #[cfg(all(feature = "memory", not(feature = "sqlite")))]
    pub async fn build(url: Option<&str>) -> anyhow::Result<Self> {
        if url.is_some() {
            tracing::warn!("DATABASE_URL ignored: built without the `sqlite` feature");
        }
        Ok(Self::in_memory())
    }

    #[cfg(all(feature = "sqlite", not(feature = "memory")))]
    pub async fn build(url: Option<&str>) -> anyhow::Result<Self> {
        Self::sqlite(url.unwrap_or(DEFAULT_DATABASE_URL)).await
    }

    // With both backends compiled in, a configured URL picks SQLite.
    #[cfg(all(feature = "sqlite", feature = "memory"))]
    pub async fn build(url: Option<&str>) -> anyhow::Result<Self> {
        match url {
            Some(url) => Self::sqlite(url).await,
            None => Ok(Self::in_memory()),
        }
    }

    #[cfg(feature = "memory")]
    pub fn in_memory() -> Self {
        tracing::info!("using in-memory gateway");
        Self {
            users: UserRepo::Memory(memory::InMemoryUserRepo::new()),
            posts: PostRepo::Memory(memory::InMemoryPostRepo::new()),
        }
    }

    #[cfg(feature = "sqlite")]
    pub async fn sqlite(url: &str) -> anyhow::Result<Self> {
        let pool = sqlite::connect(url).await?;
        tracing::info!(url, "using sqlite gateway");
        Ok(Self {
            users: UserRepo::Sqlite(sqlite::SqliteUserRepo::new(pool.clone())),
            posts: PostRepo::Sqlite(sqlite::SqlitePostRepo::new(pool)),
        })
    }
}

macro_rules! dispatch {
    ($self:ident, $repo:ident => $call:expr) => {
        match $self {
            #[cfg(feature = "memory")]
            Self::Memory($repo) => $call,
            #[cfg(feature = "sqlite")]
            Self::Sqlite($repo) => $call,
        }
    };
}

#[async_trait]
impl UserRepository for UserRepo {
    async fn list(&self) -> Result<Vec<User>, RepoError> {
        dispatch!(self, repo => repo.list().await)
    }

    async fn get(&self, id: i64) -> Result<Option<User>, RepoError> {
        dispatch!(self, repo => repo.get(id).await)
    }

    async fn insert(&self, user: NewUser) -> Result<i64, RepoError> {
        dispatch!(self, repo => repo.insert(user).await)
    }

    async fn update(&self, id: i64, user: NewUser) -> Result<u64, RepoError> {
        dispatch!(self, repo => repo.update(id, user).await)
    }

    async fn remove(&self, id: i64) -> Result<u64, RepoError> {
        dispatch!(self, repo => repo.remove(id).await)
    }
}

#[async_trait]
impl PostRepository for PostRepo {
    async fn list(&self) -> Result<Vec<Post>, RepoError> {
        dispatch!(self, repo => repo.list().await)
    }

    async fn get(&self, id: i64) -> Result<Option<Post>, RepoError> {
        dispatch!(self, repo => repo.get(id).await)
    }

    async fn insert(&self, post: NewPost) -> Result<i64, RepoError> {
        dispatch!(self, repo => repo.insert(post).await)
    }

    async fn update(&self, id: i64, post: NewPost) -> Result<u64, RepoError> {
        dispatch!(self, repo => repo.update(id, post).await)
    }

    async fn remove(&self, id: i64) -> Result<u64, RepoError> {
        dispatch!(self, repo => repo.remove(id).await)
    }
}
