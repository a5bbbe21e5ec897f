use async_trait::async_trait;
use blog_types::domain::post::{NewPost, Post};
use blog_types::domain::user::{NewUser, User};
use blog_types::ports::{PostRepository, RepoError, UserRepository};
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{FromRow, SqlitePool};
use std::str::FromStr;

const MIGRATIONS: [&str; 2] = [
    include_str!("../migrations/0001_create_users.sql"),
    include_str!("../migrations/0002_create_posts.sql"),
];

/// Opens (creating if needed) the database at `database_url` and applies the schema.
pub async fn connect(database_url: &str) -> anyhow::Result<SqlitePool> {
    // Ensure on-disk SQLite target directory exists (no-op for in-memory).
    if let Some(path) = database_url.strip_prefix("sqlite://") {
        if path != ":memory:" {
            let p = std::path::Path::new(path);
            if let Some(parent) = p.parent() {
                if !parent.as_os_str().is_empty() {
                    tokio::fs::create_dir_all(parent).await?;
                }
            }
        }
    }

    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePool::connect_with(options).await?;

    for ddl in MIGRATIONS {
        sqlx::query(ddl).execute(&pool).await?;
    }
    tracing::debug!(database_url, "sqlite schema ready");

    Ok(pool)
}

fn db_error(e: sqlx::Error) -> RepoError {
    match &e {
        sqlx::Error::Database(db) if !matches!(db.kind(), sqlx::error::ErrorKind::Other) => {
            RepoError::Constraint(db.message().to_string())
        }
        _ => RepoError::Db(e.to_string()),
    }
}

#[derive(FromRow)]
struct DbUser {
    id: i64,
    name: String,
}

impl From<DbUser> for User {
    fn from(row: DbUser) -> Self {
        User {
            id: row.id,
            name: row.name,
        }
    }
}

#[derive(FromRow)]
struct DbPost {
    id: i64,
    text: String,
    user_id: i64,
}

impl From<DbPost> for Post {
    fn from(row: DbPost) -> Self {
        Post {
            id: row.id,
            text: row.text,
            user_id: row.user_id,
        }
    }
}

#[derive(Clone)]
pub struct SqliteUserRepo {
    pool: SqlitePool,
}

impl SqliteUserRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepo {
    async fn list(&self) -> Result<Vec<User>, RepoError> {
        let rows: Vec<DbUser> = sqlx::query_as("SELECT id, name FROM users ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(db_error)?;
        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn get(&self, id: i64) -> Result<Option<User>, RepoError> {
        let row: Option<DbUser> = sqlx::query_as("SELECT id, name FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error)?;
        Ok(row.map(User::from))
    }

    async fn insert(&self, user: NewUser) -> Result<i64, RepoError> {
        let res = sqlx::query("INSERT INTO users (name) VALUES (?)")
            .bind(&user.name)
            .execute(&self.pool)
            .await
            .map_err(db_error)?;
        Ok(res.last_insert_rowid())
    }

    async fn update(&self, id: i64, user: NewUser) -> Result<u64, RepoError> {
        let res = sqlx::query("UPDATE users SET name = ? WHERE id = ?")
            .bind(&user.name)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error)?;
        Ok(res.rows_affected())
    }

    async fn remove(&self, id: i64) -> Result<u64, RepoError> {
        let res = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error)?;
        Ok(res.rows_affected())
    }
}

#[derive(Clone)]
pub struct SqlitePostRepo {
    pool: SqlitePool,
}

impl SqlitePostRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for SqlitePostRepo {
    async fn list(&self) -> Result<Vec<Post>, RepoError> {
        let rows: Vec<DbPost> = sqlx::query_as("SELECT id, text, user_id FROM posts ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(db_error)?;
        Ok(rows.into_iter().map(Post::from).collect())
    }

    async fn get(&self, id: i64) -> Result<Option<Post>, RepoError> {
        let row: Option<DbPost> =
            sqlx::query_as("SELECT id, text, user_id FROM posts WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(db_error)?;
        Ok(row.map(Post::from))
    }

    async fn insert(&self, post: NewPost) -> Result<i64, RepoError> {
        let res = sqlx::query("INSERT INTO posts (text, user_id) VALUES (?, ?)")
            .bind(&post.text)
            .bind(post.user_id)
            .execute(&self.pool)
            .await
            .map_err(db_error)?;
        Ok(res.last_insert_rowid())
    }

    async fn update(&self, id: i64, post: NewPost) -> Result<u64, RepoError> {
        let res = sqlx::query("UPDATE posts SET text = ?, user_id = ? WHERE id = ?")
            .bind(&post.text)
            .bind(post.user_id)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error)?;
        Ok(res.rows_affected())
    }

    async fn remove(&self, id: i64) -> Result<u64, RepoError> {
        let res = sqlx::query("DELETE FROM posts WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error)?;
        Ok(res.rows_affected())
    }
}
