//! Typed async client for the blog HTTP API.

use std::time::Duration;

use anyhow::Context;
use blog_types::domain::post::Post;
use blog_types::domain::user::User;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Url;
use serde::{Deserialize, Serialize};

#[derive(Clone)]
pub struct BlogClientBuilder {
    base: Url,
    headers: HeaderMap,
    timeout: Option<Duration>,
    client: Option<reqwest::Client>,
}

#[derive(Clone)]
pub struct BlogClient {
    base: Url,
    client: reqwest::Client,
}

impl BlogClient {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        Self::builder(base_url)?.build()
    }

    pub fn builder(base_url: &str) -> anyhow::Result<BlogClientBuilder> {
        let base = Url::parse(base_url).context("invalid base url")?;
        Ok(BlogClientBuilder {
            base,
            headers: HeaderMap::new(),
            timeout: None,
            client: None,
        })
    }

    fn url(&self, path: &str) -> anyhow::Result<Url> {
        self.base.join(path).context("failed to join url")
    }

    pub async fn welcome(&self) -> anyhow::Result<String> {
        let res = self
            .client
            .get(self.url("")?)
            .send()
            .await?
            .error_for_status()?;
        Ok(res.text().await?)
    }

    pub async fn list_users(&self) -> anyhow::Result<Vec<User>> {
        let res = self
            .client
            .get(self.url("api/users")?)
            .send()
            .await?
            .error_for_status()?;
        Ok(res.json().await?)
    }

    pub async fn get_user(&self, id: i64) -> anyhow::Result<User> {
        let res = self
            .client
            .get(self.url(&format!("api/users/{id}"))?)
            .send()
            .await?
            .error_for_status()?;
        Ok(res.json().await?)
    }

    pub async fn create_user(&self, req: &UserInput) -> anyhow::Result<User> {
        let res = self
            .client
            .post(self.url("api/users")?)
            .json(req)
            .send()
            .await?
            .error_for_status()?;
        Ok(res.json().await?)
    }

    pub async fn update_user(&self, id: i64, req: &UserInput) -> anyhow::Result<MessageResponse> {
        let res = self
            .client
            .put(self.url(&format!("api/users/{id}"))?)
            .json(req)
            .send()
            .await?
            .error_for_status()?;
        Ok(res.json().await?)
    }

    pub async fn delete_user(&self, id: i64) -> anyhow::Result<MessageResponse> {
        let res = self
            .client
            .delete(self.url(&format!("api/users/{id}"))?)
            .send()
            .await?
            .error_for_status()?;
        Ok(res.json().await?)
    }

    pub async fn list_posts(&self) -> anyhow::Result<Vec<Post>> {
        let res = self
            .client
            .get(self.url("api/posts")?)
            .send()
            .await?
            .error_for_status()?;
        Ok(res.json().await?)
    }

    pub async fn get_post(&self, id: i64) -> anyhow::Result<Post> {
        let res = self
            .client
            .get(self.url(&format!("api/posts/{id}"))?)
            .send()
            .await?
            .error_for_status()?;
        Ok(res.json().await?)
    }

    pub async fn create_post(&self, req: &PostInput) -> anyhow::Result<Post> {
        let res = self
            .client
            .post(self.url("api/posts")?)
            .json(req)
            .send()
            .await?
            .error_for_status()?;
        Ok(res.json().await?)
    }

    pub async fn update_post(&self, id: i64, req: &PostInput) -> anyhow::Result<MessageResponse> {
        let res = self
            .client
            .put(self.url(&format!("api/posts/{id}"))?)
            .json(req)
            .send()
            .await?
            .error_for_status()?;
        Ok(res.json().await?)
    }

    pub async fn delete_post(&self, id: i64) -> anyhow::Result<MessageResponse> {
        let res = self
            .client
            .delete(self.url(&format!("api/posts/{id}"))?)
            .send()
            .await?
            .error_for_status()?;
        Ok(res.json().await?)
    }
}

impl BlogClientBuilder {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_header(
        mut self,
        key: impl AsRef<str>,
        value: impl AsRef<str>,
    ) -> anyhow::Result<Self> {
        let header_name =
            HeaderName::from_bytes(key.as_ref().as_bytes()).context("invalid header name")?;
        let header_value = HeaderValue::from_str(value.as_ref()).context("invalid header value")?;
        self.headers.insert(header_name, header_value);
        Ok(self)
    }

    pub fn with_reqwest_client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    pub fn build(self) -> anyhow::Result<BlogClient> {
        if let Some(client) = self.client {
            return Ok(BlogClient {
                base: self.base,
                client,
            });
        }

        let mut builder = reqwest::Client::builder();
        if !self.headers.is_empty() {
            builder = builder.default_headers(self.headers);
        }
        if let Some(t) = self.timeout {
            builder = builder.timeout(t);
        }
        let client = builder.build()?;
        tracing::debug!(base = %self.base, "blog client ready");
        Ok(BlogClient {
            base: self.base,
            client,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserInput {
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PostInput {
    pub text: String,
    #[serde(rename = "userId")]
    pub user_id: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}
