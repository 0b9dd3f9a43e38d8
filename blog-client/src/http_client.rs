use std::time::Duration;

use blog_core::Article;
use reqwest::Client;
use tracing::debug;

use crate::error::{BlogClientError, BlogClientResult};

/// Путь к документу со статьями относительно корня сайта.
pub const DEFAULT_ARTICLES_PATH: &str = "/data/articles.json";

#[derive(Debug, Clone)]
/// HTTP-клиент для статически размещённого JSON-документа со статьями.
///
/// Каждый вызов заново скачивает документ целиком: кеша нет.
pub struct StaticJsonClient {
    url: String,
    client: Client,
}

impl StaticJsonClient {
    /// Создаёт клиент для полного URL документа, например
    /// `https://example.com/data/articles.json`.
    pub fn new(url: impl Into<String>) -> BlogClientResult<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(15))
            .build()
            .map_err(|err| BlogClientError::Setup(err.to_string()))?;

        Ok(Self::with_client(url, client))
    }

    /// Создаёт клиент по корню сайта и пути документа.
    pub fn from_site(base_url: &str, path: &str) -> BlogClientResult<Self> {
        Self::new(endpoint(base_url, path))
    }

    /// Создаёт клиент поверх уже настроенного `reqwest::Client`.
    pub fn with_client(url: impl Into<String>, client: Client) -> Self {
        Self {
            url: url.into(),
            client,
        }
    }

    /// URL документа со статьями.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Загружает и разбирает документ. Любой статус кроме 2xx считается ошибкой.
    pub async fn fetch_articles(&self) -> BlogClientResult<Vec<Article>> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(BlogClientError::from_reqwest)?;

        let status = response.status();
        if !status.is_success() {
            return Err(BlogClientError::Status(status));
        }

        let body = response
            .bytes()
            .await
            .map_err(BlogClientError::from_reqwest)?;
        let articles = serde_json::from_slice::<Vec<Article>>(&body)
            .map_err(|err| BlogClientError::Decode(err.to_string()))?;

        debug!(url = %self.url, count = articles.len(), "articles document fetched");
        Ok(articles)
    }
}

fn endpoint(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
