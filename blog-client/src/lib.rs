//! Клиентская библиотека для чтения статически размещённого JSON-документа со
//! статьями блога.
//!
//! [`StaticJsonClient`] загружает документ по HTTP (`reqwest`), проверяет
//! статус ответа и разбирает массив статей. Клиент реализует
//! [`blog_core::ArticleSource`], поэтому его можно передать в
//! [`blog_core::ArticleService`] вместо встроенных фикстур.
#![warn(missing_docs)]

mod error;
mod http_client;

pub use error::{BlogClientError, BlogClientResult};
pub use http_client::{DEFAULT_ARTICLES_PATH, StaticJsonClient};

use async_trait::async_trait;
use blog_core::{Article, ArticleSource, SourceError};

#[async_trait]
impl ArticleSource for StaticJsonClient {
    async fn list_articles(&self) -> Result<Vec<Article>, SourceError> {
        self.fetch_articles().await.map_err(SourceError::from)
    }
}
