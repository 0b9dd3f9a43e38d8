use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::article::Article;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    #[error("unexpected status: {0}")]
    Status(u16),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("decode error: {0}")]
    Decode(String),

    #[error("io error: {0}")]
    Io(String),
}

/// Read side of an article collection. Every call returns the whole
/// collection in its stored order.
#[async_trait]
pub trait ArticleSource: Send + Sync {
    async fn list_articles(&self) -> Result<Vec<Article>, SourceError>;
}

#[async_trait]
impl<T: ArticleSource + ?Sized> ArticleSource for Arc<T> {
    async fn list_articles(&self) -> Result<Vec<Article>, SourceError> {
        (**self).list_articles().await
    }
}
