use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::data::article_source::{ArticleSource, SourceError};
use crate::domain::article::Article;

/// Articles stored as a JSON array in a static file, re-read on every call.
#[derive(Debug, Clone)]
pub struct JsonFileArticleSource {
    path: PathBuf,
}

impl JsonFileArticleSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ArticleSource for JsonFileArticleSource {
    async fn list_articles(&self) -> Result<Vec<Article>, SourceError> {
        let raw = tokio::fs::read(&self.path)
            .await
            .map_err(|err| SourceError::Io(format!("{}: {err}", self.path.display())))?;

        serde_json::from_slice::<Vec<Article>>(&raw)
            .map_err(|err| SourceError::Decode(format!("{}: {err}", self.path.display())))
    }
}
