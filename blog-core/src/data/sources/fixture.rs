use async_trait::async_trait;

use crate::data::article_source::{ArticleSource, SourceError};
use crate::data::fixtures;
use crate::domain::article::Article;

#[derive(Debug, Clone)]
pub struct FixtureArticleSource {
    articles: Vec<Article>,
}

impl FixtureArticleSource {
    pub fn new() -> Self {
        Self::from_articles(fixtures::articles())
    }

    pub fn from_articles(articles: Vec<Article>) -> Self {
        Self { articles }
    }
}

impl Default for FixtureArticleSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ArticleSource for FixtureArticleSource {
    async fn list_articles(&self) -> Result<Vec<Article>, SourceError> {
        Ok(self.articles.clone())
    }
}
