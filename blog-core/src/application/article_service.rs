use std::time::Duration;

use tracing::{debug, error, warn};

use super::pause;
use crate::data::article_source::ArticleSource;
use crate::domain::article::Article;
use crate::domain::error::{ArticleError, DETAIL_FAILED, LIST_FAILED};
use crate::domain::pagination::{PaginatedResult, PaginationParams, slice_page};

pub const DEFAULT_LIST_DELAY: Duration = Duration::from_millis(200);
pub const DEFAULT_DETAIL_DELAY: Duration = Duration::from_millis(100);

pub struct ArticleService<S: ArticleSource> {
    source: S,
    list_delay: Duration,
    detail_delay: Duration,
}

impl<S: ArticleSource> ArticleService<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            list_delay: DEFAULT_LIST_DELAY,
            detail_delay: DEFAULT_DETAIL_DELAY,
        }
    }

    pub fn with_delays(mut self, list_delay: Duration, detail_delay: Duration) -> Self {
        self.list_delay = list_delay;
        self.detail_delay = detail_delay;
        self
    }

    pub async fn fetch_articles(
        &self,
        params: PaginationParams,
    ) -> Result<PaginatedResult<Article>, ArticleError> {
        let params = params.validate()?;
        pause(self.list_delay).await;

        let articles = self.source.list_articles().await.map_err(|err| {
            error!(error = %err, "{}", LIST_FAILED);
            ArticleError::from(err)
        })?;

        let result = slice_page(articles, params);
        debug!(
            page = result.page,
            page_size = result.page_size,
            returned = result.items.len(),
            total = result.total,
            "articles page sliced"
        );
        Ok(result)
    }

    pub async fn fetch_article_by_id(&self, id: &str) -> Result<Article, ArticleError> {
        pause(self.detail_delay).await;

        let articles = self.source.list_articles().await.map_err(|err| {
            error!(error = %err, article_id = id, "{}", DETAIL_FAILED);
            ArticleError::from(err)
        })?;

        match articles.into_iter().find(|article| article.id == id) {
            Some(article) => Ok(article),
            None => {
                warn!(article_id = id, "article not found");
                Err(ArticleError::NotFound(id.to_string()))
            }
        }
    }
}
