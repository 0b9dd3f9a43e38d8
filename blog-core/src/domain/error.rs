use thiserror::Error;

use crate::data::article_source::SourceError;

pub const LIST_FAILED: &str = "failed to fetch article list";
pub const DETAIL_FAILED: &str = "failed to fetch article detail";

#[derive(Debug, Error)]
pub enum ArticleError {
    #[error("article not found: {0}")]
    NotFound(String),

    #[error("article source failed: {0}")]
    Source(#[from] SourceError),

    #[error("invalid pagination for '{field}': {message}")]
    InvalidPagination {
        field: &'static str,
        message: &'static str,
    },
}

impl ArticleError {
    /// Generic text for the reader, without source details.
    pub fn user_message(&self, operation: &'static str) -> &'static str {
        match self {
            Self::NotFound(_) => "article not found",
            Self::InvalidPagination { .. } => "invalid pagination",
            Self::Source(_) => operation,
        }
    }
}
