use serde::{Deserialize, Serialize};

pub const DEFAULT_BG_IMAGE: &str = "/basic/default_bg.png";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub markdown_path: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default)]
    pub word_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
}

/// What a detail page has to render for an article.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleContent<'a> {
    Inline(&'a str),
    /// Path of a hosted markdown document; it is never fetched here.
    Markdown(&'a str),
    Missing,
}

impl Article {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        tags: &[&str],
        created_at: impl Into<String>,
        updated_at: impl Into<String>,
        word_count: u32,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
            body: None,
            summary: None,
            markdown_path: None,
            created_at: created_at.into(),
            updated_at: updated_at.into(),
            word_count,
            bg_image: None,
            categories: None,
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_markdown_path(mut self, path: impl Into<String>) -> Self {
        self.markdown_path = Some(path.into());
        self
    }

    pub fn with_bg_image(mut self, image: impl Into<String>) -> Self {
        self.bg_image = Some(image.into());
        self
    }

    /// Inline body wins over the markdown reference.
    pub fn content(&self) -> ArticleContent<'_> {
        match (&self.body, &self.markdown_path) {
            (Some(body), _) => ArticleContent::Inline(body),
            (None, Some(path)) => ArticleContent::Markdown(path),
            (None, None) => ArticleContent::Missing,
        }
    }

    pub fn bg_image_or_default(&self) -> &str {
        self.bg_image.as_deref().unwrap_or(DEFAULT_BG_IMAGE)
    }
}
