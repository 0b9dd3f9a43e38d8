use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};

use crate::application::article_service::{DEFAULT_DETAIL_DELAY, DEFAULT_LIST_DELAY};
use crate::application::friend_service::DEFAULT_FRIENDS_DELAY;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Fixture,
    File,
    Http,
}

impl FromStr for SourceKind {
    type Err = anyhow::Error;

    fn from_str(raw: &str) -> Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "fixture" => Ok(Self::Fixture),
            "file" => Ok(Self::File),
            "http" => Ok(Self::Http),
            other => Err(anyhow!(
                "unknown article source '{other}', expecting fixture|file|http"
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub source: SourceKind,
    pub articles_location: Option<String>,
    pub list_delay: Duration,
    pub detail_delay: Duration,
    pub friends_delay: Duration,
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            source: SourceKind::Fixture,
            articles_location: None,
            list_delay: DEFAULT_LIST_DELAY,
            detail_delay: DEFAULT_DETAIL_DELAY,
            friends_delay: DEFAULT_FRIENDS_DELAY,
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let source = match non_empty(lookup("BLOG_ARTICLE_SOURCE")) {
            Some(raw) => raw
                .parse::<SourceKind>()
                .context("BLOG_ARTICLE_SOURCE is invalid")?,
            None => defaults.source,
        };
        let articles_location = non_empty(lookup("BLOG_ARTICLES_LOCATION"));
        let list_delay = parse_millis(&lookup, "BLOG_LIST_DELAY_MS", defaults.list_delay)?;
        let detail_delay = parse_millis(&lookup, "BLOG_DETAIL_DELAY_MS", defaults.detail_delay)?;
        let friends_delay =
            parse_millis(&lookup, "BLOG_FRIENDS_DELAY_MS", defaults.friends_delay)?;
        let log_level = non_empty(lookup("LOG_LEVEL"))
            .or_else(|| non_empty(lookup("RUST_LOG")))
            .unwrap_or(defaults.log_level);

        Ok(Self {
            source,
            articles_location,
            list_delay,
            detail_delay,
            friends_delay,
            log_level,
        })
    }

    /// Location of the JSON document; required by the file and http sources.
    pub fn require_location(&self) -> Result<&str> {
        self.articles_location
            .as_deref()
            .ok_or_else(|| {
                anyhow!(
                    "BLOG_ARTICLES_LOCATION is required for the {:?} source",
                    self.source
                )
            })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_millis(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: Duration,
) -> Result<Duration> {
    match non_empty(lookup(key)) {
        Some(raw) => raw
            .parse::<u64>()
            .map(Duration::from_millis)
            .with_context(|| format!("Failed to parse {key}, expecting milliseconds")),
        None => Ok(default),
    }
}
