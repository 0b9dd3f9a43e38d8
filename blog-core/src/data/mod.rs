pub mod article_source;
pub mod fixtures;
pub mod sources;
