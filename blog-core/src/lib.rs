//! Content layer of the blog: articles with pagination, friend links and the
//! route table that maps site paths to pages.
//!
//! Articles come from an injected [`ArticleSource`]; the bundled sources are
//! the in-process fixture and a static JSON file. The HTTP-hosted JSON source
//! lives in the `blog-client` crate.

pub mod application;
pub mod data;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub use application::article_service::ArticleService;
pub use application::friend_service::FriendService;
pub use data::article_source::{ArticleSource, SourceError};
pub use data::sources::fixture::FixtureArticleSource;
pub use data::sources::json_file::JsonFileArticleSource;
pub use domain::article::{Article, ArticleContent};
pub use domain::error::ArticleError;
pub use domain::friend::{Friend, LinkKind};
pub use domain::pagination::{PaginatedResult, PaginationParams, paginate};
pub use presentation::routes::{PageId, RouteMatch, RouteTable};
