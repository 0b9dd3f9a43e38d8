pub mod article;
pub mod error;
pub mod friend;
pub mod pagination;
