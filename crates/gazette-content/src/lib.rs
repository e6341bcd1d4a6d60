//! Content model and data access for the gazette API.
//!
//! Implements parameterized SQL against the four content tables (`topics`,
//! `users`, `articles`, `comments`) and returns typed records or a
//! structured [`StoreError`]. All functions operate on a borrowed
//! [`rusqlite::Connection`] leased from the server's pool; nothing in this
//! crate owns connections or holds state between calls.

use thiserror::Error;

pub mod articles;
pub mod comments;
pub mod topics;
pub mod users;

/// Errors that can occur during content operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("article not found: {0}")]
    ArticleNotFound(i64),
    #[error("comment not found: {0}")]
    CommentNotFound(i64),
    #[error("topic not found: {0}")]
    TopicNotFound(String),
}
