//! Comment listing, creation, and deletion.

use rusqlite::{params, Connection, Row};
use serde::{Deserialize, Serialize};

use crate::{articles, StoreError};

/// A reply attached to an article.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Comment {
    pub comment_id: i64,
    pub votes: i64,
    /// Creation timestamp (ISO 8601).
    pub created_at: String,
    pub author: String,
    pub body: String,
    pub article_id: i64,
}

/// Lists the comments on an article, newest first.
///
/// The article must exist (`ArticleNotFound` otherwise); an article with no
/// comments yields an empty list, not an error.
pub fn list_for_article(conn: &Connection, article_id: i64) -> Result<Vec<Comment>, StoreError> {
    if !articles::article_exists(conn, article_id)? {
        return Err(StoreError::ArticleNotFound(article_id));
    }

    let mut stmt = conn.prepare(
        "SELECT comment_id, votes, created_at, author, body, article_id
         FROM comments
         WHERE article_id = ?1
         ORDER BY created_at DESC",
    )?;

    let rows = stmt.query_map([article_id], map_row_to_comment)?;
    let mut comments = Vec::new();
    for row in rows {
        comments.push(row?);
    }
    Ok(comments)
}

/// Creates a comment on an article, returning the stored row.
///
/// The article must exist (`ArticleNotFound` otherwise), checked before the
/// insert so a missing article is never reported as an author failure. An
/// unknown `author` violates the `comments.author` foreign key and surfaces
/// as `StoreError::Database` carrying SQLite's constraint code for the HTTP
/// layer to translate.
pub fn create_comment(
    conn: &Connection,
    article_id: i64,
    author: &str,
    body: &str,
) -> Result<Comment, StoreError> {
    if !articles::article_exists(conn, article_id)? {
        return Err(StoreError::ArticleNotFound(article_id));
    }

    let comment = conn.query_row(
        "INSERT INTO comments (article_id, author, body)
         VALUES (?1, ?2, ?3)
         RETURNING comment_id, votes, created_at, author, body, article_id",
        params![article_id, author, body],
        map_row_to_comment,
    )?;

    Ok(comment)
}

/// Deletes a comment by id. `CommentNotFound` when no row was affected.
pub fn delete_comment(conn: &Connection, comment_id: i64) -> Result<(), StoreError> {
    let count = conn.execute("DELETE FROM comments WHERE comment_id = ?1", [comment_id])?;
    if count == 0 {
        return Err(StoreError::CommentNotFound(comment_id));
    }
    Ok(())
}

fn map_row_to_comment(row: &Row) -> rusqlite::Result<Comment> {
    Ok(Comment {
        comment_id: row.get(0)?,
        votes: row.get(1)?,
        created_at: row.get(2)?,
        author: row.get(3)?,
        body: row.get(4)?,
        article_id: row.get(5)?,
    })
}
