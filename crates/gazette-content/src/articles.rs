//! Article listing, retrieval, and vote adjustment.

use rusqlite::{params, Connection, OptionalExtension, Row};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

use crate::{topics, StoreError};

/// Columns the article listing may be sorted by.
///
/// The variants are a fixed allow-list; only [`SortColumn::as_sql`] output
/// ever reaches the dynamically assembled ORDER BY clause, so user input
/// never appears in SQL text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortColumn {
    Author,
    Title,
    ArticleId,
    Topic,
    #[default]
    CreatedAt,
    Votes,
    ArticleImgUrl,
}

/// An unrecognized `sort_by` token.
#[derive(Debug, Error)]
#[error("invalid sort column: {0}")]
pub struct InvalidSortColumn(pub String);

impl FromStr for SortColumn {
    type Err = InvalidSortColumn;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "author" => Self::Author,
            "title" => Self::Title,
            "article_id" => Self::ArticleId,
            "topic" => Self::Topic,
            "created_at" => Self::CreatedAt,
            "votes" => Self::Votes,
            "article_img_url" => Self::ArticleImgUrl,
            other => return Err(InvalidSortColumn(other.to_string())),
        })
    }
}

impl SortColumn {
    fn as_sql(self) -> &'static str {
        match self {
            Self::Author => "articles.author",
            Self::Title => "articles.title",
            Self::ArticleId => "articles.article_id",
            Self::Topic => "articles.topic",
            Self::CreatedAt => "articles.created_at",
            Self::Votes => "articles.votes",
            Self::ArticleImgUrl => "articles.article_img_url",
        }
    }
}

/// Sort direction for the article listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

/// An unrecognized `order` token.
#[derive(Debug, Error)]
#[error("invalid order: {0}")]
pub struct InvalidOrder(pub String);

impl FromStr for SortOrder {
    type Err = InvalidOrder;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(InvalidOrder(other.to_string())),
        }
    }
}

impl SortOrder {
    fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// An article row as stored, including `body`. Returned by the vote update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Article {
    pub article_id: i64,
    pub author: String,
    pub title: String,
    pub body: String,
    pub topic: String,
    /// Creation timestamp (ISO 8601).
    pub created_at: String,
    pub votes: i64,
    pub article_img_url: String,
}

/// A listing row: no `body`, augmented with the computed comment count.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArticleSummary {
    pub author: String,
    pub title: String,
    pub article_id: i64,
    pub topic: String,
    pub created_at: String,
    pub votes: i64,
    pub article_img_url: String,
    /// Number of comments attached to the article; zero when it has none.
    pub comment_count: i64,
}

/// A single-article view: full record plus the computed comment count.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArticleDetail {
    pub article_id: i64,
    pub author: String,
    pub title: String,
    pub body: String,
    pub topic: String,
    pub created_at: String,
    pub votes: i64,
    pub article_img_url: String,
    pub comment_count: i64,
}

/// Lists articles, each augmented with its comment count.
///
/// When `topic` is given, the topic must exist (`TopicNotFound` otherwise);
/// an existing topic with no articles yields an empty list, not an error.
pub fn list_articles(
    conn: &Connection,
    sort: SortColumn,
    order: SortOrder,
    topic: Option<&str>,
) -> Result<Vec<ArticleSummary>, StoreError> {
    if let Some(slug) = topic {
        if !topics::topic_exists(conn, slug)? {
            return Err(StoreError::TopicNotFound(slug.to_string()));
        }
    }

    let sql = format!(
        "SELECT
            articles.author,
            articles.title,
            articles.article_id,
            articles.topic,
            articles.created_at,
            articles.votes,
            articles.article_img_url,
            COUNT(comments.comment_id) AS comment_count
        FROM articles
        LEFT JOIN comments ON articles.article_id = comments.article_id
        {filter}
        GROUP BY articles.article_id
        ORDER BY {column} {direction}",
        filter = if topic.is_some() {
            "WHERE articles.topic = ?1"
        } else {
            ""
        },
        column = sort.as_sql(),
        direction = order.as_sql(),
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = match topic {
        Some(slug) => stmt.query_map([slug], map_row_to_summary)?,
        None => stmt.query_map([], map_row_to_summary)?,
    };

    let mut articles = Vec::new();
    for row in rows {
        articles.push(row?);
    }
    Ok(articles)
}

/// Retrieves a single article by id, including `body` and comment count.
pub fn get_article(conn: &Connection, article_id: i64) -> Result<ArticleDetail, StoreError> {
    conn.query_row(
        "SELECT
            articles.article_id,
            articles.author,
            articles.title,
            articles.body,
            articles.topic,
            articles.created_at,
            articles.votes,
            articles.article_img_url,
            COUNT(comments.comment_id) AS comment_count
        FROM articles
        LEFT JOIN comments ON articles.article_id = comments.article_id
        WHERE articles.article_id = ?1
        GROUP BY articles.article_id",
        [article_id],
        map_row_to_detail,
    )
    .optional()?
    .ok_or(StoreError::ArticleNotFound(article_id))
}

/// Returns whether an article with the given id exists.
pub fn article_exists(conn: &Connection, article_id: i64) -> Result<bool, StoreError> {
    let exists: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM articles WHERE article_id = ?1)",
        [article_id],
        |row| row.get(0),
    )?;
    Ok(exists)
}

/// Applies a signed vote delta to an article, clamped at zero.
///
/// The read-modify-write happens inside a single `UPDATE … RETURNING`
/// statement, so concurrent deltas against the same article cannot lose
/// updates. `MAX(votes + ?, 0)` keeps the count from ever going negative
/// regardless of the decrement magnitude.
pub fn adjust_votes(
    conn: &Connection,
    article_id: i64,
    delta: i64,
) -> Result<Article, StoreError> {
    conn.query_row(
        "UPDATE articles
         SET votes = MAX(votes + ?1, 0)
         WHERE article_id = ?2
         RETURNING article_id, author, title, body, topic, created_at, votes, article_img_url",
        params![delta, article_id],
        map_row_to_article,
    )
    .optional()?
    .ok_or(StoreError::ArticleNotFound(article_id))
}

fn map_row_to_article(row: &Row) -> rusqlite::Result<Article> {
    Ok(Article {
        article_id: row.get(0)?,
        author: row.get(1)?,
        title: row.get(2)?,
        body: row.get(3)?,
        topic: row.get(4)?,
        created_at: row.get(5)?,
        votes: row.get(6)?,
        article_img_url: row.get(7)?,
    })
}

fn map_row_to_summary(row: &Row) -> rusqlite::Result<ArticleSummary> {
    Ok(ArticleSummary {
        author: row.get(0)?,
        title: row.get(1)?,
        article_id: row.get(2)?,
        topic: row.get(3)?,
        created_at: row.get(4)?,
        votes: row.get(5)?,
        article_img_url: row.get(6)?,
        comment_count: row.get(7)?,
    })
}

fn map_row_to_detail(row: &Row) -> rusqlite::Result<ArticleDetail> {
    Ok(ArticleDetail {
        article_id: row.get(0)?,
        author: row.get(1)?,
        title: row.get(2)?,
        body: row.get(3)?,
        topic: row.get(4)?,
        created_at: row.get(5)?,
        votes: row.get(6)?,
        article_img_url: row.get(7)?,
        comment_count: row.get(8)?,
    })
}
