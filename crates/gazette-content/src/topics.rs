//! Topic records. Topics are created by seeding and are read-only via
//! the API.

use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};

use crate::StoreError;

/// A named category articles belong to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Topic {
    pub slug: String,
    pub description: String,
}

/// Lists all topics.
pub fn list_topics(conn: &Connection) -> Result<Vec<Topic>, StoreError> {
    let mut stmt = conn.prepare("SELECT slug, description FROM topics ORDER BY slug ASC")?;

    let rows = stmt.query_map([], map_row_to_topic)?;
    let mut topics = Vec::new();
    for row in rows {
        topics.push(row?);
    }
    Ok(topics)
}

/// Returns whether a topic with the given slug exists.
pub fn topic_exists(conn: &Connection, slug: &str) -> Result<bool, StoreError> {
    let exists: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM topics WHERE slug = ?1)",
        [slug],
        |row| row.get(0),
    )?;
    Ok(exists)
}

fn map_row_to_topic(row: &Row) -> rusqlite::Result<Topic> {
    Ok(Topic {
        slug: row.get(0)?,
        description: row.get(1)?,
    })
}
