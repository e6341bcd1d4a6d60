//! User records. Users are created by seeding and are read-only via
//! the API.

use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};

use crate::StoreError;

/// An account that authors articles and comments.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub username: String,
    pub name: String,
    pub avatar_url: String,
}

/// Lists all users.
pub fn list_users(conn: &Connection) -> Result<Vec<User>, StoreError> {
    let mut stmt =
        conn.prepare("SELECT username, name, avatar_url FROM users ORDER BY username ASC")?;

    let rows = stmt.query_map([], map_row_to_user)?;
    let mut users = Vec::new();
    for row in rows {
        users.push(row?);
    }
    Ok(users)
}

fn map_row_to_user(row: &Row) -> rusqlite::Result<User> {
    Ok(User {
        username: row.get(0)?,
        name: row.get(1)?,
        avatar_url: row.get(2)?,
    })
}
