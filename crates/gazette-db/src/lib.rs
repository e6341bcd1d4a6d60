//! Database layer for the gazette API.
//!
//! Provides SQLite connection pooling (via `r2d2`), WAL-mode initialization,
//! embedded SQL migrations, and the schema for the four content tables
//! (`topics`, `users`, `articles`, `comments`). Every table is created
//! through versioned migrations managed by this crate.
//!
//! # Design decisions
//!
//! - **SQLite with WAL mode**: the API is a single-process service; WAL mode
//!   allows concurrent readers with a single writer, which matches the
//!   read-heavy access pattern of a news site.
//! - **`r2d2` connection pool**: provides bounded connection reuse without
//!   manual lifetime management. The pool is owned by the server's
//!   application state, not a module-level global, so tests get isolated
//!   databases and teardown is clean.
//! - **Foreign keys ON**: article→topic, article→author, and
//!   comment→article/author references are enforced by SQLite, and
//!   constraint failures surface as structured error codes the HTTP layer
//!   can translate.
//! - **Embedded migrations**: SQL files are compiled into the binary via
//!   `include_str!`, ensuring migrations ship with the server and cannot
//!   drift from the code that depends on them.

mod migrations;
mod pool;

pub use migrations::run_migrations;
pub use pool::{create_pool, DbPool, DbRuntimeSettings};
