//! Shared fixture for the endpoint tests.
//!
//! Builds the app over a temp-file database so every pooled connection sees
//! the same data, then seeds a small dataset: three users, three topics
//! (one with no articles), four articles, three comments.

use axum::body::Body;
use axum::response::Response;
use axum::Router;
use gazette_db::{create_pool, run_migrations, DbPool, DbRuntimeSettings};
use gazette_server::{app, AppState};
use serde_json::Value;
use tempfile::NamedTempFile;

const SEED: &str = "
    INSERT INTO topics (slug, description) VALUES
        ('coding', 'Code is love, code is life'),
        ('cooking', 'Hey good looking, what you got cooking?'),
        ('gardening', 'Grow your own');
    INSERT INTO users (username, name, avatar_url) VALUES
        ('alice_m', 'Alice Mayhew', 'https://avatars.example/alice.png'),
        ('brandon', 'Brandon Oduya', 'https://avatars.example/brandon.png'),
        ('cleo', 'Cleo Vance', 'https://avatars.example/cleo.png');
    INSERT INTO articles (article_id, author, title, body, topic, created_at, votes, article_img_url) VALUES
        (1, 'alice_m', 'Running a node-free newsroom', 'Full text one.', 'coding',
         '2024-01-10 10:00:00', 100, 'https://images.example/one.jpeg'),
        (2, 'brandon', 'Sour starters, sweet finishes', 'Full text two.', 'cooking',
         '2024-03-05 09:30:00', 0, 'https://images.example/two.jpeg'),
        (3, 'cleo', 'Zero-downtime deploys', 'Full text three.', 'coding',
         '2024-02-20 18:45:00', 7, 'https://images.example/three.jpeg'),
        (4, 'alice_m', 'Knife skills for the impatient', 'Full text four.', 'cooking',
         '2024-04-01 12:00:00', 19, 'https://images.example/four.jpeg');
    INSERT INTO comments (comment_id, article_id, author, body, votes, created_at) VALUES
        (1, 1, 'brandon', 'Great read.', 4, '2024-01-11 08:00:00'),
        (2, 1, 'cleo', 'Disagree with the premise.', -2, '2024-01-12 14:30:00'),
        (3, 3, 'alice_m', 'Saved my on-call shift.', 10, '2024-02-21 07:15:00');
";

/// Builds the router and its backing database. The returned `NamedTempFile`
/// must stay alive for the duration of the test.
pub fn setup_app() -> (Router, DbPool, NamedTempFile) {
    let temp_file = NamedTempFile::new().expect("failed to create temp db file");
    let db_path = temp_file.path().to_str().expect("non-utf8 temp path");

    let pool = create_pool(db_path, DbRuntimeSettings::default()).expect("failed to create pool");
    {
        let conn = pool.get().expect("failed to get connection");
        run_migrations(&conn).expect("failed to run migrations");
        conn.execute_batch(SEED).expect("failed to seed fixture data");
    }

    let state = AppState { pool: pool.clone() };
    (app(state), pool, temp_file)
}

/// Reads a response body to completion and parses it as JSON.
pub async fn read_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    serde_json::from_slice(&bytes).expect("response body should be JSON")
}

/// Builds an empty-body request for the given method and uri.
pub fn request(method: &str, uri: &str) -> axum::http::Request<Body> {
    axum::http::Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("failed to build request")
}

/// Builds a JSON-body request for the given method and uri.
pub fn json_request(method: &str, uri: &str, body: Value) -> axum::http::Request<Body> {
    axum::http::Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("failed to build request")
}
