//! Centralized error translation.
//!
//! Every handler failure funnels through [`ApiError`]: one discriminated
//! type owning the kind → (HTTP status, message) mapping, rendered as a
//! `{"msg": …}` JSON body. Handlers never build status codes or error
//! bodies themselves, and storage failures are translated here from
//! SQLite's structured result codes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use gazette_content::articles::{InvalidOrder, InvalidSortColumn};
use gazette_content::StoreError;
use thiserror::Error;

/// API error kinds. The `Display` text is the user-visible message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ApiError {
    /// A path id or vote delta that is not a plain integer.
    #[error("Invalid input")]
    InvalidInput,
    /// A `sort_by` token outside the article column allow-list.
    #[error("Invalid sort column")]
    InvalidSortColumn,
    /// An `order` token other than `asc`/`desc`.
    #[error("Invalid order query")]
    InvalidOrder,
    /// A required request body field was absent.
    #[error("Bad request: Missing required fields")]
    MissingFields,
    #[error("Article not found")]
    ArticleNotFound,
    #[error("Topic not found")]
    TopicNotFound,
    #[error("Comment not found")]
    CommentNotFound,
    #[error("Username not found")]
    UsernameNotFound,
    #[error("Route not found")]
    RouteNotFound,
    /// Any unanticipated failure, including unmapped storage errors.
    #[error("Internal Server Error")]
    Internal,
}

impl ApiError {
    /// The HTTP status this kind maps to.
    pub fn status(self) -> StatusCode {
        match self {
            Self::InvalidInput
            | Self::InvalidSortColumn
            | Self::InvalidOrder
            | Self::MissingFields => StatusCode::BAD_REQUEST,
            Self::ArticleNotFound
            | Self::TopicNotFound
            | Self::CommentNotFound
            | Self::UsernameNotFound
            | Self::RouteNotFound => StatusCode::NOT_FOUND,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Logs an unanticipated failure and folds it into `Internal`.
    pub(crate) fn internal<E: std::fmt::Display>(err: E) -> Self {
        tracing::error!(error = %err, "internal server error");
        Self::Internal
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "msg": self.to_string() }));
        (self.status(), body).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::ArticleNotFound(_) => Self::ArticleNotFound,
            StoreError::CommentNotFound(_) => Self::CommentNotFound,
            StoreError::TopicNotFound(_) => Self::TopicNotFound,
            StoreError::Database(db) => translate_db_error(db),
        }
    }
}

impl From<InvalidSortColumn> for ApiError {
    fn from(_: InvalidSortColumn) -> Self {
        Self::InvalidSortColumn
    }
}

impl From<InvalidOrder> for ApiError {
    fn from(_: InvalidOrder) -> Self {
        Self::InvalidOrder
    }
}

/// Maps raw SQLite result codes to API errors.
///
/// After the handlers' article pre-checks, the only reachable foreign key
/// is `comments.author → users.username`, so a FK failure means the
/// username does not exist. A NOT NULL failure means a required field
/// never reached the insert. Everything else is unanticipated and is
/// logged before being folded to a 500.
fn translate_db_error(err: rusqlite::Error) -> ApiError {
    if let rusqlite::Error::SqliteFailure(code, _) = &err {
        match code.extended_code {
            rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY => return ApiError::UsernameNotFound,
            rusqlite::ffi::SQLITE_CONSTRAINT_NOTNULL => return ApiError::MissingFields,
            _ => {}
        }
    }
    ApiError::internal(err)
}

/// Fallback handler for unmatched paths.
pub async fn route_not_found_handler() -> ApiError {
    ApiError::RouteNotFound
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_map_to_expected_statuses() {
        assert_eq!(ApiError::InvalidInput.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::MissingFields.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::ArticleNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::RouteNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Internal.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn messages_are_the_user_visible_text() {
        assert_eq!(ApiError::InvalidInput.to_string(), "Invalid input");
        assert_eq!(
            ApiError::MissingFields.to_string(),
            "Bad request: Missing required fields"
        );
        assert_eq!(ApiError::Internal.to_string(), "Internal Server Error");
    }

    #[test]
    fn foreign_key_failures_translate_to_username_not_found() {
        let err = rusqlite::Error::SqliteFailure(
            rusqlite::ffi::Error {
                code: rusqlite::ffi::ErrorCode::ConstraintViolation,
                extended_code: rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY,
            },
            Some("FOREIGN KEY constraint failed".to_string()),
        );

        let api = ApiError::from(StoreError::Database(err));
        assert_eq!(api, ApiError::UsernameNotFound);
    }

    #[test]
    fn unmapped_storage_errors_become_internal() {
        let api = ApiError::from(StoreError::Database(
            rusqlite::Error::QueryReturnedNoRows,
        ));
        assert_eq!(api, ApiError::Internal);
    }
}
