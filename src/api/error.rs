//! API error types with HTTP status code mapping

use http::StatusCode;

use super::types::ApiResponse;

/// Error codes that map to HTTP status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Missing path parameter or failed validation (400)
    BadRequest,
    /// Unknown route or task (404)
    NotFound,
    /// Body is not the expected JSON (422)
    UnprocessableEntity,
    /// Store or serialization failure (500)
    Internal,
}

impl ErrorCode {
    /// Get the HTTP status for this error
    #[must_use]
    pub const fn status(self) -> StatusCode {
        match self {
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::UnprocessableEntity => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub fn status_code(self) -> u16 {
        self.status().as_u16()
    }

    /// Get the error code string
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BadRequest => "BAD_REQUEST",
            Self::NotFound => "NOT_FOUND",
            Self::UnprocessableEntity => "UNPROCESSABLE_ENTITY",
            Self::Internal => "INTERNAL_ERROR",
        }
    }
}

/// API error with code and message
///
/// The message is for logs only. Responses carry the reason phrase of the
/// code, never the message.
#[derive(Debug, Clone)]
pub struct ApiError {
    /// Error code (determines HTTP status)
    pub code: ErrorCode,
    /// Detail for the server log
    pub message: String,
}

impl ApiError {
    /// Create a bad request error
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::BadRequest,
            message: message.into(),
        }
    }

    /// Create a not found error
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::NotFound,
            message: message.into(),
        }
    }

    /// Create an unprocessable entity error
    #[must_use]
    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::UnprocessableEntity,
            message: message.into(),
        }
    }

    /// Create an internal error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::Internal,
            message: message.into(),
        }
    }

    /// Wrap a store failure, keeping the whole cause chain for the log
    #[must_use]
    pub fn store(err: &anyhow::Error) -> Self {
        Self::internal(format!("task store failure: {err:#}"))
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> u16 {
        self.code.status_code()
    }

    /// Render this error as a gateway response
    ///
    /// Internal errors go through [`ApiResponse::server_error`], which logs
    /// the detail; everything else is a client error.
    #[must_use]
    pub fn into_response(self) -> ApiResponse {
        match self.code {
            ErrorCode::Internal => ApiResponse::server_error(&self),
            code => {
                log::debug!("{self}");
                ApiResponse::client_error(code.status())
            },
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for ApiError {}
