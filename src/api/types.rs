//! Gateway request and response records
//!
//! Both records serialize in the shape of a gateway proxy event, so they can
//! be read from and written to JSON directly.

use std::collections::{BTreeMap, HashMap};
use std::fmt::Display;

use http::StatusCode;
use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// HEADERS
// =============================================================================

/// CORS header naming the allowed request headers
pub const ALLOW_HEADERS: &str = "Access-Control-Allow-Headers";

/// CORS header naming the allowed origin
pub const ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";

/// Header pointing at the created or updated resource
pub const LOCATION: &str = "Location";

/// Content type header
pub const CONTENT_TYPE: &str = "Content-Type";

const JSON_CONTENT_TYPE: &str = "application/json";
const TEXT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

// =============================================================================
// REQUEST
// =============================================================================

/// A normalized inbound request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiRequest {
    /// HTTP method, upper case
    #[serde(rename = "httpMethod")]
    pub method: String,
    /// Request path without query string
    pub path: String,
    /// Request headers
    #[serde(default, deserialize_with = "null_as_default")]
    pub headers: HashMap<String, String>,
    /// Path parameters filled in by the gateway
    #[serde(default, deserialize_with = "null_as_default")]
    pub path_parameters: HashMap<String, String>,
    /// Raw body
    #[serde(default, deserialize_with = "null_as_default")]
    pub body: String,
}

impl ApiRequest {
    /// Create a request with no headers, parameters or body
    #[must_use]
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            ..Self::default()
        }
    }

    /// Add a path parameter
    #[must_use]
    pub fn with_path_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.path_parameters.insert(name.into(), value.into());
        self
    }

    /// Add a header
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Set the body
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Look up a path parameter
    #[must_use]
    pub fn path_parameter(&self, name: &str) -> Option<&str> {
        self.path_parameters.get(name).map(String::as_str)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// =============================================================================
// RESPONSE
// =============================================================================

/// A normalized outbound response
///
/// Every constructor attaches the CORS headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    /// HTTP status code
    pub status_code: u16,
    /// Response headers
    pub headers: BTreeMap<String, String>,
    /// UTF-8 body, JSON or plain text
    pub body: String,
}

impl ApiResponse {
    fn with_cors(status: StatusCode, content_type: &str, body: String) -> Self {
        let headers = BTreeMap::from([
            (ALLOW_HEADERS.to_string(), "Content-Type".to_string()),
            (ALLOW_ORIGIN.to_string(), "*".to_string()),
            (CONTENT_TYPE.to_string(), content_type.to_string()),
        ]);
        Self {
            status_code: status.as_u16(),
            headers,
            body,
        }
    }

    /// Serialize `value` as the JSON body
    pub fn json<T: Serialize + ?Sized>(
        status: StatusCode,
        value: &T,
    ) -> Result<Self, serde_json::Error> {
        let body = serde_json::to_string(value)?;
        Ok(Self::with_cors(status, JSON_CONTENT_TYPE, body))
    }

    fn reason_phrase(status: StatusCode) -> Self {
        let reason = status.canonical_reason().unwrap_or_default();
        Self::with_cors(status, TEXT_CONTENT_TYPE, reason.to_string())
    }

    /// Client error whose body is the reason phrase of `status`
    #[must_use]
    pub fn client_error(status: StatusCode) -> Self {
        Self::reason_phrase(status)
    }

    /// Log `err` and return a generic 500
    ///
    /// The detail of `err` stays in the log; the body is always the reason
    /// phrase.
    #[must_use]
    pub fn server_error(err: &dyn Display) -> Self {
        log::error!("{err}");
        Self::reason_phrase(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Add or replace a header
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Look up a header, ignoring case
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}
