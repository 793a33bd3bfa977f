//! tiny_http server adapter
//!
//! Stands in for the gateway: converts each tiny_http request into an
//! `ApiRequest`, dispatches it, and writes the `ApiResponse` back.

use std::io::Cursor;

use tiny_http::{Header, Request, Response, Server, StatusCode};

use taskgate::api::{ApiError, ApiRequest, ApiResponse, Dispatcher};

/// Serve requests until the listener shuts down
pub fn run(server: &Server, dispatcher: &Dispatcher) {
    for mut request in server.incoming_requests() {
        let response = match to_api_request(&mut request) {
            Ok(api_request) => dispatcher.dispatch(&api_request),
            Err(e) => e.into_response(),
        };
        log::info!("{} {} -> {}", request.method(), request.url(), response.status_code);

        if let Err(e) = request.respond(to_http_response(response)) {
            log::warn!("Failed to send response: {e}");
        }
    }
}

// =============================================================================
// REQUEST CONVERSION
// =============================================================================

/// Build an `ApiRequest` from a tiny_http request
///
/// The query string is dropped. Path parameters are left empty; the
/// dispatcher captures them from the path itself.
fn to_api_request(request: &mut Request) -> Result<ApiRequest, ApiError> {
    let url = request.url();
    let path = url.split_once('?').map_or(url, |(path, _)| path).to_string();
    let method = request.method().to_string();

    let mut api_request = ApiRequest::new(method, path);
    for header in request.headers() {
        api_request = api_request.with_header(header.field.to_string(), header.value.to_string());
    }

    let mut bytes = Vec::new();
    request
        .as_reader()
        .read_to_end(&mut bytes)
        .map_err(|e| ApiError::internal(format!("Failed to read request body: {e}")))?;
    Ok(api_request.with_body(decode_body(bytes)?))
}

/// A body that is not UTF-8 is malformed input, not a server fault
fn decode_body(bytes: Vec<u8>) -> Result<String, ApiError> {
    String::from_utf8(bytes)
        .map_err(|e| ApiError::unprocessable(format!("Request body is not UTF-8: {e}")))
}

// =============================================================================
// RESPONSE CONVERSION
// =============================================================================

/// Convert an `ApiResponse` into a tiny_http response
fn to_http_response(response: ApiResponse) -> Response<Cursor<Vec<u8>>> {
    let mut http_response = Response::from_data(response.body.into_bytes())
        .with_status_code(StatusCode(response.status_code));

    for (name, value) in &response.headers {
        match Header::from_bytes(name.as_bytes(), value.as_bytes()) {
            Ok(header) => http_response.add_header(header),
            Err(()) => log::warn!("Dropping invalid response header {name}"),
        }
    }

    http_response
}
