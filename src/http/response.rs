use std::time::SystemTime;

use crate::files::LoadedContent;

/// Fixed value of the `Server` header.
pub const SERVER_NAME: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Sent when the file extension maps to no known media type.
pub const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// HTTP status codes the server can emit.
///
/// - `Ok` (200): File found and served
/// - `BadRequest` (400): Request line malformed
/// - `Forbidden` (403): Target tries to leave the document root
/// - `NotFound` (404): No readable file at the resolved path
/// - `MethodNotAllowed` (405): Method other than GET/HEAD
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 400 Bad Request
    BadRequest,
    /// 403 Forbidden
    Forbidden,
    /// 404 Not Found
    NotFound,
    /// 405 Method Not Allowed
    MethodNotAllowed,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use static_httpd::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::Forbidden.as_u16(), 403);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::BadRequest => 400,
            StatusCode::Forbidden => 403,
            StatusCode::NotFound => 404,
            StatusCode::MethodNotAllowed => 405,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use static_httpd::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    /// assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::Forbidden => "Forbidden",
            StatusCode::NotFound => "Not Found",
            StatusCode::MethodNotAllowed => "Method Not Allowed",
        }
    }
}

/// Represents a complete HTTP response ready to be sent to a client.
///
/// Headers keep insertion order, which is also the order they go out on the
/// wire. `body` is `Some` only for a 200 answer to GET.
#[derive(Debug)]
pub struct Response {
    /// The HTTP status code
    pub status: StatusCode,
    /// HTTP headers in wire order
    pub headers: Vec<(String, String)>,
    /// Response body, absent for HEAD and every error status
    pub body: Option<Vec<u8>>,
}

/// Builder for constructing HTTP responses in a fluent style.
///
/// # Example
///
/// ```ignore
/// let response = ResponseBuilder::new(StatusCode::Ok)
///     .header("Content-Type", "text/plain")
///     .body(b"hi".to_vec())
///     .build();
/// ```
pub struct ResponseBuilder {
    status: StatusCode,
    headers: Vec<(String, String)>,
    body: Option<Vec<u8>>,
}

impl ResponseBuilder {
    /// Creates a new response builder with the specified status code.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: None,
        }
    }

    /// Adds a header, or replaces the value in place if the name is already
    /// present (ASCII case-insensitive).
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();

        match self
            .headers
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(&key))
        {
            Some(existing) => existing.1 = value,
            None => self.headers.push((key, value)),
        }
        self
    }

    /// Sets the response body.
    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// Builds the final Response.
    pub fn build(self) -> Response {
        Response {
            status: self.status,
            headers: self.headers,
            body: self.body,
        }
    }
}

impl Response {
    /// 200 for a loaded file.
    ///
    /// `Content-Length` always carries the file size; the bytes themselves are
    /// attached only when `with_body` is set and the file is non-empty.
    pub fn file(content: LoadedContent, with_body: bool) -> Self {
        let content_type = content
            .media_type
            .unwrap_or_else(|| FALLBACK_CONTENT_TYPE.to_string());

        let builder = ResponseBuilder::new(StatusCode::Ok)
            .header("Date", http_date())
            .header("Accept-Ranges", "bytes")
            .header("Server", SERVER_NAME)
            .header("Content-Type", content_type)
            .header("Content-Length", content.bytes.len().to_string())
            .header("Connection", "close");

        if with_body && !content.bytes.is_empty() {
            builder.body(content.bytes).build()
        } else {
            builder.build()
        }
    }

    /// Headers-only response for a non-200 status.
    pub fn error(status: StatusCode) -> Self {
        ResponseBuilder::new(status)
            .header("Date", http_date())
            .header("Server", SERVER_NAME)
            .header("Connection", "close")
            .build()
    }

    /// Looks up a header value, ignoring ASCII case.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    /// Body bytes, empty when there is none.
    pub fn body_bytes(&self) -> &[u8] {
        self.body.as_deref().unwrap_or_default()
    }
}

/// Current time as an IMF-fixdate, e.g. `Sun, 06 Nov 1994 08:49:37 GMT`.
pub fn http_date() -> String {
    httpdate::fmt_http_date(SystemTime::now())
}
