use std::collections::HashMap;
use std::fmt;

/// HTTP request methods the server accepts.
///
/// Anything else on the request line is answered with 405 Method Not Allowed
/// and never becomes a `Request`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a file
    GET,
    /// HEAD - Like GET but without the response body
    HEAD,
}

impl Method {
    /// Parses an HTTP method from a string.
    ///
    /// # Returns
    ///
    /// `Some(Method)` if the string is exactly `GET` or `HEAD`, `None` otherwise.
    ///
    /// # Example
    ///
    /// ```
    /// # use static_httpd::http::request::Method;
    /// assert_eq!(Method::from_str("GET"), Some(Method::GET));
    /// assert_eq!(Method::from_str("get"), None);
    /// assert_eq!(Method::from_str("POST"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "GET" => Some(Method::GET),
            "HEAD" => Some(Method::HEAD),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::GET => "GET",
            Method::HEAD => "HEAD",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed request line plus whatever headers came with it.
///
/// Immutable once parsed. Headers are kept for logging only; the server does
/// not act on any of them.
#[derive(Debug, Clone)]
pub struct Request {
    /// The HTTP method (GET or HEAD)
    pub method: Method,
    /// The raw request target, before query/fragment stripping (e.g. "/a%20b.html?x=1")
    pub target: String,
    /// Protocol version token, not validated
    pub version: String,
    /// Request headers as key-value pairs
    pub headers: HashMap<String, String>,
}

/// Builder for constructing Request objects.
pub struct RequestBuilder {
    method: Option<Method>,
    target: Option<String>,
    version: Option<String>,
    headers: HashMap<String, String>,
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self {
            method: None,
            target: None,
            version: None,
            headers: HashMap::new(),
        }
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> Result<Request, &'static str> {
        Ok(Request {
            method: self.method.ok_or("method missing")?,
            target: self.target.ok_or("target missing")?,
            version: self.version.unwrap_or_else(|| "HTTP/1.1".to_string()),
            headers: self.headers,
        })
    }
}

impl Request {
    /// Retrieves a header value by name, ignoring ASCII case.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    /// `User-Agent` for access logging, `-` when absent.
    pub fn user_agent(&self) -> &str {
        self.header("User-Agent").unwrap_or("-")
    }
}
