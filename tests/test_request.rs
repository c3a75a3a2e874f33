use static_httpd::http::request::{Method, Request, RequestBuilder};
use std::collections::HashMap;

#[test]
fn test_request_header_retrieval() {
    let mut headers = HashMap::new();
    headers.insert("Host".to_string(), "example.com".to_string());
    headers.insert("User-Agent".to_string(), "curl/8.0".to_string());

    let req = Request {
        method: Method::GET,
        target: "/".to_string(),
        version: "HTTP/1.1".to_string(),
        headers,
    };

    assert_eq!(req.header("Host"), Some("example.com"));
    assert_eq!(req.header("host"), Some("example.com"));
    assert_eq!(req.header("Missing"), None);
    assert_eq!(req.user_agent(), "curl/8.0");
}

#[test]
fn test_request_user_agent_missing() {
    let req = RequestBuilder::new()
        .method(Method::HEAD)
        .target("/")
        .build()
        .unwrap();

    assert_eq!(req.user_agent(), "-");
}

#[test]
fn test_request_builder_defaults_version() {
    let req = RequestBuilder::new()
        .method(Method::GET)
        .target("/index.html")
        .header("Accept", "*/*")
        .build()
        .unwrap();

    assert_eq!(req.version, "HTTP/1.1");
    assert_eq!(req.header("Accept"), Some("*/*"));
}

#[test]
fn test_request_builder_requires_method_and_target() {
    assert!(RequestBuilder::new().target("/").build().is_err());
    assert!(RequestBuilder::new().method(Method::GET).build().is_err());
}

#[test]
fn test_request_method_from_string() {
    assert_eq!(Method::from_str("GET"), Some(Method::GET));
    assert_eq!(Method::from_str("HEAD"), Some(Method::HEAD));
    assert_eq!(Method::from_str("POST"), None);
    assert_eq!(Method::from_str("head"), None); // Case-sensitive
}

#[test]
fn test_request_method_display() {
    assert_eq!(Method::GET.to_string(), "GET");
    assert_eq!(Method::HEAD.as_str(), "HEAD");
}
