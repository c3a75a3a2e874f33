use static_httpd::files::LoadedContent;
use static_httpd::http::response::{
    FALLBACK_CONTENT_TYPE, Response, ResponseBuilder, SERVER_NAME, StatusCode,
};
use static_httpd::http::writer::serialize_response;

fn content(media_type: Option<&str>, bytes: &[u8]) -> LoadedContent {
    LoadedContent {
        media_type: media_type.map(str::to_string),
        bytes: bytes.to_vec(),
    }
}

fn header_names(response: &Response) -> Vec<&str> {
    response.headers.iter().map(|(k, _)| k.as_str()).collect()
}

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::BadRequest.as_u16(), 400);
    assert_eq!(StatusCode::Forbidden.as_u16(), 403);
    assert_eq!(StatusCode::NotFound.as_u16(), 404);
    assert_eq!(StatusCode::MethodNotAllowed.as_u16(), 405);
}

#[test]
fn test_status_code_reason_phrase() {
    assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    assert_eq!(StatusCode::BadRequest.reason_phrase(), "Bad Request");
    assert_eq!(StatusCode::Forbidden.reason_phrase(), "Forbidden");
    assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    assert_eq!(
        StatusCode::MethodNotAllowed.reason_phrase(),
        "Method Not Allowed"
    );
}

#[test]
fn test_response_builder_replaces_existing_header() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .header("Content-Type", "text/plain")
        .header("X-Custom", "value")
        .header("content-type", "text/html")
        .build();

    assert_eq!(header_names(&response), vec!["Content-Type", "X-Custom"]);
    assert_eq!(response.header("Content-Type"), Some("text/html"));
}

#[test]
fn test_response_builder_empty_body() {
    let response = ResponseBuilder::new(StatusCode::NotFound).build();

    assert!(response.body.is_none());
    assert!(response.body_bytes().is_empty());
}

#[test]
fn test_file_response_for_get() {
    let response = Response::file(content(Some("text/html"), b"<h1>hi</h1>"), true);

    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(
        header_names(&response),
        vec![
            "Date",
            "Accept-Ranges",
            "Server",
            "Content-Type",
            "Content-Length",
            "Connection"
        ]
    );
    assert_eq!(response.header("Accept-Ranges"), Some("bytes"));
    assert_eq!(response.header("Server"), Some(SERVER_NAME));
    assert_eq!(response.header("Content-Type"), Some("text/html"));
    assert_eq!(response.header("Content-Length"), Some("11"));
    assert_eq!(response.header("Connection"), Some("close"));
    assert_eq!(response.body_bytes(), b"<h1>hi</h1>");
}

#[test]
fn test_file_response_for_head_has_length_but_no_body() {
    let response = Response::file(content(Some("text/plain"), b"12345"), false);

    assert_eq!(response.header("Content-Length"), Some("5"));
    assert!(response.body.is_none());
}

#[test]
fn test_file_response_empty_file() {
    let response = Response::file(content(Some("text/plain"), b""), true);

    assert_eq!(response.header("Content-Length"), Some("0"));
    assert!(response.body.is_none());
}

#[test]
fn test_file_response_unknown_media_type() {
    let response = Response::file(content(None, b"\x00\x01"), true);

    assert_eq!(response.header("Content-Type"), Some(FALLBACK_CONTENT_TYPE));
}

#[test]
fn test_error_response_is_headers_only() {
    for status in [
        StatusCode::BadRequest,
        StatusCode::Forbidden,
        StatusCode::NotFound,
        StatusCode::MethodNotAllowed,
    ] {
        let response = Response::error(status);

        assert_eq!(response.status, status);
        assert_eq!(header_names(&response), vec!["Date", "Server", "Connection"]);
        assert!(response.header("Content-Length").is_none());
        assert!(response.header("Content-Type").is_none());
        assert!(response.body.is_none());
    }
}

#[test]
fn test_date_header_is_http_date() {
    let response = Response::error(StatusCode::NotFound);
    let date = response.header("Date").unwrap();

    assert!(date.ends_with(" GMT"));
    assert!(httpdate::parse_http_date(date).is_ok());
}

#[test]
fn test_serialize_file_response() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .header("Content-Type", "text/plain")
        .header("Content-Length", "2")
        .body(b"hi".to_vec())
        .build();

    let bytes = serialize_response(&response);

    assert_eq!(
        bytes,
        b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 2\r\n\r\nhi".to_vec()
    );
}

#[test]
fn test_serialize_error_response() {
    let bytes = serialize_response(&Response::error(StatusCode::MethodNotAllowed));
    let text = String::from_utf8(bytes).unwrap();

    assert!(text.starts_with("HTTP/1.1 405 Method Not Allowed\r\nDate: "));
    assert!(text.ends_with("Connection: close\r\n\r\n"));
}
