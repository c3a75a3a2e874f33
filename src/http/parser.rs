use crate::http::request::{Method, Request};
use std::collections::HashMap;

/// Why a raw request could not become a `Request`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// Request line is not exactly `method target version`, or the head is not UTF-8.
    BadRequest,
    /// Method token is anything other than GET or HEAD.
    MethodNotAllowed,
}

/// Parses the head of a raw request.
///
/// Only the part before the first blank line is looked at; when the
/// terminator is missing the whole buffer is treated as the head. Lines may
/// end in `\r\n` or a bare `\n`. The request line is split on single spaces,
/// so `GET  / HTTP/1.1` (double space) yields four tokens and is rejected.
pub fn parse_request(buf: &[u8]) -> Result<Request, ParseError> {
    let head = match find_headers_end(buf) {
        Some(end) => &buf[..end],
        None => buf,
    };

    let head = std::str::from_utf8(head).map_err(|_| ParseError::BadRequest)?;
    let mut lines = head.lines();

    // Request line
    let request_line = lines.next().ok_or(ParseError::BadRequest)?;
    let parts: Vec<&str> = request_line.split(' ').collect();
    let [method_str, target, version] = parts[..] else {
        return Err(ParseError::BadRequest);
    };

    let method = Method::from_str(method_str).ok_or(ParseError::MethodNotAllowed)?;

    // Headers are informational; malformed lines are skipped
    let headers: HashMap<String, String> = lines
        .filter_map(|line| line.split_once(':'))
        .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
        .collect();

    Ok(Request {
        method,
        target: target.to_string(),
        version: version.to_string(),
        headers,
    })
}

/// Offset of the blank line ending the head, `\r\n\r\n` or `\n\n`,
/// whichever comes first.
pub(crate) fn find_headers_end(buf: &[u8]) -> Option<usize> {
    let crlf = buf.windows(4).position(|w| w == b"\r\n\r\n");
    let lf = buf.windows(2).position(|w| w == b"\n\n");

    match (crlf, lf) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_get() {
        let req = b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";

        let parsed = parse_request(req).unwrap();

        assert_eq!(parsed.target, "/");
        assert_eq!(parsed.header("Host").unwrap(), "example.com");
    }

    #[test]
    fn headers_end_position() {
        assert_eq!(find_headers_end(b"GET / HTTP/1.1\r\n\r\n"), Some(14));
        assert_eq!(find_headers_end(b"GET / HTTP/1.1\r\n"), None);
    }

    #[test]
    fn headers_end_bare_lf() {
        assert_eq!(find_headers_end(b"GET / HTTP/1.0\n\n"), Some(14));
        assert_eq!(find_headers_end(b"GET / HTTP/1.0\nHost: a\n\nbody"), Some(22));
        assert_eq!(find_headers_end(b"GET / HTTP/1.0\n"), None);
    }
}
