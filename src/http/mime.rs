//! MIME type detection based on file extension.

use std::path::Path;

/// Best guess at the media type of `path`, `None` for unknown extensions.
///
/// # Examples
/// ```
/// use static_httpd::http::mime::guess_media_type;
/// assert_eq!(guess_media_type("index.html").as_deref(), Some("text/html"));
/// assert_eq!(guess_media_type("noext"), None);
/// ```
pub fn guess_media_type(path: impl AsRef<Path>) -> Option<String> {
    mime_guess::from_path(path)
        .first()
        .map(|mime| mime.essence_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_types() {
        assert_eq!(guess_media_type("a.css").as_deref(), Some("text/css"));
        assert_eq!(guess_media_type("a.png").as_deref(), Some("image/png"));
        assert_eq!(guess_media_type("a.jpg").as_deref(), Some("image/jpeg"));
        assert_eq!(guess_media_type("/x/y/page.htm").as_deref(), Some("text/html"));
    }

    #[test]
    fn test_unknown_extension() {
        assert_eq!(guess_media_type("file.zzzunknown"), None);
        assert_eq!(guess_media_type("Makefile"), None);
    }
}
