use tokio::fs;

use crate::files::resolver::ResolvedPath;
use crate::http::mime;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadError {
    /// Nothing readable at the path: missing, a directory, or no permission.
    NotFound,
}

/// File bytes plus the guessed media type. Lives only as long as one response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedContent {
    pub media_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Reads the whole file at `path`.
pub async fn load(path: &ResolvedPath) -> Result<LoadedContent, LoadError> {
    let bytes = fs::read(path.as_path()).await.map_err(|e| {
        tracing::debug!(path = %path.as_path().display(), error = %e, "File not readable");
        LoadError::NotFound
    })?;

    Ok(LoadedContent {
        media_type: mime::guess_media_type(path.as_path()),
        bytes,
    })
}
