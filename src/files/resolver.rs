//! Request target to filesystem path resolution
//!
//! A target goes through these steps:
//!
//! 1. Reject any literal `../` outright
//! 2. Drop `?query` and `#fragment`
//! 3. Percent-decode
//! 4. Normalise `.` and `..` lexically, rejecting anything that climbs above the root
//! 5. Join with the root, adding `index.html` for directories and trailing slashes
//! 6. If the file exists, resolve symlinks and require the result to stay under the root

use std::io;
use std::path::{Path, PathBuf};

use tokio::fs;

/// File served for directory requests.
pub const INDEX_FILE: &str = "index.html";

const TRAVERSAL: &str = "../";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveError {
    /// Target is a traversal attempt or resolves outside the document root.
    Forbidden,
}

/// Absolute path that has been checked to lie inside the document root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath(PathBuf);

impl ResolvedPath {
    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

impl AsRef<Path> for ResolvedPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

/// Base directory all served files must live under.
///
/// Canonicalised once at construction and read-only afterwards, so it can be
/// shared across every worker behind an `Arc`.
#[derive(Debug, Clone)]
pub struct DocumentRoot {
    path: PathBuf,
}

impl DocumentRoot {
    /// Canonicalises `path` and checks it is a directory.
    pub fn new(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = std::fs::canonicalize(path.as_ref())?;

        if !path.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotADirectory,
                format!("document root {} is not a directory", path.display()),
            ));
        }

        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Maps a request target onto a file below the root.
    ///
    /// A missing file is not an error here; the loader reports it.
    pub async fn resolve(&self, target: &str) -> Result<ResolvedPath, ResolveError> {
        if target.contains(TRAVERSAL) {
            return Err(ResolveError::Forbidden);
        }

        let decoded = percent_decode(strip_query_and_fragment(target));
        let relative = normalize(&decoded)?;

        let mut full = self.path.join(relative);
        if decoded.ends_with('/') || is_dir(&full).await {
            full.push(INDEX_FILE);
        }

        // Symlinks may still point outside the root
        if let Ok(canonical) = fs::canonicalize(&full).await {
            if !canonical.starts_with(&self.path) {
                tracing::warn!(
                    request_target = %target,
                    resolved = %canonical.display(),
                    "Path escapes document root"
                );
                return Err(ResolveError::Forbidden);
            }
        }

        Ok(ResolvedPath(full))
    }
}

/// Cuts the target at the first `?` and then at the first `#`.
pub fn strip_query_and_fragment(target: &str) -> &str {
    let path = target.split('?').next().unwrap_or_default();
    path.split('#').next().unwrap_or_default()
}

/// Percent-decodes a path; invalid UTF-8 is replaced rather than rejected.
pub fn percent_decode(path: &str) -> String {
    let bytes = urlencoding::decode_binary(path.as_bytes());
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Turns a decoded URL path into a relative filesystem path with no `.` or
/// `..` components. Climbing above the root is `Forbidden`.
pub fn normalize(decoded: &str) -> Result<PathBuf, ResolveError> {
    let mut segments: Vec<&str> = Vec::new();

    for segment in decoded.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop().ok_or(ResolveError::Forbidden)?;
            }
            s => segments.push(s),
        }
    }

    Ok(segments.iter().collect())
}

async fn is_dir(path: &Path) -> bool {
    fs::metadata(path)
        .await
        .map(|m| m.is_dir())
        .unwrap_or(false)
}
