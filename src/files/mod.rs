//! Document root access
//!
//! Maps request targets onto files below the document root and reads them.
//! Every path handed out by this module has been checked to stay inside the
//! root, including after percent-decoding and symlink resolution.

pub mod loader;
pub mod resolver;

pub use loader::{LoadError, LoadedContent, load};
pub use resolver::{DocumentRoot, ResolveError, ResolvedPath};
