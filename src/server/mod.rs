//! Listening socket and worker pool.

pub mod listener;
pub mod pool;

use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use crate::config::Config;
use crate::files::DocumentRoot;

pub use pool::WorkerPool;

/// Binds the listening socket once and starts the configured number of
/// workers on it.
pub fn start(cfg: &Config) -> anyhow::Result<WorkerPool> {
    let root = DocumentRoot::new(&cfg.document_root).with_context(|| {
        format!("Can't use document root {}", cfg.document_root.display())
    })?;
    let addr = cfg.listen_addr()?;

    let socket = listener::bind(addr).with_context(|| format!("Can't open socket on {}", addr))?;
    let local_addr = socket.local_addr()?;
    info!(address = %local_addr, "HTTP server listening");

    info!(
        workers = cfg.workers,
        root = %root.path().display(),
        "Starting workers"
    );
    WorkerPool::start(socket, Arc::new(root), cfg.workers)
}
