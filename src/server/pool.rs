//! Fixed-size pool of accept workers
//!
//! Each worker is an OS thread running its own single-threaded tokio runtime
//! and its own accept loop on a clone of the one listening socket. The kernel
//! hands each incoming connection to exactly one of them. Workers share
//! nothing else except the read-only document root.

use std::net::SocketAddr;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use anyhow::Context;
use tokio::net::TcpListener;
use tokio::sync::{mpsc, watch};
use tracing::{error, info};

use crate::files::DocumentRoot;
use crate::server::listener;

pub struct WorkerPool {
    local_addr: SocketAddr,
    handles: Vec<JoinHandle<()>>,
    shutdown: watch::Sender<bool>,
    exited: mpsc::Receiver<()>,
}

impl WorkerPool {
    /// Spawns `workers` threads, each accepting on a clone of `listener`.
    pub fn start(
        listener: std::net::TcpListener,
        root: Arc<DocumentRoot>,
        workers: usize,
    ) -> anyhow::Result<Self> {
        let local_addr = listener.local_addr()?;
        let (shutdown, shutdown_rx) = watch::channel(false);
        // Only the workers hold senders; the channel closes when the last one exits
        let (exited_tx, exited) = mpsc::channel(1);

        let mut handles = Vec::with_capacity(workers);
        for id in 1..=workers {
            let listener = listener
                .try_clone()
                .context("Failed to share listening socket")?;
            let root = root.clone();
            let shutdown_rx = shutdown_rx.clone();
            let exited_tx = exited_tx.clone();

            let handle = thread::Builder::new()
                .name(format!("httpd-worker-{}", id))
                .spawn(move || {
                    if let Err(e) = run_worker(id, listener, root, shutdown_rx) {
                        error!(worker = id, error = %e, "Worker failed");
                    }
                    drop(exited_tx);
                })
                .context("Failed to spawn worker thread")?;

            info!(worker = id, "Worker started");
            handles.push(handle);
        }

        Ok(Self {
            local_addr,
            handles,
            shutdown,
            exited,
        })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Number of worker threads started.
    pub fn workers(&self) -> usize {
        self.handles.len()
    }

    /// Resolves once every worker thread has returned.
    pub async fn stopped(&mut self) {
        while self.exited.recv().await.is_some() {}
    }

    /// Asks every worker to stop accepting and exit.
    pub fn shutdown(&self) {
        let _ = self.shutdown.send(true);
    }

    /// Blocks until all worker threads have finished.
    pub fn join(self) {
        for handle in self.handles {
            let name = handle.thread().name().unwrap_or("worker").to_string();
            if handle.join().is_err() {
                error!(thread = %name, "Worker panicked");
            }
        }
    }
}

fn run_worker(
    id: usize,
    listener: std::net::TcpListener,
    root: Arc<DocumentRoot>,
    shutdown: watch::Receiver<bool>,
) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to build worker runtime")?;

    runtime.block_on(async move {
        let listener = TcpListener::from_std(listener)?;
        listener::run(listener, root, id, shutdown).await;
        Ok::<_, anyhow::Error>(())
    })?;

    info!(worker = id, "Worker stopped");
    Ok(())
}
