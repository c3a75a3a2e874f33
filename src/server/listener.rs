use std::net::{Shutdown, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

use socket2::{Domain, Protocol, SockRef, Socket, Type};
use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing::{debug, error, info};

use crate::files::DocumentRoot;
use crate::http::connection::Connection;

/// Pending connections the kernel queues before refusing new ones.
pub const BACKLOG: i32 = 10;

/// Pause after a failed `accept()` (e.g. out of file descriptors).
pub const ACCEPT_BACKOFF: Duration = Duration::from_millis(100);

/// Creates the shared listening socket with `SO_REUSEADDR` set.
///
/// The socket is left non-blocking so each worker can adopt a clone of it
/// into its own tokio runtime.
pub fn bind(addr: SocketAddr) -> std::io::Result<std::net::TcpListener> {
    let socket = Socket::new(Domain::for_address(addr), Type::STREAM, Some(Protocol::TCP))?;

    socket.set_reuse_address(true)?;
    socket.set_nonblocking(true)?;
    socket.bind(&addr.into())?;
    socket.listen(BACKLOG)?;

    Ok(socket.into())
}

/// Accept loop for one worker. Every connection gets its own task.
pub async fn run(
    listener: TcpListener,
    root: Arc<DocumentRoot>,
    worker: usize,
    mut shutdown: watch::Receiver<bool>,
) {
    loop {
        tokio::select! {
            accepted = listener.accept() => match accepted {
                Ok((socket, peer)) => {
                    debug!(worker, %peer, "Accepted connection");

                    let root = root.clone();
                    tokio::spawn(async move {
                        let mut conn = Connection::new(socket, root);
                        if let Err(e) = conn.run().await {
                            error!(worker, %peer, error = %e, "Connection error");
                        }
                    });
                }
                Err(e) => {
                    error!(worker, error = %e, "Can't accept connection");
                    tokio::time::sleep(ACCEPT_BACKOFF).await;
                }
            },

            _ = shutdown.changed() => {
                info!(worker, "Worker stopping");
                break;
            }
        }
    }

    close(&listener);
}

/// Half-closes the listening socket; errors (already closed, not connected)
/// are ignored.
pub fn close(listener: &TcpListener) {
    let _ = SockRef::from(listener).shutdown(Shutdown::Write);
}
