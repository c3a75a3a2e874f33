use std::sync::Arc;

use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::TcpStream;

use crate::files::DocumentRoot;
use crate::http::handler::build_response;
use crate::http::parser::find_headers_end;
use crate::http::writer::ResponseWriter;

/// Bytes requested from the socket per read.
pub const CHUNK_SIZE: usize = 1024;

/// Reading stops once this much has arrived, terminator or not.
pub const MAX_REQUEST_SIZE: usize = 8 * 1024;

pub struct Connection<S = TcpStream> {
    stream: S,
    root: Arc<DocumentRoot>,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Processing(BytesMut),
    Writing(ResponseWriter),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, root: Arc<DocumentRoot>) -> Self {
        Self {
            stream,
            root,
            state: ConnectionState::Reading,
        }
    }

    /// Serves exactly one request, then closes the stream whether or not
    /// anything failed along the way.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        let result = self.drive().await;
        self.state = ConnectionState::Closed;

        // Peer may already be gone
        let _ = self.stream.shutdown().await;

        result
    }

    async fn drive(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    // An empty read still goes through the parser and gets a 400
                    let raw = read_request(&mut self.stream).await?;
                    self.state = ConnectionState::Processing(raw);
                }

                ConnectionState::Processing(raw) => {
                    let response = build_response(raw, &self.root).await;
                    self.state = ConnectionState::Writing(ResponseWriter::new(&response));
                }

                ConnectionState::Writing(writer) => {
                    writer.write_to_stream(&mut self.stream).await?;
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }
}

/// Drains a request head off `reader`.
///
/// Reads `CHUNK_SIZE` bytes at a time until the blank line ending the head
/// (`\r\n\r\n` or a bare `\n\n`) shows up, the peer stops sending, or `MAX_REQUEST_SIZE` is reached.
/// Returns whatever was collected; the parser decides if it is usable.
pub async fn read_request<R>(reader: &mut R) -> std::io::Result<BytesMut>
where
    R: AsyncRead + Unpin,
{
    let mut buffer = BytesMut::with_capacity(CHUNK_SIZE);
    let mut chunk = [0u8; CHUNK_SIZE];

    while find_headers_end(&buffer).is_none() && buffer.len() < MAX_REQUEST_SIZE {
        let want = CHUNK_SIZE.min(MAX_REQUEST_SIZE - buffer.len());
        let n = reader.read(&mut chunk[..want]).await?;

        if n == 0 {
            break;
        }

        buffer.extend_from_slice(&chunk[..n]);
    }

    Ok(buffer)
}
