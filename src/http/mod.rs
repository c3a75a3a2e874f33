//! HTTP protocol implementation.
//!
//! A deliberately small HTTP/1.1 server: one request per connection, GET and
//! HEAD only, every response closes the connection.
//!
//! # Architecture
//!
//! - **`connection`**: Reads one request off a stream, answers it, closes the stream
//! - **`parser`**: Extracts method and target from the request head
//! - **`handler`**: The parse → resolve → load pipeline producing one `Outcome`
//! - **`request`**: HTTP request representation
//! - **`response`**: Status codes and response construction
//! - **`writer`**: Serializes and writes HTTP responses to the client
//! - **`mime`**: MIME type detection based on file extensions
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Collect the request head
//!        └──────┬──────┘
//!               │ Head received (or peer stopped sending)
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Parse, resolve, load
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response to client
//!        └──────┬───────────┘
//!               │ Response sent
//!               ▼
//!            Closed
//! ```
//!
//! # Example
//!
//! ```ignore
//! use static_httpd::files::DocumentRoot;
//! use static_httpd::http::connection::Connection;
//! use std::sync::Arc;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let root = Arc::new(DocumentRoot::new("static")?);
//!     let listener = TcpListener::bind("127.0.0.1:8080").await?;
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         let root = root.clone();
//!         tokio::spawn(async move {
//!             let mut conn = Connection::new(socket, root);
//!             if let Err(e) = conn.run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod connection;
pub mod handler;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
