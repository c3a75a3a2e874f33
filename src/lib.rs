//! static-httpd - Static file HTTP/1.1 server
//!
//! Core library: request pipeline, document root access and the worker pool.

pub mod config;
pub mod files;
pub mod http;
pub mod server;
