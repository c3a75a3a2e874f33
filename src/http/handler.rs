//! Request-to-response pipeline
//!
//! Parse, resolve, load, each stage short-circuiting into an [`Outcome`].
//! Exactly one outcome is produced per request and it alone decides the
//! response.

use crate::files::{self, DocumentRoot, LoadError, LoadedContent, ResolveError};
use crate::http::parser::{ParseError, parse_request};
use crate::http::request::{Method, Request};
use crate::http::response::{Response, StatusCode};

/// Result of running one request through the pipeline.
#[derive(Debug)]
pub enum Outcome {
    Ok {
        method: Method,
        content: LoadedContent,
    },
    BadRequest,
    Forbidden,
    NotFound,
    MethodNotAllowed,
}

impl Outcome {
    pub fn status(&self) -> StatusCode {
        match self {
            Outcome::Ok { .. } => StatusCode::Ok,
            Outcome::BadRequest => StatusCode::BadRequest,
            Outcome::Forbidden => StatusCode::Forbidden,
            Outcome::NotFound => StatusCode::NotFound,
            Outcome::MethodNotAllowed => StatusCode::MethodNotAllowed,
        }
    }

    pub fn into_response(self) -> Response {
        match self {
            Outcome::Ok { method, content } => Response::file(content, method == Method::GET),
            other => Response::error(other.status()),
        }
    }
}

impl From<ParseError> for Outcome {
    fn from(e: ParseError) -> Self {
        match e {
            ParseError::BadRequest => Outcome::BadRequest,
            ParseError::MethodNotAllowed => Outcome::MethodNotAllowed,
        }
    }
}

impl From<ResolveError> for Outcome {
    fn from(e: ResolveError) -> Self {
        match e {
            ResolveError::Forbidden => Outcome::Forbidden,
        }
    }
}

impl From<LoadError> for Outcome {
    fn from(e: LoadError) -> Self {
        match e {
            LoadError::NotFound => Outcome::NotFound,
        }
    }
}

/// Runs the resolve and load stages for an already parsed request.
pub async fn serve(request: &Request, root: &DocumentRoot) -> Outcome {
    let path = match root.resolve(&request.target).await {
        Ok(path) => path,
        Err(e) => return e.into(),
    };

    match files::load(&path).await {
        Ok(content) => Outcome::Ok {
            method: request.method,
            content,
        },
        Err(e) => e.into(),
    }
}

/// Full pipeline over raw request bytes.
pub async fn build_response(raw: &[u8], root: &DocumentRoot) -> Response {
    let (outcome, request) = match parse_request(raw) {
        Ok(request) => (serve(&request, root).await, Some(request)),
        Err(e) => (Outcome::from(e), None),
    };

    let status = outcome.status();
    match &request {
        Some(req) => tracing::info!(
            method = %req.method,
            path = %req.target,
            user_agent = %req.user_agent(),
            status = status.as_u16(),
            "Request served"
        ),
        None => tracing::info!(status = status.as_u16(), "Request rejected"),
    }

    outcome.into_response()
}
