//! Blocking HTTP surface for the rendered page.
//!
//! The page is rendered once before the listener starts; each request is a
//! lookup against that immutable body. Requests are handled one at a time on
//! the calling thread.

use crate::{Error, Result};
use sha2::{Digest, Sha256};
use std::net::SocketAddr;
use tiny_http::{Header, Method, Request, Response, Server};

/// A pre-rendered document and its content-addressed ETag.
#[derive(Debug, Clone)]
pub struct ServedPage {
    body: String,
    etag: String,
}

/// Outcome of routing one request, independent of the socket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub content_type: Option<&'static str>,
    pub etag: Option<String>,
    pub body: Vec<u8>,
}

impl Reply {
    fn text(status: u16, body: &str) -> Self {
        Self {
            status,
            content_type: Some("text/plain; charset=utf-8"),
            etag: None,
            body: body.as_bytes().to_vec(),
        }
    }
}

impl ServedPage {
    pub fn new(body: String) -> Self {
        let etag = format!("\"{}\"", hex::encode(Sha256::digest(body.as_bytes())));
        Self { body, etag }
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Quoted strong ETag of the body.
    pub fn etag(&self) -> &str {
        &self.etag
    }

    pub fn route(&self, method: &Method, url: &str, if_none_match: Option<&str>) -> Reply {
        let path = url.split(['?', '#']).next().unwrap_or("/");
        if !matches!(method, Method::Get | Method::Head) {
            return Reply::text(405, "Method Not Allowed");
        }
        match path {
            "/" | "/index.html" => {
                if if_none_match.is_some_and(|v| self.matches_etag(v)) {
                    return Reply {
                        status: 304,
                        content_type: None,
                        etag: Some(self.etag.clone()),
                        body: Vec::new(),
                    };
                }
                Reply {
                    status: 200,
                    content_type: Some("text/html; charset=utf-8"),
                    etag: Some(self.etag.clone()),
                    body: self.body.as_bytes().to_vec(),
                }
            }
            "/healthz" => Reply::text(200, "ok"),
            _ => Reply::text(404, "Not Found"),
        }
    }

    fn matches_etag(&self, header: &str) -> bool {
        header.split(',').map(str::trim).any(|tag| {
            tag == "*" || tag.strip_prefix("W/").unwrap_or(tag) == self.etag
        })
    }
}

/// Listener serving one `ServedPage`.
pub struct PageServer {
    server: Server,
    page: ServedPage,
}

impl PageServer {
    pub fn bind(addr: &str, page: ServedPage) -> Result<Self> {
        let server = Server::http(addr)
            .map_err(|e| Error::ServerError(format!("failed to bind {}: {}", addr, e)))?;
        Ok(Self { server, page })
    }

    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.server.server_addr().to_ip()
    }

    /// Serve until the listener is unblocked.
    pub fn run(&self) -> Result<()> {
        if let Some(addr) = self.local_addr() {
            log::info!("serving on http://{}", addr);
        }
        for request in self.server.incoming_requests() {
            self.respond(request)?;
        }
        log::info!("listener stopped");
        Ok(())
    }

    /// Block for exactly one request and answer it.
    pub fn handle_one(&self) -> Result<()> {
        let request = self
            .server
            .recv()
            .map_err(|e| Error::ServerError(format!("accept failed: {}", e)))?;
        self.respond(request)
    }

    /// Make a blocked `run` return.
    pub fn unblock(&self) {
        self.server.unblock();
    }

    fn respond(&self, request: Request) -> Result<()> {
        let if_none_match = request
            .headers()
            .iter()
            .find(|h| h.field.equiv("If-None-Match"))
            .map(|h| h.value.as_str().to_string());
        let reply = self
            .page
            .route(request.method(), request.url(), if_none_match.as_deref());
        log::info!("{} {} -> {}", request.method(), request.url(), reply.status);

        let mut response = Response::from_data(reply.body).with_status_code(reply.status);
        if let Some(ct) = reply.content_type {
            response = response.with_header(header("Content-Type", ct)?);
        }
        if let Some(etag) = &reply.etag {
            response = response.with_header(header("ETag", etag)?);
            response = response.with_header(header("Cache-Control", "no-cache")?);
        }
        if let Err(e) = request.respond(response) {
            // Client went away; keep serving others.
            log::warn!("failed to send response: {}", e);
        }
        Ok(())
    }
}

fn header(name: &str, value: &str) -> Result<Header> {
    Header::from_bytes(name.as_bytes(), value.as_bytes())
        .map_err(|_| Error::ServerError(format!("invalid header {}: {}", name, value)))
}
