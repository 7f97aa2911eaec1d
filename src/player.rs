//! Toy player-score server.
//!
//! `PlayerServer` only knows HTTP; scores live behind the `PlayerStore`
//! trait so tests can hand it a stub and `main` an in-memory store.

use bytes::Bytes;
use http_body_util::Full;
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Method, Request, Response, StatusCode};
use hyper_util::rt::{TokioIo, TokioTimer};
use percent_encoding::percent_decode_str;
use std::borrow::Cow;
use std::collections::HashMap;
use std::convert::Infallible;
use std::future::Future;
use std::io;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::net::TcpListener;
use tracing::{debug, info, warn};

pub trait PlayerStore: Send + Sync + 'static {
    fn player_score(&self, name: &str) -> Option<u32>;
    fn record_win(&self, name: &str);
}

// =============================================================================
// In-memory store
// =============================================================================

#[derive(Debug, Default)]
pub struct InMemoryPlayerStore {
    scores: Mutex<HashMap<String, u32>>,
}

impl InMemoryPlayerStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PlayerStore for InMemoryPlayerStore {
    fn player_score(&self, name: &str) -> Option<u32> {
        let scores = self.scores.lock().unwrap_or_else(PoisonError::into_inner);
        scores.get(name).copied()
    }

    fn record_win(&self, name: &str) {
        let mut scores = self.scores.lock().unwrap_or_else(PoisonError::into_inner);
        *scores.entry(name.to_string()).or_insert(0) += 1;
    }
}

// =============================================================================
// Routing
// =============================================================================

pub struct PlayerServer<S> {
    store: Arc<S>,
}

impl<S> Clone for PlayerServer<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: PlayerStore> PlayerServer<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Routes one request. The body is never read.
    pub fn handle<B>(&self, req: &Request<B>) -> Response<Full<Bytes>> {
        let player = match player_name(req.uri().path()) {
            PlayerPath::Name(player) => player,
            PlayerPath::NotUtf8 => return respond(StatusCode::BAD_REQUEST, ""),
            PlayerPath::Other => return respond(StatusCode::NOT_FOUND, ""),
        };

        match *req.method() {
            Method::GET => self.show_score(&player),
            Method::POST => self.process_win(&player),
            _ => respond(StatusCode::METHOD_NOT_ALLOWED, ""),
        }
    }

    fn show_score(&self, player: &str) -> Response<Full<Bytes>> {
        match self.store.player_score(player) {
            Some(score) => respond(StatusCode::OK, score.to_string()),
            None => {
                debug!(player, "unknown player");
                respond(StatusCode::NOT_FOUND, "")
            }
        }
    }

    fn process_win(&self, player: &str) -> Response<Full<Bytes>> {
        self.store.record_win(player);
        debug!(player, "win recorded");
        respond(StatusCode::ACCEPTED, "")
    }

    // =========================================================================
    // Serving
    // =========================================================================

    /// Accepts connections until `shutdown` resolves. Connections already
    /// being served run to completion on their own tasks.
    pub async fn serve_with_shutdown(
        self,
        listener: TcpListener,
        shutdown: impl Future<Output = ()>,
    ) -> io::Result<()> {
        info!(addr = %listener.local_addr()?, "player server listening");
        tokio::pin!(shutdown);

        loop {
            let (tcp, peer) = tokio::select! {
                accepted = listener.accept() => accepted?,
                _ = &mut shutdown => {
                    info!("player server shutting down");
                    return Ok(());
                }
            };
            let io = TokioIo::new(tcp);
            let server = self.clone();

            tokio::task::spawn(async move {
                let service = service_fn(move |req: Request<Incoming>| {
                    let server = server.clone();
                    async move { Ok::<_, Infallible>(server.handle(&req)) }
                });

                if let Err(err) = http1::Builder::new()
                    .timer(TokioTimer::new())
                    .serve_connection(io, service)
                    .await
                {
                    warn!(%peer, error = ?err, "error serving connection");
                }
            });
        }
    }
}

enum PlayerPath<'a> {
    Name(Cow<'a, str>),
    NotUtf8,
    Other,
}

// The segment is split on the raw path, then percent-decoded, so `%2F`
// stays part of the name.
fn player_name(path: &str) -> PlayerPath<'_> {
    let Some(raw) = path.strip_prefix("/players/") else {
        return PlayerPath::Other;
    };
    if raw.is_empty() || raw.contains('/') {
        return PlayerPath::Other;
    }
    match percent_decode_str(raw).decode_utf8() {
        Ok(name) => PlayerPath::Name(name),
        Err(_) => PlayerPath::NotUtf8,
    }
}

fn respond(status: StatusCode, body: impl Into<Bytes>) -> Response<Full<Bytes>> {
    let mut response = Response::new(Full::new(body.into()));
    *response.status_mut() = status;
    response
}

// =============================================================================
// Tests
// =============================================================================
