//! An in-process stand-in for the YouTube Data API, for tests.

use crate::{Authentication, Client, ClientConfig};
use bytes::Bytes;
use http_body_util::Full;
use hyper::body::Incoming;
use hyper::service::service_fn;
use hyper::{Request, Response, StatusCode};
use std::collections::HashMap;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

const PREFIX: &str = "/youtube/v3/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Recorded {
    /// Path relative to the API root, e.g. `videos`.
    pub(crate) path: String,
    pub(crate) query: Vec<(String, String)>,
    pub(crate) authorization: Option<String>,
}

#[derive(Default)]
struct State {
    routes: Mutex<HashMap<String, (u16, String)>>,
    requests: Mutex<Vec<Recorded>>,
    delay: Duration,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl State {
    async fn handle(
        self: Arc<Self>,
        req: Request<Incoming>,
    ) -> Result<Response<Full<Bytes>>, Infallible> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        let path = req.uri().path();
        let path = path.strip_prefix(PREFIX).unwrap_or(path).to_string();
        let query = form_urlencoded::parse(req.uri().query().unwrap_or("").as_bytes())
            .into_owned()
            .collect();
        let authorization = req
            .headers()
            .get(hyper::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        self.requests.lock().unwrap().push(Recorded {
            path: path.clone(),
            query,
            authorization,
        });

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let (status, body) = self
            .routes
            .lock()
            .unwrap()
            .get(&path)
            .cloned()
            .unwrap_or_else(|| (404, r#"{"error": {"code": 404, "message": "Not Found"}}"#.into()));
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        let response = Response::builder()
            .status(StatusCode::from_u16(status).unwrap())
            .header(hyper::header::CONTENT_TYPE, "application/json")
            .body(Full::new(Bytes::from(body)))
            .unwrap();
        Ok(response)
    }
}

/// A local HTTP/1 server that answers API paths with canned bodies and records what it was sent.
pub(crate) struct MockApi {
    addr: SocketAddr,
    state: Arc<State>,
}

impl MockApi {
    pub(crate) async fn start() -> Self {
        Self::with_delay(Duration::ZERO).await
    }

    /// Like [`MockApi::start`], but every response is held back for `delay`.
    pub(crate) async fn with_delay(delay: Duration) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let state = Arc::new(State {
            delay,
            ..State::default()
        });

        let server = Arc::clone(&state);
        tokio::spawn(async move {
            while let Ok((conn, _)) = listener.accept().await {
                let state = Arc::clone(&server);
                tokio::spawn(async move {
                    let conn = hyper_util::rt::TokioIo::new(conn);
                    let service =
                        service_fn(move |req: Request<Incoming>| Arc::clone(&state).handle(req));
                    let _ = hyper::server::conn::http1::Builder::new()
                        .serve_connection(conn, service)
                        .await;
                });
            }
        });

        Self { addr, state }
    }

    pub(crate) fn url(&self) -> String {
        format!("http://{}{PREFIX}", self.addr)
    }

    /// A client pointed at this server.
    pub(crate) fn client(&self, auth: Authentication) -> Client {
        let config = ClientConfig::builder().base_url(self.url()).build().unwrap();
        Client::open(auth, config).unwrap()
    }

    pub(crate) fn route(&self, path: &str, status: u16, body: serde_json::Value) {
        self.route_raw(path, status, &body.to_string());
    }

    pub(crate) fn route_raw(&self, path: &str, status: u16, body: &str) {
        self.state
            .routes
            .lock()
            .unwrap()
            .insert(path.to_string(), (status, body.to_string()));
    }

    pub(crate) fn requests(&self) -> Vec<Recorded> {
        self.state.requests.lock().unwrap().clone()
    }

    /// The most requests that were ever being answered at the same time.
    pub(crate) fn max_in_flight(&self) -> usize {
        self.state.max_in_flight.load(Ordering::SeqCst)
    }
}
