//! The HTTP transport: connection pool, admission limiter, and the list request path.

use crate::error::{Error, ParamsError};
use crate::params::{ListRequest, Query};
use derive_builder::Builder;
use http::HeaderMap;
use reqwest::Url;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tracing::instrument;
use ytdata_codec::{Record, Value};

/// Where requests go unless [`ClientConfig`] says otherwise.
pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3/";

/// How requests prove who they are made on behalf of.
#[derive(Clone, PartialEq, Eq)]
pub enum Authentication {
    /// An API key, sent as the `key` query parameter.
    ApiKey(String),
    /// An OAuth 2.0 access token, sent as a bearer token.
    ///
    /// The refresh token is kept so callers can store it alongside the access token. The client
    /// never refreshes on its own.
    AccessToken {
        access_token: String,
        refresh_token: Option<String>,
    },
}

impl fmt::Debug for Authentication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Authentication::ApiKey(_) => f.debug_tuple("ApiKey").field(&"<redacted>").finish(),
            Authentication::AccessToken { refresh_token, .. } => f
                .debug_struct("AccessToken")
                .field("access_token", &"<redacted>")
                .field("refresh_token", &refresh_token.as_ref().map(|_| "<redacted>"))
                .finish(),
        }
    }
}

/// Connection settings for a [`Client`].
///
/// ```
/// use std::time::Duration;
/// use ytdata::ClientConfig;
///
/// let config = ClientConfig::builder()
///     .timeout(Duration::from_secs(10))
///     .max_concurrent_requests(8_usize)
///     .user_agent("my-app/1.0")
///     .build()?;
/// assert_eq!(config.base_url(), "https://www.googleapis.com/youtube/v3/");
/// # Ok::<_, Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Builder)]
#[builder(build_fn(validate = "Self::validate"))]
pub struct ClientConfig {
    /// The API root that resource paths are resolved against.
    #[builder(setter(into), default = "DEFAULT_BASE_URL.to_string()")]
    base_url: String,

    /// Limit on a whole request, from connecting until the body has been read.
    #[builder(default = "Duration::from_secs(30)")]
    timeout: Duration,

    #[builder(default = "Duration::from_secs(3)")]
    connect_timeout: Duration,

    /// How long an idle pooled connection is kept open.
    #[builder(default = "Duration::from_secs(30)")]
    pool_idle_timeout: Duration,

    /// How many requests may be in flight at once. Further requests wait for a slot.
    #[builder(setter(into), default = "100")]
    max_concurrent_requests: usize,

    #[builder(setter(into, strip_option), default)]
    user_agent: Option<String>,

    /// Headers sent with every request.
    #[builder(default)]
    headers: HeaderMap,

    /// Proxy URL for all traffic.
    #[builder(setter(into, strip_option), default)]
    proxy: Option<String>,
}

impl ClientConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if self.max_concurrent_requests == Some(0) {
            return Err("max_concurrent_requests must be at least 1".to_string());
        }
        if let Some(base_url) = &self.base_url {
            let url = Url::parse(base_url).map_err(|e| format!("invalid base_url: {e}"))?;
            if url.cannot_be_a_base() {
                return Err(format!("base_url {base_url} cannot be a base URL"));
            }
        }
        Ok(())
    }
}

impl ClientConfig {
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn max_concurrent_requests(&self) -> usize {
        self.max_concurrent_requests
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(3),
            pool_idle_timeout: Duration::from_secs(30),
            max_concurrent_requests: 100,
            user_agent: None,
            headers: HeaderMap::new(),
            proxy: None,
        }
    }
}

/// A handle to the YouTube Data API.
///
/// Cloning is cheap; clones share the connection pool and the limit on concurrent requests.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
    auth: Arc<Authentication>,
    permits: Arc<Semaphore>,
}

impl Client {
    /// Sets up the connection pool. No request is made until the first list call.
    pub fn open(auth: Authentication, config: ClientConfig) -> Result<Self, Error> {
        let mut base_url = Url::parse(&config.base_url).map_err(|e| {
            ParamsError::Invalid(format!("invalid base URL {:?}: {e}", config.base_url))
        })?;
        // resource paths are joined onto the base, which drops a final segment without a slash
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let mut http = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .pool_idle_timeout(config.pool_idle_timeout)
            .default_headers(config.headers);
        if let Some(user_agent) = config.user_agent {
            http = http.user_agent(user_agent);
        }
        if let Some(proxy) = config.proxy {
            http = http.proxy(reqwest::Proxy::all(proxy)?);
        }
        let http = http.build()?;

        tracing::debug!(
            %base_url,
            max_concurrent_requests = config.max_concurrent_requests,
            "opened YouTube Data API client"
        );
        Ok(Self {
            http,
            base_url,
            auth: Arc::new(auth),
            permits: Arc::new(Semaphore::new(config.max_concurrent_requests)),
        })
    }

    /// Shuts the client down.
    ///
    /// Requests already holding a slot run to completion. Every later request, on this handle
    /// or any clone of it, fails with [`Error::Closed`].
    pub fn close(self) {
        self.permits.close();
        tracing::debug!("closed YouTube Data API client");
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Lists `path` and decodes the response as `T`.
    ///
    /// Prefer [`Client::execute`], or the resource accessors such as [`Client::videos`], which
    /// check the parameters first.
    #[instrument(skip(self), err)]
    pub async fn list<T: Record>(&self, path: &str, query: &Query) -> Result<T, Error> {
        let url = self
            .base_url
            .join(path)
            .map_err(|e| ParamsError::Invalid(format!("invalid resource path {path:?}: {e}")))?;

        // the permit is held until the body has been read
        let permit = self.permits.acquire().await.map_err(|_| Error::Closed)?;

        let mut request = self.http.get(url).query(query.pairs());
        request = match &*self.auth {
            Authentication::ApiKey(key) => request.query(&[("key", key)]),
            Authentication::AccessToken { access_token, .. } => request.bearer_auth(access_token),
        };

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.json::<Value>().await.ok();
            drop(permit);
            return Err(Error::from_response(status, body.as_ref()));
        }

        let body = response.json::<Value>().await;
        drop(permit);
        let map = match body {
            Ok(Value::Object(map)) => map,
            Ok(_) => return Err(Error::unreadable_body(status, "expected a JSON object")),
            Err(e) => return Err(Error::unreadable_body(status, e)),
        };

        tracing::debug!(
            returned_items = map.get("items").and_then(ytdata_codec::Value::as_array).map(Vec::len),
            total_results = map
                .get("pageInfo")
                .and_then(|page| page.get("totalResults"))
                .and_then(ytdata_codec::Value::as_u64),
            "got list response"
        );
        Ok(T::decode(&map)?)
    }

    /// Runs a typed list request.
    pub async fn execute<R: ListRequest>(&self, request: &R) -> Result<R::Response, Error> {
        self.list(R::RESOURCE.path(), &request.query()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockApi;
    use insta::assert_snapshot;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tokio::task::JoinSet;
    use ytdata_codec::record;

    record! {
        struct Ping {
            kind: String,
            items: Vec<String> = Vec::new(),
        }
    }

    fn key() -> Authentication {
        Authentication::ApiKey("secret-key".to_string())
    }

    #[test]
    fn config_defaults() {
        let config = ClientConfig::builder().build().unwrap();
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.connect_timeout, Duration::from_secs(3));
        assert_eq!(config.pool_idle_timeout, Duration::from_secs(30));
        assert_eq!(config.max_concurrent_requests(), 100);
    }

    #[test]
    fn config_validation() {
        let e = ClientConfig::builder()
            .max_concurrent_requests(0_usize)
            .build()
            .unwrap_err();
        assert_snapshot!(e.to_string(), @"max_concurrent_requests must be at least 1");
        assert!(ClientConfig::builder().base_url("not a url").build().is_err());
    }

    #[test]
    fn credentials_are_not_printed() {
        let debug = format!(
            "{:?} {:?}",
            key(),
            Authentication::AccessToken {
                access_token: "ya29.token".into(),
                refresh_token: Some("1//refresh".into()),
            }
        );
        assert!(!debug.contains("secret-key"));
        assert!(!debug.contains("ya29"));
        assert!(!debug.contains("1//refresh"));
    }

    #[tokio::test]
    async fn base_url_gets_a_trailing_slash() {
        let config = ClientConfig::builder()
            .base_url("http://localhost:9/youtube/v3")
            .build()
            .unwrap();
        let client = Client::open(key(), config).unwrap();
        assert_eq!(client.base_url().as_str(), "http://localhost:9/youtube/v3/");
    }

    #[tokio::test]
    async fn list_sends_query_and_key() {
        let api = MockApi::start().await;
        api.route("videos", 200, json!({"kind": "youtube#ping", "items": ["a", "b"]}));
        let client = api.client(key());

        let query = Query::new().set("part", "snippet").set("id", "a,b");
        let ping: Ping = client.list("videos", &query).await.unwrap();
        assert_eq!(ping.kind, "youtube#ping");
        assert_eq!(ping.items, ["a", "b"]);

        let requests = api.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].path, "videos");
        assert_eq!(
            requests[0].query,
            [
                ("part".to_string(), "snippet".to_string()),
                ("id".to_string(), "a,b".to_string()),
                ("key".to_string(), "secret-key".to_string()),
            ]
        );
        assert_eq!(requests[0].authorization, None);
    }

    #[tokio::test]
    async fn access_tokens_are_sent_as_bearer() {
        let api = MockApi::start().await;
        api.route("channels", 200, json!({"kind": "youtube#ping"}));
        let client = api.client(Authentication::AccessToken {
            access_token: "ya29.token".into(),
            refresh_token: None,
        });

        let _: Ping = client.list("channels", &Query::new()).await.unwrap();
        let requests = api.requests();
        assert_eq!(requests[0].authorization.as_deref(), Some("Bearer ya29.token"));
        assert!(requests[0].query.iter().all(|(k, _)| k != "key"));
    }

    #[tokio::test]
    async fn quota_errors() {
        let api = MockApi::start().await;
        api.route(
            "search",
            403,
            json!({"error": {"code": 403, "message": "quota", "errors": [{"reason": "quotaExceeded"}]}}),
        );
        let e = api
            .client(key())
            .list::<Ping>("search", &Query::new())
            .await
            .unwrap_err();
        assert!(matches!(e, Error::QuotaExceeded { status: 403, .. }), "{e:?}");
    }

    #[tokio::test]
    async fn unreadable_error_bodies() {
        let api = MockApi::start().await;
        api.route_raw("videos", 500, "<html>oops</html>");
        let e = api
            .client(key())
            .list::<Ping>("videos", &Query::new())
            .await
            .unwrap_err();
        assert_snapshot!(e.to_string(), @"HTTP error 500: Unknown YouTube Data API error");
    }

    #[tokio::test]
    async fn non_object_success_bodies() {
        let api = MockApi::start().await;
        api.route("videos", 200, json!([1, 2]));
        let e = api
            .client(key())
            .list::<Ping>("videos", &Query::new())
            .await
            .unwrap_err();
        assert_snapshot!(e.to_string(), @"HTTP error 200: cannot read response body: expected a JSON object");
    }

    #[tokio::test]
    async fn malformed_payloads() {
        let api = MockApi::start().await;
        api.route("videos", 200, json!({"items": []}));
        let e = api
            .client(key())
            .list::<Ping>("videos", &Query::new())
            .await
            .unwrap_err();
        let Error::Decode(e) = e else {
            panic!("expected a decode error, got {e:?}");
        };
        assert_eq!(e.field(), "kind");
    }

    #[tokio::test]
    async fn concurrency_is_capped() {
        let api = MockApi::with_delay(Duration::from_millis(100)).await;
        api.route("videos", 200, json!({"kind": "youtube#ping"}));
        let config = ClientConfig::builder()
            .base_url(api.url())
            .max_concurrent_requests(2_usize)
            .build()
            .unwrap();
        let client = Client::open(key(), config).unwrap();

        let mut tasks = JoinSet::new();
        for _ in 0..6 {
            let client = client.clone();
            tasks.spawn(async move { client.list::<Ping>("videos", &Query::new()).await });
        }
        while let Some(result) = tasks.join_next().await {
            result.unwrap().unwrap();
        }
        assert_eq!(api.requests().len(), 6);
        assert_eq!(api.max_in_flight(), 2);
    }

    #[tokio::test]
    async fn closed_clients_refuse_requests() {
        let api = MockApi::start().await;
        api.route("videos", 200, json!({"kind": "youtube#ping"}));
        let client = api.client(key());
        let clone = client.clone();
        client.close();

        let e = clone
            .list::<Ping>("videos", &Query::new())
            .await
            .unwrap_err();
        assert!(matches!(e, Error::Closed));
        assert!(api.requests().is_empty());
    }
}
