//! HTTP plumbing shared by every endpoint group.

use percent_encoding::percent_decode_str;
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use store::{ClientConfig, KeyValueStore, TokenStore, TtlCache};

use crate::error::{ApiError, Result};

/// A downloaded CSV export.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvFile {
    pub filename: String,
    pub content: Vec<u8>,
}

/// Typed client for the Kakepple backend.
///
/// Holds the token store so every request carries `Authorization: Bearer`
/// when a session exists. GETs routed through [`ApiClient::get_cached`]
/// are kept in the TTL cache; any mutation clears it.
#[derive(Clone, Debug)]
pub struct ApiClient<S> {
    http: reqwest::Client,
    base_url: String,
    tokens: TokenStore<S>,
    cache: Option<TtlCache<S>>,
}

impl<S: KeyValueStore + Clone> ApiClient<S> {
    pub fn new(config: &ClientConfig, tokens: TokenStore<S>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.api.base_url.trim_end_matches('/').to_string(),
            tokens,
            cache: None,
        }
    }

    /// Enables response caching with the TTL from `config`. A zero TTL
    /// leaves caching off.
    pub fn with_cache(mut self, config: &ClientConfig, store: S) -> Self {
        self.cache = config
            .cache_ttl()
            .map(|ttl| TtlCache::new(store).with_ttl(ttl));
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn tokens(&self) -> &TokenStore<S> {
        &self.tokens
    }

    /// Absolute URL for an `/api`-relative path such as `/transactions`.
    pub fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut req = self.http.request(method, self.url(path));
        if let Some(token) = self.tokens.access_token() {
            req = req.bearer_auth(token);
        }
        #[cfg(target_arch = "wasm32")]
        {
            req = req.fetch_credentials_include();
        }
        req
    }

    async fn execute(&self, req: RequestBuilder) -> Result<Response> {
        let resp = req.send().await.map_err(|e| {
            tracing::warn!("request failed: {}", e);
            ApiError::from(e)
        })?;
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.text().await.unwrap_or_default();
        let err = ApiError::from_status(status.as_u16(), &body);
        tracing::warn!("request returned {}: {}", status, err);
        Err(err)
    }

    pub(crate) async fn send_json<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T> {
        let resp = self.execute(req).await?;
        let text = resp.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Sends and discards the body. For deletes that answer 204.
    pub(crate) async fn send_empty(&self, req: RequestBuilder) -> Result<()> {
        self.execute(req).await?;
        Ok(())
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        tracing::debug!("GET {}", path);
        self.send_json(self.request(Method::GET, path)).await
    }

    pub(crate) async fn get_query<Q, T>(&self, path: &str, query: &Q) -> Result<T>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        tracing::debug!("GET {}", path);
        self.send_json(self.request(Method::GET, path).query(query))
            .await
    }

    /// GET through the TTL cache. Hits skip the network entirely.
    pub(crate) async fn get_cached<Q, T>(&self, path: &str, query: &Q) -> Result<T>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned + Serialize,
    {
        let Some(cache) = &self.cache else {
            return self.get_query(path, query).await;
        };
        let key = cache_key(path, query);
        if let Some(hit) = cache.get::<T>(&key) {
            tracing::debug!("cache hit {}", key);
            return Ok(hit);
        }
        let fresh: T = self.get_query(path, query).await?;
        cache.set(&key, &fresh);
        Ok(fresh)
    }

    pub(crate) async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        tracing::debug!("POST {}", path);
        let result = self
            .send_json(self.request(Method::POST, path).json(body))
            .await;
        self.invalidate_cache();
        result
    }

    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        tracing::debug!("POST {}", path);
        let result = self.send_json(self.request(Method::POST, path)).await;
        self.invalidate_cache();
        result
    }

    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T> {
        tracing::debug!("POST {} (multipart)", path);
        let result = self
            .send_json(self.request(Method::POST, path).multipart(form))
            .await;
        self.invalidate_cache();
        result
    }

    pub(crate) async fn put<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        tracing::debug!("PUT {}", path);
        let result = self
            .send_json(self.request(Method::PUT, path).json(body))
            .await;
        self.invalidate_cache();
        result
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        tracing::debug!("DELETE {}", path);
        let result = self.send_empty(self.request(Method::DELETE, path)).await;
        self.invalidate_cache();
        result
    }

    pub(crate) async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        tracing::debug!("DELETE {}", path);
        let result = self.send_json(self.request(Method::DELETE, path)).await;
        self.invalidate_cache();
        result
    }

    /// GET returning raw bytes and the attachment filename.
    pub(crate) async fn get_file<Q>(&self, path: &str, query: &Q, fallback: &str) -> Result<CsvFile>
    where
        Q: Serialize + ?Sized,
    {
        tracing::debug!("GET {} (file)", path);
        let resp = self.execute(self.request(Method::GET, path).query(query)).await?;
        let filename = resp
            .headers()
            .get(reqwest::header::CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok())
            .and_then(parse_disposition_filename)
            .unwrap_or_else(|| fallback.to_string());
        let content = resp.bytes().await?.to_vec();
        Ok(CsvFile { filename, content })
    }

    /// Drops every cached response.
    pub fn invalidate_cache(&self) {
        if let Some(cache) = &self.cache {
            cache.invalidate(None);
        }
    }
}

/// Cache key for a GET: the path without its leading slash, plus the
/// serialized query when it is not empty.
pub fn cache_key<Q: Serialize + ?Sized>(path: &str, query: &Q) -> String {
    let path = path.trim_start_matches('/');
    match serde_json::to_string(query) {
        Ok(q) if q != "null" && q != "{}" && q != "[]" => format!("{path}:{q}"),
        _ => path.to_string(),
    }
}

/// Filename from a `Content-Disposition` header value.
///
/// Accepts `filename=name.csv`, `filename="name.csv"` and the RFC 5987
/// `filename*=UTF-8''name.csv` form, preferring the latter.
pub fn parse_disposition_filename(header: &str) -> Option<String> {
    let mut plain = None;
    for part in header.split(';').map(str::trim) {
        if let Some(value) = part.strip_prefix("filename*=") {
            let encoded = value.split("''").nth(1).unwrap_or(value);
            let decoded = percent_decode_str(encoded.trim_matches('"'))
                .decode_utf8_lossy()
                .into_owned();
            if !decoded.is_empty() {
                return Some(decoded);
            }
        } else if let Some(value) = part.strip_prefix("filename=") {
            let value = value.trim_matches('"');
            if !value.is_empty() {
                plain = Some(value.to_string());
            }
        }
    }
    plain
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::{MemoryStore, TokenPair};

    fn client() -> ApiClient<MemoryStore> {
        let config = ClientConfig::default().with_base_url("https://api.example.com/");
        let store = MemoryStore::new();
        ApiClient::new(&config, TokenStore::new(store.clone())).with_cache(&config, store)
    }

    #[test]
    fn test_url_building() {
        let client = client();
        assert_eq!(client.base_url(), "https://api.example.com");
        assert_eq!(client.url("/transactions"), "https://api.example.com/api/transactions");
    }

    #[test]
    fn test_bearer_header_only_with_token() {
        let client = client();
        let req = client.request(Method::GET, "/auth/me").build().unwrap();
        assert!(req.headers().get(reqwest::header::AUTHORIZATION).is_none());

        client.tokens().set_tokens(&TokenPair {
            access_token: "acc".to_string(),
            refresh_token: "ref".to_string(),
        });
        let req = client.request(Method::GET, "/auth/me").build().unwrap();
        assert_eq!(
            req.headers().get(reqwest::header::AUTHORIZATION).unwrap(),
            "Bearer acc"
        );
    }

    #[test]
    fn test_query_encoding() {
        let client = client();
        let filter = crate::models::TransactionFilter::default()
            .scope(crate::models::Scope::Couple)
            .limit(5);
        let req = client
            .request(Method::GET, "/transactions")
            .query(&filter)
            .build()
            .unwrap();
        assert_eq!(req.url().query(), Some("scope=couple&limit=5"));
    }

    #[test]
    fn test_cache_key() {
        assert_eq!(cache_key("/analytics/savings", &()), "analytics/savings");
        let query = crate::models::MonthlyTrendsQuery {
            year: 2026,
            scope: crate::models::Scope::Personal,
        };
        assert_eq!(
            cache_key("/analytics/monthly-trends", &query),
            r#"analytics/monthly-trends:{"year":2026,"scope":"personal"}"#
        );
    }

    #[test]
    fn test_invalidate_clears_cached_entries() {
        let config = ClientConfig::default();
        let store = MemoryStore::new();
        let client = ApiClient::new(&config, TokenStore::new(store.clone()))
            .with_cache(&config, store.clone());
        TtlCache::new(store.clone()).set("analytics/savings", &1);
        store.set("quickCategories", "[]");
        client.invalidate_cache();
        assert_eq!(store.keys(), vec!["quickCategories".to_string()]);
    }

    #[test]
    fn test_zero_ttl_disables_cache() {
        let config = ClientConfig::default().with_cache_ttl(0);
        let store = MemoryStore::new();
        let client = ApiClient::new(&config, TokenStore::new(store.clone())).with_cache(&config, store);
        assert!(client.cache.is_none());
    }

    #[test]
    fn test_disposition_plain() {
        assert_eq!(
            parse_disposition_filename("attachment; filename=kakepple_transactions_personal.csv")
                .as_deref(),
            Some("kakepple_transactions_personal.csv")
        );
        assert_eq!(
            parse_disposition_filename(r#"attachment; filename="report.csv""#).as_deref(),
            Some("report.csv")
        );
    }

    #[test]
    fn test_disposition_extended() {
        assert_eq!(
            parse_disposition_filename(
                "attachment; filename=fallback.csv; filename*=UTF-8''%E5%AE%B6%E8%A8%88.csv"
            )
            .as_deref(),
            Some("家計.csv")
        );
        assert_eq!(
            parse_disposition_filename("attachment; filename*=UTF-8''report%20%E8%A8%88").as_deref(),
            Some("report 計")
        );
    }

    #[test]
    fn test_disposition_missing() {
        assert_eq!(parse_disposition_filename("inline"), None);
        assert_eq!(parse_disposition_filename("attachment; filename="), None);
    }
}
