//! HTTP client for the royalty API.
//! Uses one pooled reqwest client with a small in-memory response cache.

use std::collections::HashMap;
use std::sync::{OnceLock, RwLock};
use std::time::Instant;

use energylink_core::FetchError;
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::config::settings;

/// Shared HTTP client for connection pooling
static HTTP_CLIENT: OnceLock<reqwest::Client> = OnceLock::new();

/// Raw response bodies keyed by full URL
static CACHE: OnceLock<RwLock<HashMap<String, CacheEntry>>> = OnceLock::new();

const CACHE_SWEEP_THRESHOLD: usize = 100;

struct CacheEntry {
    data: String,
    expires_at: Instant,
}

fn get_client() -> &'static reqwest::Client {
    HTTP_CLIENT.get_or_init(|| {
        reqwest::Client::builder()
            .timeout(settings().request_timeout)
            .pool_max_idle_per_host(5)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "custom HTTP client unavailable, using defaults");
                reqwest::Client::new()
            })
    })
}

fn get_cache() -> &'static RwLock<HashMap<String, CacheEntry>> {
    CACHE.get_or_init(|| RwLock::new(HashMap::new()))
}

fn get_cached(url: &str) -> Option<String> {
    let cache = get_cache().read().ok()?;
    let entry = cache.get(url)?;
    (entry.expires_at > Instant::now()).then(|| entry.data.clone())
}

fn set_cached(url: &str, data: String) {
    let ttl = settings().cache_ttl;
    if ttl.is_zero() {
        return;
    }
    if let Ok(mut cache) = get_cache().write() {
        if cache.len() > CACHE_SWEEP_THRESHOLD {
            let now = Instant::now();
            cache.retain(|_, v| v.expires_at > now);
        }

        cache.insert(
            url.to_string(),
            CacheEntry {
                data,
                expires_at: Instant::now() + ttl,
            },
        );
    }
}

/// Build the absolute URL for an API path plus query pairs.
pub fn api_url(path: &str, query: &[(&str, String)]) -> Result<Url, FetchError> {
    let base = settings().endpoint(path);
    let parsed = if query.is_empty() {
        Url::parse(&base)
    } else {
        Url::parse_with_params(&base, query)
    };
    parsed.map_err(|e| FetchError::Transport {
        url: base,
        message: e.to_string(),
    })
}

/// GET `url` and decode its JSON body. 404 maps to [`FetchError::NotFound`].
pub async fn get_json<T: DeserializeOwned>(url: Url) -> Result<T, FetchError> {
    let key = url.to_string();

    if let Some(cached) = get_cached(&key) {
        return decode(&key, &cached);
    }

    let response = get_client()
        .get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| {
            tracing::warn!(url = %key, error = %e, "HTTP request failed");
            FetchError::Transport {
                url: key.clone(),
                message: e.to_string(),
            }
        })?;

    let status = response.status();
    if status == StatusCode::NOT_FOUND {
        tracing::debug!(url = %key, "resource not found");
        return Err(FetchError::NotFound { resource: key });
    }
    if !status.is_success() {
        tracing::warn!(url = %key, %status, "HTTP error");
        return Err(FetchError::Status {
            url: key,
            status: status.as_u16(),
        });
    }

    let text = response.text().await.map_err(|e| FetchError::Transport {
        url: key.clone(),
        message: format!("failed to read body: {e}"),
    })?;

    let value = decode(&key, &text)?;
    set_cached(&key, text);
    Ok(value)
}

fn decode<T: DeserializeOwned>(url: &str, body: &str) -> Result<T, FetchError> {
    serde_json::from_str(body).map_err(|e| {
        tracing::warn!(url, error = %e, "JSON parse error");
        FetchError::Decode {
            url: url.to_string(),
            message: e.to_string(),
        }
    })
}
