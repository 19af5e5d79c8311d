//! Server settings: where the royalty API lives and how hard to hit it.
//!
//! Read from an optional `energylink.toml`, then overridden by CLI flags and
//! environment. Installed once at startup; server functions read it through
//! [`settings`].

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::net::{Ipv4Addr, SocketAddr, TcpListener};
use std::path::Path;
use std::sync::OnceLock;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
// Every Apply re-queries the API unless a TTL is configured.
const DEFAULT_CACHE_TTL_SECS: u64 = 0;

/// Ports tried, in order, when the server is asked for port 0.
pub const PORT_SCAN_RANGE: std::ops::RangeInclusive<u16> = 50000..=50049;

// ── TOML shape ────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    #[serde(default)]
    api: ApiSection,
}

#[derive(Debug, Default, Deserialize)]
struct ApiSection {
    #[serde(default)]
    base_url: Option<String>,
    #[serde(default)]
    timeout_secs: Option<u64>,
    #[serde(default)]
    cache_ttl_secs: Option<u64>,
}

// ── Public config ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Base URL of the royalty API, without a trailing slash.
    pub api_base_url: String,
    pub request_timeout: Duration,
    /// Zero disables the response cache.
    pub cache_ttl: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            cache_ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
        }
    }
}

impl Settings {
    /// Parse settings from TOML text; missing keys fall back to defaults.
    pub fn from_toml(content: &str) -> Result<Self> {
        let file: FileConfig = toml::from_str(content).context("Failed to parse settings")?;
        let defaults = Self::default();
        let api = file.api;
        Ok(Self {
            api_base_url: api
                .base_url
                .map(|u| normalize_base_url(&u))
                .unwrap_or(defaults.api_base_url),
            request_timeout: api
                .timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(defaults.request_timeout),
            cache_ttl: api.cache_ttl_secs.map(Duration::from_secs).unwrap_or(defaults.cache_ttl),
        })
    }

    /// Load settings from `path`. A missing file yields defaults; an unreadable
    /// or malformed one is an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::info!(path = %path.display(), "no settings file, using defaults");
            return Ok(Self::default());
        }
        let content =
            std::fs::read_to_string(path).with_context(|| format!("Failed to read settings: {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("Invalid settings file: {}", path.display()))
    }

    /// Apply a command-line or environment override of the API URL.
    pub fn with_api_url(mut self, url: Option<&str>) -> Self {
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            self.api_base_url = normalize_base_url(url);
        }
        self
    }

    /// Absolute URL for an API path such as `/api/invoices/`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

static SETTINGS: OnceLock<Settings> = OnceLock::new();

/// Install the process-wide settings. Only the first call takes effect.
pub fn install(settings: Settings) {
    if SETTINGS.set(settings).is_err() {
        tracing::warn!("settings already installed, ignoring");
    }
}

/// The installed settings, or defaults when nothing was installed.
pub fn settings() -> &'static Settings {
    SETTINGS.get_or_init(Settings::default)
}

// ── Listen address ────────────────────────────────────────────────────────────

/// First port in `range` that can be bound on loopback.
pub fn find_open_port(range: std::ops::RangeInclusive<u16>) -> Result<u16> {
    for port in range.clone() {
        if TcpListener::bind((Ipv4Addr::LOCALHOST, port)).is_ok() {
            return Ok(port);
        }
    }
    bail!("No open port found in range {}-{}", range.start(), range.end())
}

/// Resolve the listen address: no port keeps `configured`, port 0 scans
/// [`PORT_SCAN_RANGE`] on loopback, anything else replaces the port.
pub fn listen_addr(configured: SocketAddr, port: Option<u16>) -> Result<SocketAddr> {
    match port {
        None => Ok(configured),
        Some(0) => {
            let port = find_open_port(PORT_SCAN_RANGE)?;
            Ok(SocketAddr::from((Ipv4Addr::LOCALHOST, port)))
        }
        Some(port) => Ok(SocketAddr::new(configured.ip(), port)),
    }
}
