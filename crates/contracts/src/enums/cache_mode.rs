use serde::{Deserialize, Serialize};
use std::fmt;

/// Token sent when the client has not chosen a cache mode yet.
/// The API treats it as "serve from cache if possible".
pub const DEFAULT_CACHE_TOKEN: &str = "true";

/// Per-request cache directive understood by the contributors API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheMode {
    /// Serve a cached page if one exists
    Cached,
    /// Bypass every cache and recompute
    Fresh,
    /// Recompute, but let the server confirm the cached copy is still valid
    Revalidate,
}

impl CacheMode {
    /// Query-string token for this mode
    pub fn code(&self) -> &'static str {
        match self {
            CacheMode::Cached => "cached",
            CacheMode::Fresh => "fresh",
            CacheMode::Revalidate => "revalidate",
        }
    }

    pub fn all() -> Vec<CacheMode> {
        vec![CacheMode::Cached, CacheMode::Fresh, CacheMode::Revalidate]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "cached" => Some(CacheMode::Cached),
            "fresh" => Some(CacheMode::Fresh),
            "revalidate" => Some(CacheMode::Revalidate),
            _ => None,
        }
    }

    /// Mode used by an explicit user refresh
    pub fn for_refresh(force: bool) -> Self {
        if force {
            CacheMode::Fresh
        } else {
            CacheMode::Revalidate
        }
    }
}

/// Token for an optional mode, falling back to [`DEFAULT_CACHE_TOKEN`]
pub fn cache_token(mode: Option<CacheMode>) -> &'static str {
    mode.map(|m| m.code()).unwrap_or(DEFAULT_CACHE_TOKEN)
}

impl fmt::Display for CacheMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
