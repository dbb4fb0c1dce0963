//! API Handlers
//!
//! HTTP request handlers for each analysis tool and the service endpoints.
//!
//! Every tool route follows the same flow: normalize the input, look the key
//! up in that tool's cache, and on a miss build the report, store it and
//! return it. A hit returns the stored JSON unchanged.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::{Clock, SharedCache, SystemClock, TtlCache};
use crate::config::Config;
use crate::error::{AnalysisError, Result};
use crate::models::{AnalyzeRequest, HealthResponse, StatsResponse, ToolCacheStats};
use crate::tools::{authority, citation, images, mobile, technical, vitals, Tool};

/// Response header reporting whether the body came from the cache.
pub const CACHE_HEADER: &str = "x-cache";

/// Application state shared across all handlers.
///
/// Holds one explicitly constructed cache per tool, each behind its own lock.
#[derive(Clone)]
pub struct AppState {
    caches: Arc<HashMap<Tool, SharedCache>>,
    ttl: Duration,
}

impl AppState {
    /// Creates per-tool caches with `ttl` on the wall clock.
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, Arc::new(SystemClock))
    }

    /// Creates per-tool caches that all read time from `clock`.
    pub fn with_clock(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        let caches: HashMap<Tool, SharedCache> = Tool::ALL
            .iter()
            .map(|tool| {
                let cache = TtlCache::with_clock(ttl, Arc::clone(&clock));
                (*tool, Arc::new(RwLock::new(cache)))
            })
            .collect();

        Self {
            caches: Arc::new(caches),
            ttl,
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.cache_ttl())
    }

    /// The cache owned by `tool`'s route.
    pub fn cache(&self, tool: Tool) -> Result<SharedCache> {
        self.caches
            .get(&tool)
            .cloned()
            .ok_or_else(|| AnalysisError::Internal(format!("no cache registered for {}", tool)))
    }

    /// Every tool cache, in `Tool::ALL` order.
    pub fn caches(&self) -> Vec<SharedCache> {
        Tool::ALL
            .iter()
            .filter_map(|tool| self.caches.get(tool).cloned())
            .collect()
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

// == Cached Report ==
/// Returns the cached report for `key`, or builds, stores and returns it.
async fn cached_report<R, F>(state: &AppState, tool: Tool, key: String, build: F) -> Result<Response>
where
    R: Serialize,
    F: FnOnce(&str) -> Result<R>,
{
    let cache = state.cache(tool)?;

    if let Some(value) = cache.write().await.get(&key) {
        debug!(tool = %tool, key = %key, "cache hit");
        return Ok(with_cache_header(value, "HIT"));
    }

    debug!(tool = %tool, key = %key, "cache miss");
    // Reports are deterministic, so a concurrent miss on the same key stores an identical value.
    let value = serde_json::to_value(build(&key)?)?;
    cache.write().await.set(key, value.clone());

    Ok(with_cache_header(value, "MISS"))
}

fn with_cache_header(value: Value, status: &'static str) -> Response {
    ([(CACHE_HEADER, status)], Json(value)).into_response()
}

/// Handler for POST /api/core-web-vitals
pub async fn core_web_vitals_handler(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Response> {
    let url = req.normalized_url()?;
    cached_report(&state, Tool::CoreWebVitals, url, vitals::analyze).await
}

/// Handler for POST /api/domain-authority
pub async fn domain_authority_handler(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Response> {
    let url = req.normalized_url()?;
    cached_report(&state, Tool::DomainAuthority, url, authority::analyze).await
}

/// Handler for POST /api/image-audit
pub async fn image_audit_handler(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Response> {
    let url = req.normalized_url()?;
    cached_report(&state, Tool::ImageAudit, url, images::analyze).await
}

/// Handler for POST /api/technical-seo
pub async fn technical_seo_handler(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Response> {
    let url = req.normalized_url()?;
    cached_report(&state, Tool::TechnicalSeo, url, technical::analyze).await
}

/// Handler for POST /api/mobile-audit
pub async fn mobile_audit_handler(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Response> {
    let url = req.normalized_url()?;
    cached_report(&state, Tool::MobileAudit, url, mobile::analyze).await
}

/// Handler for POST /api/ai-citation
///
/// Keyed on brand and keyword together; the keyword is optional.
pub async fn ai_citation_handler(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Response> {
    let brand = req.normalized_brand()?;
    let keyword = req.normalized_keyword();
    let key = citation::citation_key(&brand, keyword.as_deref());

    cached_report(&state, Tool::AiCitation, key, |_| {
        citation::analyze(&brand, keyword.as_deref())
    })
    .await
}

/// Handler for GET /stats
///
/// Returns cache statistics for every tool.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let mut tools = Vec::with_capacity(Tool::ALL.len());

    for (tool, cache) in Tool::ALL.iter().zip(state.caches()) {
        let stats = cache.read().await.stats();
        tools.push(ToolCacheStats::new(*tool, &stats));
    }

    let ttl_ms = u64::try_from(state.ttl().as_millis()).unwrap_or(u64::MAX);
    Json(StatsResponse::new(ttl_ms, tools))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
