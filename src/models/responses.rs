//! Response DTOs for the analysis API
//!
//! Tool reports live in `crate::tools`; this module holds the service-level
//! bodies.

use serde::Serialize;

use crate::cache::CacheStats;
use crate::tools::Tool;

/// Cache statistics for one tool (GET /stats)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolCacheStats {
    pub tool: Tool,
    pub hits: u64,
    pub misses: u64,
    pub expirations: u64,
    pub total_entries: usize,
    pub hit_rate: f64,
}

impl ToolCacheStats {
    pub fn new(tool: Tool, stats: &CacheStats) -> Self {
        Self {
            tool,
            hits: stats.hits,
            misses: stats.misses,
            expirations: stats.expirations,
            total_entries: stats.total_entries,
            hit_rate: stats.hit_rate(),
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    /// TTL shared by every tool cache, milliseconds
    pub ttl_ms: u64,
    pub total_entries: usize,
    pub tools: Vec<ToolCacheStats>,
}

impl StatsResponse {
    pub fn new(ttl_ms: u64, tools: Vec<ToolCacheStats>) -> Self {
        Self {
            ttl_ms,
            total_entries: tools.iter().map(|t| t.total_entries).sum(),
            tools,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_stats_hit_rate() {
        let stats = CacheStats {
            hits: 8,
            misses: 2,
            expirations: 1,
            total_entries: 5,
        };
        let resp = ToolCacheStats::new(Tool::ImageAudit, &stats);

        assert!((resp.hit_rate - 0.8).abs() < 0.001);
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["tool"], "image-audit");
        assert_eq!(json["totalEntries"], 5);
    }

    #[test]
    fn test_stats_response_sums_entries() {
        let a = ToolCacheStats::new(Tool::CoreWebVitals, &CacheStats { total_entries: 3, ..CacheStats::default() });
        let b = ToolCacheStats::new(Tool::AiCitation, &CacheStats { total_entries: 4, ..CacheStats::default() });

        let resp = StatsResponse::new(3_600_000, vec![a, b]);
        assert_eq!(resp.total_entries, 7);
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse::new("url is required");
        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(json, r#"{"error":"url is required"}"#);
    }
}
