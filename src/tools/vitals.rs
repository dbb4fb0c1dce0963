//! Core Web Vitals report.

use serde::{Deserialize, Serialize};

use crate::analysis::{truncate, MetricGenerator};
use crate::error::Result;
use crate::tools::Rating;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreWebVitalsReport {
    pub url: String,
    /// Largest Contentful Paint, seconds
    pub lcp: f64,
    pub lcp_rating: Rating,
    /// Cumulative Layout Shift, unitless
    pub cls: f64,
    pub cls_rating: Rating,
    /// Interaction to Next Paint, milliseconds
    pub inp: u32,
    pub inp_rating: Rating,
    /// Time to First Byte, milliseconds
    pub ttfb: u32,
    pub performance_score: u32,
    pub recommendations: Vec<String>,
}

/// Builds the report for a normalized URL.
pub fn analyze(url: &str) -> Result<CoreWebVitalsReport> {
    let metrics = MetricGenerator::new(url);

    let lcp = truncate(metrics.scaled("lcp", 1.5, 4.0)?, 2);
    let cls = truncate(metrics.scaled("cls", 0.01, 0.35)?, 3);
    let inp = metrics.metric("inp", 80, 450)?;
    let ttfb = metrics.metric("ttfb", 120, 900)?;
    let performance_score = metrics.metric("performance", 40, 100)?;

    let lcp_rating = Rating::grade(lcp, 2.5, 4.0);
    let cls_rating = Rating::grade(cls, 0.1, 0.25);
    let inp_rating = Rating::grade(f64::from(inp), 200.0, 500.0);

    let mut recommendations = Vec::new();
    if !lcp_rating.is_good() {
        recommendations.push(
            "Preload the hero image and compress above-the-fold media to cut LCP.".to_string(),
        );
    }
    if !cls_rating.is_good() {
        recommendations.push(
            "Reserve space for images, ads and embeds with explicit width and height.".to_string(),
        );
    }
    if !inp_rating.is_good() {
        recommendations
            .push("Break up long JavaScript tasks and defer non-critical scripts.".to_string());
    }
    if ttfb > 600 {
        recommendations
            .push("Server response is slow: add edge caching or a CDN in front of origin.".to_string());
    }
    if recommendations.is_empty() {
        recommendations.push("All Core Web Vitals pass. Re-check after each release.".to_string());
    }

    Ok(CoreWebVitalsReport {
        url: url.to_string(),
        lcp,
        lcp_rating,
        cls,
        cls_rating,
        inp,
        inp_rating,
        ttfb,
        performance_score,
        recommendations,
    })
}
