//! Mobile-friendliness audit report.

use serde::{Deserialize, Serialize};

use crate::analysis::{truncate, MetricGenerator};
use crate::error::Result;
use crate::tools::Rating;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MobileAuditReport {
    pub url: String,
    pub mobile_score: u32,
    pub viewport_configured: bool,
    pub tap_target_issues: u32,
    /// Share of text rendered below 12px, percent
    pub small_text_percent: f64,
    pub load_time_seconds: f64,
    pub load_rating: Rating,
    pub issues: Vec<String>,
}

pub fn analyze(url: &str) -> Result<MobileAuditReport> {
    let metrics = MetricGenerator::new(url);

    let viewport_configured = metrics.flag("viewport", 85);
    let tap_target_issues = metrics.metric("tap-targets", 0, 12)?;
    let small_text_percent = truncate(metrics.scaled("font-size", 0.0, 30.0)?, 1);
    let load_time_seconds = truncate(metrics.scaled("mobile-load", 1.2, 6.5)?, 2);
    let load_rating = Rating::grade(load_time_seconds, 2.5, 4.0);

    let mut issues = Vec::new();
    if !viewport_configured {
        issues.push("Missing <meta name=\"viewport\"> tag; pages render at desktop width.".to_string());
    }
    if tap_target_issues > 0 {
        issues.push(format!(
            "{} tap target(s) are smaller than 48x48px or too close together",
            tap_target_issues
        ));
    }
    if small_text_percent > 10.0 {
        issues.push(format!(
            "{}% of text is below 12px; raise the base font size",
            small_text_percent
        ));
    }
    if !load_rating.is_good() {
        issues.push(format!(
            "Mobile load takes {}s; trim render-blocking resources",
            load_time_seconds
        ));
    }

    Ok(MobileAuditReport {
        url: url.to_string(),
        mobile_score: metrics.metric("mobile-score", 45, 100)?,
        viewport_configured,
        tap_target_issues,
        small_text_percent,
        load_time_seconds,
        load_rating,
        issues,
    })
}
