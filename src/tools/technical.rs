//! Technical SEO / AI-crawler readiness checklist.

use serde::{Deserialize, Serialize};

use crate::analysis::MetricGenerator;
use crate::error::Result;

/// (name, salt, pass percent, recommendation when failing)
const CHECKS: [(&str, &str, u32, &str); 7] = [
    ("robots.txt", "robots", 85, "Publish a robots.txt that allows search and AI crawlers."),
    ("XML sitemap", "sitemap", 70, "Generate an XML sitemap and reference it from robots.txt."),
    ("Canonical tag", "canonical", 75, "Add a self-referencing canonical link to every page."),
    ("Structured data", "structured-data", 45, "Add JSON-LD Organization and WebPage schema."),
    ("Meta description", "meta-description", 65, "Write a unique 140-160 character meta description."),
    ("Open Graph tags", "open-graph", 55, "Add og:title, og:description and og:image tags."),
    ("llms.txt", "llms-txt", 15, "Publish an llms.txt summarizing key pages for AI assistants."),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResult {
    pub name: String,
    pub passed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalSeoReport {
    pub url: String,
    pub checks: Vec<CheckResult>,
    pub passed: u32,
    pub total: u32,
    /// Percentage of checks passed
    pub score: u32,
}

pub fn analyze(url: &str) -> Result<TechnicalSeoReport> {
    let metrics = MetricGenerator::new(url);

    // HTTPS is read from the input itself rather than derived
    let https = url.starts_with("https://");
    let mut checks = vec![CheckResult {
        name: "HTTPS".to_string(),
        passed: https,
        recommendation: (!https).then(|| "Serve the site over HTTPS and redirect HTTP.".to_string()),
    }];
    checks.extend(CHECKS.iter().map(|(name, salt, pass_percent, advice)| {
        let passed = metrics.flag(salt, *pass_percent);
        CheckResult {
            name: name.to_string(),
            passed,
            recommendation: (!passed).then(|| advice.to_string()),
        }
    }));

    let total = checks.len() as u32;
    let passed = checks.iter().filter(|c| c.passed).count() as u32;

    Ok(TechnicalSeoReport {
        url: url.to_string(),
        checks,
        passed,
        total,
        score: passed * 100 / total,
    })
}
