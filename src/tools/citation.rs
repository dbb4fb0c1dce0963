//! AI citation checker report.
//!
//! Estimates how likely each AI assistant is to cite a brand for a keyword.

use serde::{Deserialize, Serialize};

use crate::analysis::MetricGenerator;
use crate::error::Result;

const PLATFORMS: [&str; 5] = ["chatgpt", "perplexity", "gemini", "claude", "copilot"];

/// Likelihood at or above which a platform counts as mentioning the brand.
const MENTION_THRESHOLD: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

const SENTIMENTS: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformCitation {
    pub platform: String,
    pub citation_likelihood: u32,
    pub mentioned: bool,
    /// Rank in the answer, present only when mentioned
    pub position: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiCitationReport {
    pub brand_name: String,
    pub keyword: Option<String>,
    pub platforms: Vec<PlatformCitation>,
    pub visibility_score: u32,
    pub sentiment: Sentiment,
}

/// Cache key and metric input for a normalized brand and keyword.
pub fn citation_key(brand_name: &str, keyword: Option<&str>) -> String {
    format!("{}|{}", brand_name, keyword.unwrap_or(""))
}

pub fn analyze(brand_name: &str, keyword: Option<&str>) -> Result<AiCitationReport> {
    let key = citation_key(brand_name, keyword);
    let metrics = MetricGenerator::new(&key);

    let platforms = PLATFORMS
        .iter()
        .map(|platform| -> Result<PlatformCitation> {
            let citation_likelihood = metrics.metric(&format!("citation-{}", platform), 0, 100)?;
            let mentioned = citation_likelihood >= MENTION_THRESHOLD;
            let position = if mentioned {
                Some(metrics.metric(&format!("position-{}", platform), 1, 6)?)
            } else {
                None
            };

            Ok(PlatformCitation {
                platform: platform.to_string(),
                citation_likelihood,
                mentioned,
                position,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let total: u32 = platforms.iter().map(|p| p.citation_likelihood).sum();
    let visibility_score = total / platforms.len() as u32;

    Ok(AiCitationReport {
        brand_name: brand_name.to_string(),
        keyword: keyword.map(str::to_string),
        platforms,
        visibility_score,
        sentiment: *metrics.choice("sentiment", &SENTIMENTS)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::normalize;

    #[test]
    fn test_citation_key() {
        assert_eq!(citation_key("acme", Some("running shoes")), "acme|running shoes");
        assert_eq!(citation_key("acme", None), "acme|");
    }

    #[test]
    fn test_report_is_deterministic() {
        let brand = normalize("  ACME Corp ");
        let first = analyze(&brand, Some("crm software")).unwrap();
        let second = analyze(&brand, Some("crm software")).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.brand_name, "acme corp");
        assert_eq!(first.platforms.len(), PLATFORMS.len());
    }

    #[test]
    fn test_mentions_and_positions_agree() {
        let report = analyze("acme", None).unwrap();

        for p in &report.platforms {
            assert!(p.citation_likelihood < 100);
            assert_eq!(p.mentioned, p.citation_likelihood >= MENTION_THRESHOLD);
            assert_eq!(p.mentioned, p.position.is_some());
            if let Some(position) = p.position {
                assert!((1..6).contains(&position));
            }
        }
        assert!(report.visibility_score < 100);
    }

    #[test]
    fn test_keyword_changes_report() {
        let with = analyze("acme", Some("crm")).unwrap();
        let without = analyze("acme", None).unwrap();

        let likelihoods =
            |r: &AiCitationReport| r.platforms.iter().map(|p| p.citation_likelihood).collect::<Vec<_>>();
        assert_ne!(likelihoods(&with), likelihoods(&without));
    }
}
