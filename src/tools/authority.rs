//! Domain authority report.

use serde::{Deserialize, Serialize};

use crate::analysis::MetricGenerator;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthorityTier {
    Strong,
    Moderate,
    Developing,
}

impl AuthorityTier {
    fn from_score(domain_authority: u32) -> Self {
        if domain_authority >= 60 {
            AuthorityTier::Strong
        } else if domain_authority >= 45 {
            AuthorityTier::Moderate
        } else {
            AuthorityTier::Developing
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainAuthorityReport {
    pub url: String,
    pub domain_authority: u32,
    pub page_authority: u32,
    pub backlinks: u32,
    /// Never exceeds `backlinks`
    pub referring_domains: u32,
    pub spam_score: u32,
    pub tier: AuthorityTier,
}

pub fn analyze(url: &str) -> Result<DomainAuthorityReport> {
    let metrics = MetricGenerator::new(url);

    let domain_authority = metrics.metric("domain-authority", 30, 71)?;
    let backlinks = metrics.metric("backlinks", 100, 50_000)?;

    Ok(DomainAuthorityReport {
        url: url.to_string(),
        domain_authority,
        page_authority: metrics.metric("page-authority", 20, 61)?,
        backlinks,
        referring_domains: metrics.metric("referring-domains", 10, 2_000)?.min(backlinks),
        spam_score: metrics.metric("spam-score", 1, 15)?,
        tier: AuthorityTier::from_score(domain_authority),
    })
}
