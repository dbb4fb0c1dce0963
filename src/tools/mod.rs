//! Tool Reports
//!
//! Each analysis tool turns a normalized input into a typed report whose
//! numbers come entirely from the salted metric generator.

pub mod authority;
pub mod citation;
pub mod images;
pub mod mobile;
pub mod technical;
pub mod vitals;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use authority::DomainAuthorityReport;
pub use citation::AiCitationReport;
pub use images::ImageAuditReport;
pub use mobile::MobileAuditReport;
pub use technical::TechnicalSeoReport;
pub use vitals::CoreWebVitalsReport;

// == Tool ==
/// The analysis tools served by the API. Each owns its own cache instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tool {
    CoreWebVitals,
    DomainAuthority,
    ImageAudit,
    TechnicalSeo,
    MobileAudit,
    AiCitation,
}

impl Tool {
    pub const ALL: [Tool; 6] = [
        Tool::CoreWebVitals,
        Tool::DomainAuthority,
        Tool::ImageAudit,
        Tool::TechnicalSeo,
        Tool::MobileAudit,
        Tool::AiCitation,
    ];

    /// Route segment and log name, e.g. `core-web-vitals`.
    pub fn slug(&self) -> &'static str {
        match self {
            Tool::CoreWebVitals => "core-web-vitals",
            Tool::DomainAuthority => "domain-authority",
            Tool::ImageAudit => "image-audit",
            Tool::TechnicalSeo => "technical-seo",
            Tool::MobileAudit => "mobile-audit",
            Tool::AiCitation => "ai-citation",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

// == Rating ==
/// Three-step grade shared by timing and layout metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rating {
    Good,
    NeedsImprovement,
    Poor,
}

impl Rating {
    /// Lower is better: `value <= good` is good, `value > poor` is poor.
    pub fn grade(value: f64, good: f64, poor: f64) -> Self {
        if value <= good {
            Rating::Good
        } else if value <= poor {
            Rating::NeedsImprovement
        } else {
            Rating::Poor
        }
    }

    pub fn is_good(&self) -> bool {
        matches!(self, Rating::Good)
    }
}
