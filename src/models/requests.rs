//! Request DTOs for the analysis API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

use crate::analysis::normalize;
use crate::error::{AnalysisError, Result};

/// Request body shared by every analysis route.
///
/// Each tool reads the fields it needs; the rest are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub brand_name: Option<String>,
    #[serde(default)]
    pub keyword: Option<String>,
}

impl AnalyzeRequest {
    pub fn for_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }

    /// Normalized `url`, rejecting a missing or blank value.
    pub fn normalized_url(&self) -> Result<String> {
        required(self.url.as_deref(), "url")
    }

    /// Normalized `brandName`, rejecting a missing or blank value.
    pub fn normalized_brand(&self) -> Result<String> {
        required(self.brand_name.as_deref(), "brandName")
    }

    /// Normalized `keyword`; blank counts as absent.
    pub fn normalized_keyword(&self) -> Option<String> {
        self.keyword
            .as_deref()
            .map(normalize)
            .filter(|k| !k.is_empty())
    }
}

fn required(value: Option<&str>, field: &str) -> Result<String> {
    let normalized = value.map(normalize).unwrap_or_default();
    if normalized.is_empty() {
        return Err(AnalysisError::InvalidRequest(format!("{} is required", field)));
    }
    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_deserialize_camel_case() {
        let json = r#"{"brandName": "Acme", "keyword": "CRM"}"#;
        let req: AnalyzeRequest = serde_json::from_str(json).unwrap();

        assert_eq!(req.brand_name.as_deref(), Some("Acme"));
        assert_eq!(req.keyword.as_deref(), Some("CRM"));
        assert!(req.url.is_none());
    }

    #[test]
    fn test_request_ignores_unknown_fields() {
        let json = r#"{"url": "example.com", "premium": true}"#;
        let req: AnalyzeRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.url.as_deref(), Some("example.com"));
    }

    #[test]
    fn test_normalized_url() {
        let req = AnalyzeRequest::for_url("  https://Example.com/Page ");
        assert_eq!(req.normalized_url().unwrap(), "https://example.com/page");
    }

    #[test]
    fn test_missing_or_blank_url_rejected() {
        assert!(matches!(
            AnalyzeRequest::default().normalized_url(),
            Err(AnalysisError::InvalidRequest(_))
        ));
        assert!(AnalyzeRequest::for_url("   ").normalized_url().is_err());
    }

    #[test]
    fn test_blank_keyword_is_absent() {
        let req = AnalyzeRequest {
            keyword: Some("  ".to_string()),
            ..AnalyzeRequest::default()
        };
        assert_eq!(req.normalized_keyword(), None);
        assert!(req.normalized_brand().is_err());
    }
}
