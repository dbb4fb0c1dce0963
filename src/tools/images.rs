//! Image audit report.
//!
//! Each synthetic image `i` draws its metrics from salts prefixed `_img_{i}`,
//! so the same page always lists the same images.

use serde::{Deserialize, Serialize};

use crate::analysis::MetricGenerator;
use crate::error::Result;

const FORMATS: [&str; 4] = ["jpeg", "png", "webp", "avif"];

/// Images above this size are flagged as oversized.
pub const OVERSIZED_KB: u32 = 300;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageFinding {
    pub src: String,
    pub size_kb: u32,
    pub format: String,
    pub has_alt: bool,
    pub lazy_loaded: bool,
}

impl ImageFinding {
    fn is_legacy_format(&self) -> bool {
        matches!(self.format.as_str(), "jpeg" | "png")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageAuditReport {
    pub url: String,
    pub image_count: u32,
    pub images: Vec<ImageFinding>,
    pub total_size_kb: u32,
    pub missing_alt: u32,
    pub oversized: u32,
    pub legacy_format: u32,
    pub score: u32,
    pub issues: Vec<String>,
}

pub fn analyze(url: &str) -> Result<ImageAuditReport> {
    let metrics = MetricGenerator::new(url);
    let image_count = metrics.metric("_img_count", 3, 13)?;
    let base = url.trim_end_matches('/');

    let images = (0..image_count)
        .map(|i| -> Result<ImageFinding> {
            let salt = format!("_img_{}", i);
            let format = metrics.choice(&format!("{}_format", salt), &FORMATS)?;

            Ok(ImageFinding {
                src: format!("{}/images/image-{}.{}", base, i + 1, format),
                size_kb: metrics.metric(&salt, 20, 900)?,
                format: format.to_string(),
                has_alt: metrics.flag(&format!("{}_alt", salt), 70),
                lazy_loaded: metrics.flag(&format!("{}_lazy", salt), 50),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let total_size_kb = images.iter().map(|img| img.size_kb).sum();
    let missing_alt = count(&images, |img| !img.has_alt);
    let oversized = count(&images, |img| img.size_kb > OVERSIZED_KB);
    let legacy_format = count(&images, ImageFinding::is_legacy_format);
    let not_lazy = count(&images, |img| !img.lazy_loaded);

    let penalty = missing_alt * 8 + oversized * 6 + legacy_format * 3 + not_lazy * 2;
    let score = 100u32.saturating_sub(penalty);

    let mut issues = Vec::new();
    if missing_alt > 0 {
        issues.push(format!("{} image(s) are missing alt text", missing_alt));
    }
    if oversized > 0 {
        issues.push(format!(
            "{} image(s) exceed {} KB; resize or recompress them",
            oversized, OVERSIZED_KB
        ));
    }
    if legacy_format > 0 {
        issues.push(format!(
            "{} image(s) use JPEG/PNG; serve WebP or AVIF instead",
            legacy_format
        ));
    }
    if not_lazy > 0 {
        issues.push(format!("{} image(s) are not lazy-loaded", not_lazy));
    }

    Ok(ImageAuditReport {
        url: url.to_string(),
        image_count,
        images,
        total_size_kb,
        missing_alt,
        oversized,
        legacy_format,
        score,
        issues,
    })
}

fn count(images: &[ImageFinding], pred: impl Fn(&ImageFinding) -> bool) -> u32 {
    images.iter().filter(|img| pred(img)).count() as u32
}
