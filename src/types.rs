use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// One dealer/brand price-list entry from the manifest.
#[derive(Debug, Clone, Deserialize)]
pub struct DealerListing {
    pub dealer_id: String,
    pub brand: String,
    pub url: String,
}

impl DealerListing {
    pub fn normalized_brand(&self) -> String {
        normalize_brand_name(&self.brand)
    }

    /// Manifest URLs may be relative to the site root.
    pub fn full_url(&self) -> String {
        if self.url.starts_with("http") {
            self.url.clone()
        } else {
            format!("{}{}", crate::BASE_URL, self.url)
        }
    }
}

pub fn normalize_brand_name(brand: &str) -> String {
    brand.to_lowercase().replace(' ', "-").replace('_', "-")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DownloadStatus {
    Success,
    Failed,
}

#[derive(Debug, Serialize)]
pub struct DownloadResult {
    pub dealer_id: String,
    pub brand: String,
    pub url: String,
    pub status: DownloadStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filepath: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes_downloaded: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DownloadResult {
    pub fn success(listing: &DealerListing, url: String, filepath: PathBuf, bytes: u64) -> Self {
        Self {
            dealer_id: listing.dealer_id.clone(),
            brand: listing.brand.clone(),
            url,
            status: DownloadStatus::Success,
            filepath: Some(filepath),
            bytes_downloaded: Some(bytes),
            error: None,
        }
    }

    pub fn failed(listing: &DealerListing, url: String, error: String) -> Self {
        Self {
            dealer_id: listing.dealer_id.clone(),
            brand: listing.brand.clone(),
            url,
            status: DownloadStatus::Failed,
            filepath: None,
            bytes_downloaded: None,
            error: Some(error),
        }
    }
}

#[derive(Debug)]
pub struct RunSummary {
    pub total: usize,
    pub downloaded: usize,
    pub failed: usize,
    pub total_bytes: u64,
    pub total_duration: Duration,
    pub results: Vec<DownloadResult>,
    pub report_path: Option<PathBuf>,
}

impl RunSummary {
    pub fn from_results(results: Vec<DownloadResult>, total_duration: Duration) -> Self {
        let total = results.len();
        let downloaded = results
            .iter()
            .filter(|r| r.status == DownloadStatus::Success)
            .count();
        let failed = total - downloaded;
        let total_bytes = results.iter().filter_map(|r| r.bytes_downloaded).sum();

        Self {
            total,
            downloaded,
            failed,
            total_bytes,
            total_duration,
            results,
            report_path: None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub output_directory: String,
    pub timestamp: String,
    pub summary: ReportTotals,
    pub results: &'a [DownloadResult],
}

#[derive(Debug, Serialize)]
pub struct ReportTotals {
    pub total: usize,
    pub downloaded: usize,
    pub failed: usize,
    pub total_bytes: u64,
}
