use crate::error::DownloaderError;
use crate::pdf;
use crate::types::{DealerListing, DownloadResult, Report, ReportTotals, RunSummary};
use chrono::Local;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info};
use reqwest::header::CONTENT_TYPE;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tokio::fs;

pub const PRICELIST_SUBDIR: &str = "pricelists";

pub struct Downloader {
    client: reqwest::Client,
}

impl Downloader {
    pub fn new(timeout: Duration) -> Result<Self, DownloaderError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(crate::USER_AGENT)
            .build()?;
        Ok(Self { client })
    }

    /// Downloads every listing in order, one at a time, and writes the JSON
    /// report when the loop is done. Per-listing failures are folded into the
    /// summary; only failure to create the base directory is fatal.
    pub async fn run(
        &self,
        listings: Vec<DealerListing>,
        output_dir: &Path,
    ) -> Result<RunSummary, DownloaderError> {
        let pricelist_dir = output_dir.join(PRICELIST_SUBDIR);
        fs::create_dir_all(&pricelist_dir)
            .await
            .map_err(|e| DownloaderError::IoError(e))?;

        info!("Processing {} listings", listings.len());
        let pb = self.create_progress_bar(listings.len() as u64);
        let start_time = Instant::now();
        let mut results = Vec::with_capacity(listings.len());

        for listing in &listings {
            pb.set_message(format!(
                "{}/dealer_{}",
                listing.normalized_brand(),
                listing.dealer_id
            ));
            let result = self.download_pricelist(listing, &pricelist_dir).await;
            pb.inc(1);
            results.push(result);
        }
        pb.finish_and_clear();

        let mut summary = RunSummary::from_results(results, start_time.elapsed());

        match self.write_report(&summary, output_dir).await {
            Ok(path) => summary.report_path = Some(path),
            Err(e) => error!("Failed to write report: {}", e),
        }

        Ok(summary)
    }

    async fn download_pricelist(
        &self,
        listing: &DealerListing,
        pricelist_dir: &Path,
    ) -> DownloadResult {
        let url = listing.full_url();
        info!("Starting download: {}", url);

        let brand_dir = pricelist_dir.join(listing.normalized_brand());
        if let Err(e) = fs::create_dir_all(&brand_dir).await {
            error!("Failed to create {}: {}", brand_dir.display(), e);
            return DownloadResult::failed(listing, url, DownloaderError::IoError(e).to_string());
        }

        let dest = brand_dir.join(format!("dealer_{}.pdf", listing.dealer_id));

        let body = match self.fetch_pdf(&url).await {
            Ok(body) => body,
            Err(e) => {
                error!("Download failed for {}: {}", url, e);
                return DownloadResult::failed(listing, url, e.to_string());
            }
        };

        if let Err(e) = fs::write(&dest, &body).await {
            error!("Failed to write {}: {}", dest.display(), e);
            let _ = fs::remove_file(&dest).await;
            return DownloadResult::failed(listing, url, DownloaderError::IoError(e).to_string());
        }

        info!("Downloaded {} ({} bytes)", dest.display(), body.len());
        DownloadResult::success(listing, url, dest, body.len() as u64)
    }

    /// Fetches and validates one price-list body. The body is buffered in
    /// full so validation runs before anything is written to disk.
    async fn fetch_pdf(&self, url: &str) -> Result<Vec<u8>, DownloaderError> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| DownloaderError::RequestError(e))?;

        if !resp.status().is_success() {
            return Err(DownloaderError::DownloadError(format!(
                "HTTP error: {} for URL: {}",
                resp.status(),
                url
            )));
        }

        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string());

        let body = resp
            .bytes()
            .await
            .map_err(|e| DownloaderError::RequestError(e))?;

        pdf::validate(&body, content_type.as_deref())?;

        Ok(body.to_vec())
    }

    async fn write_report(
        &self,
        summary: &RunSummary,
        output_dir: &Path,
    ) -> Result<PathBuf, DownloaderError> {
        fs::create_dir_all(output_dir)
            .await
            .map_err(|e| DownloaderError::IoError(e))?;

        let now = Local::now();
        let report_path =
            output_dir.join(format!("download_report_{}.json", now.format("%Y%m%d_%H%M%S")));

        let report = Report {
            output_directory: output_dir.join(PRICELIST_SUBDIR).display().to_string(),
            timestamp: now.to_rfc3339(),
            summary: ReportTotals {
                total: summary.total,
                downloaded: summary.downloaded,
                failed: summary.failed,
                total_bytes: summary.total_bytes,
            },
            results: &summary.results,
        };

        let json = serde_json::to_string_pretty(&report)?;
        fs::write(&report_path, json)
            .await
            .map_err(|e| DownloaderError::IoError(e))?;

        info!("Wrote report to {}", report_path.display());
        Ok(report_path)
    }

    fn create_progress_bar(&self, len: u64) -> ProgressBar {
        let pb = ProgressBar::new(len);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
                )
                .unwrap()
                .progress_chars("#>-"),
        );
        pb
    }
}
