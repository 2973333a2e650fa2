use clap::Parser;
use colored::*;
use log::{error, info};
use std::time::Duration;

use sgcarmart_downloader::cli::Cli;
use sgcarmart_downloader::downloader::Downloader;
use sgcarmart_downloader::parser;
use sgcarmart_downloader::types::{normalize_brand_name, DealerListing, DownloadStatus};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    info!("Starting price-list downloader");

    let cli = Cli::parse();
    info!("CLI arguments parsed: mapping_file={}", cli.mapping_file.display());

    let listings = match parser::load_manifest(&cli.mapping_file).await {
        Ok(listings) => {
            info!("Parsed {} listings from manifest", listings.len());
            listings
        }
        Err(e) => {
            error!("Failed to load dealer/brand manifest: {}", e);
            eprintln!("{}", "Failed to load dealer/brand manifest".red());
            return Err(e.into());
        }
    };

    let listings = if let Some(brand) = &cli.brand {
        let want = normalize_brand_name(brand);
        let mut available: Vec<String> = listings.iter().map(|l| l.normalized_brand()).collect();
        available.sort();
        available.dedup();

        let matched: Vec<DealerListing> = listings
            .into_iter()
            .filter(|l| l.normalized_brand() == want)
            .collect();

        if matched.is_empty() {
            error!("No dealers found for brand '{}'", brand);
            eprintln!("{}", format!("No dealers found for brand '{}'", brand).red());
            eprintln!("Available brands: {}", available.join(", "));
            anyhow::bail!("no dealers found for brand '{}'", brand);
        }

        info!("Brand filter '{}' matched {} dealer(s)", brand, matched.len());
        matched
    } else {
        listings
    };

    let downloader = Downloader::new(Duration::from_secs(cli.timeout))?;
    let summary = match downloader.run(listings, &cli.output_dir).await {
        Ok(summary) => summary,
        Err(e) => {
            error!("Download run failed: {}", e);
            eprintln!("{}", "Download run failed".red());
            return Err(e.into());
        }
    };

    println!("\n{}", "Download Summary:".bold());
    println!("Total price lists: {}", summary.total);
    if summary.total > 0 {
        println!(
            "Success rate: {:.1}% ({} files)",
            (summary.downloaded as f64 / summary.total as f64) * 100.0,
            summary.downloaded.to_string().green()
        );
        println!(
            "Failure rate: {:.1}% ({} files)",
            (summary.failed as f64 / summary.total as f64) * 100.0,
            summary.failed.to_string().red()
        );
    }
    println!(
        "Total data transferred: {:.2} KB",
        summary.total_bytes as f64 / 1024.0
    );
    println!("Total duration: {:.2?}", summary.total_duration);

    if summary.downloaded > 0 {
        println!("\n{}", "Downloaded:".green().bold());
        for result in summary
            .results
            .iter()
            .filter(|r| r.status == DownloadStatus::Success)
        {
            let filename = result
                .filepath
                .as_ref()
                .and_then(|p| p.file_name())
                .and_then(|n| n.to_str())
                .unwrap_or("unknown");
            println!(
                "✓ {}/{} ({} bytes)",
                result.brand,
                filename.green(),
                result.bytes_downloaded.unwrap_or(0)
            );
        }
    }

    if summary.failed > 0 {
        println!("\n{}", "Failed:".red().bold());
        for result in summary
            .results
            .iter()
            .filter(|r| r.status == DownloadStatus::Failed)
        {
            let name = format!("{} dealer {}", result.brand, result.dealer_id);
            println!(
                "✗ {} - Error: {}",
                name.red(),
                result.error.as_deref().unwrap_or("unknown")
            );
            println!("  URL: {}", result.url);
        }
    }

    if let Some(path) = &summary.report_path {
        println!("\nReport saved to: {}", path.display());
    }

    Ok(())
}
