use crate::error::DownloaderError;
use crate::types::DealerListing;
use log::debug;
use std::path::Path;
use tokio::fs::File;
use tokio::io::AsyncReadExt;

/// Loads the dealer/brand manifest: an ordered JSON array of listings.
pub async fn load_manifest(path: &Path) -> Result<Vec<DealerListing>, DownloaderError> {
    let mut file = File::open(path)
        .await
        .map_err(|e| DownloaderError::IoError(e))?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .await
        .map_err(|e| DownloaderError::IoError(e))?;

    let listings: Vec<DealerListing> =
        serde_json::from_str(&contents).map_err(|e| DownloaderError::ParseError(e.to_string()))?;

    for listing in &listings {
        debug!("Parsed listing: {:?}", listing);
    }

    Ok(listings)
}
