use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Dealer/brand manifest JSON file
    #[arg(short, long, default_value = "data/dealer_brand_mapping.json")]
    pub mapping_file: PathBuf,

    /// Base output directory; PDFs go under <dir>/pricelists, the report under <dir>
    #[arg(short, long, default_value = "data")]
    pub output_dir: PathBuf,

    /// Only download price lists for this brand
    #[arg(short, long)]
    pub brand: Option<String>,

    /// Per-request timeout in seconds
    #[arg(short, long, default_value = "30")]
    pub timeout: u64,
}
