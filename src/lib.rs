//! Sequential price-list archiver for sgcarmart dealers.

pub mod cli;
pub mod downloader;
pub mod error;
pub mod parser;
pub mod pdf;
pub mod types;

pub const BASE_URL: &str = "https://www.sgcarmart.com";

pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";
