use crate::config::ScrapeConfig;
use crate::export::{save_to_csv, timestamped_path};
use crate::scraper::OlxScraper;
use std::path::Path;

mod config;
mod export;
mod scraper;

const RESULTS_DIR: &str = "olx_results";

fn main() {
    println!("Starting OLX Car Cover Scraper...");

    // 1️⃣ Make sure the results directory exists
    if let Err(e) = std::fs::create_dir_all(RESULTS_DIR) {
        eprintln!("❌ Could not create {RESULTS_DIR}/: {e}");
        return;
    }

    // 2️⃣ Walk the search pages
    let scraper = match OlxScraper::new(ScrapeConfig::default()) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("❌ Scraper init failed: {e}");
            return;
        }
    };

    let outcome = scraper.scrape();

    if outcome.listings.is_empty() {
        println!("No results found or scraping failed.");
        return;
    }

    println!("Scraped {} car cover listings.", outcome.listings.len());

    // 3️⃣ Save everything as one CSV
    let path = timestamped_path(Path::new(RESULTS_DIR));
    match save_to_csv(&outcome.listings, &path) {
        Ok(saved) => {
            println!("Results successfully saved to {}", saved.display());
            println!("To upload to GitHub:");
            println!("1. Create a GitHub repository");
            println!("2. Clone it to your local machine");
            println!("3. Copy this program and the results folder into the repository directory");
            println!("4. Commit and push the changes");
        }
        Err(e) => eprintln!("❌ Error saving to CSV: {e}"),
    }
}
