mod models;
mod scraper;
mod scraper_error;
mod selectors;

pub use self::models::{Listing, NOT_AVAILABLE};
pub use self::scraper::{OlxScraper, ScrapeOutcome};
pub use self::scraper_error::ScraperError;
