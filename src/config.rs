// src/config.rs

use std::time::Duration;

/// Settings for one scrape run.
///
/// The original hardcoded all of these as ambient constants; collecting them
/// here means pacing, page bounds and the request timeout can be tuned
/// without touching the pipeline.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    /// Search URL fetched verbatim for page 1; later pages append `?page=N`.
    pub base_url: String,
    /// Upper bound on how many pages one run walks.
    pub max_pages: usize,
    /// Lower bound of the randomized pause between page fetches.
    pub min_delay: Duration,
    /// Upper bound of the randomized pause between page fetches.
    pub max_delay: Duration,
    /// Per-request timeout; an expiry counts as a transport failure.
    pub timeout: Duration,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.olx.in/items/q-car-cover".to_string(),
            max_pages: 3,
            min_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(3),
            timeout: Duration::from_secs(30),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_run_settings() {
        let cfg = ScrapeConfig::default();

        assert_eq!(cfg.base_url, "https://www.olx.in/items/q-car-cover");
        assert_eq!(cfg.max_pages, 3);
        assert_eq!(cfg.min_delay, Duration::from_secs(1));
        assert_eq!(cfg.max_delay, Duration::from_secs(3));
        assert_eq!(cfg.timeout, Duration::from_secs(30));
    }
}
