// selectors.rs

use crate::scraper::ScraperError;
use scraper::Selector;

/// CSS selectors locating listing fields on an OLX search-results page.
///
/// The site ships versioned class names that change without notice. When the
/// layout drifts, this mapping is the only thing that needs editing; the
/// rest of the pipeline never sees a selector string.
pub struct ListingSelectors {
    /// The ad container; zero matches means end of results or a new layout.
    pub container: Selector,
    pub title: Selector,
    pub price: Selector,
    pub location: Selector,
    pub date_posted: Selector,
    pub link: Selector,
}

impl ListingSelectors {
    pub fn for_olx() -> Result<Self, ScraperError> {
        Ok(Self {
            container: parse("li.EIR5N")?,
            title: parse("span.fTZT3")?,
            price: parse("span._2Ks63")?,
            location: parse("span._1KOFM")?,
            date_posted: parse("span._2DGqt")?,
            link: parse("a")?,
        })
    }
}

fn parse(css: &str) -> Result<Selector, ScraperError> {
    Selector::parse(css).map_err(|e| ScraperError::Selector(e.to_string()))
}
