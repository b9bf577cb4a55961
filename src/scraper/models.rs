use serde::Serialize;

/// Placeholder written for any field missing from a listing element.
pub const NOT_AVAILABLE: &str = "N/A";

/// One classified-ad entry from an OLX search-results page.
///
/// All fields are free-form text taken straight from the page; any of them
/// may hold the "N/A" sentinel when the corresponding element is absent.
/// The serde renames are the CSV column names, in header order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Listing {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Price")]
    pub price: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Date Posted")]
    pub date_posted: String,
    #[serde(rename = "URL")]
    pub url: String,
}
