use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum ScraperError {
    Network(String),
    Status { page: usize, code: u16 },
    Selector(String),
}

impl fmt::Display for ScraperError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScraperError::Network(msg) => write!(f, "Network error: {msg}"),
            ScraperError::Status { page, code } => {
                write!(f, "Failed to fetch page {page}. Status code: {code}")
            }
            ScraperError::Selector(msg) => write!(f, "Selector parse error: {msg}"),
        }
    }
}

impl Error for ScraperError {}
