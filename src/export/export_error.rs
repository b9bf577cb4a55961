use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum ExportError {
    Io(String),
    Csv(String),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::Io(msg) => write!(f, "I/O error: {msg}"),
            ExportError::Csv(msg) => write!(f, "CSV write error: {msg}"),
        }
    }
}

impl Error for ExportError {}
