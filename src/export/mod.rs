mod csv_export;
mod export_error;

pub use self::csv_export::{save_to_csv, timestamped_path};
pub use self::export_error::ExportError;
