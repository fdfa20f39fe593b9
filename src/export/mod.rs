//! Plan rendering and export.

pub mod exporter_csv;
pub mod exporter_json;
pub mod text;
pub mod types;

pub use exporter_csv::{export_csv, export_csv_to_file, DEFAULT_CSV_FILENAME};
pub use exporter_json::export_json;
pub use text::{render_plan, render_schedule};
pub use types::{ExportError, OutputFormat};
