//! CSV export of a weekly plan.
//!
//! Layout: a `Day,Workout` header, one row per day, a blank row, then a
//! `Mindset Tip` row.

use std::path::Path;

use crate::export::types::ExportError;
use crate::plan::types::Schedule;

/// File name offered for a downloaded plan.
pub const DEFAULT_CSV_FILENAME: &str = "weekly_plan.csv";

fn writer<W: std::io::Write>(out: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(out)
}

/// Export a schedule and mindset tip to CSV text.
pub fn export_csv(schedule: &Schedule, tip: &str) -> Result<String, ExportError> {
    let mut output = Vec::new();

    {
        let mut rows = writer(&mut output);
        rows.write_record(["Day", "Workout"])?;
        for (day, workout) in schedule.iter() {
            rows.write_record([day.name(), workout])?;
        }
        rows.flush()?;
    }

    // csv writes an empty record as `""`, so the separator row goes in raw.
    output.extend_from_slice(b"\r\n");

    {
        let mut footer = writer(&mut output);
        footer.write_record(["Mindset Tip", tip])?;
        footer.flush()?;
    }

    String::from_utf8(output).map_err(|e| ExportError::WriteFailed(e.to_string()))
}

/// Export a schedule to CSV and write it to a file.
pub fn export_csv_to_file(schedule: &Schedule, tip: &str, path: &Path) -> Result<(), ExportError> {
    let content = export_csv(schedule, tip)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;

    tracing::info!(path = %path.display(), "Exported weekly plan CSV");
    Ok(())
}
