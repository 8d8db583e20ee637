use anyhow::{Context, Result};
use log::{debug, warn};
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::Path;

use super::types::PaperRecord;
use super::utils::open_input;

/// Read paper records from JSONL (optionally gzipped).
///
/// Blank lines are ignored. Lines that do not parse are skipped and counted;
/// only an unreadable file is an error.
pub fn load_paper_records(path: &str) -> Result<Vec<PaperRecord>> {
    let reader = open_input(path)?;
    let mut records = Vec::new();
    let mut skipped = 0usize;

    for (line_no, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read line {} of {}", line_no + 1, path))?;
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<PaperRecord>(&line) {
            Ok(record) => records.push(record),
            Err(e) => {
                skipped += 1;
                debug!("Skipping line {} of {}: {}", line_no + 1, path, e);
            }
        }
    }

    if skipped > 0 {
        warn!("Skipped {} malformed paper records in {}", skipped, path);
    }
    Ok(records)
}

/// Write one JSON document per line. Returns the number of lines written.
pub fn write_jsonl<T: Serialize>(path: &str, rows: &[T]) -> Result<usize> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
        }
    }
    let file = File::create(path).with_context(|| format!("Failed to create output file: {}", path))?;
    let mut writer = BufWriter::new(file);

    for row in rows {
        let json_line = serde_json::to_string(row).context("Failed to serialize output row")?;
        writeln!(writer, "{}", json_line).with_context(|| format!("Failed to write to {}", path))?;
    }
    writer.flush()?;
    Ok(rows.len())
}

/// Pretty JSON to a file, or stdout when `path` is `None`
pub fn write_json<T: Serialize>(path: Option<&str>, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    match path {
        Some(path) => {
            std::fs::write(path, json + "\n").with_context(|| format!("Failed to write output file: {}", path))
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{}", json)?;
            Ok(())
        }
    }
}
