//! Export helpers for JSON interval reports.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;

/// Create a writer for the target path, handling stdout (`-`) by convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

/// Write `report` as pretty JSON followed by a newline.
pub fn write_json<T: Serialize>(writer: &mut dyn Write, report: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, report)?;
    writeln!(writer)?;
    writer.flush()
}

/// Write `report` as pretty JSON to `path` (or stdout for `-`).
pub fn write_report<T: Serialize>(path: &Path, report: &T) -> io::Result<()> {
    let mut writer = writer_for_path(path)?;
    write_json(writer.as_mut(), report)
}
