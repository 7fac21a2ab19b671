use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use csv::Writer;
use tracing::info;

use crate::app::calc::HistoryTable;

/// Writes the history table as `{ticker}_stock_data.csv` inside `dir`,
/// replacing any earlier export for the same ticker.
pub fn write_history_csv(table: &HistoryTable, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(table.file_name());
    let mut writer = Writer::from_path(&path)
        .with_context(|| format!("Failed to create CSV file at path: {}", path.display()))?;

    writer
        .write_record(table.columns())
        .context("Failed to write CSV header")?;
    for row in table.rows() {
        writer
            .write_record(table.record(row))
            .with_context(|| format!("Failed to write CSV row for {}", row.date()))?;
    }
    writer.flush().context("Failed to flush CSV file")?;

    info!(rows = table.rows().len(), path = %path.display(), "exported history");
    Ok(path)
}
