// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::{ensure_absolute, ensure_writable};
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::ScheduleRow;
use crate::ui::messages::warning;
use std::path::Path;

/// High-level export of the schedule table.
pub struct ExportLogic;

impl ExportLogic {
    /// Write `rows` to `path`.
    ///
    /// - `format`: explicit format, or `None` to infer it from the extension
    /// - `path`: absolute output path
    /// - `force`: overwrite an existing file without asking
    pub fn export(
        rows: &[ScheduleRow],
        format: Option<ExportFormat>,
        path: &Path,
        force: bool,
    ) -> AppResult<ExportFormat> {
        ensure_absolute(path)?;

        let format = match format {
            Some(f) => f,
            None => ExportFormat::from_path(path)?,
        };

        ensure_writable(path, force)?;

        if rows.iter().all(|r| r.assigned.is_empty()) {
            warning("No assignment found: exporting an empty schedule.");
        }

        match format {
            ExportFormat::Csv => export_csv(rows, path)?,
            ExportFormat::Json => export_json(rows, path)?,
        }

        Ok(format)
    }
}
