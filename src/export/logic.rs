// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::FeedbackExport;
use crate::export::xlsx::export_xlsx;
use crate::models::feedback::FeedbackTable;
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;

/// High level export entry point.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the given (already filtered) table.
    ///
    /// - `format`: csv | json | xlsx
    /// - `file`: absolute output path (`~/` is expanded)
    ///
    /// Returns the number of rows written; an empty table writes nothing.
    pub fn export(
        table: &FeedbackTable,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<usize> {
        let path = expand_tilde(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        if table.is_empty() {
            warning("No feedback rows to export.");
            return Ok(0);
        }

        ensure_writable(&path, force)?;

        let rows: Vec<FeedbackExport> = table.iter().map(FeedbackExport::from).collect();

        match format {
            ExportFormat::Csv => export_csv(&rows, &path)?,
            ExportFormat::Json => export_json(&rows, &path)?,
            ExportFormat::Xlsx => export_xlsx(&rows, &path)?,
        }

        Ok(rows.len())
    }
}
