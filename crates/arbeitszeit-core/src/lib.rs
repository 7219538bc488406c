pub mod error;
pub mod export;
pub mod extraction;
pub mod model;
pub mod options;
pub mod parsing;

use error::ArbeitszeitError;
use extraction::table::find_tables;
use extraction::PdfExtractor;
use model::{NormalizedDayRecord, RawDayRow, TimesheetTable};
use options::ExtractOptions;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Counters describing one extraction run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionStats {
    pub pages: usize,
    pub pages_with_table: usize,
    /// Data rows below a table header, before day-entry filtering.
    pub candidate_rows: usize,
    pub day_rows: usize,
}

/// Day rows as found in the document, before time parsing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedRows {
    pub rows: Vec<RawDayRow>,
    pub stats: ExtractionStats,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimesheetReport {
    pub records: Vec<NormalizedDayRecord>,
    pub table: TimesheetTable,
    pub stats: ExtractionStats,
}

/// Extract the raw day rows from a timesheet PDF.
///
/// Only an unreadable document is an error. Pages without a table, rows that
/// are not day entries, and a document without any day rows all degrade to
/// fewer (or zero) rows.
pub fn extract_day_rows_from_pdf(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
    options: &ExtractOptions,
) -> Result<ExtractedRows, ArbeitszeitError> {
    let pages = extractor.extract_pages(pdf_bytes)?;
    let tables = find_tables(&pages, &options.header_keywords);
    let rows = parsing::rows::extract_day_rows(&tables, options.first_row_policy);

    let stats = ExtractionStats {
        pages: pages.len(),
        pages_with_table: tables.len(),
        candidate_rows: tables.iter().map(|t| t.data_rows().len()).sum(),
        day_rows: rows.len(),
    };

    info!(
        backend = extractor.backend_name(),
        pages = stats.pages,
        tables = stats.pages_with_table,
        candidates = stats.candidate_rows,
        days = stats.day_rows,
        "extracted day rows"
    );

    Ok(ExtractedRows { rows, stats })
}

/// Main API entry point: extract the per-day start and end times from a
/// timesheet PDF.
pub fn extract_times_from_pdf(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
    options: &ExtractOptions,
) -> Result<TimesheetReport, ArbeitszeitError> {
    let extracted = extract_day_rows_from_pdf(pdf_bytes, extractor, options)?;
    Ok(normalize_extracted(extracted))
}

/// Normalize already-extracted rows (e.g. loaded from a `parse` JSON dump).
pub fn normalize_extracted(extracted: ExtractedRows) -> TimesheetReport {
    let records = parsing::normalize::normalize_rows(&extracted.rows);
    let table = parsing::normalize::project(&records);
    TimesheetReport {
        records,
        table,
        stats: extracted.stats,
    }
}
