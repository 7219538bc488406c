use arbeitszeit_core::extraction::pdftotext::PdftotextExtractor;
use arbeitszeit_core::options::ExtractOptions;
use std::path::PathBuf;

use crate::output;

pub fn run(
    pdf_file: PathBuf,
    output_format: &str,
    options: &ExtractOptions,
) -> Result<(), arbeitszeit_core::error::ArbeitszeitError> {
    let pdf_bytes = std::fs::read(&pdf_file)?;
    let extractor = PdftotextExtractor::new();
    let extracted = arbeitszeit_core::extract_day_rows_from_pdf(&pdf_bytes, &extractor, options)?;

    match output_format {
        "json" => output::json::print(&extracted)?,
        _ => output::table::print_raw_rows(&extracted.rows),
    }

    eprintln!(
        "Found {} day row(s) on {} of {} page(s)",
        extracted.stats.day_rows, extracted.stats.pages_with_table, extracted.stats.pages
    );

    Ok(())
}
