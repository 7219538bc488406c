use arbeitszeit_core::export::xlsx::write_xlsx;
use arbeitszeit_core::extraction::pdftotext::PdftotextExtractor;
use arbeitszeit_core::options::ExtractOptions;
use arbeitszeit_core::ExtractedRows;
use std::path::PathBuf;

use crate::output;

pub fn run(
    input_file: PathBuf,
    output_format: &str,
    xlsx_file: Option<PathBuf>,
    options: &ExtractOptions,
    has_option_overrides: bool,
) -> Result<(), arbeitszeit_core::error::ArbeitszeitError> {
    // Determine input type by extension
    let is_json = input_file
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if let Some(warning) = ignored_options_warning(is_json, has_option_overrides) {
        eprintln!("warning: {warning}");
    }

    let report = if is_json {
        // Load pre-parsed rows from JSON
        let json_bytes = std::fs::read(&input_file)?;
        let extracted: ExtractedRows = serde_json::from_slice(&json_bytes)?;
        arbeitszeit_core::normalize_extracted(extracted)
    } else {
        let pdf_bytes = std::fs::read(&input_file)?;
        let extractor = PdftotextExtractor::new();
        arbeitszeit_core::extract_times_from_pdf(&pdf_bytes, &extractor, options)?
    };

    match output_format {
        "json" => output::json::print(&report.table)?,
        _ => output::table::print_table(&report.table),
    }

    if report.table.is_empty() {
        eprintln!("No day entries found in {}", input_file.display());
    } else {
        eprintln!("Extracted {} day(s)", report.table.len());
    }

    if let Some(path) = xlsx_file {
        write_xlsx(&report.table, &path)?;
        eprintln!("Spreadsheet written to {}", path.display());
    }

    Ok(())
}

/// Extraction options only affect PDF input; JSON rows were already filtered
/// when `parse` produced them.
fn ignored_options_warning(is_json: bool, has_option_overrides: bool) -> Option<&'static str> {
    (is_json && has_option_overrides).then_some(
        "--config and --first-row-policy are ignored for JSON input; pass them to `parse` instead",
    )
}
