pub mod xlsx;

/// File name offered for the generated workbook.
pub const DEFAULT_XLSX_FILE_NAME: &str = "Arbeitszeiten_Export.xlsx";
