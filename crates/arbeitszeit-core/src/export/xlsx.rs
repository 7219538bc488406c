use crate::error::ArbeitszeitError;
use crate::model::TimesheetTable;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use tracing::info;

pub const SHEET_NAME: &str = "Arbeitszeiten";

/// Rows occupied by the two-level header.
pub const HEADER_ROWS: u32 = 2;

const COLUMN_WIDTHS: [f64; 6] = [10.0, 11.0, 8.0, 8.0, 8.0, 8.0];
const WEEKEND_FILL: u32 = 0xD9E1F2;
const HEADER_FILL: u32 = 0xD9D9D9;

/// Render the table as a styled workbook, returned as xlsx bytes.
///
/// Layout: `Day` and `Weekday` span both header rows, `Begin` and `End` each
/// span an hour and a minute column. Time columns carry a medium border,
/// everything else a thin one. Weekend rows are filled.
pub fn render_xlsx(table: &TimesheetTable) -> Result<Vec<u8>, ArbeitszeitError> {
    let mut workbook = build_workbook(table)?;
    Ok(workbook.save_to_buffer()?)
}

/// Render the table and save it to `path`.
pub fn write_xlsx(table: &TimesheetTable, path: &Path) -> Result<(), ArbeitszeitError> {
    let mut workbook = build_workbook(table)?;
    workbook.save(path)?;
    info!(path = %path.display(), rows = table.len(), "wrote spreadsheet");
    Ok(())
}

fn build_workbook(table: &TimesheetTable) -> Result<Workbook, ArbeitszeitError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    write_header(worksheet)?;

    for (i, row) in table.rows.iter().enumerate() {
        let r = HEADER_ROWS + i as u32;
        let fill = row.is_weekend().then_some(Color::RGB(WEEKEND_FILL));

        let text_format = cell_format(FormatBorder::Thin, fill);
        worksheet.write_string_with_format(r, 0, &row.date, &text_format)?;
        worksheet.write_string_with_format(r, 1, &row.weekday, &text_format)?;

        let time_format = cell_format(FormatBorder::Medium, fill).set_align(FormatAlign::Center);
        for (offset, value) in row.time_cells().iter().enumerate() {
            let col = 2 + offset as u16;
            match value {
                Some(v) => {
                    worksheet.write_number_with_format(r, col, *v, &time_format)?;
                }
                None => {
                    worksheet.write_blank(r, col, &time_format)?;
                }
            }
        }
    }

    for (col, width) in COLUMN_WIDTHS.iter().enumerate() {
        worksheet.set_column_width(col as u16, *width)?;
    }
    worksheet.set_freeze_panes(HEADER_ROWS, 0)?;

    Ok(workbook)
}

fn write_header(worksheet: &mut Worksheet) -> Result<(), ArbeitszeitError> {
    let header = Format::new()
        .set_bold()
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_background_color(Color::RGB(HEADER_FILL))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);
    let time_header = header.clone().set_border(FormatBorder::Medium);

    worksheet.merge_range(0, 0, 1, 0, "Day", &header)?;
    worksheet.merge_range(0, 1, 1, 1, "Weekday", &header)?;
    worksheet.merge_range(0, 2, 0, 3, "Begin", &time_header)?;
    worksheet.merge_range(0, 4, 0, 5, "End", &time_header)?;

    for (col, label) in [(2, "Hour"), (3, "Minute"), (4, "Hour"), (5, "Minute")] {
        worksheet.write_string_with_format(1, col, label, &time_header)?;
    }

    Ok(())
}

fn cell_format(border: FormatBorder, fill: Option<Color>) -> Format {
    let format = Format::new().set_border(border);
    match fill {
        Some(color) => format
            .set_background_color(color)
            .set_pattern(FormatPattern::Solid),
        None => format,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DayTableRow;
    use calamine::{open_workbook_from_rs, Data, Reader, Xlsx};
    use std::io::Cursor;

    fn row(date: &str, weekday: &str, times: [Option<u8>; 4]) -> DayTableRow {
        DayTableRow {
            date: date.into(),
            weekday: weekday.into(),
            start_hour: times[0],
            start_minute: times[1],
            end_hour: times[2],
            end_minute: times[3],
        }
    }

    fn read_back(bytes: Vec<u8>) -> calamine::Range<Data> {
        let mut workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(bytes)).unwrap();
        workbook.worksheet_range(SHEET_NAME).unwrap()
    }

    fn is_blank(cell: Option<&Data>) -> bool {
        matches!(cell, None | Some(Data::Empty))
    }

    #[test]
    fn test_header_labels() {
        let range = read_back(render_xlsx(&TimesheetTable::default()).unwrap());
        assert_eq!(range.get_value((0, 0)), Some(&Data::String("Day".into())));
        assert_eq!(range.get_value((0, 1)), Some(&Data::String("Weekday".into())));
        assert_eq!(range.get_value((0, 2)), Some(&Data::String("Begin".into())));
        assert_eq!(range.get_value((0, 4)), Some(&Data::String("End".into())));
        assert_eq!(range.get_value((1, 3)), Some(&Data::String("Minute".into())));
        assert_eq!(range.get_value((1, 4)), Some(&Data::String("Hour".into())));
    }

    #[test]
    fn test_empty_table_is_header_only() {
        let range = read_back(render_xlsx(&TimesheetTable::default()).unwrap());
        assert_eq!(range.height(), HEADER_ROWS as usize);
    }

    #[test]
    fn test_values_and_blanks() {
        let table = TimesheetTable {
            rows: vec![
                row("01.03.", "Sa", [None, None, None, None]),
                row("03.03.", "Mo", [Some(8), Some(15), Some(16), Some(45)]),
            ],
        };
        let range = read_back(render_xlsx(&table).unwrap());

        assert_eq!(range.get_value((2, 0)), Some(&Data::String("01.03.".into())));
        assert_eq!(range.get_value((2, 1)), Some(&Data::String("Sa".into())));
        assert!(is_blank(range.get_value((2, 2))));
        assert!(is_blank(range.get_value((2, 5))));

        assert_eq!(range.get_value((3, 0)), Some(&Data::String("03.03.".into())));
        assert_eq!(range.get_value((3, 2)), Some(&Data::Float(8.0)));
        assert_eq!(range.get_value((3, 3)), Some(&Data::Float(15.0)));
        assert_eq!(range.get_value((3, 4)), Some(&Data::Float(16.0)));
        assert_eq!(range.get_value((3, 5)), Some(&Data::Float(45.0)));
    }

    #[test]
    fn test_write_xlsx_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(crate::export::DEFAULT_XLSX_FILE_NAME);
        let table = TimesheetTable {
            rows: vec![row("03.03.", "Mo", [Some(8), Some(0), Some(12), Some(0)])],
        };

        write_xlsx(&table, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"PK"));
        let range = read_back(bytes);
        assert_eq!(range.get_value((2, 4)), Some(&Data::Float(12.0)));
    }
}
