use arbeitszeit_core::model::{RawDayRow, TimesheetTable, TIME_SLOTS};

pub fn print_table(table: &TimesheetTable) {
    println!("{}", format_table(table));
}

pub fn print_raw_rows(rows: &[RawDayRow]) {
    println!("{}", format_raw_rows(rows));
}

/// Aligned text rendering of the export table. Absent values print as `-`.
pub fn format_table(table: &TimesheetTable) -> String {
    let mut rows: Vec<Vec<String>> = vec![TimesheetTable::COLUMNS
        .iter()
        .map(|c| c.to_string())
        .collect()];

    for row in &table.rows {
        let mut cells = vec![row.date.clone(), row.weekday.clone()];
        cells.extend(row.time_cells().iter().map(|v| match v {
            Some(n) => n.to_string(),
            None => "-".to_string(),
        }));
        rows.push(cells);
    }

    align(&rows)
}

pub fn format_raw_rows(rows: &[RawDayRow]) -> String {
    let mut out: Vec<Vec<String>> = vec![["Seite", "Datum", "Wochentag", "Von1", "Bis1", "Von2", "Bis2"]
        .iter()
        .map(|c| c.to_string())
        .collect()];

    for row in rows {
        let mut cells = vec![
            row.page_number.to_string(),
            row.date.clone(),
            row.weekday.clone(),
        ];
        cells.extend((0..TIME_SLOTS).map(|i| row.slot(i).to_string()));
        out.push(cells);
    }

    align(&out)
}

fn align(rows: &[Vec<String>]) -> String {
    let columns = rows.iter().map(|r| r.len()).max().unwrap_or(0);
    let widths: Vec<usize> = (0..columns)
        .map(|c| {
            rows.iter()
                .filter_map(|r| r.get(c))
                .map(|s| s.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    rows.iter()
        .map(|r| {
            r.iter()
                .enumerate()
                .map(|(c, s)| format!("{:<width$}", s, width = widths[c]))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
