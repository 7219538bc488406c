use crate::extraction::PageContent;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

static DAY_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{2}\.[0-9]{2}\.").unwrap());

/// Reconstruct table data from pdftotext -layout output.
///
/// pdftotext -layout preserves column alignment using spaces, so a table row
/// is one text line and its cells are separated by runs of 2+ spaces. Each
/// page carries at most one table, anchored at its header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub page_number: usize,
    /// Row 0 is the header line.
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn header(&self) -> Option<&[String]> {
        self.rows.first().map(|r| r.as_slice())
    }

    /// Rows after the header.
    pub fn data_rows(&self) -> &[Vec<String>] {
        self.rows.get(1..).unwrap_or(&[])
    }
}

const FOOTER_PREFIXES: [&str; 4] = ["seite", "page", "gedruckt", "druckdatum"];

/// Detect if a line looks like a table header row: at least two distinct
/// keywords appear as whole words.
pub fn is_table_header(line: &str, keywords: &[String]) -> bool {
    let words: Vec<String> = line
        .split_whitespace()
        .map(|w| {
            w.trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase()
        })
        .filter(|w| !w.is_empty())
        .collect();

    let count = keywords
        .iter()
        .filter(|kw| words.iter().any(|w| w == &kw.to_lowercase()))
        .count();
    count >= 2
}

/// Page footers end the table region. The footer marker may sit in any cell,
/// e.g. behind a print timestamp: `01.04.2025 14:32    Seite 1 von 1`.
pub fn is_footer(line: &str) -> bool {
    split_cells(line).iter().any(|cell| {
        let lower = cell.to_lowercase();
        FOOTER_PREFIXES.iter().any(|p| lower.starts_with(p))
    })
}

/// First line of a page that starts with a `DD.MM.` date.
pub fn first_day_line(page: &PageContent) -> Option<&str> {
    page.lines
        .iter()
        .map(|l| l.trim())
        .find(|l| DAY_LINE.is_match(l))
}

/// Find the table on a page. Returns `None` when no header line is found.
pub fn find_table(page: &PageContent, keywords: &[String]) -> Option<Table> {
    let header_idx = page
        .lines
        .iter()
        .position(|line| is_table_header(line, keywords))?;

    let mut rows = vec![split_cells(&page.lines[header_idx])];
    for line in &page.lines[header_idx + 1..] {
        if line.trim().is_empty() {
            continue;
        }
        if is_footer(line) {
            break;
        }
        rows.push(split_cells(line));
    }

    Some(Table {
        page_number: page.page_number,
        rows,
    })
}

/// Find the table on every page; pages without one are skipped.
pub fn find_tables(pages: &[PageContent], keywords: &[String]) -> Vec<Table> {
    pages
        .iter()
        .filter_map(|page| {
            let table = find_table(page, keywords);
            if table.is_none() {
                match first_day_line(page) {
                    Some(line) => debug!(
                        page = page.page_number,
                        first_day_line = line,
                        "no table header on page, skipping page with day rows"
                    ),
                    None => debug!(page = page.page_number, "no table found on page, skipping"),
                }
            }
            table
        })
        .collect()
}

/// Split a line into cells by gaps of 2+ whitespace characters.
pub fn split_cells(line: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut start = None;
    let mut space_count = 0;
    let mut last_non_space_end = 0;

    for (i, c) in line.char_indices() {
        if c.is_whitespace() {
            space_count += 1;
            if space_count == 2 {
                if let Some(s) = start.take() {
                    cells.push(line[s..last_non_space_end].to_string());
                }
            }
        } else {
            if start.is_none() {
                start = Some(i);
            }
            space_count = 0;
            last_non_space_end = i + c.len_utf8();
        }
    }

    if let Some(s) = start {
        cells.push(line[s..last_non_space_end].to_string());
    }

    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::default_header_keywords;

    fn page(lines: &[&str]) -> PageContent {
        PageContent {
            page_number: 1,
            lines: lines.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_is_table_header() {
        let kw = default_header_keywords();
        assert!(is_table_header(
            "  Datum    Tag   Von    Bis    Von    Bis    Soll   Ist",
            &kw
        ));
        assert!(!is_table_header("  03.03.  Mo   08:15  12:00", &kw));
        // one keyword is not enough
        assert!(!is_table_header("Selbstauskunft Datum", &kw));
        // keywords inside longer words do not count
        assert!(!is_table_header("Tagesvonbis Bisherige", &kw));
    }

    #[test]
    fn test_split_cells() {
        let cells = split_cells("  03.03.  Mo   08:15   12:00 ");
        assert_eq!(cells, vec!["03.03.", "Mo", "08:15", "12:00"]);
    }

    #[test]
    fn test_split_cells_keeps_single_spaces() {
        let cells = split_cells("01.03. Sa     Urlaub ganztags");
        assert_eq!(cells, vec!["01.03. Sa", "Urlaub ganztags"]);
    }

    #[test]
    fn test_split_cells_blank_line() {
        assert!(split_cells("    ").is_empty());
    }

    #[test]
    fn test_find_table() {
        let p = page(&[
            "Selbstauskunft März 2025",
            "",
            "  Datum    Tag   Von    Bis    Von    Bis",
            "  01.03.   Sa",
            "",
            "  03.03.   Mo    08:15  12:00  13:00  16:45",
            "  Summe                              160:00",
            "Seite 1 von 1",
            "  04.03.   Di    08:00  12:00",
        ]);

        let table = find_table(&p, &default_header_keywords()).unwrap();
        assert_eq!(table.rows.len(), 4);
        assert_eq!(table.header().unwrap()[0], "Datum");
        assert_eq!(table.data_rows()[0], vec!["01.03.", "Sa"]);
        assert_eq!(table.data_rows()[2], vec!["Summe", "160:00"]);
    }

    #[test]
    fn test_footer_behind_timestamp() {
        assert!(is_footer("Seite 1 von 1"));
        assert!(is_footer("01.04.2025 14:32      Seite 1 von 1"));
        assert!(!is_footer("  03.03.   Mo    08:15  12:00"));
        assert!(!is_footer("  Summe                160:00"));
    }

    #[test]
    fn test_timestamp_footer_ends_table() {
        let p = page(&[
            "  Datum    Tag   Von    Bis",
            "  31.03.   Mo    08:00  16:00",
            "",
            "01.04.2025 14:32                     Seite 1 von 1",
        ]);
        let table = find_table(&p, &default_header_keywords()).unwrap();
        assert_eq!(table.data_rows().len(), 1);
    }

    #[test]
    fn test_first_day_line() {
        let continuation = page(&[
            "Fortsetzung",
            "  17.03.   Mo    08:00  16:00",
            "  18.03.   Di",
        ]);
        assert_eq!(
            first_day_line(&continuation),
            Some("17.03.   Mo    08:00  16:00")
        );
        assert_eq!(first_day_line(&page(&["Deckblatt"])), None);
    }

    #[test]
    fn test_find_table_without_header() {
        let p = page(&["Deckblatt", "Keine Buchungen vorhanden"]);
        assert!(find_table(&p, &default_header_keywords()).is_none());
    }

    #[test]
    fn test_find_tables_skips_pages_without_table() {
        let pages = vec![
            page(&["Deckblatt"]),
            PageContent {
                page_number: 2,
                lines: vec!["Datum  Tag  Von  Bis".into(), "02.03.  So".into()],
            },
        ];
        let tables = find_tables(&pages, &default_header_keywords());
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].page_number, 2);
    }
}
