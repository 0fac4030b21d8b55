// Reading candidate rosters from Excel files.

use calamine::{open_workbook, DataType, Reader, Xlsx};

use crate::elq::*;

/// Reads the candidate names from the first column of a worksheet.
///
/// The first worksheet is used if no name is given. Leading rows can be
/// skipped (typically a header). Empty cells are ignored.
pub fn read_roster(
    path: &str,
    worksheet: Option<&str>,
    skip_rows: usize,
) -> ElqResult<Vec<String>> {
    let mut workbook: Xlsx<_> = open_workbook(path).context(OpeningExcelSnafu { path })?;
    let wrange = match worksheet {
        Some(name) => workbook.worksheet_range(name),
        None => workbook.worksheet_range_at(0),
    }
    .context(EmptyExcelSnafu {
        path,
        worksheet: worksheet_label(worksheet),
    })?
    .context(OpeningExcelSnafu { path })?;
    debug!("read_roster: {:?} has {:?} cells", path, wrange.get_size());
    names_from_rows(wrange.rows(), skip_rows)
}

fn worksheet_label(worksheet: Option<&str>) -> String {
    match worksheet {
        Some(name) => format!("'{}'", name),
        None => "#1".to_string(),
    }
}

fn names_from_rows<'a>(
    rows: impl Iterator<Item = &'a [DataType]>,
    skip_rows: usize,
) -> ElqResult<Vec<String>> {
    let mut names: Vec<String> = Vec::new();
    for (idx, row) in rows.enumerate().skip(skip_rows) {
        // Rows are numbered from 1, as in the spreadsheet.
        let lineno = idx + 1;
        debug!("names_from_rows: row {}: {:?}", lineno, row.first());
        match row.first() {
            Some(DataType::String(s)) if s.trim().is_empty() => {}
            Some(DataType::String(s)) => names.push(s.trim().to_string()),
            Some(DataType::Empty) | None => {}
            Some(cell) => {
                return RosterCellSnafu {
                    row: lineno,
                    cell: format!("{:?}", cell),
                }
                .fail();
            }
        }
    }
    Ok(names)
}
