//! Markdown-level merging of table fragments.
//!
//! Table text is treated as an opaque row/column grid keyed by the border
//! delimiter; cell contents are never interpreted.

/// Cell border delimiter in analyzer markdown.
pub const BORDER_SYMBOL: &str = "|";

/// Why a vertical merge could not be performed.
///
/// The caller keeps both fragments untouched and records the cause in the
/// stitch report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeFailure {
    /// A fragment had no data rows left after separator removal
    EmptyFragment,
    /// The fragments' markdown column counts disagreed
    ColumnMismatch,
}

/// Content of one cell in a header-separator row.
const HEADER_SEPARATOR_CELL_CONTENT: &str = " - ";

/// Remove the markdown header-separator line(s) from a table fragment.
///
/// A line is a separator iff splitting it on the separator cell marker
/// leaves only border delimiters ("| - | - |" and the like). The second
/// fragment of a vertically split table repeats the header separator, which
/// must not survive into the merged body.
pub fn remove_header_separator(markdown_table: &str) -> String {
    let mut result = String::new();
    for line in markdown_table.lines() {
        let is_separator = line
            .split(HEADER_SEPARATOR_CELL_CONTENT)
            .all(|segment| segment == BORDER_SYMBOL);
        if is_separator {
            continue;
        }
        result.push_str(line);
        result.push('\n');
    }
    result
}

/// Number of columns in a markdown table, read off its first row.
fn column_count(first_row: &str) -> usize {
    // "| a | b |" splits into ["", " a ", " b ", ""]
    first_row.split(BORDER_SYMBOL).count().saturating_sub(2)
}

/// Merge two fragments of a vertically split table.
///
/// The second fragment loses its header separator, then its rows follow the
/// first fragment's rows. Fails when either side has no rows or the
/// markdown column counts disagree.
pub fn merge_vertical(md_table_1: &str, md_table_2: &str) -> Result<String, MergeFailure> {
    let table_2_body = remove_header_separator(md_table_2);
    let rows_1: Vec<&str> = md_table_1.trim().lines().collect();
    let rows_2: Vec<&str> = table_2_body.trim().lines().collect();

    if rows_1.is_empty() || rows_2.is_empty() {
        log::warn!("vertical merge skipped: empty table fragment");
        return Err(MergeFailure::EmptyFragment);
    }

    let columns_1 = column_count(rows_1[0]);
    let columns_2 = column_count(rows_2[0]);
    if columns_1 != columns_2 {
        log::warn!("vertical merge skipped: {columns_1} vs {columns_2} markdown columns");
        return Err(MergeFailure::ColumnMismatch);
    }

    let mut merged: Vec<&str> = rows_1;
    merged.extend(rows_2);
    Ok(merged.join("\n"))
}

/// Merge two halves of a horizontally split table.
///
/// Rows are zipped by line index (ragged remainders are dropped); each pair
/// joins as left row minus its trailing delimiter, one delimiter, right row
/// minus its leading delimiter.
pub fn merge_horizontal(md_table_1: &str, md_table_2: &str) -> String {
    let rows_1 = md_table_1.trim().lines();
    let rows_2 = md_table_2.trim().lines();

    let merged: Vec<String> = rows_1
        .zip(rows_2)
        .map(|(row_1, row_2)| {
            let left = row_1.strip_suffix(BORDER_SYMBOL).unwrap_or(row_1);
            let right = row_2.strip_prefix(BORDER_SYMBOL).unwrap_or(row_2);
            format!("{left}{BORDER_SYMBOL}{right}")
        })
        .collect();

    merged.join("\n")
}
