//! Caret underlining of source spans for error context

use super::position::Position;

/// Render the lines spanned by `start..end`, each followed by a row of `^`
/// under the covered columns.
///
/// Inner lines of a multi-line span are underlined to their end. Tabs are
/// printed as single spaces so carets stay aligned with columns.
pub fn underline(text: &str, start: &Position, end: &Position) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    let first = start.line;
    let last = end.line.max(first);

    let mut rows = Vec::new();
    for line_no in first..=last {
        let Some(raw) = lines.get(line_no) else {
            break;
        };
        let line: String = raw
            .trim_end_matches('\r')
            .chars()
            .map(|c| if c == '\t' { ' ' } else { c })
            .collect();
        let len = line.chars().count();

        let col_start = if line_no == first { column(start) } else { 0 };
        let col_end = if line_no == last { column(end) } else { len };
        let width = col_end.saturating_sub(col_start).max(1);

        rows.push(format!("{}\n{}{}", line, " ".repeat(col_start), "^".repeat(width)));
    }
    rows.join("\n")
}

fn column(pos: &Position) -> usize {
    pos.column.max(0) as usize
}
