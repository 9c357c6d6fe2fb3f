use deskbot_store::Record;

/// Render rows as a plain-text table with space-padded columns. Missing
/// and null cells render empty. Rows keep the order they were given in.
pub fn render_rows(columns: &[String], rows: &[&Record]) -> String {
    let mut widths: Vec<usize> = columns.iter().map(|c| c.len()).collect();
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| columns.iter().map(|c| row.get_str(c)).collect())
        .collect();

    for row in &cells {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.len());
        }
    }

    let mut out = String::new();
    push_line(&mut out, columns.iter().map(String::as_str), &widths);
    for row in &cells {
        out.push('\n');
        push_line(&mut out, row.iter().map(String::as_str), &widths);
    }
    out
}

fn push_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    for (i, cell) in cells.enumerate() {
        if i > 0 {
            out.push_str("  ");
        }
        out.push_str(&format!("{cell:>width$}", width = widths[i]));
    }
}
