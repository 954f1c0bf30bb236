//! Console rendering of dataset previews

use crate::domain::Dataset;

/// Renders `dataset` as a left-aligned text table with a header separator
///
/// ```
/// use pseudonymizer::cli::preview::render_table;
/// use pseudonymizer::domain::Dataset;
///
/// let dataset = Dataset::builder()
///     .column("ID", ["a1b2c3d4"])
///     .column("Age", ["30"])
///     .build()
///     .unwrap();
///
/// assert_eq!(render_table(&dataset), "ID        Age\n--------  ---\na1b2c3d4  30\n");
/// ```
pub fn render_table(dataset: &Dataset) -> String {
    let names = dataset.column_names();
    let mut widths: Vec<usize> = names.iter().map(|n| n.chars().count()).collect();
    for row in dataset.rows() {
        for (width, value) in widths.iter_mut().zip(&row) {
            *width = (*width).max(value.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &names, &widths);
    let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_row(&mut out, &separator, &widths);
    for row in dataset.rows() {
        push_row(&mut out, &row, &widths);
    }
    out
}

fn push_row<S: AsRef<str>>(out: &mut String, cells: &[S], widths: &[usize]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell.as_ref(), width = *width))
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_pads_to_widest_value() {
        let dataset = Dataset::builder()
            .column("ID", ["a", "bbbb"])
            .column("Age", ["30", "4"])
            .build()
            .unwrap();

        let table = render_table(&dataset);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "ID    Age");
        assert_eq!(lines[1], "----  ---");
        assert_eq!(lines[2], "a     30");
        assert_eq!(lines[3], "bbbb  4");
    }

    #[test]
    fn test_render_header_only() {
        let dataset = Dataset::builder()
            .column("ID", Vec::<String>::new())
            .build()
            .unwrap();
        assert_eq!(render_table(&dataset), "ID\n--\n");
    }
}
