//! Box-drawing tables for terminal output

/// Render `headers` and `rows` as a box-drawing table
///
/// Cells are centred; every column is at least two characters wide. Widths
/// count characters, not bytes, so primes such as `y′` line up.
///
/// ```
/// use logicloom::render::terminal_table;
///
/// let out = terminal_table(&["A".to_string()], &[vec!["1".to_string()]]);
/// assert_eq!(out, "┌────┐\n│ A  │\n├────┤\n│ 1  │\n└────┘");
/// ```
pub fn terminal_table(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count().max(2)).collect();
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let rule = |left: &str, mid: &str, right: &str| -> String {
        let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{}{}{}", left, segments.join(mid), right)
    };
    let line = |cells: &[String]| -> String {
        let padded: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(i, &w)| {
                let cell = cells.get(i).map(String::as_str).unwrap_or("");
                format!("{:^w$}", cell, w = w)
            })
            .collect();
        format!("│ {} │", padded.join(" │ "))
    };

    let mut lines = vec![rule("┌", "┬", "┐"), line(headers)];
    for row in rows {
        lines.push(rule("├", "┼", "┤"));
        lines.push(line(row.as_slice()));
    }
    lines.push(rule("└", "┴", "┘"));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_header_only() {
        let out = terminal_table(&strings(&["Binary", "Literal"]), &[]);
        assert_eq!(
            out,
            "┌────────┬─────────┐\n│ Binary │ Literal │\n└────────┴─────────┘"
        );
    }

    #[test]
    fn test_wide_cell_grows_column() {
        let out = terminal_table(&strings(&["A"]), &[strings(&["long"])]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[1], "│  A   │");
        assert_eq!(lines[3], "│ long │");
    }

    #[test]
    fn test_multibyte_width() {
        let out = terminal_table(&strings(&["L"]), &[strings(&["y′"])]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[3], "│ y′ │");
        assert_eq!(lines[0].chars().count(), lines[3].chars().count());
    }

    #[test]
    fn test_short_row_is_padded() {
        let out = terminal_table(&strings(&["A", "B"]), &[strings(&["1"])]);
        assert!(out.contains("│ 1  │    │"));
    }
}
