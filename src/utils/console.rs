use colored::*;
use std::io::{self, Write};

/// Column header of the key column in rendered tables
const INDEX_HEADER: &str = "(index)";

/// Column header of the value column in rendered tables
const VALUES_HEADER: &str = "Values";

/// Writes a `--- title ---` section header
///
/// # Arguments
/// * `out` - Destination stream
/// * `title` - The section title
pub fn write_section(out: &mut impl Write, title: &str) -> io::Result<()> {
    writeln!(out, "{}", format!("--- {} ---", title).blue().bold())
}

/// Writes a two-column box-drawn table of key/value rows
///
/// Cells are centered in their column, widths follow the widest cell.
pub fn write_table(out: &mut impl Write, rows: &[(&str, String)]) -> io::Result<()> {
    let key_width = rows
        .iter()
        .map(|(k, _)| k.chars().count())
        .chain(std::iter::once(INDEX_HEADER.len()))
        .max()
        .unwrap_or_default()
        + 2;
    let value_width = rows
        .iter()
        .map(|(_, v)| v.chars().count())
        .chain(std::iter::once(VALUES_HEADER.len()))
        .max()
        .unwrap_or_default()
        + 2;

    let rule = |left: &str, mid: &str, right: &str| {
        format!(
            "{}{}{}{}{}",
            left,
            "─".repeat(key_width),
            mid,
            "─".repeat(value_width),
            right
        )
    };

    writeln!(out, "{}", rule("┌", "┬", "┐"))?;
    writeln!(
        out,
        "│{}│{}│",
        center(INDEX_HEADER, key_width),
        center(VALUES_HEADER, value_width)
    )?;
    writeln!(out, "{}", rule("├", "┼", "┤"))?;
    for (key, value) in rows {
        writeln!(
            out,
            "│{}│{}│",
            center(key, key_width),
            center(value, value_width)
        )?;
    }
    writeln!(out, "{}", rule("└", "┴", "┘"))
}

/// Pads `text` on both sides to `width` characters, extra space going right
fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centers_with_extra_space_on_the_right() {
        assert_eq!(center("ab", 5), " ab  ");
        assert_eq!(center("abc", 3), "abc");
    }

    #[test]
    fn table_rows_have_equal_width() {
        let mut out = Vec::new();
        let rows = vec![
            ("status", "'accepted'".to_string()),
            ("submitted_tasks", "3".to_string()),
        ];
        write_table(&mut out, &rows).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 6);
        let width = lines[0].chars().count();
        assert!(lines.iter().all(|l| l.chars().count() == width));
        assert!(lines[1].contains("(index)"));
        assert!(lines[3].contains("'accepted'"));
        assert!(lines[4].contains("submitted_tasks"));
    }
}
