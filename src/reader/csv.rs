// Wed Feb 4 2026 - Alex

/// Data lines of a CSV resource, blank lines skipped.
pub fn read_lines(content: &str) -> Vec<&str> {
    content
        .lines()
        .map(|l| l.trim_end_matches('\r'))
        .filter(|l| !l.trim().is_empty())
        .collect()
}

/// Split one row on commas. Double-quoted fields may contain commas and
/// escaped quotes (`""`).
pub fn split_row(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut quoted = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' if field.is_empty() && !quoted => {
                in_quotes = true;
                quoted = true;
            }
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut field));
                quoted = false;
            }
            _ => field.push(c),
        }
    }
    fields.push(field);
    fields
}

/// Column accessor: out-of-range columns read as empty, everything is
/// whitespace-trimmed.
pub fn column<'a>(row: &'a [String], index: usize) -> &'a str {
    row.get(index).map(|s| s.trim()).unwrap_or("")
}
