use serde::Serialize;

/// Lines carrying more than this many digits are treated as table rows.
pub const TABLE_DIGIT_THRESHOLD: usize = 6;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub item: String,
    pub value: String,
}

pub fn is_table_line(line: &str) -> bool {
    line.chars().filter(|c| c.is_ascii_digit()).count() > TABLE_DIGIT_THRESHOLD
}

/// The last whitespace field of a line is the value, the rest the item.
/// Lines with fewer than two fields are skipped.
pub fn parse_table(lines: &[&str]) -> Vec<TableRow> {
    lines
        .iter()
        .filter_map(|line| {
            let fields: Vec<&str> = line.split_whitespace().collect();
            let (value, item) = fields.split_last()?;
            if item.is_empty() {
                return None;
            }
            Some(TableRow {
                item: item.join(" "),
                value: (*value).to_string(),
            })
        })
        .collect()
}
