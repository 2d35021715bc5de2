/// A Markdown table with a fixed header row.
#[derive(Debug, Clone)]
pub struct Table {
    headers: Vec<&'static str>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: &[&'static str]) -> Self {
        Self {
            headers: headers.to_vec(),
            rows: Vec::new(),
        }
    }

    /// Append a row. Cells are escaped here; missing cells render empty.
    pub fn row(&mut self, cells: Vec<String>) -> &mut Self {
        let mut escaped: Vec<String> = cells.iter().map(|c| escape_cell(c)).collect();
        escaped.resize(self.headers.len(), String::new());
        self.rows.push(escaped);
        self
    }

    pub fn render(&self) -> String {
        let mut lines = Vec::with_capacity(self.rows.len() + 2);
        lines.push(format_row(self.headers.iter().copied()));
        lines.push(format_row(self.headers.iter().map(|_| "---")));
        for row in &self.rows {
            lines.push(format_row(row.iter().map(String::as_str)));
        }
        lines.join("\n")
    }
}

fn format_row<'a>(cells: impl Iterator<Item = &'a str>) -> String {
    let cells: Vec<&str> = cells.collect();
    format!("| {} |", cells.join(" | "))
}

/// Escape a value for use inside a table cell.
pub fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
        .replace("\r\n", "<br>")
        .replace('\n', "<br>")
}

/// Longest run of consecutive backticks in `text`.
pub(crate) fn longest_backtick_run(text: &str) -> usize {
    let mut longest = 0;
    let mut run = 0;
    for c in text.chars() {
        if c == '`' {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 0;
        }
    }
    longest
}

/// Wrap a value in a code span. The delimiter is one backtick longer than any
/// run inside the value; values touching a backtick are padded with a space.
pub fn code(text: &str) -> String {
    let fence = "`".repeat(longest_backtick_run(text) + 1);
    if text.starts_with('`') || text.ends_with('`') {
        format!("{fence} {text} {fence}")
    } else {
        format!("{fence}{text}{fence}")
    }
}

/// Backtick each value and join with `sep`.
pub fn code_list<S: AsRef<str>>(values: &[S], sep: &str) -> String {
    values
        .iter()
        .map(|v| code(v.as_ref()))
        .collect::<Vec<_>>()
        .join(sep)
}

pub fn check_mark(flag: bool) -> &'static str {
    if flag {
        "✅"
    } else {
        "❌"
    }
}
