//! Line tokenizer for the previewer.

/// A run of input lines with one rendering rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block<'a> {
    /// `#`, `##` or `###` followed by a space.
    Heading { level: u8, text: &'a str },

    /// Contiguous table lines, separator rows included.
    Table(Vec<&'a str>),

    /// Anything else, including blank lines.
    Text(&'a str),
}

impl Block<'_> {
    /// Whether this is a table block.
    pub fn is_table(&self) -> bool {
        matches!(self, Self::Table(_))
    }
}

/// Split markdown into blocks, one per line except for tables, which
/// collect every consecutive table line.
///
/// Lines are split on `\n` only, so a trailing newline yields a final empty
/// text block. That keeps the newline count recoverable by the renderer.
pub fn tokenize(markdown: &str) -> Vec<Block<'_>> {
    let mut blocks = Vec::new();
    let mut table: Vec<&str> = Vec::new();

    for line in markdown.split('\n') {
        if is_table_line(line) {
            table.push(line);
            continue;
        }

        if !table.is_empty() {
            blocks.push(Block::Table(std::mem::take(&mut table)));
        }

        blocks.push(match heading(line) {
            Some((level, text)) => Block::Heading { level, text },
            None => Block::Text(line),
        });
    }

    if !table.is_empty() {
        blocks.push(Block::Table(table));
    }

    blocks
}

/// A table line starts and ends with `|` and has something in between.
pub fn is_table_line(line: &str) -> bool {
    line.len() >= 3 && line.starts_with('|') && line.ends_with('|')
}

fn heading(line: &str) -> Option<(u8, &str)> {
    [("### ", 3), ("## ", 2), ("# ", 1)]
        .into_iter()
        .find_map(|(prefix, level)| line.strip_prefix(prefix).map(|text| (level, text)))
}
