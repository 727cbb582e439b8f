//! HTML rendering for tokenized markdown.

use once_cell::sync::Lazy;
use regex::Regex;

use super::tokenizer::Block;

const H1_STYLE: &str = "font-size: 24px; font-weight: 700; color: #1f2937; margin: 24px 0 16px 0;";
const H2_STYLE: &str = "font-size: 18px; font-weight: 700; color: #1f2937; margin: 20px 0 12px 0;";
const H3_STYLE: &str = "font-size: 16px; font-weight: 600; color: #1f2937; margin: 16px 0 8px 0;";
const TABLE_STYLE: &str = "width: 100%; border-collapse: collapse; margin: 12px 0;";
const TH_STYLE: &str = "padding: 8px 12px; border: 1px solid #d1d5db; background: #f9fafb; \
                        font-weight: 600; font-size: 14px;";
const TD_STYLE: &str = "padding: 8px 12px; border: 1px solid #d1d5db; font-size: 14px;";

const LINE_BREAK: &str = "<br>";

static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("valid bold pattern"));

/// Render blocks to an HTML fragment.
///
/// Every newline between two blocks becomes `<br>`, except the ones
/// touching a table: a table absorbs the newline before it and the one
/// after its last row.
pub fn render(blocks: &[Block<'_>]) -> String {
    let mut html = String::new();

    for (index, block) in blocks.iter().enumerate() {
        let after_table = index > 0 && blocks[index - 1].is_table();
        if index > 0 && !after_table && !block.is_table() {
            html.push_str(LINE_BREAK);
        }

        match block {
            Block::Heading { level, text } => html.push_str(&heading(*level, text)),
            Block::Table(rows) => html.push_str(&table(rows)),
            Block::Text(line) => html.push_str(&bold(line)),
        }
    }

    html
}

/// Replace `**x**` spans with `<strong>`. Unmatched markers stay literal.
pub fn bold(text: &str) -> String {
    BOLD.replace_all(text, r#"<strong style="font-weight: 600;">$1</strong>"#).into_owned()
}

fn heading(level: u8, text: &str) -> String {
    let style = match level {
        1 => H1_STYLE,
        2 => H2_STYLE,
        _ => H3_STYLE,
    };
    format!(r#"<h{level} style="{style}">{}</h{level}>"#, bold(text))
}

/// Render a table block. Separator rows are dropped; a block with nothing
/// left renders as an empty string.
fn table(rows: &[&str]) -> String {
    let rows: Vec<String> = rows
        .iter()
        .filter(|row| !row.contains("---"))
        .map(|row| table_row(&bold(row)))
        .collect();

    if rows.is_empty() {
        return String::new();
    }

    format!(r#"<table style="{TABLE_STYLE}">{}</table>"#, rows.concat())
}

fn table_row(row: &str) -> String {
    let (tag, style) = if is_header_row(row) { ("th", TH_STYLE) } else { ("td", TD_STYLE) };

    let cells: String = row
        .split('|')
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .map(|cell| format!(r#"<{tag} style="{style}">{cell}</{tag}>"#))
        .collect();

    format!("<tr>{cells}</tr>")
}

fn is_header_row(row: &str) -> bool {
    (row.contains("Name") && row.contains("Role"))
        || row.contains("Scoring Dimension")
        || row.contains("Score")
}
