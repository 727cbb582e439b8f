//! Markdown-to-HTML preview.
//!
//! A deliberately small converter for the documents this crate generates:
//! headings up to level 3, `**bold**`, pipe tables and line breaks. Output is
//! an HTML fragment with inline styles. Text is not escaped, so only feed it
//! self-authored content.

pub mod renderer;
pub mod tokenizer;

pub use renderer::bold;
pub use tokenizer::{tokenize, Block};

/// Convert markdown to an HTML fragment.
pub fn markdown_to_html(markdown: &str) -> String {
    renderer::render(&tokenize(markdown))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::phase;
    use crate::markdown::{generate_phase_markdown, PhaseExportRecord};

    #[test]
    fn test_generated_document_previews() {
        let form = [("useCaseName", "Churn"), ("ownerName", "Ada")].into_iter().collect();
        let md = generate_phase_markdown(&PhaseExportRecord::new(phase(1).unwrap(), form));
        let html = markdown_to_html(&md);

        assert!(html.starts_with("<h1 "));
        assert!(html.contains(">Phase 1: Discovery</h1>"));
        assert!(html.contains(">Use case name</h3><br>Churn<br>"));
        assert_eq!(html.matches("<table ").count(), 2);
        assert!(html.contains(">Involvement & Responsibilities</th>"));
        assert!(html.contains(">Ada</td>"));
        assert!(!html.contains("---"));
        assert!(!html.contains('\n'));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(markdown_to_html(""), "");
    }
}
