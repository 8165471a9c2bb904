// src/report/text.rs
//! Plain-text rendering of a display tree for terminal output

use super::display::{DisplayTree, SectionBody};

pub fn render_text(tree: &DisplayTree) -> String {
    let mut out = format!("{}\n{}\n", tree.title, tree.subtitle);

    for section in &tree.sections {
        out.push_str(&format!("\n{}\n", section.heading));
        match &section.body {
            SectionBody::Facts(facts) => {
                for fact in facts {
                    out.push_str(&format!("  {}: {}\n", fact.label, fact.value));
                }
            }
            SectionBody::Paragraph(text) => out.push_str(&format!("  {}\n", text)),
            SectionBody::List(items) => {
                for item in items {
                    out.push_str(&format!("  • {}\n", item));
                }
            }
        }
    }
    out
}
