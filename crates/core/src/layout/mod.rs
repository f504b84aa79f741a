//! Text layout reconstruction: line assembly, heading classification,
//! section tracking and the paragraph pass.

mod line;
mod role;
mod section;

pub use line::{Line, assemble_lines, is_number_line, is_running_banner};
pub use role::{Role, RoleConfig, classify};
pub use section::SectionContext;

use crate::model::ContentEntry;
use crate::source::Char;

/// Run the paragraph pass for one page: assemble lines, classify headings,
/// track section context, and fold numeric continuation lines into the
/// preceding paragraph.
///
/// Returns the paragraph entries in line order together with the section
/// context reached after the last line; tables and charts appended later
/// inherit that final context.
pub fn collect_paragraphs(chars: &[Char], config: &RoleConfig) -> (Vec<ContentEntry>, SectionContext) {
    let mut context = SectionContext::default();
    let mut entries: Vec<ContentEntry> = Vec::new();

    for line in assemble_lines(chars) {
        let role = classify(&line.chars, config);
        context.observe(role, &line.text);

        if is_number_line(&line.text) {
            // Numeric lines extend the last paragraph actually emitted, so
            // a run of them all lands in the same entry.
            if let Some(ContentEntry::Paragraph { text, .. }) = entries.last_mut() {
                text.push(' ');
                text.push_str(&line.text);
                continue;
            }
        }

        entries.push(ContentEntry::Paragraph {
            section: context.section(),
            sub_section: context.sub_section(),
            text: line.text,
            top: line.top as f64,
        });
    }

    (entries, context)
}
