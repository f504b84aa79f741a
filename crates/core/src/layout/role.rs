//! Heading classification from dominant glyph size.

use std::collections::BTreeMap;

use crate::source::Char;

/// Structural role of a text line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Section,
    SubSection,
    Paragraph,
}

/// Size thresholds for heading classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoleConfig {
    /// A dominant size at or above this makes the line a section heading.
    pub section_min_size: f64,
    /// A dominant size at or above this (but below `section_min_size`)
    /// makes the line a sub-section heading.
    pub subsection_min_size: f64,
}

impl Default for RoleConfig {
    fn default() -> Self {
        Self {
            section_min_size: 14.0,
            subsection_min_size: 12.0,
        }
    }
}

/// Classify a line from the size most of its glyphs share.
///
/// Sizes are rounded to whole points and counted; the size with the highest
/// count is dominant. Counts are enumerated in ascending size order and a
/// tie keeps the smaller size, so repeated runs give identical output. A
/// line with no glyphs is a paragraph.
pub fn classify(chars: &[Char], config: &RoleConfig) -> Role {
    let mut counts: BTreeMap<i64, usize> = BTreeMap::new();
    for ch in chars {
        *counts.entry(ch.size.round() as i64).or_default() += 1;
    }

    let mut dominant: Option<(i64, usize)> = None;
    for (size, count) in counts {
        match dominant {
            Some((_, best)) if count <= best => {}
            _ => dominant = Some((size, count)),
        }
    }

    match dominant {
        Some((size, _)) if size as f64 >= config.section_min_size => Role::Section,
        Some((size, _)) if size as f64 >= config.subsection_min_size => Role::SubSection,
        _ => Role::Paragraph,
    }
}
