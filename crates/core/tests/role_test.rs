use estrato_core::layout::{Role, RoleConfig, classify};
use estrato_core::source::Char;

fn sized_chars(sizes: &[f64]) -> Vec<Char> {
    sizes
        .iter()
        .map(|&size| Char {
            text: "x".to_string(),
            top: 0.0,
            size,
        })
        .collect()
}

#[test]
fn dominant_size_decides_role() {
    let config = RoleConfig::default();
    assert_eq!(classify(&sized_chars(&[16.0, 16.0, 10.0]), &config), Role::Section);
    assert_eq!(classify(&sized_chars(&[12.0, 12.0, 10.0]), &config), Role::SubSection);
    assert_eq!(classify(&sized_chars(&[10.0, 10.0, 16.0]), &config), Role::Paragraph);
}

#[test]
fn sizes_are_rounded_before_comparison() {
    let config = RoleConfig::default();
    // 13.6 rounds to 14: section.
    assert_eq!(classify(&sized_chars(&[13.6]), &config), Role::Section);
    // 11.5 rounds to 12: sub-section.
    assert_eq!(classify(&sized_chars(&[11.5]), &config), Role::SubSection);
    // 11.4 rounds to 11: paragraph.
    assert_eq!(classify(&sized_chars(&[11.4]), &config), Role::Paragraph);
}

#[test]
fn ties_keep_the_smaller_size() {
    let config = RoleConfig::default();
    // One glyph at 12, one at 14: the tie resolves to 12.
    assert_eq!(classify(&sized_chars(&[14.0, 12.0]), &config), Role::SubSection);
    assert_eq!(classify(&sized_chars(&[12.0, 14.0]), &config), Role::SubSection);
}

#[test]
fn classification_is_deterministic() {
    let config = RoleConfig::default();
    let chars = sized_chars(&[10.0, 14.0, 12.0, 14.0, 12.0, 10.0, 11.0]);
    let first = classify(&chars, &config);
    for _ in 0..10 {
        assert_eq!(classify(&chars, &config), first);
    }
}

#[test]
fn empty_line_is_a_paragraph() {
    assert_eq!(classify(&[], &RoleConfig::default()), Role::Paragraph);
}

#[test]
fn thresholds_are_configurable() {
    let config = RoleConfig {
        section_min_size: 20.0,
        subsection_min_size: 16.0,
    };
    assert_eq!(classify(&sized_chars(&[16.0]), &config), Role::SubSection);
    assert_eq!(classify(&sized_chars(&[14.0]), &config), Role::Paragraph);
    assert_eq!(classify(&sized_chars(&[22.0]), &config), Role::Section);
}
