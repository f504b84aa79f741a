use std::path::Path;

use estrato_core::error::{ParseError, Result};
use estrato_core::high_level::{ParseOptions, parse_with};
use estrato_core::model::{ContentEntry, Grid, to_json_pretty};
use estrato_core::source::{Char, ContentExtractor, Flavor, ImageRegion, RawPage, TableEngine};

fn line(text: &str, top: f64, size: f64) -> Vec<Char> {
    text.chars()
        .map(|c| Char {
            text: c.to_string(),
            top,
            size,
        })
        .collect()
}

fn page_chars(lines: &[(&str, f64, f64)]) -> Vec<Char> {
    lines
        .iter()
        .flat_map(|&(text, top, size)| line(text, top, size))
        .collect()
}

fn grid(cells: &[&[&str]]) -> Grid {
    cells
        .iter()
        .map(|row| row.iter().map(|c| c.to_string()).collect())
        .collect()
}

struct FakeExtractor {
    pages: Vec<RawPage>,
    tables: Vec<Vec<Grid>>,
}

impl FakeExtractor {
    fn new(pages: Vec<RawPage>) -> Self {
        let tables = vec![Vec::new(); pages.len()];
        Self { pages, tables }
    }
}

impl ContentExtractor for FakeExtractor {
    fn page_count(&mut self) -> Result<usize> {
        Ok(self.pages.len())
    }

    fn page_content(&mut self, page_index: usize) -> Result<RawPage> {
        Ok(self.pages[page_index].clone())
    }

    fn page_tables(&mut self, page_index: usize) -> Result<Vec<Grid>> {
        Ok(self.tables[page_index].clone())
    }
}

struct StubEngine {
    grids: Vec<Grid>,
}

impl TableEngine for StubEngine {
    fn read_tables(&self, _path: &Path, _page_number: usize, _flavor: Flavor) -> Result<Vec<Grid>> {
        Ok(self.grids.clone())
    }
}

/// An existing file to parse; content is never read by the fakes.
fn existing_input() -> tempfile::NamedTempFile {
    tempfile::NamedTempFile::new().unwrap()
}

#[test]
fn end_to_end_page_ordering_and_merge() {
    let mut extractor = FakeExtractor::new(vec![RawPage {
        chars: page_chars(&[
            ("Revenue Overview", 40.0, 16.0),
            ("Total revenue was", 80.0, 10.0),
            ("1 234", 120.0, 10.0),
        ]),
        images: vec![ImageRegion {
            x0: 10.0,
            top: 60.5,
            x1: 110.0,
            bottom: 90.5,
        }],
    }]);
    extractor.tables[0] = vec![grid(&[&["A", "B"], &["1", "2"]])];

    let input = existing_input();
    let document = parse_with(input.path(), &mut extractor, None, &ParseOptions::default()).unwrap();

    assert_eq!(document.pages.len(), 1);
    let content = &document.pages[0].content;
    assert_eq!(content.len(), 4);

    match &content[0] {
        ContentEntry::Paragraph { text, section, .. } => {
            assert_eq!(text, "Revenue Overview");
            assert_eq!(section.as_deref(), Some("Revenue Overview"));
        }
        other => panic!("expected paragraph first, got {other:?}"),
    }
    match &content[1] {
        ContentEntry::Chart { top, section, .. } => {
            assert_eq!(*top, 60.5);
            assert_eq!(section.as_deref(), Some("Revenue Overview"));
        }
        other => panic!("expected chart second, got {other:?}"),
    }
    match &content[2] {
        ContentEntry::Paragraph { text, .. } => {
            assert_eq!(text, "Total revenue was 1 234");
        }
        other => panic!("expected paragraph third, got {other:?}"),
    }
    match &content[3] {
        ContentEntry::Table {
            table_data,
            top,
            section,
            ..
        } => {
            assert_eq!(table_data, &grid(&[&["A", "B"], &["1", "2"]]));
            assert_eq!(*top, None);
            assert_eq!(section.as_deref(), Some("Revenue Overview"));
        }
        other => panic!("expected table last, got {other:?}"),
    }
}

#[test]
fn entries_without_position_sort_after_positioned_ones() {
    let mut extractor = FakeExtractor::new(vec![RawPage {
        chars: page_chars(&[("Alpha", 300.0, 10.0), ("Beta", 50.0, 10.0)]),
        images: vec![ImageRegion {
            x0: 0.0,
            top: 120.0,
            x1: 10.0,
            bottom: 130.0,
        }],
    }]);
    extractor.tables[0] = vec![grid(&[&["t1"]]), grid(&[&["t2"]])];

    let input = existing_input();
    let document = parse_with(input.path(), &mut extractor, None, &ParseOptions::default()).unwrap();

    let tops: Vec<Option<f64>> = document.pages[0].content.iter().map(|e| e.top()).collect();
    assert_eq!(
        tops,
        vec![Some(50.0), Some(120.0), Some(300.0), None, None]
    );

    // The two tables keep their append order.
    match (&document.pages[0].content[3], &document.pages[0].content[4]) {
        (
            ContentEntry::Table { table_data: first, .. },
            ContentEntry::Table { table_data: second, .. },
        ) => {
            assert_eq!(first, &grid(&[&["t1"]]));
            assert_eq!(second, &grid(&[&["t2"]]));
        }
        other => panic!("expected two tables at the end, got {other:?}"),
    }
}

#[test]
fn section_context_resets_between_pages() {
    let mut extractor = FakeExtractor::new(vec![
        RawPage {
            chars: page_chars(&[
                ("Part One", 40.0, 16.0),
                ("First page body.", 80.0, 10.0),
            ]),
            images: Vec::new(),
        },
        RawPage {
            chars: page_chars(&[("Second page body.", 40.0, 10.0)]),
            images: Vec::new(),
        },
    ]);

    let input = existing_input();
    let document = parse_with(input.path(), &mut extractor, None, &ParseOptions::default()).unwrap();

    assert_eq!(document.pages[0].page_number, 1);
    assert_eq!(document.pages[1].page_number, 2);

    match &document.pages[1].content[0] {
        ContentEntry::Paragraph { section, .. } => assert_eq!(section, &None),
        other => panic!("expected paragraph, got {other:?}"),
    }
}

#[test]
fn engine_tables_inherit_the_page_final_context() {
    // The heading sits at the bottom of the page, yet the table still gets
    // tagged with it: tables join after all text lines are processed.
    let mut extractor = FakeExtractor::new(vec![RawPage {
        chars: page_chars(&[
            ("Body above the table.", 40.0, 10.0),
            ("Closing Remarks", 200.0, 16.0),
        ]),
        images: Vec::new(),
    }]);
    extractor.tables[0] = Vec::new();
    let engine = StubEngine {
        grids: vec![grid(&[&["k", "v"]])],
    };

    let input = existing_input();
    let document = parse_with(
        input.path(),
        &mut extractor,
        Some(&engine),
        &ParseOptions::default(),
    )
    .unwrap();

    match document.pages[0].content.last().unwrap() {
        ContentEntry::Table { section, .. } => {
            assert_eq!(section.as_deref(), Some("Closing Remarks"));
        }
        other => panic!("expected table last, got {other:?}"),
    }
}

#[test]
fn missing_input_fails_before_any_page_is_read() {
    #[derive(Default)]
    struct CountingExtractor {
        calls: usize,
    }

    impl ContentExtractor for CountingExtractor {
        fn page_count(&mut self) -> Result<usize> {
            self.calls += 1;
            Ok(0)
        }
        fn page_content(&mut self, _page_index: usize) -> Result<RawPage> {
            self.calls += 1;
            Ok(RawPage::default())
        }
        fn page_tables(&mut self, _page_index: usize) -> Result<Vec<Grid>> {
            self.calls += 1;
            Ok(Vec::new())
        }
    }

    let mut extractor = CountingExtractor::default();
    let err = parse_with(
        Path::new("/definitely/not/here.pdf"),
        &mut extractor,
        None,
        &ParseOptions::default(),
    )
    .unwrap_err();

    assert!(matches!(err, ParseError::InputNotFound(_)));
    assert_eq!(extractor.calls, 0);
}

#[test]
fn extractor_failures_abort_the_parse() {
    struct BrokenExtractor;

    impl ContentExtractor for BrokenExtractor {
        fn page_count(&mut self) -> Result<usize> {
            Ok(1)
        }
        fn page_content(&mut self, _page_index: usize) -> Result<RawPage> {
            Err(ParseError::Extraction("damaged content stream".to_string()))
        }
        fn page_tables(&mut self, _page_index: usize) -> Result<Vec<Grid>> {
            Ok(Vec::new())
        }
    }

    let input = existing_input();
    let err = parse_with(
        input.path(),
        &mut BrokenExtractor,
        None,
        &ParseOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, ParseError::Extraction(_)));
}

#[test]
fn json_output_uses_four_space_indent_and_keeps_utf8() {
    let mut extractor = FakeExtractor::new(vec![RawPage {
        chars: page_chars(&[("Hola región", 100.2, 10.0)]),
        images: Vec::new(),
    }]);

    let input = existing_input();
    let document = parse_with(input.path(), &mut extractor, None, &ParseOptions::default()).unwrap();
    let json = to_json_pretty(&document).unwrap();

    let expected = r#"{
    "pages": [
        {
            "page_number": 1,
            "content": [
                {
                    "type": "paragraph",
                    "section": null,
                    "sub_section": null,
                    "text": "Hola región",
                    "top": 100.0
                }
            ]
        }
    ]
}"#;
    assert_eq!(json, expected);
}

#[test]
fn table_entries_serialize_with_null_top() {
    let mut extractor = FakeExtractor::new(vec![RawPage::default()]);
    extractor.tables[0] = vec![grid(&[&["Item", "Value"], &["Total", "42"]])];

    let input = existing_input();
    let document = parse_with(input.path(), &mut extractor, None, &ParseOptions::default()).unwrap();
    let json = to_json_pretty(&document).unwrap();

    let expected = r#"{
    "pages": [
        {
            "page_number": 1,
            "content": [
                {
                    "type": "table",
                    "section": null,
                    "sub_section": null,
                    "table_data": [
                        [
                            "Item",
                            "Value"
                        ],
                        [
                            "Total",
                            "42"
                        ]
                    ],
                    "top": null
                }
            ]
        }
    ]
}"#;
    assert_eq!(json, expected);
}
