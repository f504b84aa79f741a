//! Chart entries from page image regions.

use indexmap::IndexSet;
use ordered_float::OrderedFloat;

use crate::layout::SectionContext;
use crate::model::{BBox, ContentEntry};
use crate::source::ImageRegion;

type BBoxKey = (
    OrderedFloat<f64>,
    OrderedFloat<f64>,
    OrderedFloat<f64>,
    OrderedFloat<f64>,
);

/// Round to one decimal place for duplicate detection.
fn round1(v: f64) -> OrderedFloat<f64> {
    OrderedFloat((v * 10.0).round() / 10.0)
}

fn bbox_key(img: &ImageRegion) -> BBoxKey {
    (
        round1(img.x0),
        round1(img.top),
        round1(img.x1),
        round1(img.bottom),
    )
}

/// Build one chart entry per image region, dropping regions whose bounding
/// box rounds to one already seen. The first occurrence wins.
pub fn collect_charts(
    images: &[ImageRegion],
    page_number: usize,
    context: &SectionContext,
) -> Vec<ContentEntry> {
    let mut seen: IndexSet<BBoxKey> = IndexSet::new();
    let mut charts = Vec::new();

    for img in images {
        if !seen.insert(bbox_key(img)) {
            continue;
        }
        charts.push(ContentEntry::Chart {
            section: context.section(),
            sub_section: context.sub_section(),
            description: format!("Chart or image on page {page_number}"),
            bbox: BBox {
                x0: img.x0,
                top: img.top,
                x1: img.x1,
                bottom: img.bottom,
            },
            top: img.top,
        });
    }

    charts
}
