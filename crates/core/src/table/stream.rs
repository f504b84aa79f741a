//! Whitespace-based table detection (the "stream" flavor).
//!
//! Finds column boundaries at large horizontal gaps within each text row,
//! then groups consecutive rows whose boundaries line up. A run of aligned
//! rows becomes one table; cell text is split at the boundary midpoints.

use itertools::Itertools;

use crate::model::Grid;

/// A glyph with horizontal geometry.
#[derive(Debug, Clone)]
pub struct Glyph {
    pub text: char,
    /// Left edge, in points.
    pub x: f64,
    pub width: f64,
}

/// One text row of a page, top to bottom, with glyphs in reading order.
#[derive(Debug, Clone)]
pub struct GlyphRow {
    pub top: f64,
    pub glyphs: Vec<Glyph>,
}

/// Tuning for stream-flavor detection.
#[derive(Debug, Clone, Copy)]
pub struct StreamSettings {
    /// Minimum consecutive aligned rows to call a table.
    pub min_rows: usize,
    /// Tolerance for matching column boundaries between rows, in points.
    pub boundary_tolerance: f64,
    /// A gap wider than this multiple of the row's mean glyph width starts
    /// a new column.
    pub gap_ratio: f64,
    /// A gap wider than this multiple of the row's mean glyph width becomes
    /// a space inside a cell.
    pub space_ratio: f64,
}

impl Default for StreamSettings {
    fn default() -> Self {
        Self {
            min_rows: 3,
            boundary_tolerance: 5.0,
            gap_ratio: 2.0,
            space_ratio: 0.3,
        }
    }
}

/// Detect tables across a page's rows. Rows must already be in
/// top-to-bottom order.
pub fn detect_tables(rows: &[GlyphRow], settings: &StreamSettings) -> Vec<Grid> {
    let boundaries: Vec<Vec<f64>> = rows
        .iter()
        .map(|row| column_boundaries(row, settings))
        .collect();

    let mut grids = Vec::new();
    let mut start = 0;
    while start < rows.len() {
        let mut end = start + 1;
        while end < rows.len()
            && aligned(&boundaries[start], &boundaries[end], settings.boundary_tolerance)
        {
            end += 1;
        }

        if end - start >= settings.min_rows && !boundaries[start].is_empty() {
            let grid: Grid = rows[start..end]
                .iter()
                .map(|row| split_row(row, &boundaries[start], settings))
                .collect();
            grids.push(grid);
        }

        start = end;
    }

    grids
}

fn mean_glyph_width(row: &GlyphRow) -> f64 {
    row.glyphs.iter().map(|g| g.width).sum::<f64>() / row.glyphs.len() as f64
}

/// X positions splitting a row into columns: the midpoints of gaps wider
/// than `gap_ratio` times the row's mean glyph width.
fn column_boundaries(row: &GlyphRow, settings: &StreamSettings) -> Vec<f64> {
    if row.glyphs.len() < 2 {
        return Vec::new();
    }
    let threshold = mean_glyph_width(row) * settings.gap_ratio;

    let mut boundaries = Vec::new();
    for (left, right) in row.glyphs.iter().tuple_windows() {
        let right_edge = left.x + left.width;
        let gap = right.x - right_edge;
        if gap > threshold {
            boundaries.push(right_edge + gap / 2.0);
        }
    }
    boundaries
}

fn aligned(a: &[f64], b: &[f64], tolerance: f64) -> bool {
    a.len() == b.len() && !a.is_empty() && a.iter().zip(b).all(|(x, y)| (x - y).abs() < tolerance)
}

/// Distribute a row's glyphs into cells, inserting spaces at word gaps.
fn split_row(row: &GlyphRow, boundaries: &[f64], settings: &StreamSettings) -> Vec<String> {
    let space_threshold = mean_glyph_width(row) * settings.space_ratio;
    let mut cells = vec![String::new(); boundaries.len() + 1];

    // Previous glyph's column and right edge.
    let mut previous: Option<(usize, f64)> = None;
    for glyph in &row.glyphs {
        let column = boundaries
            .iter()
            .position(|&b| glyph.x < b)
            .unwrap_or(boundaries.len());
        if let Some((prev_column, right_edge)) = previous {
            if prev_column == column
                && glyph.x - right_edge > space_threshold
                && !cells[column].is_empty()
            {
                cells[column].push(' ');
            }
        }
        cells[column].push(glyph.text);
        previous = Some((column, glyph.x + glyph.width));
    }

    cells.iter().map(|cell| cell.trim().to_string()).collect()
}
