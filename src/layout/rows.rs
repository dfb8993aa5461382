//! Row clustering.
//!
//! Cards laid out by normal flow wrap into visual rows. [`cluster_rows`]
//! recovers that structure from freshly measured boxes by comparing top edges
//! against a tolerance. It is a pure function of the current layout, rerun on
//! every pointer move during a drag; nothing here is persisted between moves.

use std::ops::Range;

use crate::utils::Rect;

/// A run of boxes sharing an approximate top edge.
///
/// Rows are contiguous index ranges into the measured sequence, in
/// top-to-bottom then left-to-right source order. `top` and `bottom` are the
/// edges of the row's *first* box; insertion targeting deliberately uses the
/// first box only.
#[derive(Debug, Clone, PartialEq)]
pub struct RowBand {
    /// First member index.
    pub start: usize,
    /// One past the last member index.
    pub end: usize,
    /// Top edge of the first member.
    pub top: f64,
    /// Bottom edge of the first member.
    pub bottom: f64,
}

impl RowBand {
    pub fn indices(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Groups laid-out boxes into visual rows.
///
/// A single linear pass: a box joins the current row when its top edge is
/// within `tolerance` of the *previous* box's top, and starts a new row
/// otherwise. The comparison is against the running previous top, not a fixed
/// row reference, so a slowly drifting sequence stays in one row. The input
/// must already be in source (top-to-bottom, left-to-right) order; the
/// function never sorts. Zero boxes yield zero rows.
pub fn cluster_rows(boxes: &[Rect], tolerance: f64) -> Vec<RowBand> {
    let mut rows: Vec<RowBand> = Vec::new();
    let mut last_top = None;

    for (i, rect) in boxes.iter().enumerate() {
        match (last_top, rows.last_mut()) {
            (Some(prev), Some(row)) if f64::abs(rect.top() - prev) < tolerance => {
                row.end = i + 1;
            }
            _ => rows.push(RowBand {
                start: i,
                end: i + 1,
                top: rect.top(),
                bottom: rect.bottom(),
            }),
        }
        last_top = Some(rect.top());
    }

    rows
}
