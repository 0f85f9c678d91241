//! Row and column inference for recognized text fragments.
//!
//! Both axes use the same 1-D interval sweep: fragments are ordered by their
//! leading edge, and a fragment joins the current band while its leading edge
//! does not pass the band's watermark (the furthest trailing edge seen so
//! far). A fragment starting beyond the watermark opens the next band.

use std::cmp::Ordering;

use tracing::*;

use crate::{
    analysis::bbox::Bbox,
    layout::element::{Fragment, LabeledFragment},
};

/// The axis a sweep clusters along.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// Clusters by vertical extent: `top` against the `bottom` watermark.
    Row,
    /// Clusters by horizontal extent: `left` against the `right` watermark.
    Column,
}

impl Axis {
    fn leading(self, bbox: &Bbox) -> i32 {
        match self {
            Axis::Row => bbox.top(),
            Axis::Column => bbox.left(),
        }
    }

    fn trailing(self, bbox: &Bbox) -> i32 {
        match self {
            Axis::Row => bbox.bottom(),
            Axis::Column => bbox.right(),
        }
    }

    fn cross_leading(self, bbox: &Bbox) -> i32 {
        match self {
            Axis::Row => bbox.left(),
            Axis::Column => bbox.top(),
        }
    }

    fn cross_trailing(self, bbox: &Bbox) -> i32 {
        match self {
            Axis::Row => bbox.right(),
            Axis::Column => bbox.bottom(),
        }
    }

    /// Sweep order: leading edge, then cross-axis leading edge.
    ///
    /// The remaining keys only make the order total so that shuffled input
    /// produces the same bands.
    pub(crate) fn compare(self, a: &Fragment, b: &Fragment) -> Ordering {
        let key = |f: &Fragment| {
            (
                self.leading(&f.bbox),
                self.cross_leading(&f.bbox),
                self.trailing(&f.bbox),
                self.cross_trailing(&f.bbox),
            )
        };
        key(a).cmp(&key(b)).then_with(|| a.text.cmp(&b.text))
    }
}

/// Band indices produced by one sweep.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AxisAssignment {
    /// 1-based band index for each input fragment, in input order.
    pub bands: Vec<usize>,
    /// Number of bands opened.
    pub count: usize,
}

/// Runs the interval sweep along `axis` over its own sorted copy of the input.
pub fn assign_axis(fragments: &[Fragment], axis: Axis) -> AxisAssignment {
    let mut order: Vec<usize> = (0..fragments.len()).collect();
    order.sort_by(|&a, &b| axis.compare(&fragments[a], &fragments[b]));

    let mut bands = vec![0; fragments.len()];
    let mut watermark: Option<i32> = None;
    let mut current = 0;

    for idx in order {
        let bbox = &fragments[idx].bbox;
        let leading = axis.leading(bbox);
        let trailing = axis.trailing(bbox);

        if watermark.is_none_or(|mark| leading > mark) {
            current += 1;
            trace!(?axis, band = current, leading, "open band");
        }
        bands[idx] = current;

        // Never retracts, so an inverted box only contributes its lesser extent.
        watermark = Some(watermark.map_or(trailing, |mark| mark.max(trailing)));
    }

    debug!(?axis, fragments = fragments.len(), bands = current, "sweep done");

    AxisAssignment {
        bands,
        count: current,
    }
}

/// Assigns every fragment a 1-based row and column.
///
/// Returns the labeled fragments in input order together with the row count.
/// Empty input yields `(vec![], 0)`.
///
/// Two fragments of one row whose boxes overlap horizontally land in the same
/// column band and so share a cell. That collision is resolved at render
/// time, where [`TableRenderer`](crate::render::table::TableRenderer) merges
/// their text into one cell.
pub fn assign_grid(fragments: &[Fragment]) -> (Vec<LabeledFragment>, usize) {
    let rows = assign_axis(fragments, Axis::Row);
    let columns = assign_axis(fragments, Axis::Column);

    let labeled = fragments
        .iter()
        .zip(rows.bands.iter().zip(columns.bands.iter()))
        .map(|(fragment, (&row, &column))| LabeledFragment::new(fragment.clone(), row, column))
        .collect();

    (labeled, rows.count)
}
