use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::analysis::bbox::Bbox;

/// A recognized text span with its bounding box.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Fragment {
    /// Recognized text. May be empty.
    pub text: String,
    #[serde(flatten)]
    pub bbox: Bbox,
}

impl Fragment {
    pub fn new(text: impl Into<String>, top_left: Vec2, bottom_right: Vec2) -> Self {
        Self {
            text: text.into(),
            bbox: Bbox::new(top_left, bottom_right),
        }
    }

    pub fn top(&self) -> i32 {
        self.bbox.top()
    }

    pub fn left(&self) -> i32 {
        self.bbox.left()
    }

    pub fn bottom(&self) -> i32 {
        self.bbox.bottom()
    }

    pub fn right(&self) -> i32 {
        self.bbox.right()
    }
}

/// A fragment with its 1-based grid position.
///
/// Only the grid assigner creates these, so `row` and `column` are always at
/// least 1.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LabeledFragment {
    #[serde(flatten)]
    fragment: Fragment,
    row: usize,
    column: usize,
}

impl LabeledFragment {
    pub(crate) fn new(fragment: Fragment, row: usize, column: usize) -> Self {
        Self {
            fragment,
            row,
            column,
        }
    }

    pub fn fragment(&self) -> &Fragment {
        &self.fragment
    }

    pub fn text(&self) -> &str {
        &self.fragment.text
    }

    pub fn bbox(&self) -> &Bbox {
        &self.fragment.bbox
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn column(&self) -> usize {
        self.column
    }
}

impl fmt::Display for LabeledFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, R: {}  C: {})",
            self.text(),
            self.bbox().min,
            self.bbox().max,
            self.row,
            self.column
        )
    }
}
