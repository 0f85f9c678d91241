use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A 2D axis-aligned bounding box in image coordinates.
///
/// Image coordinates have the origin at the top-left corner with Y increasing
/// downward, so `min` is the top-left point and `max` the bottom-right point
/// of a well-formed box. Inverted boxes (`max` above or left of `min`) are
/// accepted as-is; nothing here reorders the corners.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bbox {
    /// The top-left point of the bounding box.
    #[serde(rename = "top_left")]
    pub min: Vec2,
    /// The bottom-right point of the bounding box.
    #[serde(rename = "bottom_right")]
    pub max: Vec2,
}

impl Bbox {
    /// Creates a new bounding box from its top-left and bottom-right points.
    ///
    /// # Example
    /// ```
    /// use glam::Vec2;
    /// use tablify_core::analysis::bbox::Bbox;
    /// let bbox = Bbox::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 5.0));
    /// assert_eq!(bbox.right(), 10);
    /// ```
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Creates a new bounding box from raw corner coordinates.
    ///
    /// # Example
    /// ```
    /// use tablify_core::analysis::bbox::Bbox;
    /// let bbox = Bbox::from_corners(1.0, 2.0, 6.0, 5.0);
    /// assert_eq!((bbox.left(), bbox.top(), bbox.right(), bbox.bottom()), (1, 2, 6, 5));
    /// ```
    pub fn from_corners(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self::new(Vec2::new(left, top), Vec2::new(right, bottom))
    }

    /// Top edge, truncated toward zero.
    ///
    /// The float to integer cast saturates: NaN maps to 0 and infinities clamp
    /// to the `i32` range, so degenerate geometry never panics.
    pub fn top(&self) -> i32 {
        self.min.y as i32
    }

    /// Left edge, truncated toward zero.
    pub fn left(&self) -> i32 {
        self.min.x as i32
    }

    /// Bottom edge, truncated toward zero.
    pub fn bottom(&self) -> i32 {
        self.max.y as i32
    }

    /// Right edge, truncated toward zero.
    pub fn right(&self) -> i32 {
        self.max.x as i32
    }

    /// Horizontal extent. Negative for a box inverted along X.
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Vertical extent. Negative for a box inverted along Y.
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Returns true if either extent is negative.
    ///
    /// # Example
    /// ```
    /// use tablify_core::analysis::bbox::Bbox;
    /// assert!(Bbox::from_corners(0.0, 10.0, 5.0, 0.0).is_inverted());
    /// assert!(!Bbox::from_corners(0.0, 0.0, 5.0, 10.0).is_inverted());
    /// ```
    pub fn is_inverted(&self) -> bool {
        self.width() < 0.0 || self.height() < 0.0
    }
}
