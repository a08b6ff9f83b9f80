// src/geometry.rs

//! Integer grid geometry: `Point`, half-open `Rect` and the `Orientation` axis.
//!
//! Coordinates follow image conventions: x grows to the right, y grows
//! downward. A cell at `(x, y)` covers `[x, x + 1) × [y, y + 1)`, so a `Rect`
//! holding exactly that cell is `(x, y, x + 1, y + 1)`.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Neg, Sub};

/// An axis of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A signed grid coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Vector add.
    pub const fn translate(self, by: Point) -> Point {
        Point::new(self.x + by.x, self.y + by.y)
    }

    /// Component along `orientation`.
    pub const fn along(self, orientation: Orientation) -> i32 {
        match orientation {
            Orientation::Horizontal => self.x,
            Orientation::Vertical => self.y,
        }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        self.translate(rhs)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Point::new(x, y)
    }
}

/// Axis-aligned half-open rectangle.
///
/// Always normalized: `left <= right` and `top <= bottom`. A rect with zero
/// width or height is empty and acts as the identity for [`Rect::union`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    /// Builds a rect from bounds, swapping pairs given in the wrong order.
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left: left.min(right),
            top: top.min(bottom),
            right: left.max(right),
            bottom: top.max(bottom),
        }
    }

    /// Rect spanning two corner points.
    pub fn from_points(a: Point, b: Point) -> Self {
        Rect::new(a.x, a.y, b.x, b.y)
    }

    /// The rect covering the single cell at `p`.
    pub fn cell(p: Point) -> Self {
        Rect::new(p.x, p.y, p.x + 1, p.y + 1)
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Area in cells.
    pub fn size(&self) -> i64 {
        i64::from(self.width()) * i64::from(self.height())
    }

    /// Top-left corner.
    pub fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    pub fn translate(&self, by: Point) -> Rect {
        Rect {
            left: self.left + by.x,
            top: self.top + by.y,
            right: self.right + by.x,
            bottom: self.bottom + by.y,
        }
    }

    /// Smallest rect covering both. Empty rects do not contribute; the union
    /// of two empty rects is `Rect::default()`.
    pub fn union(&self, other: &Rect) -> Rect {
        if self.is_empty() && other.is_empty() {
            return Rect::default();
        }
        if other.is_empty() {
            return *self;
        }
        if self.is_empty() {
            return *other;
        }
        Rect {
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }

    /// Widens the rect along one axis so it covers the inclusive cell range
    /// `min..=max`. The other axis is left untouched.
    pub fn extend_axis(&self, orientation: Orientation, min: i32, max: i32) -> Rect {
        let mut out = *self;
        match orientation {
            Orientation::Horizontal => {
                out.left = out.left.min(min);
                out.right = out.right.max(max + 1);
            }
            Orientation::Vertical => {
                out.top = out.top.min(min);
                out.bottom = out.bottom.max(max + 1);
            }
        }
        out
    }

    /// Multiplies every bound by `factor`; maps cell units to pixels.
    pub fn scale(&self, factor: i32) -> Rect {
        Rect::new(
            self.left * factor,
            self.top * factor,
            self.right * factor,
            self.bottom * factor,
        )
    }

    /// True when the cell at `p` lies inside.
    pub fn contains_point(&self, p: Point) -> bool {
        p.x >= self.left && p.x < self.right && p.y >= self.top && p.y < self.bottom
    }

    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.is_empty()
            || (other.left >= self.left
                && other.right <= self.right
                && other.top >= self.top
                && other.bottom <= self.bottom)
    }

    /// True when the two rects share at least one cell.
    pub fn intersects(&self, other: &Rect) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.left < other.right
            && other.left < self.right
            && self.top < other.bottom
            && other.top < self.bottom
    }

    /// `(left, top, right, bottom)`.
    pub fn as_tuple(&self) -> (i32, i32, i32, i32) {
        (self.left, self.top, self.right, self.bottom)
    }

    /// Tight bounding box of a set of cells; empty at the origin when there
    /// are none.
    pub fn bounding<I: IntoIterator<Item = Point>>(cells: I) -> Rect {
        cells
            .into_iter()
            .fold(Rect::default(), |acc, p| acc.union(&Rect::cell(p)))
    }
}
