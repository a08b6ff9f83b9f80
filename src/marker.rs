// src/marker.rs

//! Marker classes of grid positions and the sub-pixel mask each one draws.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of a grid position.
///
/// In a geometry table the marker is the position's class; on a lit cell it
/// is the variant the encoder picked, which decides the pixels drawn inside
/// the cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Marker {
    /// `P`: plain position, fills the whole cell.
    #[serde(rename = "P")]
    Point,
    /// `T`: tangent position on a central axis, drawn as a diamond touching
    /// the cell's edge midpoints.
    #[serde(rename = "T")]
    Tangent,
    /// `L`: corner on the `x == -y` diagonal, drawn as the lower-left triangle.
    #[serde(rename = "L")]
    Left,
    /// `R`: corner on the `x == y` diagonal, drawn as the lower-right triangle.
    #[serde(rename = "R")]
    Right,
}

impl Marker {
    /// Single-letter label.
    pub const fn label(self) -> char {
        match self {
            Marker::Point => 'P',
            Marker::Tangent => 'T',
            Marker::Left => 'L',
            Marker::Right => 'R',
        }
    }

    pub fn from_label(label: char) -> Option<Self> {
        match label {
            'P' => Some(Marker::Point),
            'T' => Some(Marker::Tangent),
            'L' => Some(Marker::Left),
            'R' => Some(Marker::Right),
            _ => None,
        }
    }

    /// Variants a position of this class can be lit with. A digit `d > 0`
    /// read for the position selects `variants()[d - 1]`.
    pub const fn variants(self) -> &'static [Marker] {
        match self {
            Marker::Point => &[Marker::Point],
            Marker::Tangent => &[Marker::Point, Marker::Tangent],
            Marker::Left => &[Marker::Point, Marker::Left],
            Marker::Right => &[Marker::Point, Marker::Right],
        }
    }

    /// Digit radix for a position of this class: every variant plus "dark".
    pub const fn radix(self) -> u32 {
        self.variants().len() as u32 + 1
    }

    /// Whether local pixel `(u, v)` of a `cell_size`-wide cell is drawn.
    ///
    /// `u` runs right and `v` runs down, both in `0..cell_size`. With a cell
    /// size of one every marker lights its single pixel.
    pub fn covers(self, u: u32, v: u32, cell_size: u32) -> bool {
        debug_assert!(u < cell_size && v < cell_size);
        match self {
            Marker::Point => true,
            Marker::Tangent => {
                let s = i64::from(cell_size);
                let du = (2 * i64::from(u) + 1 - s).abs();
                let dv = (2 * i64::from(v) + 1 - s).abs();
                du + dv <= s
            }
            Marker::Left => u <= v,
            Marker::Right => u + v + 1 >= cell_size,
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
