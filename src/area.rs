// src/area.rs

//! Area compositor: places encoded glyphs into one coordinate space.
//!
//! An `Area` starts from its first glyph, untranslated, so that glyph's local
//! coordinates become the area's global ones. Every later item is attached to
//! one side of the current `base_rect`:
//!
//! ```text
//!   Right: offset = (base.right + spacing - item.left,  pivot.y)
//!   Left:  offset = (base.left - spacing - item.right,  pivot.y)
//!   Down:  offset = (pivot.x,  base.bottom + spacing - item.top)
//!   Up:    offset = (pivot.x,  base.top - spacing - item.bottom)
//! ```
//!
//! The pivot is the previous item's offset. Computing a placement
//! ([`Area::plan`]) is separate from applying it ([`Area::commit`]), and both
//! hand back the [`Placement`] so callers can follow the state step by step.

use crate::config::{Direction, SealConfig};
use crate::encoder::EncodedBitmap;
use crate::error::SealError;
use crate::geometry::{Point, Rect};
use crate::marker::Marker;
use crate::table;
use log::{debug, trace};

/// Where an item lands: its translation and its rect in area coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub offset: Point,
    pub rect: Rect,
}

/// A glyph and the offset it was placed at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedBitmap {
    pub bitmap: EncodedBitmap,
    pub offset: Point,
}

impl PlacedBitmap {
    /// The glyph's rect in area coordinates.
    pub fn rect(&self) -> Rect {
        self.bitmap.rect().translate(self.offset)
    }
}

/// The rect a glyph occupies in a layout. A blank glyph still takes its
/// centre cell.
fn footprint(bitmap: &EncodedBitmap) -> Rect {
    if bitmap.is_blank() {
        Rect::cell(Point::ORIGIN)
    } else {
        bitmap.rect()
    }
}

/// Composition state for one rendering job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Area {
    base_rect: Rect,
    pivot: Point,
    items: Vec<PlacedBitmap>,
}

impl Area {
    /// Starts an area from its first glyph.
    ///
    /// The base rect is the glyph's footprint widened along the column axis to
    /// the glyph level's table extent, so a sparse or blank first glyph still
    /// reserves a full footprint.
    pub fn new(first: EncodedBitmap, column_direction: Direction) -> Result<Self, SealError> {
        let orientation = column_direction.orientation();
        let (min, max) = table::limit(first.level(), orientation)?;
        let base_rect = footprint(&first).extend_axis(orientation, min, max);
        debug!(
            "area: first glyph {:?} reserves {:?}",
            first.rect().as_tuple(),
            base_rect.as_tuple()
        );
        Ok(Area {
            base_rect,
            pivot: Point::ORIGIN,
            items: vec![PlacedBitmap {
                bitmap: first,
                offset: Point::ORIGIN,
            }],
        })
    }

    /// Places every glyph of `items` in a row along the configured column
    /// direction.
    pub fn compose<I>(items: I, conf: &SealConfig) -> Result<Self, SealError>
    where
        I: IntoIterator<Item = EncodedBitmap>,
    {
        let mut items = items.into_iter();
        let first = items.next().ok_or(SealError::EmptyComposition)?;
        let mut area = Area::new(first, conf.column_direction)?;
        for item in items {
            area.place(item, conf.column_direction, conf.spacing);
        }
        Ok(area)
    }

    /// Stacks finished rows along `row_direction`, aligning every row with
    /// the first one.
    pub fn stack<I>(rows: I, row_direction: Direction, spacing: i32) -> Result<Self, SealError>
    where
        I: IntoIterator<Item = Area>,
    {
        let mut rows = rows.into_iter();
        let mut area = rows.next().ok_or(SealError::EmptyComposition)?;
        area.pivot = Point::ORIGIN;
        for row in rows {
            area.join(row, row_direction, spacing);
        }
        Ok(area)
    }

    /// Computes where an item with local rect `rect` would land. Pure.
    pub fn plan(&self, rect: Rect, join_dir: Direction, spacing: i32) -> Placement {
        let base = self.base_rect;
        let pivot = self.pivot;
        let offset = match join_dir {
            Direction::Right => Point::new(base.right + spacing - rect.left, pivot.y),
            Direction::Left => Point::new(base.left - spacing - rect.right, pivot.y),
            Direction::Down => Point::new(pivot.x, base.bottom + spacing - rect.top),
            Direction::Up => Point::new(pivot.x, base.top - spacing - rect.bottom),
        };
        Placement {
            offset,
            rect: rect.translate(offset),
        }
    }

    /// Adds `bitmap` at `placement`, growing the base rect and moving the
    /// pivot to the placement's offset.
    pub fn commit(&mut self, bitmap: EncodedBitmap, placement: Placement) -> Placement {
        self.grow(placement);
        self.items.push(PlacedBitmap {
            bitmap,
            offset: placement.offset,
        });
        placement
    }

    /// Attaches `item` on the `join_dir` side.
    pub fn place(&mut self, item: EncodedBitmap, join_dir: Direction, spacing: i32) -> Placement {
        let placement = self.plan(footprint(&item), join_dir, spacing);
        trace!(
            "area: value {} joins {:?} at {:?}",
            item.value(),
            join_dir,
            placement.offset
        );
        self.commit(item, placement)
    }

    /// Attaches a whole area as one item, keeping its inner layout.
    pub fn join(&mut self, other: Area, join_dir: Direction, spacing: i32) -> Placement {
        let placement = self.plan(other.base_rect, join_dir, spacing);
        self.grow(placement);
        self.items.extend(other.items.into_iter().map(|mut placed| {
            placed.offset = placed.offset + placement.offset;
            placed
        }));
        placement
    }

    fn grow(&mut self, placement: Placement) {
        self.base_rect = self.base_rect.union(&placement.rect);
        self.pivot = placement.offset;
    }

    /// Union of everything placed so far.
    pub fn base_rect(&self) -> Rect {
        self.base_rect
    }

    pub fn pivot(&self) -> Point {
        self.pivot
    }

    /// Top-left corner of the base rect; the rasterization offset.
    pub fn origin(&self) -> Point {
        self.base_rect.origin()
    }

    pub fn items(&self) -> &[PlacedBitmap] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Every lit cell in area coordinates.
    pub fn lit_cells(&self) -> impl Iterator<Item = (Point, Marker)> + '_ {
        self.items.iter().flat_map(|placed| {
            placed
                .bitmap
                .cells()
                .iter()
                .map(move |cell| (cell.position + placed.offset, cell.marker))
        })
    }
}

#[cfg(test)]
mod tests;
