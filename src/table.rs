// src/table.rs

//! Grid geometry tables.
//!
//! A level-`L` table lists every cell of the `(2L + 1) × (2L + 1)` square
//! centred on the origin, in encoding order: the centre first, then each
//! ring `r = 1..=L` clockwise from its top-left corner `(-r, -r)`. Each
//! entry carries the marker class of its position:
//!
//! ```text
//!   R P T P L        (level 2)
//!   P R T L P
//!   T T T T T
//!   P L T R P
//!   L P T P R
//! ```
//!
//! Tables are built once on first use and shared read-only afterwards.

use crate::error::SealError;
use crate::geometry::{Orientation, Point};
use crate::marker::Marker;
use log::debug;
use num_bigint::BigUint;
use once_cell::sync::Lazy;
use std::ops::RangeInclusive;

/// Lowest grid level with a table.
pub const MIN_LEVEL: u8 = 2;
/// Highest grid level with a table.
pub const MAX_LEVEL: u8 = 5;
/// Levels accepted by [`lookup`].
pub const SUPPORTED_LEVELS: RangeInclusive<u8> = MIN_LEVEL..=MAX_LEVEL;

/// One position of a geometry table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GeometryEntry {
    pub dx: i32,
    pub dy: i32,
    pub class: Marker,
}

impl GeometryEntry {
    pub const fn new(dx: i32, dy: i32, class: Marker) -> Self {
        Self { dx, dy, class }
    }

    pub const fn position(&self) -> Point {
        Point::new(self.dx, self.dy)
    }
}

static TABLES: Lazy<Vec<Vec<GeometryEntry>>> = Lazy::new(|| {
    let tables: Vec<_> = SUPPORTED_LEVELS.map(build_table).collect();
    debug!(
        "built geometry tables for levels {}..={}: {:?} entries",
        MIN_LEVEL,
        MAX_LEVEL,
        tables.iter().map(Vec::len).collect::<Vec<_>>()
    );
    tables
});

fn class_of(x: i32, y: i32) -> Marker {
    if x == 0 || y == 0 {
        Marker::Tangent
    } else if x == y {
        Marker::Right
    } else if x == -y {
        Marker::Left
    } else {
        Marker::Point
    }
}

fn build_table(level: u8) -> Vec<GeometryEntry> {
    let level = i32::from(level);
    let side = (2 * level + 1) as usize;
    let mut cells = Vec::with_capacity(side * side);
    cells.push((0, 0));
    for r in 1..=level {
        cells.extend((-r..r).map(|x| (x, -r)));
        cells.extend((-r..r).map(|y| (r, y)));
        cells.extend((-r + 1..=r).rev().map(|x| (x, r)));
        cells.extend((-r + 1..=r).rev().map(|y| (-r, y)));
    }
    cells
        .into_iter()
        .map(|(x, y)| GeometryEntry::new(x, y, class_of(x, y)))
        .collect()
}

fn check_level(level: u8) -> Result<(), SealError> {
    if SUPPORTED_LEVELS.contains(&level) {
        Ok(())
    } else {
        Err(SealError::UnsupportedLevel(level))
    }
}

/// The ordered table for `level`.
pub fn lookup(level: u8) -> Result<&'static [GeometryEntry], SealError> {
    check_level(level)?;
    Ok(TABLES[usize::from(level - MIN_LEVEL)].as_slice())
}

/// Inclusive `(min, max)` coordinate the table covers along `orientation`.
pub fn limit(level: u8, orientation: Orientation) -> Result<(i32, i32), SealError> {
    let table = lookup(level)?;
    let coords = table.iter().map(|e| e.position().along(orientation));
    let min = coords.clone().min().unwrap_or(0);
    let max = coords.max().unwrap_or(0);
    Ok((min, max))
}

/// Number of distinct values a level can encode: the product of every
/// entry's radix. Values from zero up to one less than this fit.
pub fn capacity(level: u8) -> Result<BigUint, SealError> {
    let table = lookup(level)?;
    Ok(table
        .iter()
        .fold(BigUint::from(1u32), |acc, e| acc * e.class.radix()))
}
