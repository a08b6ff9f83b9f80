// src/encoder.rs

//! Value-to-bitmap encoder.
//!
//! A value is read as a mixed-radix number whose digits are taken least
//! significant first, one per geometry table entry in table order. The radix
//! of an entry is the number of variants its marker class can be lit with
//! plus one; digit `0` leaves the cell dark and digit `d` lights it with the
//! class's `d`-th variant (see [`Marker::variants`]).

use crate::error::SealError;
use crate::geometry::{Point, Rect};
use crate::marker::Marker;
use crate::table;
use log::{debug, trace};
use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

/// A lit grid cell and the marker it is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LitCell {
    pub position: Point,
    pub marker: Marker,
}

/// The activation pattern of one value on one grid level.
///
/// Coordinates are local to the glyph, centred on the origin. The rect is
/// the tight bounding box of the lit cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedBitmap {
    level: u8,
    value: BigUint,
    rect: Rect,
    cells: Vec<LitCell>,
}

impl EncodedBitmap {
    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn value(&self) -> &BigUint {
        &self.value
    }

    /// Tight bounding box of the lit cells; empty when nothing is lit.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Lit cells in table order.
    pub fn cells(&self) -> &[LitCell] {
        &self.cells
    }

    pub fn is_blank(&self) -> bool {
        self.cells.is_empty()
    }

    /// Rebuilds the value from the lit cells.
    ///
    /// Inverse of [`encode`]; the bitmap's level table supplies the digit
    /// weights.
    pub fn decode(&self) -> Result<BigUint, SealError> {
        let entries = table::lookup(self.level)?;
        let mut value = BigUint::zero();
        let mut weight = BigUint::from(1u32);
        let mut cells = self.cells.iter().peekable();
        for entry in entries {
            let Some(cell) = cells.peek() else {
                break;
            };
            if cell.position == entry.position() {
                let digit = entry
                    .class
                    .variants()
                    .iter()
                    .position(|v| *v == cell.marker)
                    .map_or(0, |i| i as u32 + 1);
                value += &weight * digit;
                cells.next();
            }
            weight *= entry.class.radix();
        }
        Ok(value)
    }
}

/// Parses a decimal value, ignoring `_` separators and surrounding space.
///
/// There is no upper bound here; whether the value fits is decided by the
/// level it is encoded on.
pub fn parse_value(text: &str) -> Result<BigUint, SealError> {
    let digits: String = text.trim().chars().filter(|c| *c != '_').collect();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SealError::InvalidValue(text.to_string()));
    }
    digits
        .parse::<BigUint>()
        .map_err(|_| SealError::InvalidValue(text.to_string()))
}

/// Encodes `value` on the `level` grid.
///
/// Fails with [`SealError::UnsupportedLevel`] when the level has no table and
/// with [`SealError::Overflow`] when digits remain after the last table
/// entry.
pub fn encode(value: &BigUint, level: u8) -> Result<EncodedBitmap, SealError> {
    let entries = table::lookup(level)?;
    let mut rest = value.clone();
    let mut cells = Vec::new();

    for entry in entries {
        if rest.is_zero() {
            break;
        }
        let radix = entry.class.radix();
        // Always below the radix, so it fits.
        let digit = (&rest % radix).to_usize().unwrap_or(0);
        rest /= radix;
        if digit == 0 {
            continue;
        }
        let marker = entry.class.variants()[digit - 1];
        trace!("encode: ({}, {}) digit {} -> {}", entry.dx, entry.dy, digit, marker);
        cells.push(LitCell {
            position: entry.position(),
            marker,
        });
    }

    if !rest.is_zero() {
        return Err(SealError::Overflow {
            level,
            value: value.clone(),
        });
    }

    let rect = Rect::bounding(cells.iter().map(|c| c.position));
    debug!(
        "encode: value {} on level {} lit {} cells in {:?}",
        value,
        level,
        cells.len(),
        rect.as_tuple()
    );
    Ok(EncodedBitmap {
        level,
        value: value.clone(),
        rect,
        cells,
    })
}
