// src/seal.rs

//! Field encoders and the end-to-end seal pipeline.
//!
//! A number field is one glyph. A text field is one glyph per character,
//! keyed by the code point; characters of a line advance along the column
//! direction and lines advance along the row direction.

use crate::area::Area;
use crate::config::{FieldKind, SealConfig};
use crate::encoder::{encode, parse_value};
use crate::error::SealError;
use crate::rasterizer::{rasterize, seal_tag, to_embeddable, Raster};
use log::debug;
use num_bigint::BigUint;

/// Lays out a single value.
pub fn layout_number(value: &BigUint, conf: &SealConfig) -> Result<Area, SealError> {
    conf.validate()?;
    Area::new(encode(value, conf.level)?, conf.column_direction)
}

/// Lays out text, one row per line. Empty lines are skipped.
pub fn layout_text(text: &str, conf: &SealConfig) -> Result<Area, SealError> {
    conf.validate()?;
    let mut rows = Vec::new();
    for line in text.lines().filter(|line| !line.is_empty()) {
        let glyphs = line
            .chars()
            .map(|c| encode(&BigUint::from(u32::from(c)), conf.level))
            .collect::<Result<Vec<_>, _>>()?;
        rows.push(Area::compose(glyphs, conf)?);
    }
    debug!("layout_text: {} rows", rows.len());
    Area::stack(rows, conf.row_direction, conf.spacing)
}

/// Lays out raw field content with the configured field encoder.
pub fn layout_field(content: &str, conf: &SealConfig) -> Result<Area, SealError> {
    match conf.fields {
        FieldKind::Number => layout_number(&parse_value(content)?, conf),
        FieldKind::Text => layout_text(content, conf),
    }
}

pub fn render_number(value: &BigUint, conf: &SealConfig) -> Result<Raster, SealError> {
    rasterize(&layout_number(value, conf)?, conf.cell_size)
}

pub fn render_text(text: &str, conf: &SealConfig) -> Result<Raster, SealError> {
    rasterize(&layout_text(text, conf)?, conf.cell_size)
}

pub fn render_field(content: &str, conf: &SealConfig) -> Result<Raster, SealError> {
    rasterize(&layout_field(content, conf)?, conf.cell_size)
}

/// Renders `value` as an `<img>` tag titled `L{level}:{value}`.
pub fn embed_number(value: &BigUint, conf: &SealConfig) -> Result<String, SealError> {
    let raster = render_number(value, conf)?;
    to_embeddable(&raster, &seal_tag(conf.level, value))
}
