// src/lib.rs

//! Bitmap seals: integers and text encoded as glyphs on a square pixel grid.
//!
//! ```text
//!   value ──encode──▶ EncodedBitmap ──Area──▶ layout ──rasterize──▶ Raster ──▶ PNG / <img>
//!            ▲
//!       geometry table
//! ```
//!
//! ```no_run
//! use seal_grid::{embed_number, parse_value, SealConfig};
//!
//! let value = parse_value("582314716142985563463246078")?;
//! let html = embed_number(&value, &SealConfig::default())?;
//! println!("{}", html);
//! # Ok::<(), seal_grid::SealError>(())
//! ```

pub mod area;
pub mod config;
pub mod encoder;
pub mod error;
pub mod geometry;
pub mod marker;
pub mod rasterizer;
pub mod seal;
pub mod table;

pub use area::{Area, PlacedBitmap, Placement};
pub use config::{Direction, FieldKind, SealConfig};
pub use encoder::{encode, parse_value, EncodedBitmap, LitCell};
pub use error::SealError;
pub use geometry::{Orientation, Point, Rect};
pub use marker::Marker;
pub use num_bigint::BigUint;
pub use rasterizer::{rasterize, seal_tag, to_embeddable, Raster};
pub use seal::{
    embed_number, layout_field, layout_number, layout_text, render_field, render_number,
    render_text,
};
pub use table::{capacity, limit, lookup, GeometryEntry, SUPPORTED_LEVELS};
