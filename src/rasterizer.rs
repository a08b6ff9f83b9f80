// src/rasterizer.rs

//! Monochrome rasterizer and image output.
//!
//! ```text
//!   Area  →  [rasterize]  →  Raster  →  PNG bytes  →  <img src="data:...">
//!   (cells, markers)         (1 bit per pixel)
//! ```
//!
//! Each grid cell becomes a `cell_size × cell_size` block of pixels; the
//! cell's marker decides which pixels of the block are lit (see
//! [`Marker::covers`]). The background is white and lit pixels are black.

use crate::area::Area;
use crate::error::SealError;
use crate::marker::Marker;
use base64::{engine::general_purpose, Engine as _};
use log::debug;
use num_bigint::BigUint;
use png::{BitDepth, ColorType, Encoder};
use std::io::Write;
use std::path::Path;

/// A monochrome image. Pixels are stored row-major, `true` meaning lit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: usize,
    height: usize,
    pixels: Vec<bool>,
}

impl Raster {
    /// A blank (all background) raster.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![false; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether pixel `(x, y)` is lit. Out-of-bounds pixels are background.
    pub fn is_lit(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.pixels[y * self.width + x]
    }

    pub fn lit_count(&self) -> usize {
        self.pixels.iter().filter(|p| **p).count()
    }

    /// One string per pixel row, `#` for lit and `.` for background.
    pub fn rows(&self) -> Vec<String> {
        self.pixels
            .chunks(self.width.max(1))
            .map(|row| row.iter().map(|&lit| if lit { '#' } else { '.' }).collect())
            .collect()
    }

    fn set(&mut self, x: usize, y: usize) {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x] = true;
        }
    }

    /// Draws `marker` into the `cell_size` block whose top-left pixel is
    /// `(x0, y0)`.
    fn draw_cell(&mut self, x0: usize, y0: usize, marker: Marker, cell_size: u32) {
        for v in 0..cell_size {
            for u in 0..cell_size {
                if marker.covers(u, v, cell_size) {
                    self.set(x0 + u as usize, y0 + v as usize);
                }
            }
        }
    }

    /// Rows packed eight pixels per byte, most significant bit first, with
    /// set bits for background (white in a 1-bit grayscale PNG).
    fn packed_rows(&self) -> Vec<u8> {
        let stride = self.width.div_ceil(8);
        let mut data = vec![0u8; stride * self.height];
        for y in 0..self.height {
            for x in 0..self.width {
                if !self.pixels[y * self.width + x] {
                    data[y * stride + x / 8] |= 0x80 >> (x % 8);
                }
            }
        }
        data
    }

    /// Writes the raster as a 1-bit grayscale PNG.
    pub fn write_png<W: Write>(&self, out: W) -> Result<(), SealError> {
        let (Ok(width), Ok(height)) = (u32::try_from(self.width), u32::try_from(self.height)) else {
            return Err(SealError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "raster is too large for a png",
            )));
        };
        let mut encoder = Encoder::new(out, width, height);
        encoder.set_color(ColorType::Grayscale);
        encoder.set_depth(BitDepth::One);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&self.packed_rows())?;
        Ok(())
    }

    /// The raster as PNG bytes.
    pub fn to_png(&self) -> Result<Vec<u8>, SealError> {
        let mut bytes = Vec::new();
        self.write_png(&mut bytes)?;
        Ok(bytes)
    }

    /// Saves the raster as a PNG file.
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), SealError> {
        let file = std::fs::File::create(path.as_ref())?;
        self.write_png(std::io::BufWriter::new(file))?;
        debug!("saved {}x{} seal to {}", self.width, self.height, path.as_ref().display());
        Ok(())
    }
}

/// Draws every lit cell of `area` at `cell_size` pixels per cell.
///
/// The image covers the area's base rect exactly; an area whose glyphs are
/// all blank comes out as plain background. Fails when the cell size is zero
/// or too large for the image to be addressed, and when nothing was placed.
pub fn rasterize(area: &Area, cell_size: u32) -> Result<Raster, SealError> {
    if cell_size == 0 {
        return Err(SealError::InvalidCellSize(cell_size));
    }
    let rect = area.base_rect();
    if area.is_empty() || rect.is_empty() {
        return Err(SealError::EmptyComposition);
    }

    let (width, height) = pixel_size(rect.width(), rect.height(), cell_size)?;
    let cell = cell_size as usize;
    let mut raster = Raster::new(width, height);
    let origin = area.origin();
    for (position, marker) in area.lit_cells() {
        let local = position - origin;
        raster.draw_cell(local.x as usize * cell, local.y as usize * cell, marker, cell_size);
    }
    debug!(
        "rasterize: {} glyphs into {}x{} pixels ({} lit)",
        area.len(),
        raster.width,
        raster.height,
        raster.lit_count()
    );
    Ok(raster)
}

/// Pixel dimensions of a `cells_w × cells_h` area. Each side must fit a PNG
/// dimension (`u32`) and the pixel count must fit in memory addressing.
fn pixel_size(cells_w: i32, cells_h: i32, cell_size: u32) -> Result<(usize, usize), SealError> {
    let side = |cells: i32| {
        u32::try_from(cells)
            .ok()
            .and_then(|cells| cells.checked_mul(cell_size))
            .and_then(|px| usize::try_from(px).ok())
    };
    match (side(cells_w), side(cells_h)) {
        (Some(w), Some(h)) if w.checked_mul(h).is_some_and(|n| n <= isize::MAX as usize) => {
            Ok((w, h))
        }
        _ => Err(SealError::InvalidCellSize(cell_size)),
    }
}

/// Tag text for a glyph: `L{level}:{value}`.
pub fn seal_tag(level: u8, value: &BigUint) -> String {
    format!("L{}:{}", level, value)
}

fn escape_attr(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wraps the raster as an HTML `<img>` tag with an inline base64 PNG.
pub fn to_embeddable(raster: &Raster, tag_text: &str) -> Result<String, SealError> {
    let payload = general_purpose::STANDARD.encode(raster.to_png()?);
    Ok(format!(
        r#"<img title="{}" src="data:image/png;base64,{}">"#,
        escape_attr(tag_text),
        payload
    ))
}
