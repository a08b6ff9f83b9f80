// tests/pipeline.rs

use seal_grid::{
    encode, layout_number, rasterize, render_field, render_number, Area, Direction, FieldKind,
    Rect, SealConfig, SealError, SUPPORTED_LEVELS,
};
use num_bigint::BigUint;
use test_log::test;

/// Deterministic spread of values over the u128 range.
fn sample_values(count: usize) -> Vec<u128> {
    let mut state: u128 = 0x9E37_79B9_7F4A_7C15;
    (0..count)
        .map(|i| {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            state >> (i % 100)
        })
        .collect()
}

#[test]
fn test_rendering_is_deterministic() {
    let conf = SealConfig::default();
    for value in sample_values(20) {
        let value = BigUint::from(value >> 30);
        let first = render_number(&value, &conf).unwrap();
        let second = render_number(&value, &conf).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.to_png().unwrap(), second.to_png().unwrap());
    }
}

#[test]
fn test_rect_is_tight_bounding_box() {
    for level in SUPPORTED_LEVELS {
        for value in sample_values(50) {
            let bitmap = match encode(&BigUint::from(value), level) {
                Ok(bitmap) => bitmap,
                Err(_) => continue,
            };
            let rect = bitmap.rect();
            let cells: Vec<_> = bitmap.cells().iter().map(|c| c.position).collect();
            assert_eq!(rect, Rect::bounding(cells.iter().copied()));
            if cells.is_empty() {
                continue;
            }
            assert!(cells.iter().all(|p| rect.contains_point(*p)));
            assert!(cells.iter().any(|p| p.x == rect.left));
            assert!(cells.iter().any(|p| p.x == rect.right - 1));
            assert!(cells.iter().any(|p| p.y == rect.top));
            assert!(cells.iter().any(|p| p.y == rect.bottom - 1));
        }
    }
}

#[test]
fn test_right_composition_keeps_growing() {
    let conf = SealConfig::default();
    let glyphs: Vec<_> = sample_values(12)
        .into_iter()
        .map(|v| encode(&BigUint::from(v >> 40), conf.level).unwrap())
        .filter(|g| !g.is_blank())
        .collect();
    let mut area = Area::new(glyphs[0].clone(), Direction::Right).unwrap();
    let mut previous = area.items()[0].rect();
    let mut right_edge = area.base_rect().right;
    for glyph in &glyphs[1..] {
        let placement = area.place(glyph.clone(), Direction::Right, conf.spacing);
        assert!(area.base_rect().right > right_edge);
        assert!(!placement.rect.intersects(&previous));
        assert!(placement.rect.left > previous.right - 1);
        right_edge = area.base_rect().right;
        previous = placement.rect;
    }
    let raster = rasterize(&area, conf.cell_size).unwrap();
    assert_eq!(raster.width() as i32, area.base_rect().width() * conf.cell_size as i32);
}

#[test]
fn test_independent_pipelines_in_parallel() {
    let values = sample_values(8);
    let expected: Vec<_> = values
        .iter()
        .map(|v| render_number(&BigUint::from(*v >> 30), &SealConfig::default()).unwrap())
        .collect();
    let handles: Vec<_> = values
        .iter()
        .map(|v| {
            let v = BigUint::from(*v >> 30);
            std::thread::spawn(move || render_number(&v, &SealConfig::default()).unwrap())
        })
        .collect();
    for (handle, expected) in handles.into_iter().zip(expected) {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_save_png_writes_a_file() {
    let area = layout_number(&BigUint::from(1_234_567u32), &SealConfig::default()).unwrap();
    let raster = rasterize(&area, 5).unwrap();
    let path = std::env::temp_dir().join(format!("seal-grid-{}.png", std::process::id()));
    raster.save_png(&path).unwrap();
    let bytes = std::fs::read(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(bytes, raster.to_png().unwrap());
}

#[test]
fn test_blank_value_renders_background() {
    let conf = SealConfig::default();
    let raster = render_number(&BigUint::from(0u32), &conf).unwrap();
    // Centre cell widened to the level-4 columns, two pixels per cell.
    assert_eq!((raster.width(), raster.height()), (18, 2));
    assert_eq!(raster.lit_count(), 0);
    assert!(raster.to_png().is_ok());
}

#[test]
fn test_wide_value_renders_on_top_level() {
    let digits = "9".repeat(43);
    let conf = SealConfig {
        level: 5,
        cell_size: 1,
        fields: FieldKind::Number,
        ..SealConfig::default()
    };
    let raster = render_field(&digits, &conf).unwrap();
    assert!(raster.lit_count() > 0);
    let over = SealConfig { level: 4, ..conf };
    assert!(matches!(
        render_field(&digits, &over),
        Err(SealError::Overflow { level: 4, .. })
    ));
}
