// src/area/tests.rs

use super::*;
use crate::encoder::encode;
use num_bigint::BigUint;
use test_log::test;

fn glyph(value: u128) -> EncodedBitmap {
    encode(&BigUint::from(value), 2).unwrap()
}

fn tight_config(column_direction: Direction) -> SealConfig {
    SealConfig {
        column_direction,
        level: 2,
        spacing: 0,
        ..SealConfig::default()
    }
}

#[test]
fn test_first_item_anchors_the_area() {
    // 17 lights (0,0), (-1,-1), (0,-1): rect (-1,-1,1,1).
    let area = Area::new(glyph(17), Direction::Right).unwrap();
    assert_eq!(area.base_rect().as_tuple(), (-2, -1, 3, 1));
    assert_eq!(area.pivot(), Point::ORIGIN);
    assert_eq!(area.items()[0].offset, Point::ORIGIN);
    assert_eq!(area.origin(), Point::new(-2, -1));

    let area = Area::new(glyph(17), Direction::Down).unwrap();
    assert_eq!(area.base_rect().as_tuple(), (-1, -2, 1, 3));
}

#[test]
fn test_place_right_aligns_near_edge() {
    let mut area = Area::new(glyph(17), Direction::Right).unwrap();
    // 3 lights only (-1,-1): rect (-1,-1,0,0).
    let placement = area.place(glyph(3), Direction::Right, 1);
    assert_eq!(placement.offset, Point::new(5, 0));
    assert_eq!(placement.rect.as_tuple(), (4, -1, 5, 0));
    assert_eq!(area.base_rect().as_tuple(), (-2, -1, 5, 1));
    assert_eq!(area.pivot(), Point::new(5, 0));
}

#[test]
fn test_each_direction() {
    let start = Area::new(glyph(17), Direction::Right).unwrap();
    let item = glyph(1).rect(); // (0,0,1,1)

    let left = start.plan(item, Direction::Left, 0);
    assert_eq!(left.rect.as_tuple(), (-3, 0, -2, 1));

    let up = start.plan(item, Direction::Up, 0);
    assert_eq!(up.rect.as_tuple(), (0, -2, 1, -1));

    let down = start.plan(item, Direction::Down, 2);
    assert_eq!(down.rect.as_tuple(), (0, 3, 1, 4));

    for placement in [left, up, down] {
        assert!(!placement.rect.intersects(&start.base_rect()));
    }
}

#[test]
fn test_plan_does_not_mutate() {
    let area = Area::new(glyph(17), Direction::Right).unwrap();
    let before = area.clone();
    let a = area.plan(glyph(5).rect(), Direction::Right, 1);
    let b = area.plan(glyph(5).rect(), Direction::Right, 1);
    assert_eq!(a, b);
    assert_eq!(area, before);
}

#[test]
fn test_pivot_keeps_perpendicular_coordinate() {
    let mut area = Area::new(glyph(17), Direction::Right).unwrap();
    let down = area.place(glyph(1), Direction::Down, 0);
    assert_eq!(down.offset, Point::new(0, 1));
    assert_eq!(area.base_rect().as_tuple(), (-2, -1, 3, 2));

    let right = area.place(glyph(1), Direction::Right, 0);
    assert_eq!(right.offset, Point::new(3, 1));
    assert_eq!(right.rect.as_tuple(), (3, 1, 4, 2));
    assert_eq!(area.base_rect().as_tuple(), (-2, -1, 4, 2));
}

#[test]
fn test_right_joins_grow_strictly_without_overlap() {
    let values = [17u128, 3, 1000, 5, 123_456_789, 2, 1];
    let area = Area::compose(values.iter().map(|v| glyph(*v)), &tight_config(Direction::Right))
        .unwrap();
    assert_eq!(area.len(), values.len());

    let rects: Vec<Rect> = area.items().iter().map(PlacedBitmap::rect).collect();
    for pair in rects.windows(2) {
        assert!(pair[1].left >= pair[0].right, "{:?} overlaps {:?}", pair[1], pair[0]);
        assert!(pair[1].right > pair[0].right);
        assert!(!pair[0].intersects(&pair[1]));
    }
    for rect in &rects {
        assert!(area.base_rect().contains_rect(rect));
    }
}

#[test]
fn test_blank_first_glyph_keeps_its_reservation() {
    let mut area = Area::new(glyph(0), Direction::Right).unwrap();
    let reserved = area.base_rect();
    assert_eq!(reserved.as_tuple(), (-2, 0, 3, 1));

    let placement = area.place(glyph(1), Direction::Right, 1);
    assert_eq!(placement.offset, Point::new(4, 0));
    assert!(area.base_rect().contains_rect(&reserved));
    assert_eq!(area.base_rect().as_tuple(), (-2, 0, 5, 1));

    let area = Area::new(glyph(0), Direction::Down).unwrap();
    assert_eq!(area.base_rect().as_tuple(), (0, -2, 1, 3));
}

#[test]
fn test_blank_glyph_takes_a_column() {
    let conf = tight_config(Direction::Right);
    let area = Area::compose([glyph(1), glyph(0), glyph(1)], &conf).unwrap();
    let offsets: Vec<_> = area.items().iter().map(|p| p.offset).collect();
    assert_eq!(offsets, vec![Point::ORIGIN, Point::new(3, 0), Point::new(4, 0)]);
    assert_eq!(area.base_rect().as_tuple(), (-2, 0, 5, 1));
}

#[test]
fn test_compose_needs_an_item() {
    let none: Vec<EncodedBitmap> = Vec::new();
    assert!(matches!(
        Area::compose(none, &SealConfig::default()),
        Err(SealError::EmptyComposition)
    ));
}

#[test]
fn test_join_shifts_inner_items() {
    let conf = tight_config(Direction::Right);
    let top = Area::compose([glyph(1), glyph(1)], &conf).unwrap();
    let bottom = Area::compose([glyph(1), glyph(1)], &conf).unwrap();
    let bottom_rect = bottom.base_rect();

    let area = Area::stack([top, bottom], Direction::Down, 0).unwrap();
    assert_eq!(area.len(), 4);
    let shift = area.items()[2].offset - Point::ORIGIN;
    assert_eq!(shift.x, 0, "rows stay aligned on the first row");
    assert_eq!(area.items()[3].offset - area.items()[2].offset, Point::new(3, 0));
    assert_eq!(area.base_rect().height(), 1 + bottom_rect.height());
}

#[test]
fn test_lit_cells_are_in_area_coordinates() {
    let mut area = Area::new(glyph(1), Direction::Right).unwrap();
    area.place(glyph(2), Direction::Right, 0);
    let cells: Vec<_> = area.lit_cells().collect();
    assert_eq!(
        cells,
        vec![
            (Point::new(0, 0), Marker::Point),
            (Point::new(3, 0), Marker::Tangent),
        ]
    );
}
