#![allow(dead_code)]

use heif_regions::region::{FieldWidth, Geometry, RegionItem, RegionPoint};
use proptest::prelude::*;
use proptest::strategy::BoxedStrategy;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(64);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

pub fn arb_field_width() -> BoxedStrategy<FieldWidth> {
    prop_oneof![Just(FieldWidth::Bits16), Just(FieldWidth::Bits32)].boxed()
}

/// Signed coordinate representable at the given field width.
fn arb_signed(width: FieldWidth) -> BoxedStrategy<i32> {
    match width {
        FieldWidth::Bits16 => (i16::MIN..=i16::MAX).prop_map(i32::from).boxed(),
        FieldWidth::Bits32 => any::<i32>().boxed(),
    }
}

/// Unsigned dimension representable at the given field width.
fn arb_unsigned(width: FieldWidth) -> BoxedStrategy<u32> {
    match width {
        FieldWidth::Bits16 => (0u32..=u16::MAX as u32).boxed(),
        FieldWidth::Bits32 => any::<u32>().boxed(),
    }
}

/// One geometry whose fields all fit the given width, with polygons
/// bounded to a small point count to keep records manageable.
pub fn arb_geometry(width: FieldWidth) -> BoxedStrategy<Geometry> {
    let point = (arb_signed(width), arb_signed(width))
        .prop_map(|(x, y)| Geometry::Point { x, y });

    let rectangle = (
        arb_signed(width),
        arb_signed(width),
        arb_unsigned(width),
        arb_unsigned(width),
    )
        .prop_map(|(x, y, w, h)| Geometry::Rectangle {
            x,
            y,
            width: w,
            height: h,
        });

    let ellipse = (
        arb_signed(width),
        arb_signed(width),
        arb_unsigned(width),
        arb_unsigned(width),
    )
        .prop_map(|(x, y, rx, ry)| Geometry::Ellipse {
            x,
            y,
            radius_x: rx,
            radius_y: ry,
        });

    let polygon = (
        any::<bool>(),
        prop::collection::vec((arb_signed(width), arb_signed(width)), 0..8),
    )
        .prop_map(|(closed, coords)| Geometry::Polygon {
            closed,
            points: coords
                .into_iter()
                .map(|(x, y)| RegionPoint { x, y })
                .collect(),
        });

    prop_oneof![point, rectangle, ellipse, polygon].boxed()
}

/// A well-formed record with at least one region.
///
/// At least one because a zero-region 16-bit record encodes to 7 bytes,
/// which the decoder rejects under its 8-byte header minimum.
pub fn arb_record() -> BoxedStrategy<(FieldWidth, RegionItem)> {
    arb_field_width()
        .prop_flat_map(|width| {
            (
                arb_unsigned(width),
                arb_unsigned(width),
                prop::collection::vec(arb_geometry(width), 1..6),
            )
                .prop_map(move |(reference_width, reference_height, regions)| {
                    (
                        width,
                        RegionItem {
                            reference_width,
                            reference_height,
                            regions,
                        },
                    )
                })
        })
        .boxed()
}
