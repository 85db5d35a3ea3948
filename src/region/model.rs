//! Decoded representation of a region annotation item.
//!
//! A region item anchors a list of geometries to a reference canvas. All
//! coordinates are expressed in the coordinate space of that canvas, which
//! may differ from the pixel dimensions of the image the item is attached
//! to; scaling to the actual image is the caller's concern.

use serde::{Deserialize, Serialize};

/// The bit width used for every numeric field after the record header.
///
/// Selected once per record from bit 0 of the flags byte and fixed for the
/// whole record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldWidth {
    /// 16-bit big-endian fields.
    Bits16,
    /// 32-bit big-endian fields.
    Bits32,
}

impl FieldWidth {
    /// Derives the field width from the record's flags byte.
    pub fn from_flags(flags: u8) -> Self {
        if flags & 1 != 0 {
            FieldWidth::Bits32
        } else {
            FieldWidth::Bits16
        }
    }

    /// Returns the size of one encoded field in bytes.
    #[inline]
    pub fn byte_len(self) -> usize {
        match self {
            FieldWidth::Bits16 => 2,
            FieldWidth::Bits32 => 4,
        }
    }
}

/// A single vertex of a polygon or polyline geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionPoint {
    pub x: i32,
    pub y: i32,
}

/// One region geometry, expressed in reference-canvas coordinates.
///
/// The variant set is closed by the external format: each entry in the
/// encoded record carries a one-byte geometry type tag, and open/closed
/// polygons share an encoding distinguished only by that tag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Geometry {
    /// A single point.
    Point { x: i32, y: i32 },

    /// An axis-aligned rectangle anchored at its top-left corner.
    Rectangle {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },

    /// An axis-aligned ellipse centered at `(x, y)`.
    Ellipse {
        x: i32,
        y: i32,
        radius_x: u32,
        radius_y: u32,
    },

    /// A polygon (`closed == true`) or polyline (`closed == false`).
    ///
    /// `closed` is implied by the geometry type tag (3 = polygon,
    /// 6 = polyline); it is not stored in the byte stream beyond the tag.
    Polygon {
        closed: bool,
        points: Vec<RegionPoint>,
    },
}

/// A decoded region annotation item.
///
/// Immutable after a successful decode. `regions` preserves encounter
/// order, which callers rely on for display and indexing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionItem {
    /// Width of the reference canvas the geometry coordinates refer to.
    pub reference_width: u32,

    /// Height of the reference canvas.
    pub reference_height: u32,

    /// The decoded geometries, in the order they appear in the record.
    ///
    /// May be shorter than the encoded region count when entries with
    /// unrecognized geometry types were skipped.
    pub regions: Vec<Geometry>,
}
