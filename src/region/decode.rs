//! Binary decoder for region annotation item payloads.
//!
//! The record layout is big-endian throughout:
//!
//! ```text
//! offset 0 : version (u8, ignored)
//! offset 1 : flags (u8); bit 0 selects the field width (1 = 32-bit, 0 = 16-bit)
//! offset 2 : reference_width, reference_height (u16 or u32 each)
//! then     : region_count (u8)
//! then, region_count times:
//!   geometry_type (u8)
//!   geometry fields, each field_width bits
//! ```
//!
//! Decoding either produces a complete [`RegionItem`] or fails with
//! [`RegionError::InvalidRegionData`]; no partial record is ever returned.

use super::model::{FieldWidth, Geometry, RegionItem, RegionPoint};
use crate::error::RegionError;

// Geometry type tags defined by the format.
const TYPE_POINT: u8 = 0;
const TYPE_RECTANGLE: u8 = 1;
const TYPE_ELLIPSE: u8 = 2;
const TYPE_POLYGON: u8 = 3;
const TYPE_POLYLINE: u8 = 6;

/// A checked-read cursor over the record payload.
///
/// Owns the read position and the record's field width; every read is
/// bounds-checked at the read site and fails with `InvalidRegionData` on
/// underrun. The position never moves backwards and never passes the end
/// of the buffer.
struct FieldReader<'a> {
    data: &'a [u8],
    pos: usize,
    width: FieldWidth,
}

impl<'a> FieldReader<'a> {
    fn new(data: &'a [u8], pos: usize, width: FieldWidth) -> Self {
        Self { data, pos, width }
    }

    /// Bytes left between the cursor and the end of the buffer.
    fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Fails with `message` unless at least `bytes` bytes remain.
    fn require(&self, bytes: u64, message: &str) -> Result<(), RegionError> {
        if (self.remaining() as u64) < bytes {
            return Err(RegionError::InvalidRegionData(message.to_string()));
        }
        Ok(())
    }

    fn read_u8(&mut self) -> Result<u8, RegionError> {
        self.require(1, "Unexpected end of region data")?;
        let value = self.data[self.pos];
        self.pos += 1;
        Ok(value)
    }

    /// Reads one unsigned field of the record's width.
    fn read_unsigned(&mut self) -> Result<u32, RegionError> {
        self.require(self.width.byte_len() as u64, "Unexpected end of region data")?;
        let b = &self.data[self.pos..];
        let value = match self.width {
            FieldWidth::Bits16 => u16::from_be_bytes([b[0], b[1]]) as u32,
            FieldWidth::Bits32 => u32::from_be_bytes([b[0], b[1], b[2], b[3]]),
        };
        self.pos += self.width.byte_len();
        Ok(value)
    }

    /// Reads one signed field of the record's width.
    ///
    /// 16-bit fields are sign-extended from their own width, so a 16-bit
    /// field with the top bit set decodes negative.
    fn read_signed(&mut self) -> Result<i32, RegionError> {
        self.require(self.width.byte_len() as u64, "Unexpected end of region data")?;
        let b = &self.data[self.pos..];
        let value = match self.width {
            FieldWidth::Bits16 => i16::from_be_bytes([b[0], b[1]]) as i32,
            FieldWidth::Bits32 => i32::from_be_bytes([b[0], b[1], b[2], b[3]]),
        };
        self.pos += self.width.byte_len();
        Ok(value)
    }
}

impl RegionItem {
    /// Decodes a region annotation item from its raw payload bytes.
    ///
    /// Entries with an unrecognized geometry type tag are skipped rather
    /// than rejected, matching the reference behavior. Because the format
    /// carries no per-entry length, a skipped entry leaves the cursor at
    /// the start of that entry's payload, which desynchronizes the
    /// interpretation of every subsequent entry in the same record. The
    /// returned `regions` list may therefore be shorter than the encoded
    /// region count.
    pub fn decode(data: &[u8]) -> Result<RegionItem, RegionError> {
        if data.len() < 8 {
            return Err(RegionError::InvalidRegionData(
                "Less than 8 bytes of data".to_string(),
            ));
        }

        // Byte 0 is the version; it carries no information we act on.
        let flags = data[1];
        let width = FieldWidth::from_flags(flags);

        let (reference_width, reference_height, data_offset) = match width {
            FieldWidth::Bits32 => {
                if data.len() < 12 {
                    return Err(RegionError::InvalidRegionData(
                        "Region data incomplete".to_string(),
                    ));
                }
                let w = u32::from_be_bytes([data[2], data[3], data[4], data[5]]);
                let h = u32::from_be_bytes([data[6], data[7], data[8], data[9]]);
                (w, h, 10)
            }
            FieldWidth::Bits16 => {
                let w = u16::from_be_bytes([data[2], data[3]]) as u32;
                let h = u16::from_be_bytes([data[4], data[5]]) as u32;
                (w, h, 6)
            }
        };

        let mut reader = FieldReader::new(data, data_offset, width);
        let region_count = reader.read_u8()?;

        let mut regions = Vec::new();
        for _ in 0..region_count {
            let geometry_type = reader.read_u8()?;

            let geometry = match geometry_type {
                TYPE_POINT => decode_point(&mut reader)?,
                TYPE_RECTANGLE => decode_rectangle(&mut reader)?,
                TYPE_ELLIPSE => decode_ellipse(&mut reader)?,
                TYPE_POLYGON => decode_polygon(&mut reader, true)?,
                TYPE_POLYLINE => decode_polygon(&mut reader, false)?,
                // Unknown geometry type: skip this entry. See the method
                // docs for the desynchronization caveat.
                _ => continue,
            };

            regions.push(geometry);
        }

        Ok(RegionItem {
            reference_width,
            reference_height,
            regions,
        })
    }
}

fn decode_point(reader: &mut FieldReader) -> Result<Geometry, RegionError> {
    reader.require(
        2 * reader.width.byte_len() as u64,
        "Insufficient data remaining for point region",
    )?;
    let x = reader.read_signed()?;
    let y = reader.read_signed()?;
    Ok(Geometry::Point { x, y })
}

fn decode_rectangle(reader: &mut FieldReader) -> Result<Geometry, RegionError> {
    reader.require(
        4 * reader.width.byte_len() as u64,
        "Insufficient data remaining for rectangle region",
    )?;
    let x = reader.read_signed()?;
    let y = reader.read_signed()?;
    let width = reader.read_unsigned()?;
    let height = reader.read_unsigned()?;
    Ok(Geometry::Rectangle {
        x,
        y,
        width,
        height,
    })
}

fn decode_ellipse(reader: &mut FieldReader) -> Result<Geometry, RegionError> {
    reader.require(
        4 * reader.width.byte_len() as u64,
        "Insufficient data remaining for ellipse region",
    )?;
    let x = reader.read_signed()?;
    let y = reader.read_signed()?;
    let radius_x = reader.read_unsigned()?;
    let radius_y = reader.read_unsigned()?;
    Ok(Geometry::Ellipse {
        x,
        y,
        radius_x,
        radius_y,
    })
}

fn decode_polygon(reader: &mut FieldReader, closed: bool) -> Result<Geometry, RegionError> {
    reader.require(
        reader.width.byte_len() as u64,
        "Insufficient data remaining for polygon",
    )?;
    let num_points = reader.read_unsigned()?;

    // Checking the whole point list up front also bounds the allocation
    // below by the buffer length. The multiplication is done in u64 so a
    // hostile 32-bit count cannot wrap.
    reader.require(
        num_points as u64 * 2 * reader.width.byte_len() as u64,
        "Insufficient data remaining for polygon",
    )?;

    let mut points = Vec::with_capacity(num_points as usize);
    for _ in 0..num_points {
        let x = reader.read_signed()?;
        let y = reader.read_signed()?;
        points.push(RegionPoint { x, y });
    }

    Ok(Geometry::Polygon { closed, points })
}
