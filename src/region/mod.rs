//! Region annotation items.
//!
//! A region item is the binary metadata block a HEIF file uses to attach
//! geometric annotations (faces, crop hints, areas of interest) to an
//! image. The item carries a reference canvas size and a list of
//! geometries expressed against that canvas; locating the item's payload
//! inside the container is the container parser's job, not ours.
//!
//! # Example
//!
//! ```
//! use heif_regions::region::{Geometry, RegionItem};
//!
//! let payload = [
//!     0x00, 0x00, // version, flags (16-bit fields)
//!     0x01, 0x00, 0x00, 0xC8, // 256 x 200 reference canvas
//!     0x01, // one region
//!     0x00, 0x00, 0x0A, 0x00, 0x14, // point at (10, 20)
//! ];
//!
//! let item = RegionItem::decode(&payload).unwrap();
//! assert_eq!(item.reference_width, 256);
//! assert_eq!(item.regions, vec![Geometry::Point { x: 10, y: 20 }]);
//! ```

mod decode;
mod model;

pub use model::{FieldWidth, Geometry, RegionItem, RegionPoint};
