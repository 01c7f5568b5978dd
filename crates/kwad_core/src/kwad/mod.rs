mod affine;
mod bytes;
mod compression;
mod error;
mod header;
mod info;
mod package;
mod resolve;
mod string;

/// Per-kind resource payloads and the tag table.
pub mod resource;

/// Tag-to-decoder dispatch for each container version.
pub mod registry;

/// Rebuilding named symbol and animation definitions from decoded resources.
pub mod reconstruct;

/// Affine transform and colour records.
pub use affine::{Affine2D, Affine3D, Colour};
/// Bounds-checked little-endian reader.
pub use bytes::Cursor;
/// Mipmap inflation and block-decompression seam.
pub use compression::{BlockCompression, BlockDecompressor, SurfacePixels, decode_surface_pixels, inflate_mipmap};
/// Error and result aliases.
pub use error::{KwadError, Result};
/// Package header representation.
pub use header::{PackageHeader, Version};
/// Resource and alias table records.
pub use info::{AliasInfo, ResourceInfo};
/// Decoded package and per-resource failure records.
pub use package::{DecodeFailure, Package};
/// Alias-path lookup over a decoded package.
pub use resolve::{NamedResource, ResourceIndex};
/// Length-prefixed string helpers.
pub use string::{EncodedString, fixed_name};
