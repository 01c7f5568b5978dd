use crate::kwad::bytes::Cursor;
use crate::kwad::resource::{ResourceKind, expect_signature};
use crate::kwad::{Result, Version};

/// Payload of one mipmap level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MipmapData {
	/// Pixel bytes stored as-is.
	Raw(Vec<u8>),
	/// zlib stream; the two header bytes precede a raw deflate stream.
	Deflated(Vec<u8>),
}

impl MipmapData {
	/// Stored bytes regardless of encoding.
	pub fn bytes(&self) -> &[u8] {
		match self {
			Self::Raw(bytes) | Self::Deflated(bytes) => bytes,
		}
	}
}

/// One mipmap level.
///
/// A version 2 level whose `compressed_size` is `0` is read as `size` raw bytes rather
/// than as an empty payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mipmap {
	/// Uncompressed payload size.
	pub size: u32,
	/// Width in pixels.
	pub width: u32,
	/// Height in pixels.
	pub height: u32,
	/// Compressed payload size; `0` means the payload is stored raw.
	pub compressed_size: u32,
	/// Payload.
	pub data: MipmapData,
}

impl Mipmap {
	fn decode(cursor: &mut Cursor<'_>, version: Version) -> Result<Self> {
		let size = cursor.read_u32_le()?;
		let width = cursor.read_u32_le()?;
		let height = cursor.read_u32_le()?;

		// Version 1 has no compressed-size field and never compresses.
		let compressed_size = match version {
			Version::V1 => 0,
			Version::V2 => cursor.read_u32_le()?,
		};

		let data = if compressed_size > 0 {
			MipmapData::Deflated(cursor.read_exact(compressed_size as usize)?.to_vec())
		} else {
			MipmapData::Raw(cursor.read_exact(size as usize)?.to_vec())
		};

		Ok(Self {
			size,
			width,
			height,
			compressed_size,
			data,
		})
	}
}

/// Pixel surface with mipmap chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
	/// Declared record size.
	pub struct_size: u32,
	/// OpenGL pixel type.
	pub gl_type: u32,
	/// OpenGL storage type.
	pub gl_storage_type: u32,
	/// Whether pixels are DXT5 block-compressed.
	pub dxt_compressed: bool,
	/// Declared total bytes across all mipmaps.
	pub total_mip_size: u32,
	/// Mipmap levels, largest first.
	pub mipmaps: Vec<Mipmap>,
}

impl Surface {
	/// Decode a version 2 `KLEISRF1` record.
	pub fn decode(cursor: &mut Cursor<'_>) -> Result<Self> {
		Self::decode_versioned(cursor, Version::V2)
	}

	/// Decode a version 1 `KLEISRF1` record.
	pub fn decode_v1(cursor: &mut Cursor<'_>) -> Result<Self> {
		Self::decode_versioned(cursor, Version::V1)
	}

	fn decode_versioned(cursor: &mut Cursor<'_>, version: Version) -> Result<Self> {
		expect_signature(cursor, ResourceKind::Surface)?;
		let struct_size = cursor.read_u32_le()?;
		let gl_type = cursor.read_u32_le()?;
		let gl_storage_type = cursor.read_u32_le()?;
		let dxt_compressed = cursor.read_u32_le()? == 1;
		let mip_count = cursor.read_u32_le()?;
		let total_mip_size = cursor.read_u32_le()?;

		let mut mipmaps = Vec::new();
		for _ in 0..mip_count {
			mipmaps.push(Mipmap::decode(cursor, version)?);
		}

		Ok(Self {
			struct_size,
			gl_type,
			gl_storage_type,
			dxt_compressed,
			total_mip_size,
			mipmaps,
		})
	}

	/// Largest mipmap, the only level used for extraction.
	pub fn base_mipmap(&self) -> Option<&Mipmap> {
		self.mipmaps.first()
	}
}
