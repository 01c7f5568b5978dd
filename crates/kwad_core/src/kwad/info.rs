use crate::kwad::bytes::Cursor;
use crate::kwad::{EncodedString, Result, Version};

/// One entry of the package resource table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceInfo {
	/// Slab the resource lives in.
	pub slab_index: u32,
	/// Declared resource size in bytes.
	pub size: u32,
	/// Absolute byte offset of the resource inside the package.
	pub offset: u32,
	/// Four-byte type tag (`TEX1`, `SRF1`, ...).
	pub tag: [u8; 4],
}

impl ResourceInfo {
	/// Parse one table record using the layout of `version`.
	pub fn parse(cursor: &mut Cursor<'_>, version: Version) -> Result<Self> {
		match version {
			Version::V1 => Self::parse_v1(cursor),
			Version::V2 => Ok(Self {
				slab_index: cursor.read_u32_le()?,
				size: cursor.read_u32_le()?,
				offset: cursor.read_u32_le()?,
				tag: cursor.read_tag()?,
			}),
		}
	}

	/// Version 1 records omit the tag. It is recovered from the last four bytes of the
	/// resource's own 8-byte signature (`KLEI` + tag) at `offset + 4`.
	fn parse_v1(cursor: &mut Cursor<'_>) -> Result<Self> {
		let slab_index = cursor.read_u32_le()?;
		let size = cursor.read_u32_le()?;
		let offset = cursor.read_u32_le()?;

		let resume = cursor.pos();
		cursor.seek(offset as usize + 4)?;
		let tag = cursor.read_tag();
		cursor.seek(resume)?;

		Ok(Self {
			slab_index,
			size,
			offset,
			tag: tag?,
		})
	}
}

/// Named path pointing at a resource table index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasInfo {
	/// Alias path as stored.
	pub path: EncodedString,
	/// Target resource index.
	pub resource_index: u32,
}

impl AliasInfo {
	/// Parse one alias record.
	pub fn parse(cursor: &mut Cursor<'_>) -> Result<Self> {
		Ok(Self {
			path: EncodedString::read(cursor)?,
			resource_index: cursor.read_u32_le()?,
		})
	}

	/// Alias path as text.
	pub fn path_str(&self) -> std::borrow::Cow<'_, str> {
		self.path.as_str()
	}
}
