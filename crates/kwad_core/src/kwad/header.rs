use crate::kwad::bytes::Cursor;
use crate::kwad::{KwadError, Result};

/// Container layout generation, selected by the package signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Version {
	/// `KLEIPKG1`: resource records omit the type tag and surfaces are uncompressed.
	V1,
	/// `KLEIPKG2`: current layout.
	V2,
}

impl Version {
	/// Container signature for this version.
	pub fn signature(self) -> &'static [u8; 8] {
		match self {
			Self::V1 => PackageHeader::SIGNATURE_V1,
			Self::V2 => PackageHeader::SIGNATURE_V2,
		}
	}

	/// Numeric version label.
	pub fn as_u8(self) -> u8 {
		match self {
			Self::V1 => 1,
			Self::V2 => 2,
		}
	}
}

/// Fixed-size package header preceding the resource and alias tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackageHeader {
	/// Raw 8-byte container signature.
	pub signature: [u8; 8],
	/// Layout generation implied by `signature`.
	pub version: Version,
	/// Declared file size; stored, not validated.
	pub file_size: u32,
	/// Number of data slabs; stored, not validated.
	pub slab_count: u32,
}

impl PackageHeader {
	/// Version 1 container signature.
	pub const SIGNATURE_V1: &'static [u8; 8] = b"KLEIPKG1";
	/// Version 2 container signature.
	pub const SIGNATURE_V2: &'static [u8; 8] = b"KLEIPKG2";

	/// Parse the header at the cursor position.
	pub fn parse(cursor: &mut Cursor<'_>) -> Result<Self> {
		let signature: [u8; 8] = cursor.read_array()?;
		let version = match &signature {
			sig if sig == Self::SIGNATURE_V1 => Version::V1,
			sig if sig == Self::SIGNATURE_V2 => Version::V2,
			_ => {
				return Err(KwadError::UnexpectedSignature {
					context: "package",
					expected: Self::SIGNATURE_V2.to_vec(),
					got: signature.to_vec(),
				});
			}
		};

		Ok(Self {
			signature,
			version,
			file_size: cursor.read_u32_le()?,
			slab_count: cursor.read_u32_le()?,
		})
	}
}

#[cfg(test)]
mod tests;
