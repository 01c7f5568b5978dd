use crate::kwad::Result;
use crate::kwad::bytes::Cursor;
use crate::kwad::resource::{ResourceKind, expect_signature};

/// Opaque payload resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
	/// Payload bytes (declared size).
	pub data: Vec<u8>,
}

impl Blob {
	/// Decode a `KLEIBLOB` record.
	pub fn decode(cursor: &mut Cursor<'_>) -> Result<Self> {
		expect_signature(cursor, ResourceKind::Blob)?;
		let size = cursor.read_u32_le()? as usize;
		let data = cursor.read_exact(size)?.to_vec();
		Ok(Self { data })
	}
}
