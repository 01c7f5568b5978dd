use std::borrow::Cow;

use crate::kwad::Result;
use crate::kwad::bytes::Cursor;

/// Length-prefixed character block padded to a 4-byte boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedString {
	len: u32,
	raw: Vec<u8>,
}

impl EncodedString {
	/// Read a `u32` length `L` and then `L` bytes plus zero padding up to 4-byte alignment.
	pub fn read(cursor: &mut Cursor<'_>) -> Result<Self> {
		let len = cursor.read_u32_le()?;
		let raw = cursor.read_exact(padded_len(len))?.to_vec();
		Ok(Self { len, raw })
	}

	/// Logical string length in bytes.
	pub fn len(&self) -> u32 {
		self.len
	}

	/// Whether the logical string is empty.
	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	/// Full padded byte block as stored on disk.
	pub fn raw(&self) -> &[u8] {
		&self.raw
	}

	/// Logical bytes (the first `len` bytes of the padded block).
	pub fn bytes(&self) -> &[u8] {
		&self.raw[..self.len as usize]
	}

	/// Logical string, replacing invalid UTF-8 sequences.
	pub fn as_str(&self) -> Cow<'_, str> {
		String::from_utf8_lossy(self.bytes())
	}
}

/// Number of bytes occupied by a string of logical length `len`.
pub fn padded_len(len: u32) -> usize {
	let len = len as usize;
	len + (4 - len % 4) % 4
}

/// Decode a fixed-width, NUL-padded name field.
pub fn fixed_name(raw: &[u8]) -> String {
	let end = raw.iter().position(|byte| *byte == 0).unwrap_or(raw.len());
	String::from_utf8_lossy(&raw[..end]).into_owned()
}

#[cfg(test)]
mod tests;
