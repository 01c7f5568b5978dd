use crate::kwad::{KwadError, Result};

/// Bounded little-endian cursor over an immutable byte slice.
///
/// The cursor owns a single position; `seek` is destructive to it, so callers that
/// look ahead must restore the position themselves.
pub struct Cursor<'a> {
	bytes: &'a [u8],
	pos: usize,
}

impl<'a> Cursor<'a> {
	/// Create a cursor at position 0.
	pub fn new(bytes: &'a [u8]) -> Self {
		Self { bytes, pos: 0 }
	}

	/// Return current byte offset.
	pub fn pos(&self) -> usize {
		self.pos
	}

	/// Return total buffer length.
	pub fn len(&self) -> usize {
		self.bytes.len()
	}

	/// Return whether the underlying buffer is empty.
	pub fn is_empty(&self) -> bool {
		self.bytes.is_empty()
	}

	/// Return remaining unread bytes.
	pub fn remaining(&self) -> usize {
		self.bytes.len().saturating_sub(self.pos)
	}

	/// Move to an absolute offset. Seeking exactly to the end is allowed.
	pub fn seek(&mut self, to: usize) -> Result<()> {
		if to > self.bytes.len() {
			return Err(KwadError::SeekOutOfRange { to, len: self.bytes.len() });
		}
		self.pos = to;
		Ok(())
	}

	/// Read exactly `n` bytes and advance cursor.
	pub fn read_exact(&mut self, n: usize) -> Result<&'a [u8]> {
		if n > self.remaining() {
			return Err(KwadError::UnexpectedEndOfData {
				at: self.pos,
				need: n,
				rem: self.remaining(),
			});
		}

		let start = self.pos;
		self.pos += n;
		Ok(&self.bytes[start..self.pos])
	}

	/// Read a fixed-size byte array.
	pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
		let raw = self.read_exact(N)?;
		let mut out = [0_u8; N];
		out.copy_from_slice(raw);
		Ok(out)
	}

	/// Read a four-byte type tag.
	pub fn read_tag(&mut self) -> Result<[u8; 4]> {
		self.read_array()
	}

	/// Read a little-endian `u32`.
	pub fn read_u32_le(&mut self) -> Result<u32> {
		Ok(u32::from_le_bytes(self.read_array()?))
	}

	/// Read a little-endian `i32`.
	pub fn read_i32_le(&mut self) -> Result<i32> {
		Ok(i32::from_le_bytes(self.read_array()?))
	}

	/// Read a little-endian IEEE-754 `f32`.
	pub fn read_f32_le(&mut self) -> Result<f32> {
		Ok(f32::from_le_bytes(self.read_array()?))
	}

	/// Read a `u32` count followed by that many records decoded by `read`.
	pub fn read_counted<T>(&mut self, mut read: impl FnMut(&mut Self) -> Result<T>) -> Result<Vec<T>> {
		let count = self.read_u32_le()? as usize;
		// A corrupt count must not trigger a huge up-front allocation.
		let mut out = Vec::with_capacity(count.min(self.remaining()));
		for _ in 0..count {
			out.push(read(self)?);
		}
		Ok(out)
	}
}

#[cfg(test)]
mod tests;
