use crate::kwad::bytes::Cursor;
use crate::kwad::resource::{ResourceKind, expect_signature, optional_index};
use crate::kwad::string::fixed_name;
use crate::kwad::{Affine3D, EncodedString, KwadError, Result};

/// Hash-keyed animated part owning a contiguous slice of the frame table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
	/// Symbol name hash.
	pub hash: u32,
	/// Raw 20-byte name field.
	pub name: [u8; 20],
	/// First frame in the build's frame table.
	pub frame_index: u32,
	/// Number of frames.
	pub frame_count: u32,
}

impl Symbol {
	/// Name with NUL padding stripped.
	pub fn name_str(&self) -> String {
		fixed_name(&self.name)
	}
}

/// One frame of a symbol: an optional model placed by a 3D affine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SymbolFrame {
	/// Model resource index; `None` when the frame has no visual.
	pub model: Option<u32>,
	/// Placement of the model.
	pub affine: Affine3D,
}

/// Build resource: named symbols and their frames.
#[derive(Debug, Clone, PartialEq)]
pub struct Build {
	/// Declared record size.
	pub struct_size: u32,
	/// Build name.
	pub name: EncodedString,
	/// Symbol table.
	pub symbols: Vec<Symbol>,
	/// Frame table indexed by symbol ranges.
	pub frames: Vec<SymbolFrame>,
}

impl Build {
	/// Decode a `KLEIBLD1` record.
	pub fn decode(cursor: &mut Cursor<'_>) -> Result<Self> {
		expect_signature(cursor, ResourceKind::Build)?;
		let struct_size = cursor.read_u32_le()?;
		let name = EncodedString::read(cursor)?;

		let symbols = cursor.read_counted(|cursor| {
			Ok(Symbol {
				hash: cursor.read_u32_le()?,
				name: cursor.read_array()?,
				frame_index: cursor.read_u32_le()?,
				frame_count: cursor.read_u32_le()?,
			})
		})?;

		let frames = cursor.read_counted(|cursor| {
			Ok(SymbolFrame {
				model: optional_index(cursor.read_u32_le()?),
				affine: Affine3D::read(cursor)?,
			})
		})?;

		Ok(Self {
			struct_size,
			name,
			symbols,
			frames,
		})
	}

	/// Frames owned by `symbol`.
	pub fn symbol_frames(&self, symbol: &Symbol) -> Result<&[SymbolFrame]> {
		table_slice(&self.frames, "symbol frame", symbol.frame_index, symbol.frame_count)
	}
}

/// Borrow `[start, start + count)` from `table` or report the overrun.
pub(crate) fn table_slice<'a, T>(table: &'a [T], name: &'static str, start: u32, count: u32) -> Result<&'a [T]> {
	let out_of_bounds = || KwadError::TableRangeOutOfBounds {
		table: name,
		start,
		count,
		len: table.len(),
	};
	let begin = start as usize;
	let end = begin.checked_add(count as usize).ok_or_else(out_of_bounds)?;
	table.get(begin..end).ok_or_else(out_of_bounds)
}
