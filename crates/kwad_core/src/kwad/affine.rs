use crate::kwad::Result;
use crate::kwad::bytes::Cursor;

/// 2D affine transform stored as six floats.
///
/// Wire order: `scale_x, c2r1, c1r2, scale_y, translate_x, translate_y`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine2D {
	/// Horizontal scale.
	pub scale_x: f32,
	/// Column 2, row 1 shear term.
	pub c2r1: f32,
	/// Column 1, row 2 shear term.
	pub c1r2: f32,
	/// Vertical scale.
	pub scale_y: f32,
	/// Horizontal translation, normalized to the parent surface width.
	pub translate_x: f32,
	/// Vertical translation, normalized to the parent surface height.
	pub translate_y: f32,
}

impl Affine2D {
	/// Identity transform.
	pub const IDENTITY: Self = Self {
		scale_x: 1.0,
		c2r1: 0.0,
		c1r2: 0.0,
		scale_y: 1.0,
		translate_x: 0.0,
		translate_y: 0.0,
	};

	/// Read six floats in wire order.
	pub fn read(cursor: &mut Cursor<'_>) -> Result<Self> {
		Ok(Self {
			scale_x: cursor.read_f32_le()?,
			c2r1: cursor.read_f32_le()?,
			c1r2: cursor.read_f32_le()?,
			scale_y: cursor.read_f32_le()?,
			translate_x: cursor.read_f32_le()?,
			translate_y: cursor.read_f32_le()?,
		})
	}

	/// Exact comparison against the identity transform.
	pub fn is_identity(&self) -> bool {
		*self == Self::IDENTITY
	}
}

/// 3D affine transform stored column-major as four columns of three floats.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine3D {
	/// `columns[c][r]` is column `c + 1`, row `r + 1`.
	pub columns: [[f32; 3]; 4],
}

impl Affine3D {
	/// Identity transform.
	pub const IDENTITY: Self = Self {
		columns: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [0.0, 0.0, 0.0]],
	};

	/// Read twelve floats in column-major order.
	pub fn read(cursor: &mut Cursor<'_>) -> Result<Self> {
		let mut columns = [[0.0_f32; 3]; 4];
		for column in &mut columns {
			for cell in column.iter_mut() {
				*cell = cursor.read_f32_le()?;
			}
		}
		Ok(Self { columns })
	}

	/// 2D `a` term (column 1, row 1).
	pub fn a(&self) -> f32 {
		self.columns[0][0]
	}

	/// 2D `b` term (column 1, row 2).
	pub fn b(&self) -> f32 {
		self.columns[0][1]
	}

	/// 2D `c` term (column 2, row 1).
	pub fn c(&self) -> f32 {
		self.columns[1][0]
	}

	/// 2D `d` term (column 2, row 2).
	pub fn d(&self) -> f32 {
		self.columns[1][1]
	}

	/// Horizontal translation (column 4, row 1).
	pub fn tx(&self) -> f32 {
		self.columns[3][0]
	}

	/// Vertical translation (column 4, row 2).
	pub fn ty(&self) -> f32 {
		self.columns[3][1]
	}
}

/// RGBA color record stored as four floats.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Colour {
	/// Red channel.
	pub r: f32,
	/// Green channel.
	pub g: f32,
	/// Blue channel.
	pub b: f32,
	/// Alpha channel.
	pub a: f32,
}

impl Colour {
	/// Multiplier that leaves every channel unchanged.
	pub const ONE: Self = Self { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };
	/// Addend that leaves every channel unchanged.
	pub const ZERO: Self = Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 };

	/// Read four floats in `r, g, b, a` order.
	pub fn read(cursor: &mut Cursor<'_>) -> Result<Self> {
		Ok(Self {
			r: cursor.read_f32_le()?,
			g: cursor.read_f32_le()?,
			b: cursor.read_f32_le()?,
			a: cursor.read_f32_le()?,
		})
	}

	/// Channels as an array in wire order.
	pub fn to_array(self) -> [f32; 4] {
		[self.r, self.g, self.b, self.a]
	}
}

#[cfg(test)]
mod tests;
