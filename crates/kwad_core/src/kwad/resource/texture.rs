use crate::kwad::bytes::Cursor;
use crate::kwad::resource::{ResourceKind, expect_signature};
use crate::kwad::{Affine2D, Result};

/// Sub-rectangle of a parent surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Texture {
	/// Declared record size.
	pub struct_size: u32,
	/// Resource index of the parent surface.
	pub parent_surface: u32,
	/// Width in pixels.
	pub width: u32,
	/// Height in pixels.
	pub height: u32,
	/// Placement inside the parent surface, translation normalized to surface size.
	pub affine: Affine2D,
}

/// Integer pixel rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
	/// Left edge.
	pub x: u32,
	/// Top edge.
	pub y: u32,
	/// Width.
	pub width: u32,
	/// Height.
	pub height: u32,
}

impl Texture {
	/// Decode a `KLEITEX1` record.
	pub fn decode(cursor: &mut Cursor<'_>) -> Result<Self> {
		expect_signature(cursor, ResourceKind::Texture)?;
		Ok(Self {
			struct_size: cursor.read_u32_le()?,
			parent_surface: cursor.read_u32_le()?,
			width: cursor.read_u32_le()?,
			height: cursor.read_u32_le()?,
			affine: Affine2D::read(cursor)?,
		})
	}

	/// Pixel rectangle inside a `surface_width` x `surface_height` image.
	///
	/// Returns `None` when the affine is the identity, meaning the texture covers the
	/// whole surface.
	pub fn sub_rect(&self, surface_width: u32, surface_height: u32) -> Option<PixelRect> {
		if self.affine.is_identity() {
			return None;
		}

		Some(PixelRect {
			x: (self.affine.translate_x * surface_width as f32) as u32,
			y: (self.affine.translate_y * surface_height as f32) as u32,
			width: self.width,
			height: self.height,
		})
	}

	/// Size of the image this texture extracts to.
	pub fn image_size(&self, surface_width: u32, surface_height: u32) -> (u32, u32) {
		match self.sub_rect(surface_width, surface_height) {
			Some(rect) => (rect.width, rect.height),
			None => (surface_width, surface_height),
		}
	}
}
