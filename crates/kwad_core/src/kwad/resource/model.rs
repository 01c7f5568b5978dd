use crate::kwad::Result;
use crate::kwad::bytes::Cursor;
use crate::kwad::resource::{ResourceKind, expect_signature};

/// Mesh vertex: position and texture coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
	/// Horizontal position.
	pub x: f32,
	/// Vertical position.
	pub y: f32,
	/// Horizontal texture coordinate.
	pub u: f32,
	/// Vertical texture coordinate.
	pub v: f32,
}

/// Indexed triangle mesh embedded in a model.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
	/// Mesh signature as stored.
	pub signature: [u8; 8],
	/// Declared polygon count.
	pub polygon_count: u32,
	/// Index buffer.
	pub indices: Vec<i32>,
	/// Vertex buffer.
	pub vertices: Vec<Vertex>,
}

impl Mesh {
	fn decode(cursor: &mut Cursor<'_>) -> Result<Self> {
		let signature = cursor.read_array()?;
		let polygon_count = cursor.read_u32_le()?;
		let index_count = cursor.read_u32_le()?;
		let vertex_count = cursor.read_u32_le()?;

		let mut indices = Vec::new();
		for _ in 0..index_count {
			indices.push(cursor.read_i32_le()?);
		}

		let mut vertices = Vec::new();
		for _ in 0..vertex_count {
			vertices.push(Vertex {
				x: cursor.read_f32_le()?,
				y: cursor.read_f32_le()?,
				u: cursor.read_f32_le()?,
				v: cursor.read_f32_le()?,
			});
		}

		Ok(Self {
			signature,
			polygon_count,
			indices,
			vertices,
		})
	}
}

/// Textured mesh resource.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
	/// Resource index of the texture sampled by the mesh.
	pub texture: u32,
	/// Geometry.
	pub mesh: Mesh,
}

impl Model {
	/// Decode a `KLEIMDL1` record.
	pub fn decode(cursor: &mut Cursor<'_>) -> Result<Self> {
		expect_signature(cursor, ResourceKind::Model)?;
		Ok(Self {
			texture: cursor.read_u32_le()?,
			mesh: Mesh::decode(cursor)?,
		})
	}
}
