use crate::kwad::resource::{Build, SymbolFrame, Vertex};
use crate::kwad::{Affine3D, ResourceIndex, Result};

use super::SymbolNames;

/// Left/top padding derived from a rectangular quad's minimum corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PixelOffset {
	/// Minimum vertex X, truncated toward zero.
	pub left: i32,
	/// Minimum vertex Y, truncated toward zero.
	pub top: i32,
}

/// Sprite geometry for a symbol frame that has a model.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameVisual {
	/// Model resource index.
	pub model: u32,
	/// Texture resource index sampled by the model.
	pub texture: u32,
	/// First alias path of the texture, if it has one.
	pub texture_path: Option<String>,
	/// Padding applied on each side of the sprite.
	pub offset: PixelOffset,
	/// Size of the extracted texture image.
	pub source_size: (u32, u32),
	/// Sprite size: source rounded up to even, plus `2 * offset`.
	pub size: (u32, u32),
	/// Sprite pivot: frame translation plus half the sprite size.
	pub pivot: (f32, f32),
}

/// One frame of a reconstructed symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolFrameDef {
	/// Position of the frame within its symbol.
	pub frame_num: u32,
	/// Frame duration in animation frames.
	pub duration: u32,
	/// Placement affine.
	pub affine: Affine3D,
	/// Sprite geometry; `None` for frames without a model.
	pub visual: Option<FrameVisual>,
}

/// Reconstructed symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolDef {
	/// Name hash.
	pub hash: u32,
	/// Symbol name.
	pub name: String,
	/// Frames in order.
	pub frames: Vec<SymbolFrameDef>,
}

/// Reconstructed build.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildDef {
	/// Build name.
	pub name: String,
	/// Symbols in table order.
	pub symbols: Vec<SymbolDef>,
}

/// Reconstruct `build`, recording every symbol's hash → name pair in `names`.
pub fn reconstruct_build(index: &ResourceIndex<'_>, build: &Build, names: &mut SymbolNames) -> Result<BuildDef> {
	let mut symbols = Vec::with_capacity(build.symbols.len());
	for symbol in &build.symbols {
		let name = symbol.name_str();
		names.insert(symbol.hash, &name);

		let frames = build
			.symbol_frames(symbol)?
			.iter()
			.zip(0_u32..)
			.map(|(frame, frame_num)| SymbolFrameDef {
				frame_num,
				duration: 1,
				affine: frame.affine,
				visual: frame_visual(index, frame),
			})
			.collect();

		symbols.push(SymbolDef {
			hash: symbol.hash,
			name,
			frames,
		});
	}

	Ok(BuildDef {
		name: build.name.as_str().into_owned(),
		symbols,
	})
}

fn frame_visual(index: &ResourceIndex<'_>, frame: &SymbolFrame) -> Option<FrameVisual> {
	let model_index = frame.model?;
	let Some(model) = index.model_at(model_index) else {
		tracing::warn!(model = model_index, "symbol frame references a missing model");
		return None;
	};

	let offset = match model.mesh.vertices.as_slice() {
		[a, b, c, d] if is_rectangle([a, b, c, d]) => rectangle_offset([a, b, c, d]),
		_ => PixelOffset::default(),
	};

	let source_size = texture_image_size(index, model.texture);
	let size = (padded(source_size.0, offset.left), padded(source_size.1, offset.top));
	let pivot = (
		frame.affine.tx() + size.0 as f32 / 2.0,
		frame.affine.ty() + size.1 as f32 / 2.0,
	);

	Some(FrameVisual {
		model: model_index,
		texture: model.texture,
		texture_path: index.alias_path_for(model.texture).map(str::to_owned),
		offset,
		source_size,
		size,
		pivot,
	})
}

/// Size of the image a texture extracts to: its sub-rectangle, or the whole parent surface.
fn texture_image_size(index: &ResourceIndex<'_>, texture_index: u32) -> (u32, u32) {
	let Some(texture) = index.texture_at(texture_index) else {
		tracing::warn!(texture = texture_index, "model references a missing texture");
		return (0, 0);
	};

	match index.surface_at(texture.parent_surface).and_then(|surface| surface.base_mipmap()) {
		Some(mip) => texture.image_size(mip.width, mip.height),
		None => (texture.width, texture.height),
	}
}

/// Round up to even, then grow by `2 * offset`, saturating at zero.
fn padded(length: u32, offset: i32) -> u32 {
	let even = i64::from(length) + i64::from(length % 2);
	(even + 2 * i64::from(offset)).clamp(0, i64::from(u32::MAX)) as u32
}

/// Whether four vertices are equidistant from their centroid.
///
/// The centroid is summed in single precision and the squared distances are compared
/// exactly in double precision.
#[allow(clippy::float_cmp)]
pub fn is_rectangle(vertices: [&Vertex; 4]) -> bool {
	let sum_x: f32 = vertices.iter().map(|vertex| vertex.x).sum();
	let sum_y: f32 = vertices.iter().map(|vertex| vertex.y).sum();
	let cx = f64::from(sum_x / 4.0);
	let cy = f64::from(sum_y / 4.0);

	let distances = vertices.map(|vertex| (cx - f64::from(vertex.x)).powi(2) + (cy - f64::from(vertex.y)).powi(2));
	distances[1..].iter().all(|distance| *distance == distances[0])
}

fn rectangle_offset(vertices: [&Vertex; 4]) -> PixelOffset {
	let min_x = vertices.iter().map(|vertex| vertex.x).fold(f32::INFINITY, f32::min);
	let min_y = vertices.iter().map(|vertex| vertex.y).fold(f32::INFINITY, f32::min);
	PixelOffset {
		left: min_x as i32,
		top: min_y as i32,
	}
}
