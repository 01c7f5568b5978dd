use std::collections::HashMap;
use std::path::Path;

use image::{ImageFormat, RgbaImage, imageops};
use kwad::kwad::resource::ResourceKind;
use kwad::kwad::{BlockDecompressor, ResourceIndex, decode_surface_pixels};

use crate::cmd::util::{ensure_parent, output_path};
use crate::error::{CliError, Result};

/// Decoded surface images, keyed by surface resource index.
///
/// A surface that fails to decode is logged once and cached as absent.
pub struct TextureImages<'i, 'a> {
	index: &'i ResourceIndex<'a>,
	blocks: &'i dyn BlockDecompressor,
	surfaces: HashMap<u32, Option<RgbaImage>>,
}

impl<'i, 'a> TextureImages<'i, 'a> {
	pub fn new(index: &'i ResourceIndex<'a>, blocks: &'i dyn BlockDecompressor) -> Self {
		Self {
			index,
			blocks,
			surfaces: HashMap::new(),
		}
	}

	/// Base-mipmap image of the surface at `surface`.
	pub fn surface_image(&mut self, surface: u32) -> Option<&RgbaImage> {
		let (index, blocks) = (self.index, self.blocks);
		self.surfaces
			.entry(surface)
			.or_insert_with(|| decode_surface_image(index, blocks, surface))
			.as_ref()
	}

	/// Image a texture extracts to: its sub-rectangle of the parent surface, or the
	/// whole surface when the texture affine is the identity.
	pub fn texture_image(&mut self, texture: u32) -> Option<RgbaImage> {
		let Some(item) = self.index.texture_at(texture) else {
			tracing::warn!(texture, "texture resource missing");
			return None;
		};
		let surface = self.surface_image(item.parent_surface)?;

		Some(match item.sub_rect(surface.width(), surface.height()) {
			Some(rect) => imageops::crop_imm(surface, rect.x, rect.y, rect.width, rect.height).to_image(),
			None => surface.clone(),
		})
	}
}

fn decode_surface_image(index: &ResourceIndex<'_>, blocks: &dyn BlockDecompressor, surface: u32) -> Option<RgbaImage> {
	let Some(item) = index.surface_at(surface) else {
		tracing::warn!(surface, "parent surface missing");
		return None;
	};

	match decode_surface_pixels(item, blocks) {
		Ok(pixels) => RgbaImage::from_raw(pixels.width, pixels.height, pixels.rgba),
		Err(error) => {
			tracing::warn!(surface, %error, "surface pixels could not be decoded");
			None
		}
	}
}

/// Write every aliased texture as PNG under `out`, grouped by parent surface.
///
/// Returns the number of textures written.
pub fn extract_textures(index: &ResourceIndex<'_>, out: &Path, images: &mut TextureImages<'_, '_>) -> Result<usize> {
	let named = index.aliases_of_kind(ResourceKind::Texture);
	tracing::info!(count = named.len(), "extracting textures");

	let mut groups: Vec<(u32, Vec<(&str, u32)>)> = Vec::new();
	for item in &named {
		let Some(texture) = item.resource.as_texture() else {
			continue;
		};
		match groups.iter_mut().find(|(surface, _)| *surface == texture.parent_surface) {
			Some((_, members)) => members.push((item.path, item.index)),
			None => groups.push((texture.parent_surface, vec![(item.path, item.index)])),
		}
	}

	let mut written = 0;
	for (surface, members) in groups {
		let surface_name = index.alias_path_for(surface).map_or_else(|| format!("#{surface}"), str::to_owned);
		tracing::info!(surface = %surface_name, textures = members.len(), "surface");

		for (path, texture) in members {
			let Some(image) = images.texture_image(texture) else {
				continue;
			};
			if image.width() == 0 || image.height() == 0 {
				tracing::warn!(texture = path, "empty texture rectangle skipped");
				continue;
			}
			let target = output_path(out, path);
			ensure_parent(&target)?;
			save_png(&image, &target)?;
			tracing::debug!(texture = path, "written");
			written += 1;
		}
	}

	Ok(written)
}

/// Save `image` as PNG at `path`.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<()> {
	image
		.save_with_format(path, ImageFormat::Png)
		.map_err(|source| CliError::Image {
			path: path.to_path_buf(),
			source,
		})
}
