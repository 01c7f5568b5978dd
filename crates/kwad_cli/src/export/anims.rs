use std::fs;
use std::path::Path;

use image::RgbaImage;
use kwad::kwad::ResourceIndex;
use kwad::kwad::reconstruct::{BuildDef, BundleDef, FrameVisual, file_stem, find_anim_bundles, reconstruct_bundles};

use crate::cmd::util::{output_path, write_file};
use crate::error::{CliError, Result};
use crate::export::sprite::{SpriteName, SpriteNames, compose_sprite};
use crate::export::textures::{TextureImages, save_png};
use crate::export::xml::{AnimsXml, BuildXml, FrameXml, SymbolXml, to_xml};

/// Counts reported by [`extract_anims`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AnimStats {
	pub written: usize,
	pub failed: usize,
}

/// Reconstruct every animation bundle and write it to `<out>/<dir>/<name>.anim/`.
///
/// A bundle that cannot be reconstructed is logged and skipped.
pub fn extract_anims(index: &ResourceIndex<'_>, out: &Path, images: &mut TextureImages<'_, '_>) -> Result<AnimStats> {
	let bundles = find_anim_bundles(index);
	tracing::info!(count = bundles.len(), "extracting animation bundles");

	let mut stats = AnimStats::default();
	for result in reconstruct_bundles(index, bundles) {
		let bundle = result.bundle;
		let def = match result.outcome {
			Ok(def) => def,
			Err(error) => {
				tracing::warn!(alias = %bundle.alias, %error, "animation bundle skipped");
				stats.failed += 1;
				continue;
			}
		};

		let dir = output_path(out, &bundle.dir).join(format!("{}.anim", bundle.name));
		tracing::info!(bundle = %bundle.alias, build = %def.build.name, clips = def.animations.len(), "animation bundle");
		write_bundle(&dir, &def, images)?;
		stats.written += 1;
	}

	Ok(stats)
}

fn write_bundle(dir: &Path, def: &BundleDef, images: &mut TextureImages<'_, '_>) -> Result<()> {
	fs::create_dir_all(dir).map_err(CliError::io(dir))?;

	let build = build_document(dir, &def.build, images)?;
	write_file(&dir.join("build.xml"), to_xml(&build)?.as_bytes())?;
	write_file(&dir.join("anim.xml"), to_xml(&AnimsXml::from_defs(&def.animations))?.as_bytes())
}

/// Write one sprite per distinct frame image and describe the frames that have one.
fn build_document(dir: &Path, build: &BuildDef, images: &mut TextureImages<'_, '_>) -> Result<BuildXml> {
	let mut names = SpriteNames::default();
	let mut symbols = Vec::with_capacity(build.symbols.len());

	for symbol in &build.symbols {
		let mut frames = Vec::new();
		for frame in &symbol.frames {
			let Some(visual) = &frame.visual else {
				tracing::debug!(symbol = %symbol.name, frame = frame.frame_num, "frame without model");
				continue;
			};
			if visual.size.0 == 0 || visual.size.1 == 0 {
				tracing::warn!(symbol = %symbol.name, frame = frame.frame_num, "empty sprite skipped");
				continue;
			}

			let image = match names.claim(&sprite_base(visual), visual.size) {
				SpriteName::Fresh(name) => {
					save_png(&sprite_image(visual, images), &dir.join(format!("{name}.png")))?;
					name
				}
				SpriteName::Reused(name) => name,
			};

			frames.push(FrameXml {
				framenum: frame.frame_num,
				duration: frame.duration,
				image,
				w: visual.size.0,
				h: visual.size.1,
				x: visual.pivot.0,
				y: visual.pivot.1,
			});
		}

		symbols.push(SymbolXml {
			name: symbol.name.clone(),
			frames,
		});
	}

	Ok(BuildXml {
		name: build.name.clone(),
		symbols,
	})
}

fn sprite_base(visual: &FrameVisual) -> String {
	match &visual.texture_path {
		Some(path) => file_stem(path).to_owned(),
		None => format!("texture-{}", visual.texture),
	}
}

fn sprite_image(visual: &FrameVisual, images: &mut TextureImages<'_, '_>) -> RgbaImage {
	match images.texture_image(visual.texture) {
		Some(texture) => compose_sprite(&texture, visual.size, visual.offset),
		None => {
			tracing::warn!(texture = visual.texture, "texture pixels unavailable, writing blank sprite");
			RgbaImage::new(visual.size.0, visual.size.1)
		}
	}
}
