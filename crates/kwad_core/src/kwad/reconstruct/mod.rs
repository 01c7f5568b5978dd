//! Turns flat build/animation tables into navigable per-symbol and per-clip structures.
//!
//! Reconstruction runs in two phases: every bundle's build is processed first, collecting
//! symbol hash → name pairs, and only then are animations processed against the complete
//! name table.

mod animation;
mod build;

pub use animation::{AnimDef, AnimFrameDef, ColourTransform, ElementDef, facing_suffix, reconstruct_animation};
pub use build::{BuildDef, FrameVisual, PixelOffset, SymbolDef, SymbolFrameDef, is_rectangle, reconstruct_build};

use std::collections::HashMap;

use crate::kwad::resource::ResourceKind;
use crate::kwad::{KwadError, ResourceIndex, Result, Version};

/// Extension of the build that accompanies an animation alias.
pub const BUILD_EXTENSION: &str = "abld";

/// Symbol hash → name table accumulated across builds.
#[derive(Debug, Clone, Default)]
pub struct SymbolNames {
	names: HashMap<u32, String>,
}

impl SymbolNames {
	/// Empty table.
	pub fn new() -> Self {
		Self::default()
	}

	/// Record a name; the first name seen for a hash is kept.
	pub fn insert(&mut self, hash: u32, name: &str) {
		self.names.entry(hash).or_insert_with(|| name.to_owned());
	}

	/// Name for `hash`, if known.
	pub fn get(&self, hash: u32) -> Option<&str> {
		self.names.get(&hash).map(String::as_str)
	}

	/// Name for `hash`, falling back to its decimal form.
	pub fn name_or_hash(&self, hash: u32) -> String {
		self.get(hash).map_or_else(|| hash.to_string(), str::to_owned)
	}

	/// Number of known names.
	pub fn len(&self) -> usize {
		self.names.len()
	}

	/// Whether no names are known.
	pub fn is_empty(&self) -> bool {
		self.names.is_empty()
	}
}

/// Animation alias paired with the build found next to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimBundle {
	/// Alias path of the animation.
	pub alias: String,
	/// File stem of the alias.
	pub name: String,
	/// Directory part of the alias (may be empty).
	pub dir: String,
	/// Animation resource index.
	pub animation: u32,
	/// Alias path expected to name the build.
	pub build_alias: String,
	/// Build resource index, if the build alias resolves to a build.
	pub build: Option<u32>,
}

/// Reconstructed bundle.
#[derive(Debug, Clone, PartialEq)]
pub struct BundleDef {
	/// Reconstructed build.
	pub build: BuildDef,
	/// Reconstructed clips.
	pub animations: Vec<AnimDef>,
}

/// Outcome of reconstructing one bundle.
#[derive(Debug)]
pub struct BundleResult {
	/// Source bundle.
	pub bundle: AnimBundle,
	/// Reconstruction or the reason it failed.
	pub outcome: Result<BundleDef>,
}

/// Collect one bundle per alias whose table tag is `ANM1`, in alias table order.
///
/// A version 2 animation slot that failed to decode still forms a bundle, so its failure
/// is reported by [`reconstruct_bundles`]. Version 1 animations are never decoded and are
/// left out.
pub fn find_anim_bundles(index: &ResourceIndex<'_>) -> Vec<AnimBundle> {
	let package = index.package();
	let animation_tag = ResourceKind::Animation.tag();

	package
		.aliases()
		.iter()
		.filter(|alias| {
			let tag = package.resource_infos().get(alias.resource_index as usize).map(|info| info.tag);
			if tag != Some(animation_tag) {
				return false;
			}
			if index.animation_at(alias.resource_index).is_some() {
				return true;
			}
			if package.version() == Version::V1 {
				tracing::debug!(alias = %alias.path_str(), "version 1 animation not decoded");
				return false;
			}
			tracing::warn!(alias = %alias.path_str(), index = alias.resource_index, "animation alias targets an undecoded slot");
			true
		})
		.map(|alias| {
			let path = alias.path_str();
			let build_alias = change_extension(&path, BUILD_EXTENSION);
			let build = index
				.alias_target(&build_alias)
				.filter(|target| index.build_at(*target).is_some());
			AnimBundle {
				alias: path.clone().into_owned(),
				name: file_stem(&path).to_owned(),
				dir: parent_dir(&path).to_owned(),
				animation: alias.resource_index,
				build_alias,
				build,
			}
		})
		.collect()
}

/// Reconstruct bundles: all builds first, then all animations against the shared name table.
pub fn reconstruct_bundles(index: &ResourceIndex<'_>, bundles: Vec<AnimBundle>) -> Vec<BundleResult> {
	let mut names = SymbolNames::new();
	let builds: Vec<Result<BuildDef>> = bundles
		.iter()
		.map(|bundle| {
			let build = bundle.build.and_then(|target| index.build_at(target)).ok_or_else(|| {
				KwadError::UnresolvedReference {
					reference: format!("build alias {} for animation {}", bundle.build_alias, bundle.alias),
				}
			})?;
			reconstruct_build(index, build, &mut names)
		})
		.collect();

	bundles
		.into_iter()
		.zip(builds)
		.map(|(bundle, build)| {
			let outcome = build.and_then(|build| {
				let animation = index.animation_at(bundle.animation).ok_or_else(|| KwadError::UnresolvedReference {
					reference: format!("animation resource #{}", bundle.animation),
				})?;
				let animations = reconstruct_animation(animation, &names)?;
				Ok(BundleDef { build, animations })
			});
			BundleResult { bundle, outcome }
		})
		.collect()
}

fn split_at_separator(path: &str) -> (&str, &str) {
	match path.rfind(['/', '\\']) {
		Some(at) => (&path[..at], &path[at + 1..]),
		None => ("", path),
	}
}

/// Directory part of an alias path.
pub fn parent_dir(path: &str) -> &str {
	split_at_separator(path).0
}

/// Final path component without its extension.
pub fn file_stem(path: &str) -> &str {
	let name = split_at_separator(path).1;
	match name.rfind('.') {
		Some(0) | None => name,
		Some(at) => &name[..at],
	}
}

/// Replace (or append) the extension of the final path component.
pub fn change_extension(path: &str, extension: &str) -> String {
	let (_, name) = split_at_separator(path);
	let stem_len = match name.rfind('.') {
		Some(0) | None => name.len(),
		Some(at) => at,
	};
	let cut = path.len() - (name.len() - stem_len);
	format!("{}.{extension}", &path[..cut])
}

#[cfg(test)]
mod tests;
