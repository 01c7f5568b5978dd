use crate::kwad::resource::{Animation, AnimationClip, AnimationFrame, Instance};
use crate::kwad::{Affine3D, Colour, Result};

use super::SymbolNames;

/// Direction tokens in facing-mask bit order.
const FACING_TOKENS: [&str; 8] = ["E", "NE", "N", "NW", "W", "SW", "S", "SE"];

/// 5x5 homogeneous colour transform: channel multipliers on the diagonal, addends on
/// the last row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColourTransform {
	/// Row-major matrix over `(r, g, b, a, w)`.
	pub matrix: [[f32; 5]; 5],
}

impl ColourTransform {
	/// Combine optional multiplier and addend colours.
	///
	/// Returns `None` when both are absent; otherwise a missing multiplier defaults to
	/// one and a missing addend to zero.
	pub fn from_parts(multiply: Option<Colour>, add: Option<Colour>) -> Option<Self> {
		if multiply.is_none() && add.is_none() {
			return None;
		}

		let multiply = multiply.unwrap_or(Colour::ONE).to_array();
		let add = add.unwrap_or(Colour::ZERO).to_array();

		let mut matrix = [[0.0_f32; 5]; 5];
		for channel in 0..4 {
			matrix[channel][channel] = multiply[channel];
			matrix[4][channel] = add[channel];
		}
		matrix[4][4] = 1.0;
		Some(Self { matrix })
	}
}

/// One placed symbol in an animation frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementDef {
	/// Symbol name (or decimal hash when unknown).
	pub symbol: String,
	/// Symbol name hash.
	pub symbol_hash: u32,
	/// Frame of the symbol to display.
	pub frame: u32,
	/// Folder (layer) hash.
	pub folder_hash: u32,
	/// Parent symbol name (or decimal hash when unknown).
	pub parent: String,
	/// Parent symbol hash.
	pub parent_hash: u32,
	/// Element transform.
	pub transform: Option<Affine3D>,
	/// Parent transform.
	pub parent_transform: Option<Affine3D>,
	/// Colour transform.
	pub colour: Option<ColourTransform>,
}

/// One reconstructed animation frame.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimFrameDef {
	/// Frame number within the clip.
	pub index: u32,
	/// Event names raised on this frame.
	pub events: Vec<String>,
	/// Placed elements in draw order.
	pub elements: Vec<ElementDef>,
}

/// One reconstructed clip.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimDef {
	/// Clip name with facing suffix.
	pub name: String,
	/// Clip name as stored.
	pub base_name: String,
	/// Facing mask, `None` when the clip has no facing.
	pub facing: Option<u32>,
	/// Root symbol name (or decimal hash when unknown).
	pub root: String,
	/// Frames per second.
	pub frame_rate: f32,
	/// Frames in order.
	pub frames: Vec<AnimFrameDef>,
}

/// Suffix for a facing mask, e.g. `_E_NE_` for `0b11`.
///
/// No mask, or a mask with none of the eight direction bits set, yields an empty suffix.
pub fn facing_suffix(facing: Option<u32>) -> String {
	let Some(mask) = facing else {
		return String::new();
	};

	let tokens: String = FACING_TOKENS
		.iter()
		.enumerate()
		.filter(|(bit, _)| mask & (1 << bit) != 0)
		.map(|(_, token)| format!("{token}_"))
		.collect();

	if tokens.is_empty() { tokens } else { format!("_{tokens}") }
}

/// Reconstruct every clip of `animation`, naming symbols through `names`.
pub fn reconstruct_animation(animation: &Animation, names: &SymbolNames) -> Result<Vec<AnimDef>> {
	animation.clips.iter().map(|clip| reconstruct_clip(animation, clip, names)).collect()
}

fn reconstruct_clip(animation: &Animation, clip: &AnimationClip, names: &SymbolNames) -> Result<AnimDef> {
	let base_name = clip.name_str();
	let frames = animation
		.clip_frames(clip)?
		.iter()
		.zip(0_u32..)
		.map(|(frame, index)| reconstruct_frame(animation, frame, index, names))
		.collect::<Result<Vec<_>>>()?;

	Ok(AnimDef {
		name: format!("{base_name}{}", facing_suffix(clip.facing)),
		base_name,
		facing: clip.facing,
		root: names.name_or_hash(clip.root_symbol_hash),
		frame_rate: clip.frame_rate,
		frames,
	})
}

fn reconstruct_frame(animation: &Animation, frame: &AnimationFrame, index: u32, names: &SymbolNames) -> Result<AnimFrameDef> {
	let events = animation
		.frame_events(frame)?
		.iter()
		.filter_map(|offset| {
			let name = animation.event_name(*offset);
			if name.is_none() {
				tracing::warn!(offset, "event offset outside event string block");
			}
			name
		})
		.collect();

	let elements = animation
		.frame_instances(frame)?
		.iter()
		.map(|instance| reconstruct_element(animation, instance, names))
		.collect();

	Ok(AnimFrameDef { index, events, elements })
}

fn reconstruct_element(animation: &Animation, instance: &Instance, names: &SymbolNames) -> ElementDef {
	ElementDef {
		symbol: names.name_or_hash(instance.symbol_hash),
		symbol_hash: instance.symbol_hash,
		frame: instance.symbol_frame,
		folder_hash: instance.folder_hash,
		parent: names.name_or_hash(instance.parent_hash),
		parent_hash: instance.parent_hash,
		transform: lookup(&animation.transforms, "transform", instance.transform),
		parent_transform: lookup(&animation.transforms, "transform", instance.parent_transform),
		colour: ColourTransform::from_parts(
			lookup(&animation.colours, "colour", instance.colour_multiply),
			lookup(&animation.colours, "colour", instance.colour_add),
		),
	}
}

/// Resolve an optional table index; an out-of-range index falls back to absent.
fn lookup<T: Copy>(table: &[T], name: &'static str, index: Option<u32>) -> Option<T> {
	let index = index?;
	let item = table.get(index as usize).copied();
	if item.is_none() {
		tracing::warn!(table = name, index, len = table.len(), "index out of range, treating as absent");
	}
	item
}
