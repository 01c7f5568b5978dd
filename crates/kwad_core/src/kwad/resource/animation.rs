use crate::kwad::bytes::Cursor;
use crate::kwad::resource::build::table_slice;
use crate::kwad::resource::{ResourceKind, expect_signature, optional_index};
use crate::kwad::string::fixed_name;
use crate::kwad::{Affine3D, Colour, Result};

/// One named clip: a contiguous slice of the frame table.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationClip {
	/// Clip name hash.
	pub name_hash: u32,
	/// Raw 20-byte name field.
	pub name: [u8; 20],
	/// Hash of the root symbol.
	pub root_symbol_hash: u32,
	/// Playback rate in frames per second.
	pub frame_rate: f32,
	/// Facing-direction bitmask; `None` when the clip has no facing.
	pub facing: Option<u32>,
	/// First frame in the frame table.
	pub frame_index: u32,
	/// Number of frames.
	pub frame_count: u32,
}

impl AnimationClip {
	/// Name with NUL padding stripped.
	pub fn name_str(&self) -> String {
		fixed_name(&self.name)
	}
}

/// One animation frame: ranges into the event and instance tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationFrame {
	/// First event.
	pub event_index: u32,
	/// Number of events.
	pub event_count: u32,
	/// First instance.
	pub instance_index: u32,
	/// Number of instances.
	pub instance_count: u32,
}

/// Placed symbol-frame occurrence with optional transform and colour overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instance {
	/// Hash of the placed symbol.
	pub symbol_hash: u32,
	/// Hash of the folder (layer) the instance belongs to.
	pub folder_hash: u32,
	/// Hash of the parent symbol.
	pub parent_hash: u32,
	/// Frame of the symbol to display.
	pub symbol_frame: u32,
	/// Parent transform index.
	pub parent_transform: Option<u32>,
	/// Transform index.
	pub transform: Option<u32>,
	/// Colour multiplier index.
	pub colour_multiply: Option<u32>,
	/// Colour addend index.
	pub colour_add: Option<u32>,
}

/// Animation resource: flat clip, frame, event, instance, colour, and transform tables.
#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
	/// Declared record size.
	pub struct_size: u32,
	/// Clip table.
	pub clips: Vec<AnimationClip>,
	/// Frame table.
	pub frames: Vec<AnimationFrame>,
	/// Event table: byte offsets into `event_strings`.
	pub events: Vec<u32>,
	/// Instance table.
	pub instances: Vec<Instance>,
	/// Colour table.
	pub colours: Vec<Colour>,
	/// Transform table.
	pub transforms: Vec<Affine3D>,
	/// NUL-terminated event name block.
	pub event_strings: Vec<u8>,
}

impl Animation {
	/// Decode a `KLEIANM1` record.
	pub fn decode(cursor: &mut Cursor<'_>) -> Result<Self> {
		expect_signature(cursor, ResourceKind::Animation)?;
		let struct_size = cursor.read_u32_le()?;

		let clips = cursor.read_counted(|cursor| {
			Ok(AnimationClip {
				name_hash: cursor.read_u32_le()?,
				name: cursor.read_array()?,
				root_symbol_hash: cursor.read_u32_le()?,
				frame_rate: cursor.read_f32_le()?,
				facing: optional_index(cursor.read_u32_le()?),
				frame_index: cursor.read_u32_le()?,
				frame_count: cursor.read_u32_le()?,
			})
		})?;

		let frames = cursor.read_counted(|cursor| {
			Ok(AnimationFrame {
				event_index: cursor.read_u32_le()?,
				event_count: cursor.read_u32_le()?,
				instance_index: cursor.read_u32_le()?,
				instance_count: cursor.read_u32_le()?,
			})
		})?;

		let events = cursor.read_counted(Cursor::read_u32_le)?;

		let instances = cursor.read_counted(|cursor| {
			Ok(Instance {
				symbol_hash: cursor.read_u32_le()?,
				folder_hash: cursor.read_u32_le()?,
				parent_hash: cursor.read_u32_le()?,
				symbol_frame: cursor.read_u32_le()?,
				parent_transform: optional_index(cursor.read_u32_le()?),
				transform: optional_index(cursor.read_u32_le()?),
				colour_multiply: optional_index(cursor.read_u32_le()?),
				colour_add: optional_index(cursor.read_u32_le()?),
			})
		})?;

		let colours = cursor.read_counted(Colour::read)?;
		let transforms = cursor.read_counted(Affine3D::read)?;

		let strings_size = cursor.read_u32_le()? as usize;
		let event_strings = cursor.read_exact(strings_size)?.to_vec();

		Ok(Self {
			struct_size,
			clips,
			frames,
			events,
			instances,
			colours,
			transforms,
			event_strings,
		})
	}

	/// Frames owned by `clip`.
	pub fn clip_frames(&self, clip: &AnimationClip) -> Result<&[AnimationFrame]> {
		table_slice(&self.frames, "animation frame", clip.frame_index, clip.frame_count)
	}

	/// Instances placed by `frame`.
	pub fn frame_instances(&self, frame: &AnimationFrame) -> Result<&[Instance]> {
		table_slice(&self.instances, "instance", frame.instance_index, frame.instance_count)
	}

	/// Event offsets raised by `frame`.
	pub fn frame_events(&self, frame: &AnimationFrame) -> Result<&[u32]> {
		table_slice(&self.events, "event", frame.event_index, frame.event_count)
	}

	/// NUL-terminated event name starting at `offset`.
	pub fn event_name(&self, offset: u32) -> Option<String> {
		let tail = self.event_strings.get(offset as usize..)?;
		let end = tail.iter().position(|byte| *byte == 0).unwrap_or(tail.len());
		Some(String::from_utf8_lossy(&tail[..end]).into_owned())
	}
}
