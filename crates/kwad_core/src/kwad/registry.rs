use crate::kwad::bytes::Cursor;
use crate::kwad::resource::{Animation, Blob, Build, Model, Resource, ResourceKind, Surface, Texture};
use crate::kwad::{Result, Version};

/// Decoder entry point for one resource layout.
pub type DecodeFn = fn(&mut Cursor<'_>) -> Result<Resource>;

/// Outcome of looking up a table tag.
#[derive(Clone, Copy)]
pub enum Dispatch {
	/// Decode with the given function.
	Decode(ResourceKind, DecodeFn),
	/// Known kind deliberately not decoded for this container version.
	Skip(ResourceKind),
	/// No decoder registered for the tag.
	Unknown,
}

impl std::fmt::Debug for Dispatch {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Decode(kind, _) => f.debug_tuple("Decode").field(kind).finish(),
			Self::Skip(kind) => f.debug_tuple("Skip").field(kind).finish(),
			Self::Unknown => f.write_str("Unknown"),
		}
	}
}

/// Static tag → decoder table.
const DEFAULT_DECODERS: [(ResourceKind, DecodeFn); 6] = [
	(ResourceKind::Blob, decode_blob),
	(ResourceKind::Surface, decode_surface),
	(ResourceKind::Texture, decode_texture),
	(ResourceKind::Build, decode_build),
	(ResourceKind::Model, decode_model),
	(ResourceKind::Animation, decode_animation),
];

fn decode_blob(cursor: &mut Cursor<'_>) -> Result<Resource> {
	Blob::decode(cursor).map(Resource::Blob)
}

fn decode_surface(cursor: &mut Cursor<'_>) -> Result<Resource> {
	Surface::decode(cursor).map(Resource::Surface)
}

fn decode_surface_v1(cursor: &mut Cursor<'_>) -> Result<Resource> {
	Surface::decode_v1(cursor).map(Resource::Surface)
}

fn decode_texture(cursor: &mut Cursor<'_>) -> Result<Resource> {
	Texture::decode(cursor).map(Resource::Texture)
}

fn decode_build(cursor: &mut Cursor<'_>) -> Result<Resource> {
	Build::decode(cursor).map(Resource::Build)
}

fn decode_model(cursor: &mut Cursor<'_>) -> Result<Resource> {
	Model::decode(cursor).map(Resource::Model)
}

fn decode_animation(cursor: &mut Cursor<'_>) -> Result<Resource> {
	Animation::decode(cursor).map(Resource::Animation)
}

/// Select the decoder for `tag` in a `version` container.
///
/// Version 1 overrides: surfaces use the v1 mipmap layout, and animations are
/// skipped because their layout is incompatible with version 2.
pub fn dispatch(tag: [u8; 4], version: Version) -> Dispatch {
	let Some(kind) = ResourceKind::from_tag(tag) else {
		return Dispatch::Unknown;
	};

	match (version, kind) {
		(Version::V1, ResourceKind::Surface) => Dispatch::Decode(kind, decode_surface_v1),
		(Version::V1, ResourceKind::Animation) => Dispatch::Skip(kind),
		_ => DEFAULT_DECODERS
			.iter()
			.find(|(entry, _)| *entry == kind)
			.map_or(Dispatch::Unknown, |(kind, decode)| Dispatch::Decode(*kind, *decode)),
	}
}
