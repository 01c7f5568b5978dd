//! Per-kind resource records and their binary decoders.

mod animation;
mod blob;
mod build;
mod model;
mod surface;
mod texture;

pub use animation::{Animation, AnimationClip, AnimationFrame, Instance};
pub use blob::Blob;
pub use build::{Build, Symbol, SymbolFrame};
pub use model::{Mesh, Model, Vertex};
pub use surface::{Mipmap, MipmapData, Surface};
pub use texture::{PixelRect, Texture};

use crate::kwad::bytes::Cursor;
use crate::kwad::{KwadError, Result};

/// All-ones index value meaning "no reference".
pub const SENTINEL: u32 = u32::MAX;

/// Convert a raw index field into an explicit optional reference.
pub(crate) fn optional_index(raw: u32) -> Option<u32> {
	(raw != SENTINEL).then_some(raw)
}

/// Prefix shared by every resource signature.
pub const SIGNATURE_PREFIX: &[u8; 4] = b"KLEI";

/// Resource kinds with a registered decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResourceKind {
	/// `BLOB`
	Blob,
	/// `SRF1`
	Surface,
	/// `TEX1`
	Texture,
	/// `BLD1`
	Build,
	/// `MDL1`
	Model,
	/// `ANM1`
	Animation,
}

impl ResourceKind {
	/// Every known kind in registry order.
	pub const ALL: [Self; 6] = [Self::Blob, Self::Surface, Self::Texture, Self::Build, Self::Model, Self::Animation];

	/// Four-byte table tag.
	pub fn tag(self) -> [u8; 4] {
		match self {
			Self::Blob => *b"BLOB",
			Self::Surface => *b"SRF1",
			Self::Texture => *b"TEX1",
			Self::Build => *b"BLD1",
			Self::Model => *b"MDL1",
			Self::Animation => *b"ANM1",
		}
	}

	/// Map a table tag to its kind.
	pub fn from_tag(tag: [u8; 4]) -> Option<Self> {
		Self::ALL.into_iter().find(|kind| kind.tag() == tag)
	}

	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Blob => "blob",
			Self::Surface => "surface",
			Self::Texture => "texture",
			Self::Build => "build",
			Self::Model => "model",
			Self::Animation => "animation",
		}
	}

	/// Full 8-byte internal signature (`KLEI` + tag).
	pub fn signature(self) -> [u8; 8] {
		let mut out = [0_u8; 8];
		out[..4].copy_from_slice(SIGNATURE_PREFIX);
		out[4..].copy_from_slice(&self.tag());
		out
	}
}

/// One decoded package resource.
#[derive(Debug, Clone, PartialEq)]
pub enum Resource {
	/// Sub-rectangle of a surface.
	Texture(Texture),
	/// Pixel surface with mipmaps.
	Surface(Surface),
	/// Opaque payload.
	Blob(Blob),
	/// Symbol and frame tables for an animated build.
	Build(Build),
	/// Textured mesh.
	Model(Model),
	/// Animation clip tables.
	Animation(Animation),
}

impl Resource {
	/// Kind of this resource.
	pub fn kind(&self) -> ResourceKind {
		match self {
			Self::Texture(_) => ResourceKind::Texture,
			Self::Surface(_) => ResourceKind::Surface,
			Self::Blob(_) => ResourceKind::Blob,
			Self::Build(_) => ResourceKind::Build,
			Self::Model(_) => ResourceKind::Model,
			Self::Animation(_) => ResourceKind::Animation,
		}
	}

	/// Internal 8-byte signature.
	pub fn signature(&self) -> [u8; 8] {
		self.kind().signature()
	}

	/// Borrow as a texture.
	pub fn as_texture(&self) -> Option<&Texture> {
		match self {
			Self::Texture(item) => Some(item),
			_ => None,
		}
	}

	/// Borrow as a surface.
	pub fn as_surface(&self) -> Option<&Surface> {
		match self {
			Self::Surface(item) => Some(item),
			_ => None,
		}
	}

	/// Borrow as a blob.
	pub fn as_blob(&self) -> Option<&Blob> {
		match self {
			Self::Blob(item) => Some(item),
			_ => None,
		}
	}

	/// Borrow as a build.
	pub fn as_build(&self) -> Option<&Build> {
		match self {
			Self::Build(item) => Some(item),
			_ => None,
		}
	}

	/// Borrow as a model.
	pub fn as_model(&self) -> Option<&Model> {
		match self {
			Self::Model(item) => Some(item),
			_ => None,
		}
	}

	/// Borrow as an animation.
	pub fn as_animation(&self) -> Option<&Animation> {
		match self {
			Self::Animation(item) => Some(item),
			_ => None,
		}
	}
}

/// Render a four-byte tag as printable text, replacing non-printable bytes with `.`.
pub fn tag_label(tag: [u8; 4]) -> String {
	tag.iter()
		.map(|byte| if byte.is_ascii_graphic() { char::from(*byte) } else { '.' })
		.collect()
}

/// Read and validate the leading 8-byte signature of a `kind` resource.
pub(crate) fn expect_signature(cursor: &mut Cursor<'_>, kind: ResourceKind) -> Result<()> {
	let got: [u8; 8] = cursor.read_array()?;
	let expected = kind.signature();
	if got != expected {
		return Err(KwadError::UnexpectedSignature {
			context: kind.as_str(),
			expected: expected.to_vec(),
			got: got.to_vec(),
		});
	}
	Ok(())
}
