use std::collections::HashMap;

use image::{RgbaImage, imageops};
use kwad::kwad::reconstruct::PixelOffset;

/// Transparent `size` canvas with `texture` drawn at the frame's pixel offset.
pub fn compose_sprite(texture: &RgbaImage, size: (u32, u32), offset: PixelOffset) -> RgbaImage {
	let mut canvas = RgbaImage::new(size.0, size.1);
	imageops::overlay(&mut canvas, texture, i64::from(offset.left), i64::from(offset.top));
	canvas
}

/// Outcome of [`SpriteNames::claim`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpriteName {
	/// First use of this name; the sprite must be written.
	Fresh(String),
	/// An identically sized sprite already carries this name.
	Reused(String),
}

/// Sprite names allocated within one bundle directory.
#[derive(Debug, Default)]
pub struct SpriteNames {
	sizes: HashMap<String, (u32, u32)>,
}

impl SpriteNames {
	/// Allocate a name for a `size` sprite cut from the texture named `base`.
	///
	/// A name already holding a sprite of the same size is reused; otherwise `-1`,
	/// `-2`, ... postfixes are tried in order.
	pub fn claim(&mut self, base: &str, size: (u32, u32)) -> SpriteName {
		let mut name = base.to_owned();
		let mut postfix = 1;
		loop {
			match self.sizes.get(&name) {
				Some(existing) if *existing == size => return SpriteName::Reused(name),
				Some(_) => {
					name = format!("{base}-{postfix}");
					postfix += 1;
				}
				None => {
					self.sizes.insert(name.clone(), size);
					return SpriteName::Fresh(name);
				}
			}
		}
	}
}
