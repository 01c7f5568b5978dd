use std::io::Read;

use flate2::read::DeflateDecoder;

use crate::kwad::resource::{MipmapData, Surface};
use crate::kwad::{KwadError, Result};

/// Length of the zlib header preceding the raw deflate stream in mipmap payloads.
const ZLIB_HEADER_LEN: usize = 2;

/// Upper bound on deflate's expansion ratio.
const MAX_DEFLATE_RATIO: usize = 1032;

/// Block-compression scheme of a surface payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockCompression {
	/// DXT5 (BC3) blocks.
	Dxt5,
}

/// Collaborator that expands block-compressed pixels to RGBA8.
pub trait BlockDecompressor {
	/// Expand `data` into `width * height * 4` RGBA bytes.
	fn decompress(&self, data: &[u8], width: u32, height: u32, kind: BlockCompression) -> Result<Vec<u8>>;
}

/// RGBA8 pixels of a surface's base mipmap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfacePixels {
	/// Width in pixels.
	pub width: u32,
	/// Height in pixels.
	pub height: u32,
	/// Row-major RGBA8 bytes.
	pub rgba: Vec<u8>,
}

/// Inflate a mipmap payload, skipping its two zlib header bytes.
pub fn inflate_mipmap(data: &[u8], size_hint: u32) -> Result<Vec<u8>> {
	let stream = data.get(ZLIB_HEADER_LEN..).ok_or(KwadError::UnexpectedEndOfData {
		at: 0,
		need: ZLIB_HEADER_LEN,
		rem: data.len(),
	})?;

	// The declared size is untrusted; cap it by what the stream can expand to.
	let capacity = (size_hint as usize).min(stream.len().saturating_mul(MAX_DEFLATE_RATIO));
	let mut out = Vec::with_capacity(capacity);
	DeflateDecoder::new(stream).read_to_end(&mut out).map_err(KwadError::Inflate)?;
	Ok(out)
}

/// Decode the base mipmap of `surface` to RGBA8.
pub fn decode_surface_pixels(surface: &Surface, blocks: &dyn BlockDecompressor) -> Result<SurfacePixels> {
	let mip = surface.base_mipmap().ok_or(KwadError::MissingMipmap)?;

	let mut pixels = match &mip.data {
		MipmapData::Raw(bytes) => bytes.clone(),
		MipmapData::Deflated(bytes) => inflate_mipmap(bytes, mip.size)?,
	};

	if surface.dxt_compressed {
		pixels = blocks.decompress(&pixels, mip.width, mip.height, BlockCompression::Dxt5)?;
	}

	let expected = mip.width as usize * mip.height as usize * 4;
	if pixels.len() != expected {
		return Err(KwadError::PixelBufferSize {
			width: mip.width,
			height: mip.height,
			expected,
			got: pixels.len(),
		});
	}

	Ok(SurfacePixels {
		width: mip.width,
		height: mip.height,
		rgba: pixels,
	})
}
