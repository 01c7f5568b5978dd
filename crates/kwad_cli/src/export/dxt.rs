use kwad::kwad::{BlockCompression, BlockDecompressor, KwadError, Result};
use texpresso::Format;

/// Block decompressor using `texpresso`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Texpresso;

impl BlockDecompressor for Texpresso {
	fn decompress(&self, data: &[u8], width: u32, height: u32, kind: BlockCompression) -> Result<Vec<u8>> {
		let format = match kind {
			BlockCompression::Dxt5 => Format::Bc3,
		};
		let (width, height) = (width as usize, height as usize);

		let need = format.compressed_size(width, height);
		if data.len() < need {
			return Err(KwadError::BlockDecompress {
				message: format!("{width}x{height} DXT5 needs {need} bytes, got {}", data.len()),
			});
		}

		let mut out = vec![0_u8; width * height * 4];
		format.decompress(&data[..need], width, height, &mut out);
		Ok(out)
	}
}
