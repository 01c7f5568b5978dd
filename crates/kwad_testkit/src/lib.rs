//! Shared test helpers for workspace crates: byte-level builders for synthetic KWAD packages.

/// All-ones "no reference" index value.
pub const SENTINEL: u32 = u32::MAX;

/// Affine3D identity in wire order.
pub const IDENTITY_3D: [f32; 12] = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0];

/// Affine2D identity in wire order.
pub const IDENTITY_2D: [f32; 6] = [1.0, 0.0, 0.0, 1.0, 0.0, 0.0];

/// Little-endian byte sink.
#[derive(Debug, Default, Clone)]
pub struct ByteWriter {
	bytes: Vec<u8>,
}

impl ByteWriter {
	/// Empty writer.
	pub fn new() -> Self {
		Self::default()
	}

	/// Append a little-endian `u32`.
	pub fn u32(&mut self, value: u32) -> &mut Self {
		self.bytes.extend_from_slice(&value.to_le_bytes());
		self
	}

	/// Append a little-endian `i32`.
	pub fn i32(&mut self, value: i32) -> &mut Self {
		self.bytes.extend_from_slice(&value.to_le_bytes());
		self
	}

	/// Append a little-endian `f32`.
	pub fn f32(&mut self, value: f32) -> &mut Self {
		self.bytes.extend_from_slice(&value.to_le_bytes());
		self
	}

	/// Append each float in order.
	pub fn floats(&mut self, values: &[f32]) -> &mut Self {
		for value in values {
			self.f32(*value);
		}
		self
	}

	/// Append raw bytes.
	pub fn raw(&mut self, bytes: &[u8]) -> &mut Self {
		self.bytes.extend_from_slice(bytes);
		self
	}

	/// Append a `KLEI` + tag resource signature.
	pub fn signature(&mut self, tag: &[u8; 4]) -> &mut Self {
		self.raw(b"KLEI").raw(tag)
	}

	/// Append a length-prefixed string zero-padded to 4 bytes.
	pub fn encoded_string(&mut self, value: &str) -> &mut Self {
		let len = value.len();
		self.u32(len as u32).raw(value.as_bytes());
		let pad = (4 - len % 4) % 4;
		self.bytes.extend(std::iter::repeat_n(0_u8, pad));
		self
	}

	/// Append a NUL-padded 20-byte name.
	pub fn fixed_name(&mut self, value: &str) -> &mut Self {
		let mut field = [0_u8; 20];
		let take = value.len().min(20);
		field[..take].copy_from_slice(&value.as_bytes()[..take]);
		self.raw(&field)
	}

	/// Current length.
	pub fn len(&self) -> usize {
		self.bytes.len()
	}

	/// Whether nothing has been written.
	pub fn is_empty(&self) -> bool {
		self.bytes.is_empty()
	}

	/// Take the written bytes.
	pub fn finish(&mut self) -> Vec<u8> {
		std::mem::take(&mut self.bytes)
	}
}

/// Container layout generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageVersion {
	/// `KLEIPKG1`
	V1,
	/// `KLEIPKG2`
	V2,
}

#[derive(Debug, Clone)]
struct ResourceEntry {
	tag: [u8; 4],
	body: Vec<u8>,
}

/// Assembles a package: header, resource table, alias table, then resource bodies.
#[derive(Debug, Clone)]
pub struct PackageBuilder {
	version: PackageVersion,
	slab_count: u32,
	resources: Vec<ResourceEntry>,
	aliases: Vec<(String, u32)>,
}

impl PackageBuilder {
	/// Builder for a version 1 package.
	pub fn v1() -> Self {
		Self::new(PackageVersion::V1)
	}

	/// Builder for a version 2 package.
	pub fn v2() -> Self {
		Self::new(PackageVersion::V2)
	}

	fn new(version: PackageVersion) -> Self {
		Self {
			version,
			slab_count: 1,
			resources: Vec::new(),
			aliases: Vec::new(),
		}
	}

	/// Append a resource and return its table index.
	pub fn resource(&mut self, tag: &[u8; 4], body: Vec<u8>) -> u32 {
		self.resources.push(ResourceEntry { tag: *tag, body });
		(self.resources.len() - 1) as u32
	}

	/// Append an alias.
	pub fn alias(&mut self, path: &str, index: u32) -> &mut Self {
		self.aliases.push((path.to_owned(), index));
		self
	}

	/// Serialize the package and return it with each resource's absolute offset.
	pub fn build_with_offsets(&self) -> (Vec<u8>, Vec<u32>) {
		let record_size = match self.version {
			PackageVersion::V1 => 12,
			PackageVersion::V2 => 16,
		};
		let alias_bytes: usize = self.aliases.iter().map(|(path, _)| 8 + path.len() + (4 - path.len() % 4) % 4).sum();
		let header_size = 8 + 4 + 4 + 4 + self.resources.len() * record_size + 4 + alias_bytes;

		let mut offsets = Vec::with_capacity(self.resources.len());
		let mut next = header_size;
		for entry in &self.resources {
			offsets.push(next as u32);
			next += entry.body.len();
		}

		let mut out = ByteWriter::new();
		out.raw(match self.version {
			PackageVersion::V1 => b"KLEIPKG1",
			PackageVersion::V2 => b"KLEIPKG2",
		});
		out.u32(next as u32).u32(self.slab_count);

		out.u32(self.resources.len() as u32);
		for (entry, offset) in self.resources.iter().zip(&offsets) {
			out.u32(0).u32(entry.body.len() as u32).u32(*offset);
			if self.version == PackageVersion::V2 {
				out.raw(&entry.tag);
			}
		}

		out.u32(self.aliases.len() as u32);
		for (path, index) in &self.aliases {
			out.encoded_string(path).u32(*index);
		}

		for entry in &self.resources {
			out.raw(&entry.body);
		}

		(out.finish(), offsets)
	}

	/// Serialize the package.
	pub fn build(&self) -> Vec<u8> {
		self.build_with_offsets().0
	}
}

/// Resource body encoders, one per kind.
pub mod bodies {
	use super::ByteWriter;

	/// `KLEIBLOB` body.
	pub fn blob(data: &[u8]) -> Vec<u8> {
		ByteWriter::new().signature(b"BLOB").u32(data.len() as u32).raw(data).finish()
	}

	/// `KLEITEX1` body.
	pub fn texture(parent_surface: u32, width: u32, height: u32, affine: [f32; 6]) -> Vec<u8> {
		ByteWriter::new()
			.signature(b"TEX1")
			.u32(48)
			.u32(parent_surface)
			.u32(width)
			.u32(height)
			.floats(&affine)
			.finish()
	}

	fn surface_header(out: &mut ByteWriter, dxt: bool, mip_count: u32, total: u32) {
		out.signature(b"SRF1").u32(0).u32(0x1908).u32(0x1401).u32(u32::from(dxt)).u32(mip_count).u32(total);
	}

	/// Version 2 `KLEISRF1` body with one raw mipmap.
	pub fn surface_raw(width: u32, height: u32, pixels: &[u8], dxt: bool) -> Vec<u8> {
		let mut out = ByteWriter::new();
		surface_header(&mut out, dxt, 1, pixels.len() as u32);
		out.u32(pixels.len() as u32).u32(width).u32(height).u32(0).raw(pixels);
		out.finish()
	}

	/// Version 2 `KLEISRF1` body with one zlib-compressed mipmap.
	pub fn surface_deflated(width: u32, height: u32, size: u32, zlib: &[u8], dxt: bool) -> Vec<u8> {
		let mut out = ByteWriter::new();
		surface_header(&mut out, dxt, 1, zlib.len() as u32);
		out.u32(size).u32(width).u32(height).u32(zlib.len() as u32).raw(zlib);
		out.finish()
	}

	/// Version 1 `KLEISRF1` body with one mipmap (no compressed-size field).
	pub fn surface_v1(width: u32, height: u32, pixels: &[u8]) -> Vec<u8> {
		let mut out = ByteWriter::new();
		surface_header(&mut out, false, 1, pixels.len() as u32);
		out.u32(pixels.len() as u32).u32(width).u32(height).raw(pixels);
		out.finish()
	}

	/// `KLEIMDL1` body; vertices are `[x, y, u, v]` and indices run `0..n`.
	pub fn model(texture: u32, vertices: &[[f32; 4]]) -> Vec<u8> {
		let mut out = ByteWriter::new();
		out.signature(b"MDL1").u32(texture);
		out.raw(b"KLEIMSH1").u32(vertices.len().saturating_sub(2) as u32);
		out.u32(vertices.len() as u32).u32(vertices.len() as u32);
		for index in 0..vertices.len() {
			out.i32(index as i32);
		}
		for vertex in vertices {
			out.floats(vertex);
		}
		out.finish()
	}

	/// Symbol record for [`build`].
	#[derive(Debug, Clone)]
	pub struct SymbolRecord {
		/// Name hash.
		pub hash: u32,
		/// Name (truncated to 20 bytes).
		pub name: String,
		/// First frame.
		pub frame_index: u32,
		/// Frame count.
		pub frame_count: u32,
	}

	/// `KLEIBLD1` body; frames are `(model index, affine)`.
	pub fn build(name: &str, symbols: &[SymbolRecord], frames: &[(u32, [f32; 12])]) -> Vec<u8> {
		let mut out = ByteWriter::new();
		out.signature(b"BLD1").u32(0).encoded_string(name);
		out.u32(symbols.len() as u32);
		for symbol in symbols {
			out.u32(symbol.hash).fixed_name(&symbol.name).u32(symbol.frame_index).u32(symbol.frame_count);
		}
		out.u32(frames.len() as u32);
		for (model, affine) in frames {
			out.u32(*model).floats(affine);
		}
		out.finish()
	}

	/// Clip record for [`AnimationTables`].
	#[derive(Debug, Clone)]
	pub struct ClipRecord {
		/// Name hash.
		pub name_hash: u32,
		/// Name (truncated to 20 bytes).
		pub name: String,
		/// Root symbol hash.
		pub root_symbol_hash: u32,
		/// Frames per second.
		pub frame_rate: f32,
		/// Facing bitmask.
		pub facing: u32,
		/// First frame.
		pub frame_index: u32,
		/// Frame count.
		pub frame_count: u32,
	}

	/// Instance record for [`AnimationTables`].
	#[derive(Debug, Clone, Copy)]
	pub struct InstanceRecord {
		/// Symbol hash.
		pub symbol_hash: u32,
		/// Folder hash.
		pub folder_hash: u32,
		/// Parent symbol hash.
		pub parent_hash: u32,
		/// Symbol frame.
		pub symbol_frame: u32,
		/// Parent transform index.
		pub parent_transform: u32,
		/// Transform index.
		pub transform: u32,
		/// Colour multiplier index.
		pub colour_multiply: u32,
		/// Colour addend index.
		pub colour_add: u32,
	}

	impl InstanceRecord {
		/// Instance of `symbol_hash` with every optional index absent.
		pub fn bare(symbol_hash: u32, symbol_frame: u32) -> Self {
			Self {
				symbol_hash,
				folder_hash: 0,
				parent_hash: 0,
				symbol_frame,
				parent_transform: super::SENTINEL,
				transform: super::SENTINEL,
				colour_multiply: super::SENTINEL,
				colour_add: super::SENTINEL,
			}
		}
	}

	/// Tables of a `KLEIANM1` body.
	#[derive(Debug, Clone, Default)]
	pub struct AnimationTables {
		/// Clip table.
		pub clips: Vec<ClipRecord>,
		/// Frames as `[event_index, event_count, instance_index, instance_count]`.
		pub frames: Vec<[u32; 4]>,
		/// Event offsets into `event_strings`.
		pub events: Vec<u32>,
		/// Instance table.
		pub instances: Vec<InstanceRecord>,
		/// Colours as `[r, g, b, a]`.
		pub colours: Vec<[f32; 4]>,
		/// Transforms in Affine3D wire order.
		pub transforms: Vec<[f32; 12]>,
		/// NUL-terminated event names.
		pub event_strings: Vec<u8>,
	}

	impl AnimationTables {
		/// Encode as a `KLEIANM1` body.
		pub fn encode(&self) -> Vec<u8> {
			let mut out = ByteWriter::new();
			out.signature(b"ANM1").u32(0);

			out.u32(self.clips.len() as u32);
			for clip in &self.clips {
				out.u32(clip.name_hash)
					.fixed_name(&clip.name)
					.u32(clip.root_symbol_hash)
					.f32(clip.frame_rate)
					.u32(clip.facing)
					.u32(clip.frame_index)
					.u32(clip.frame_count);
			}

			out.u32(self.frames.len() as u32);
			for frame in &self.frames {
				for value in frame {
					out.u32(*value);
				}
			}

			out.u32(self.events.len() as u32);
			for event in &self.events {
				out.u32(*event);
			}

			out.u32(self.instances.len() as u32);
			for item in &self.instances {
				out.u32(item.symbol_hash)
					.u32(item.folder_hash)
					.u32(item.parent_hash)
					.u32(item.symbol_frame)
					.u32(item.parent_transform)
					.u32(item.transform)
					.u32(item.colour_multiply)
					.u32(item.colour_add);
			}

			out.u32(self.colours.len() as u32);
			for colour in &self.colours {
				out.floats(colour);
			}

			out.u32(self.transforms.len() as u32);
			for transform in &self.transforms {
				out.floats(transform);
			}

			out.u32(self.event_strings.len() as u32).raw(&self.event_strings);
			out.finish()
		}
	}

	/// Affine3D in wire order from its 2D terms.
	pub fn affine3d(a: f32, b: f32, c: f32, d: f32, tx: f32, ty: f32) -> [f32; 12] {
		[a, b, 0.0, c, d, 0.0, 0.0, 0.0, 1.0, tx, ty, 0.0]
	}

	/// Axis-aligned quad `[x, y, u, v]` spanning `(x0, y0)`-`(x1, y1)`.
	pub fn quad(x0: f32, y0: f32, x1: f32, y1: f32) -> [[f32; 4]; 4] {
		[[x0, y0, 0.0, 0.0], [x1, y0, 1.0, 0.0], [x1, y1, 1.0, 1.0], [x0, y1, 0.0, 1.0]]
	}
}
