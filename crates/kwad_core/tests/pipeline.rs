#![allow(missing_docs)]

use kwad::kwad::reconstruct::{find_anim_bundles, reconstruct_bundles};
use kwad::kwad::resource::ResourceKind;
use kwad::kwad::{BlockCompression, BlockDecompressor, Package, ResourceIndex, Result, Version, decode_surface_pixels};
use kwad_testkit::bodies::{self, AnimationTables, ClipRecord, InstanceRecord, SymbolRecord};
use kwad_testkit::{IDENTITY_2D, PackageBuilder};

struct NoBlocks;

impl BlockDecompressor for NoBlocks {
	fn decompress(&self, _data: &[u8], _width: u32, _height: u32, _kind: BlockCompression) -> Result<Vec<u8>> {
		panic!("surface is not block compressed");
	}
}

#[test]
fn package_bytes_to_reconstructed_bundle() {
	let mut builder = PackageBuilder::v2();
	let surface = builder.resource(b"SRF1", bodies::surface_raw(2, 2, &[7; 16], false));
	let texture = builder.resource(b"TEX1", bodies::texture(surface, 2, 2, IDENTITY_2D));
	let model = builder.resource(b"MDL1", bodies::model(texture, &bodies::quad(0.0, 0.0, 2.0, 2.0)));
	let build = builder.resource(
		b"BLD1",
		bodies::build(
			"bot",
			&[SymbolRecord {
				hash: 42,
				name: "head".to_owned(),
				frame_index: 0,
				frame_count: 1,
			}],
			&[(model, bodies::affine3d(1.0, 0.0, 0.0, 1.0, 0.0, 0.0))],
		),
	);
	let anim = builder.resource(
		b"ANM1",
		AnimationTables {
			clips: vec![ClipRecord {
				name_hash: 9,
				name: "spin".to_owned(),
				root_symbol_hash: 42,
				frame_rate: 12.0,
				facing: 0b1_0000,
				frame_index: 0,
				frame_count: 1,
			}],
			frames: vec![[0, 0, 0, 1]],
			instances: vec![InstanceRecord::bare(42, 0)],
			..AnimationTables::default()
		}
		.encode(),
	);
	builder
		.alias("bot/head.png", texture)
		.alias("bot/bot.anim", anim)
		.alias("bot/bot.abld", build);

	let package = Package::decode(&builder.build()).expect("package decodes");
	assert_eq!(package.version(), Version::V2);
	assert!(package.failures().is_empty());

	let index = ResourceIndex::build(&package);
	assert_eq!(index.aliases_of_kind(ResourceKind::Texture).len(), 1);

	let pixels = decode_surface_pixels(index.surface_at(surface).expect("surface"), &NoBlocks).expect("pixels");
	assert_eq!(pixels.rgba, vec![7; 16]);

	let results = reconstruct_bundles(&index, find_anim_bundles(&index));
	assert_eq!(results.len(), 1);
	let bundle = results[0].outcome.as_ref().expect("bundle reconstructs");

	let head = &bundle.build.symbols[0];
	assert_eq!(head.name, "head");
	let visual = head.frames[0].visual.as_ref().expect("visual");
	assert_eq!(visual.texture_path.as_deref(), Some("bot/head.png"));
	assert_eq!(visual.size, (2, 2));
	assert_eq!(visual.pivot, (1.0, 1.0));

	let spin = &bundle.animations[0];
	assert_eq!(spin.name, "spin_W_");
	assert_eq!(spin.frames[0].elements[0].symbol, "head");
}
