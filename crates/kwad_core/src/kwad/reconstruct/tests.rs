use kwad_testkit::bodies::{self, AnimationTables, ClipRecord, InstanceRecord, SymbolRecord};
use kwad_testkit::{IDENTITY_3D, PackageBuilder, SENTINEL};

use crate::kwad::reconstruct::{
	ColourTransform, SymbolNames, change_extension, facing_suffix, file_stem, find_anim_bundles, is_rectangle, parent_dir,
	reconstruct_bundles,
};
use crate::kwad::resource::Vertex;
use crate::kwad::{Colour, KwadError, Package, ResourceIndex};

const ARM: u32 = 100;
const TAIL: u32 = 200;

fn symbol(hash: u32, name: &str, frame_index: u32, frame_count: u32) -> SymbolRecord {
	SymbolRecord {
		hash,
		name: name.to_owned(),
		frame_index,
		frame_count,
	}
}

fn clip(name: &str, root: u32, facing: u32, frame_count: u32) -> ClipRecord {
	ClipRecord {
		name_hash: 1,
		name: name.to_owned(),
		root_symbol_hash: root,
		frame_rate: 30.0,
		facing,
		frame_index: 0,
		frame_count,
	}
}

/// Two bundles where the first animation names a symbol only the second build defines,
/// plus an animation with no build next to it.
fn bundle_package() -> Package {
	let mut builder = PackageBuilder::v2();
	let surface = builder.resource(b"SRF1", bodies::surface_raw(4, 2, &[0; 32], false));
	let texture = builder.resource(b"TEX1", bodies::texture(surface, 3, 2, [1.0, 0.0, 0.0, 1.0, 0.25, 0.0]));
	let model = builder.resource(b"MDL1", bodies::model(texture, &bodies::quad(2.0, 1.0, 6.0, 5.0)));

	let hero_build = builder.resource(
		b"BLD1",
		bodies::build(
			"hero",
			&[symbol(ARM, "arm", 0, 2)],
			&[(model, bodies::affine3d(1.0, 0.0, 0.0, 1.0, 10.0, 20.0)), (SENTINEL, IDENTITY_3D)],
		),
	);
	let mut arm = InstanceRecord::bare(ARM, 1);
	arm.transform = 0;
	arm.colour_multiply = 0;
	let mut stray = InstanceRecord::bare(555, 0);
	stray.transform = 7;
	let hero_anim = builder.resource(
		b"ANM1",
		AnimationTables {
			clips: vec![clip("walk", TAIL, 0b11, 1)],
			frames: vec![[0, 1, 0, 2]],
			events: vec![0],
			instances: vec![arm, stray],
			colours: vec![[0.5, 0.5, 0.5, 1.0]],
			transforms: vec![bodies::affine3d(2.0, 0.0, 0.0, 2.0, 5.0, 6.0)],
			event_strings: b"step\0".to_vec(),
		}
		.encode(),
	);

	let zed_build = builder.resource(b"BLD1", bodies::build("zed", &[symbol(TAIL, "tail", 0, 0)], &[]));
	let zed_anim = builder.resource(
		b"ANM1",
		AnimationTables {
			clips: vec![clip("idle", TAIL, SENTINEL, 0)],
			..AnimationTables::default()
		}
		.encode(),
	);
	let orphan_anim = builder.resource(b"ANM1", AnimationTables::default().encode());

	builder
		.alias("images/arm.tex", texture)
		.alias("anim/hero.anim", hero_anim)
		.alias("anim/hero.abld", hero_build)
		.alias("anim/zed.anim", zed_anim)
		.alias("anim/zed.abld", zed_build)
		.alias("orphan.anim", orphan_anim);
	Package::decode(&builder.build()).expect("package decodes")
}

fn vertex(x: f32, y: f32) -> Vertex {
	Vertex { x, y, u: 0.0, v: 0.0 }
}

#[test]
fn rectangle_test_requires_equidistant_corners() {
	let square = [vertex(0.0, 0.0), vertex(10.0, 0.0), vertex(10.0, 10.0), vertex(0.0, 10.0)];
	assert!(is_rectangle([&square[0], &square[1], &square[2], &square[3]]));

	let skewed = [vertex(0.0, 0.0), vertex(10.0, 0.0), vertex(10.0, 10.0), vertex(0.0, 20.0)];
	assert!(!is_rectangle([&skewed[0], &skewed[1], &skewed[2], &skewed[3]]));
}

#[test]
fn facing_suffix_lists_direction_tokens() {
	assert_eq!(facing_suffix(Some(0b11)), "_E_NE_");
	assert_eq!(facing_suffix(Some(0b1000_0100)), "_N_SE_");
	assert_eq!(facing_suffix(Some(0)), "");
	assert_eq!(facing_suffix(None), "");
}

#[test]
fn colour_transform_defaults_missing_parts() {
	assert_eq!(ColourTransform::from_parts(None, None), None);

	let add = Colour {
		r: 0.1,
		g: 0.2,
		b: 0.3,
		a: 0.0,
	};
	let transform = ColourTransform::from_parts(None, Some(add)).expect("addend alone yields a transform");
	assert_eq!(transform.matrix[0][0], 1.0);
	assert_eq!(transform.matrix[3][3], 1.0);
	assert_eq!(transform.matrix[4][..4], [0.1, 0.2, 0.3, 0.0]);
	assert_eq!(transform.matrix[4][4], 1.0);
	assert_eq!(transform.matrix[0][1], 0.0);
}

#[test]
fn symbol_names_keep_first_and_fall_back_to_decimal() {
	let mut names = SymbolNames::new();
	names.insert(7, "first");
	names.insert(7, "second");
	assert_eq!(names.get(7), Some("first"));
	assert_eq!(names.name_or_hash(8), "8");
	assert_eq!(names.len(), 1);
}

#[test]
fn path_helpers_split_on_either_separator() {
	assert_eq!(change_extension("anim/hero.anim", "abld"), "anim/hero.abld");
	assert_eq!(change_extension("dir.v2/noext", "abld"), "dir.v2/noext.abld");
	assert_eq!(file_stem("anim\\hero.anim"), "hero");
	assert_eq!(parent_dir("anim\\hero.anim"), "anim");
	assert_eq!(parent_dir("hero.anim"), "");
}

#[test]
fn bundles_pair_animations_with_sibling_builds() {
	let package = bundle_package();
	let index = ResourceIndex::build(&package);
	let bundles = find_anim_bundles(&index);

	let summary: Vec<_> = bundles
		.iter()
		.map(|bundle| (bundle.name.as_str(), bundle.dir.as_str(), bundle.build.is_some()))
		.collect();
	assert_eq!(summary, vec![("hero", "anim", true), ("zed", "anim", true), ("orphan", "", false)]);
	assert_eq!(bundles[2].build_alias, "orphan.abld");
}

#[test]
fn build_frames_carry_sprite_geometry() {
	let package = bundle_package();
	let index = ResourceIndex::build(&package);
	let results = reconstruct_bundles(&index, find_anim_bundles(&index));

	let hero = results[0].outcome.as_ref().expect("hero reconstructs");
	assert_eq!(hero.build.name, "hero");
	let arm = &hero.build.symbols[0];
	assert_eq!(arm.name, "arm");
	assert_eq!(arm.frames.len(), 2);

	let visual = arm.frames[0].visual.as_ref().expect("first frame has a model");
	assert_eq!(visual.texture_path.as_deref(), Some("images/arm.tex"));
	assert_eq!((visual.offset.left, visual.offset.top), (2, 1));
	assert_eq!(visual.source_size, (3, 2));
	assert_eq!(visual.size, (8, 4));
	assert_eq!(visual.pivot, (14.0, 22.0));

	assert_eq!(arm.frames[1].frame_num, 1);
	assert!(arm.frames[1].visual.is_none(), "sentinel model has no sprite");
}

#[test]
fn animations_resolve_names_from_every_build() {
	let package = bundle_package();
	let index = ResourceIndex::build(&package);
	let results = reconstruct_bundles(&index, find_anim_bundles(&index));

	let hero = results[0].outcome.as_ref().expect("hero reconstructs");
	let walk = &hero.animations[0];
	assert_eq!(walk.name, "walk_E_NE_");
	assert_eq!(walk.base_name, "walk");
	assert_eq!(walk.root, "tail", "name comes from a later bundle's build");

	let frame = &walk.frames[0];
	assert_eq!(frame.events, vec!["step".to_owned()]);

	let arm = &frame.elements[0];
	assert_eq!(arm.symbol, "arm");
	assert_eq!(arm.frame, 1);
	let transform = arm.transform.expect("transform present");
	assert_eq!((transform.a(), transform.d(), transform.tx(), transform.ty()), (2.0, 2.0, 5.0, 6.0));
	assert!(arm.parent_transform.is_none());
	let colour = arm.colour.expect("multiplier present");
	assert_eq!(colour.matrix[0][0], 0.5);
	assert_eq!(colour.matrix[4][0], 0.0);

	let stray = &frame.elements[1];
	assert_eq!(stray.symbol, "555");
	assert!(stray.transform.is_none(), "out-of-range index is absent");
	assert!(stray.colour.is_none());

	let zed = results[1].outcome.as_ref().expect("zed reconstructs");
	assert_eq!(zed.animations[0].name, "idle");
	assert_eq!(zed.animations[0].facing, None);
}

#[test]
fn missing_build_fails_only_its_bundle() {
	let package = bundle_package();
	let index = ResourceIndex::build(&package);
	let results = reconstruct_bundles(&index, find_anim_bundles(&index));

	assert_eq!(results.len(), 3);
	assert!(results[0].outcome.is_ok());
	assert!(results[1].outcome.is_ok());
	assert!(matches!(results[2].outcome, Err(KwadError::UnresolvedReference { .. })));
}

#[test]
fn oversized_clip_frame_count_fails_only_its_bundle() {
	let mut builder = PackageBuilder::v2();
	let build = builder.resource(b"BLD1", bodies::build("bad", &[symbol(ARM, "arm", 0, 0)], &[]));
	let anim = builder.resource(
		b"ANM1",
		AnimationTables {
			clips: vec![clip("broken", ARM, SENTINEL, u32::MAX)],
			..AnimationTables::default()
		}
		.encode(),
	);
	builder.alias("bad.anim", anim).alias("bad.abld", build);
	let package = Package::decode(&builder.build()).expect("package decodes");
	let index = ResourceIndex::build(&package);

	let results = reconstruct_bundles(&index, find_anim_bundles(&index));
	assert_eq!(results.len(), 1);
	assert!(matches!(
		results[0].outcome,
		Err(KwadError::TableRangeOutOfBounds {
			table: "animation frame",
			count: u32::MAX,
			len: 0,
			..
		})
	));
}

#[test]
fn undecoded_animation_slot_is_reported_as_failed_bundle() {
	let mut builder = PackageBuilder::v2();
	let build = builder.resource(b"BLD1", bodies::build("broken", &[symbol(ARM, "arm", 0, 0)], &[]));
	let truncated = builder.resource(b"ANM1", b"KLEIANM1".to_vec());
	builder.alias("broken.anim", truncated).alias("broken.abld", build);
	let package = Package::decode(&builder.build()).expect("package decodes");
	assert_eq!(package.failures().len(), 1);
	let index = ResourceIndex::build(&package);

	let bundles = find_anim_bundles(&index);
	assert_eq!(bundles.len(), 1);
	assert_eq!(bundles[0].animation, truncated);

	let results = reconstruct_bundles(&index, bundles);
	assert!(matches!(results[0].outcome, Err(KwadError::UnresolvedReference { .. })));
}

#[test]
fn version1_animations_form_no_bundles() {
	let mut builder = PackageBuilder::v1();
	let build = builder.resource(b"BLD1", bodies::build("old", &[symbol(ARM, "arm", 0, 0)], &[]));
	let anim = builder.resource(b"ANM1", AnimationTables::default().encode());
	builder.alias("old.anim", anim).alias("old.abld", build);
	let package = Package::decode(&builder.build()).expect("package decodes");
	let index = ResourceIndex::build(&package);

	assert!(find_anim_bundles(&index).is_empty());
}
