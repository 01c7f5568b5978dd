use crate::kwad::bytes::Cursor;
use crate::kwad::{Affine2D, Affine3D, Colour};

fn floats(values: &[f32]) -> Vec<u8> {
	values.iter().flat_map(|value| value.to_le_bytes()).collect()
}

#[test]
fn affine2d_fields_follow_wire_order() {
	let bytes = floats(&[1.0, 2.0, 3.0, 4.0, 0.25, 0.5]);
	let affine = Affine2D::read(&mut Cursor::new(&bytes)).expect("affine reads");
	assert_eq!(affine.scale_x, 1.0);
	assert_eq!(affine.c2r1, 2.0);
	assert_eq!(affine.c1r2, 3.0);
	assert_eq!(affine.scale_y, 4.0);
	assert_eq!(affine.translate_x, 0.25);
	assert_eq!(affine.translate_y, 0.5);
	assert!(!affine.is_identity());
	assert!(Affine2D::IDENTITY.is_identity());
}

#[test]
fn affine3d_is_column_major_with_2d_accessors() {
	let values: Vec<f32> = (1..=12).map(|value| value as f32).collect();
	let bytes = floats(&values);
	let affine = Affine3D::read(&mut Cursor::new(&bytes)).expect("affine reads");
	assert_eq!(affine.columns[0], [1.0, 2.0, 3.0]);
	assert_eq!(affine.columns[3], [10.0, 11.0, 12.0]);
	assert_eq!((affine.a(), affine.b(), affine.c(), affine.d()), (1.0, 2.0, 4.0, 5.0));
	assert_eq!((affine.tx(), affine.ty()), (10.0, 11.0));
}

#[test]
fn colour_reads_rgba() {
	let bytes = floats(&[0.1, 0.2, 0.3, 0.4]);
	let colour = Colour::read(&mut Cursor::new(&bytes)).expect("colour reads");
	assert_eq!(colour.to_array(), [0.1, 0.2, 0.3, 0.4]);
}
