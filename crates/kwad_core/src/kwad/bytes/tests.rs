use crate::kwad::KwadError;
use crate::kwad::bytes::Cursor;

#[test]
fn reads_little_endian_scalars_in_order() {
	let mut bytes = Vec::new();
	bytes.extend_from_slice(&0x1122_3344_u32.to_le_bytes());
	bytes.extend_from_slice(&(-7_i32).to_le_bytes());
	bytes.extend_from_slice(&1.5_f32.to_le_bytes());
	bytes.extend_from_slice(b"TEX1");

	let mut cursor = Cursor::new(&bytes);
	assert_eq!(cursor.read_u32_le().expect("u32"), 0x1122_3344);
	assert_eq!(cursor.read_i32_le().expect("i32"), -7);
	assert_eq!(cursor.read_f32_le().expect("f32"), 1.5);
	assert_eq!(cursor.read_tag().expect("tag"), *b"TEX1");
	assert_eq!(cursor.remaining(), 0);
}

#[test]
fn read_past_end_reports_position_and_shortfall() {
	let bytes = [1_u8, 2, 3];
	let mut cursor = Cursor::new(&bytes);
	cursor.read_exact(2).expect("two bytes available");

	let err = cursor.read_u32_le().expect_err("only one byte left");
	assert!(matches!(err, KwadError::UnexpectedEndOfData { at: 2, need: 4, rem: 1 }));
	assert_eq!(cursor.pos(), 2, "failed read must not advance");
}

#[test]
fn seek_repositions_within_bounds_only() {
	let bytes = [0_u8, 0, 0, 0, 9, 0, 0, 0];
	let mut cursor = Cursor::new(&bytes);

	cursor.seek(4).expect("seek inside buffer");
	assert_eq!(cursor.read_u32_le().expect("u32"), 9);

	cursor.seek(bytes.len()).expect("seek to end is allowed");
	assert_eq!(cursor.remaining(), 0);

	let err = cursor.seek(bytes.len() + 1).expect_err("seek past end fails");
	assert!(matches!(err, KwadError::SeekOutOfRange { to: 9, len: 8 }));
}

#[test]
fn counted_read_stops_on_truncated_records() {
	let mut bytes = Vec::new();
	bytes.extend_from_slice(&3_u32.to_le_bytes());
	bytes.extend_from_slice(&10_u32.to_le_bytes());
	bytes.extend_from_slice(&20_u32.to_le_bytes());

	let mut cursor = Cursor::new(&bytes);
	let err = cursor.read_counted(Cursor::read_u32_le).expect_err("third record missing");
	assert!(matches!(err, KwadError::UnexpectedEndOfData { at: 12, need: 4, rem: 0 }));
}
