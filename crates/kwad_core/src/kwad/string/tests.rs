use crate::kwad::bytes::Cursor;
use crate::kwad::string::{EncodedString, fixed_name, padded_len};

#[test]
fn padded_length_rounds_up_to_four() {
	for (len, padded) in [(0, 0), (1, 4), (2, 4), (3, 4), (4, 4), (5, 8), (8, 8)] {
		assert_eq!(padded_len(len), padded, "len={len}");
	}
}

#[test]
fn reads_logical_and_padded_views() {
	let text = b"abcdefgh";
	for len in [0_u32, 1, 2, 3, 4, 5, 8] {
		let padded = padded_len(len);
		let mut bytes = Vec::new();
		bytes.extend_from_slice(&len.to_le_bytes());
		bytes.extend_from_slice(&text[..len as usize]);
		bytes.resize(4 + padded, 0);
		bytes.extend_from_slice(&0xDEAD_BEEF_u32.to_le_bytes());

		let mut cursor = Cursor::new(&bytes);
		let value = EncodedString::read(&mut cursor).expect("string reads");
		assert_eq!(value.raw().len(), padded);
		assert_eq!(value.as_str(), String::from_utf8_lossy(&text[..len as usize]));
		assert_eq!(cursor.read_u32_le().expect("trailer"), 0xDEAD_BEEF, "cursor must land after padding");
	}
}

#[test]
fn fixed_name_stops_at_first_nul() {
	let mut raw = [0_u8; 20];
	raw[..4].copy_from_slice(b"head");
	raw[6] = b'x';
	assert_eq!(fixed_name(&raw), "head");
	assert_eq!(fixed_name(b"exactly_twenty_chars"), "exactly_twenty_chars");
}
