use crate::kwad::bytes::Cursor;
use crate::kwad::{KwadError, PackageHeader, Version};

fn header_bytes(signature: &[u8; 8]) -> Vec<u8> {
	let mut bytes = signature.to_vec();
	bytes.extend_from_slice(&1234_u32.to_le_bytes());
	bytes.extend_from_slice(&3_u32.to_le_bytes());
	bytes
}

#[test]
fn recognizes_both_container_versions() {
	let v1 = PackageHeader::parse(&mut Cursor::new(&header_bytes(b"KLEIPKG1"))).expect("v1 parses");
	assert_eq!(v1.version, Version::V1);

	let v2 = PackageHeader::parse(&mut Cursor::new(&header_bytes(b"KLEIPKG2"))).expect("v2 parses");
	assert_eq!(v2.version, Version::V2);
	assert_eq!(v2.file_size, 1234);
	assert_eq!(v2.slab_count, 3);
}

#[test]
fn rejects_unknown_signature_with_actual_bytes() {
	let err = PackageHeader::parse(&mut Cursor::new(&header_bytes(b"KLEIPKG9"))).expect_err("unknown signature");
	match err {
		KwadError::UnexpectedSignature { context, got, .. } => {
			assert_eq!(context, "package");
			assert_eq!(got, b"KLEIPKG9");
		}
		other => panic!("unexpected error {other:?}"),
	}
}

#[test]
fn truncated_header_is_end_of_data() {
	let err = PackageHeader::parse(&mut Cursor::new(b"KLEIPKG2\x01\x00")).expect_err("truncated");
	assert!(matches!(err, KwadError::UnexpectedEndOfData { at: 8, .. }));
}
