use levin_testkit::{HEADER, container, entry, height_payload};

use crate::storage::{DecodeError, DecodeOptions, Object, PortableStorage, decode_container, decode_container_with, encode_container};

fn height_root() -> Object {
	Object::new().with("height", 12345_u32)
}

#[test]
fn encodes_height_example_byte_for_byte() {
	let bytes = encode_container(&height_root()).expect("container encodes");
	assert_eq!(bytes, height_payload());
	assert_eq!(&bytes[9..], &[0x04, 0x06, b'h', b'e', b'i', b'g', b'h', b't', 0x06, 0x39, 0x30, 0x00, 0x00]);
}

#[test]
fn decodes_height_example() {
	let root = decode_container(&height_payload()).expect("container decodes");
	assert_eq!(root, height_root());
}

#[test]
fn root_omits_object_tag_that_nested_copy_carries() {
	let inner = height_root();
	let root_bytes = encode_container(&inner).expect("root encodes");
	let nested_bytes = encode_container(&Object::new().with("inner", inner)).expect("nested encodes");

	// header, count, "inner" entry name, then the Object tag before the copied body
	let nested_body = &nested_bytes[9 + 1 + 1 + 5..];
	assert_eq!(nested_body[0], 0x0c);
	assert_eq!(&nested_body[1..], &root_bytes[9..]);
	assert_ne!(root_bytes[9], 0x0c);
}

#[test]
fn empty_root_is_header_and_zero_count() {
	let bytes = encode_container(&Object::new()).expect("empty root encodes");
	let mut expected = HEADER.to_vec();
	expected.push(0x00);
	assert_eq!(bytes, expected);
	assert_eq!(decode_container(&bytes).expect("empty root decodes"), Object::new());
}

#[test]
fn bad_header_fails_before_body_parse() {
	let mut bytes = height_payload();
	bytes[0] = 0x02;
	let err = decode_container(&bytes).expect_err("bad signature should fail");
	assert!(matches!(err, DecodeError::BadSignature { .. }));

	// corrupt header in front of garbage body still reports the header
	let mut garbage = vec![0x01, 0x11, 0x01, 0x01, 0x01, 0x01, 0x02, 0x01, 0x09];
	garbage.extend_from_slice(&[0xFF; 16]);
	assert_eq!(decode_container(&garbage), Err(DecodeError::BadVersion { expected: 1, got: 9 }));
}

#[test]
fn body_errors_use_absolute_offsets() {
	let bytes = container(&[0x04, 0x01, b'h', 0x06, 0x39]);
	let err = decode_container(&bytes).expect_err("short body should fail");
	assert_eq!(err, DecodeError::TruncatedInput { at: 13, need: 4, rem: 1 });
}

#[test]
fn trailing_bytes_are_ignored_unless_strict() {
	let mut bytes = height_payload();
	bytes.extend_from_slice(&[0xDE, 0xAD]);

	assert_eq!(decode_container(&bytes).expect("lenient decode ignores tail"), height_root());
	let err = decode_container_with(&bytes, &DecodeOptions::strict()).expect_err("strict decode rejects tail");
	assert_eq!(err, DecodeError::TrailingBytes { leftover: 2 });
}

#[test]
fn portable_storage_round_trips_duplicate_entries_in_order() {
	let mut body = vec![0x0C];
	body.extend_from_slice(&entry("b", 0x08, &[1]));
	body.extend_from_slice(&entry("a", 0x08, &[2]));
	body.extend_from_slice(&entry("b", 0x08, &[3]));
	let bytes = container(&body);

	let storage = PortableStorage::decode(&bytes).expect("storage decodes");
	assert_eq!(storage.root, Object::new().with("b", 1_u8).with("a", 2_u8).with("b", 3_u8));
	assert_eq!(storage.encode().expect("storage encodes"), bytes);
}

#[test]
fn non_utf8_entry_name_is_rejected_at_absolute_offset() {
	let mut body = vec![0x04];
	body.extend_from_slice(&[0x02, 0xC3, 0x28, 0x08, 0x01]);
	let err = decode_container(&container(&body)).expect_err("invalid name should fail");
	assert_eq!(err, DecodeError::InvalidEntryName { at: 11 });
}
