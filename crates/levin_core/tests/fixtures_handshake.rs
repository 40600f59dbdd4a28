#![allow(missing_docs)]

use levin::storage::{EntryPath, PortableStorage, StorageFile, Value, ValueKind, decode_container, encode_container};
use levin_testkit::{fixture_bytes, fixture_path};

fn lookup<'a>(storage: &'a PortableStorage, path: &str) -> &'a Value {
	let path = EntryPath::parse(path).expect("path parses");
	storage.root.lookup(&path).expect("path resolves")
}

#[test]
fn handshake_fields_decode_with_expected_kinds() {
	let storage = PortableStorage::decode(&fixture_bytes("handshake.bin")).expect("handshake decodes");

	assert_eq!(lookup(&storage, "node_data.my_port").as_u32().expect("port is u32"), 18080);
	assert_eq!(lookup(&storage, "node_data.peer_id").as_u64().expect("peer id is u64"), 0x0123_4567_89ab_cdef);
	assert_eq!(lookup(&storage, "node_data.network_id").as_bytes().expect("network id is bytes").len(), 16);
	assert_eq!(lookup(&storage, "payload_data.current_height").as_u64().expect("height is u64"), 2_750_000);
	assert_eq!(lookup(&storage, "payload_data.top_id").as_bytes().expect("top id is bytes"), (0..32).collect::<Vec<u8>>().as_slice());
	assert_eq!(lookup(&storage, "local_peerlist_new[1].adr.addr.m_port").as_u16().expect("port is u16"), 28080);
	assert_eq!(lookup(&storage, "local_peerlist_new[1].last_seen").as_i64().expect("last seen is i64"), -5);
	assert_eq!(lookup(&storage, "tags[1]").as_str().expect("tag is text"), "rpc");
	assert!(lookup(&storage, "is_synced").as_bool().expect("synced is bool"));
	assert_eq!(lookup(&storage, "rate").as_f64().expect("rate is f64"), 0.5);
	assert_eq!(lookup(&storage, "offset").as_i8().expect("offset is i8"), -3);
	assert_eq!(lookup(&storage, "skew").as_i16().expect("skew is i16"), -300);
	assert_eq!(lookup(&storage, "delta").as_i32().expect("delta is i32"), -70_000);
	assert!(lookup(&storage, "empty").as_object().expect("empty is object").is_empty());

	let matrix = lookup(&storage, "matrix").as_array().expect("matrix is array");
	assert_eq!(matrix.kind(), ValueKind::Array);
	assert_eq!(lookup(&storage, "matrix[0][1]").as_u8().expect("cell is u8"), 2);
}

#[test]
fn handshake_reencodes_byte_for_byte() {
	let bytes = fixture_bytes("handshake.bin");
	let root = decode_container(&bytes).expect("handshake decodes");
	assert_eq!(encode_container(&root).expect("handshake encodes"), bytes);
}

#[test]
fn handshake_entry_order_matches_wire_order() {
	let file = StorageFile::open(fixture_path("handshake.bin")).expect("fixture opens");
	let names: Vec<_> = file.root.iter().map(|entry| entry.name.as_str()).collect();
	assert_eq!(
		names,
		[
			"node_data",
			"payload_data",
			"local_peerlist_new",
			"support_flags",
			"tags",
			"is_synced",
			"rate",
			"offset",
			"skew",
			"delta",
			"matrix",
			"empty",
		]
	);
}

#[test]
fn every_truncation_of_handshake_fails_cleanly() {
	let bytes = fixture_bytes("handshake.bin");
	for len in 0..bytes.len() {
		assert!(decode_container(&bytes[..len]).is_err(), "prefix of {len} bytes should not decode");
	}
}
