use crate::storage::{AccessError, Array, EntryPath, Object, PathStep, Value, ValueKind};

fn sample() -> Object {
	let peer = Object::new().with("id", 0x2222_u64);
	let peers = Array::with_items(ValueKind::Object, vec![Value::Object(Object::new().with("id", 0x1111_u64)), Value::Object(peer)]).expect("peers build");
	Object::new()
		.with("node_data", Object::new().with("my_port", 18080_u32))
		.with("peers", peers)
}

#[test]
fn parses_entries_and_indices() {
	let path = EntryPath::parse("payload_data.peers[2].id").expect("path parses");
	assert_eq!(
		path.steps,
		vec![
			PathStep::Entry("payload_data".to_owned()),
			PathStep::Entry("peers".to_owned()),
			PathStep::Index(2),
			PathStep::Entry("id".to_owned()),
		]
	);
	assert_eq!(path.to_string(), "payload_data.peers[2].id");
}

#[test]
fn rejects_malformed_paths() {
	for input in ["", ".a", "a.", "a[", "a[x]", "a[1", "a..b", "a-b"] {
		let err = EntryPath::parse(input).expect_err("malformed path should fail");
		assert_eq!(err, AccessError::InvalidEntryPath { path: input.to_owned() });
	}
}

#[test]
fn resolves_nested_values() {
	let root = sample();
	let port = root.lookup(&EntryPath::parse("node_data.my_port").expect("path parses")).expect("port resolves");
	assert_eq!(port, &Value::UInt32(18080));

	let id = root.lookup(&EntryPath::parse("peers[1].id").expect("path parses")).expect("id resolves");
	assert_eq!(id.as_u64().expect("id is u64"), 0x2222);
}

#[test]
fn resolve_reports_missing_and_mismatched_steps() {
	let root = sample();
	let missing = root.lookup(&EntryPath::parse("node_data.peer_id").expect("path parses"));
	assert_eq!(missing, Err(AccessError::EntryNotFound { name: "peer_id".to_owned() }));

	let out_of_range = root.lookup(&EntryPath::parse("peers[5]").expect("path parses"));
	assert_eq!(out_of_range, Err(AccessError::IndexOutOfRange { index: 5, len: 2 }));

	let not_object = root.lookup(&EntryPath::parse("node_data.my_port.x").expect("path parses"));
	assert!(matches!(not_object, Err(AccessError::TypeMismatch { expected: ValueKind::Object, .. })));
}
