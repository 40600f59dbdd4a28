use crate::storage::{AccessError, Array, EncodeError, Object, Value, ValueKind};

#[test]
fn accessors_return_typed_errors_on_mismatch() {
	let value = Value::UInt32(7);
	assert_eq!(value.as_u32().expect("u32 reads"), 7);
	assert_eq!(
		value.as_u64().expect_err("u64 on u32 should fail"),
		AccessError::TypeMismatch {
			expected: ValueKind::UInt64,
			got: ValueKind::UInt32,
		}
	);
	assert!(matches!(value.as_object(), Err(AccessError::TypeMismatch { .. })));
}

#[test]
fn strings_keep_raw_bytes_and_validate_on_access() {
	let text = Value::from("peer");
	assert_eq!(text.as_str().expect("utf-8 reads"), "peer");

	let blob = Value::from(vec![0xFF, 0x00]);
	assert_eq!(blob.as_bytes().expect("bytes read"), &[0xFF, 0x00]);
	assert_eq!(blob.as_str().expect_err("invalid utf-8 should fail"), AccessError::InvalidUtf8);
}

#[test]
fn array_tag_carries_element_kind_and_flag() {
	let array = Array::with_items(ValueKind::UInt8, vec![Value::UInt8(1)]).expect("homogeneous array builds");
	assert_eq!(Value::Array(array).tag(), 0x88);
	assert_eq!(Value::Bool(true).tag(), 0x0b);
}

#[test]
fn array_rejects_foreign_items() {
	let err = Array::with_items(ValueKind::UInt8, vec![Value::UInt8(1), Value::Int8(2)]).expect_err("mixed array should fail");
	assert_eq!(
		err,
		EncodeError::MixedArray {
			expected: ValueKind::UInt8,
			got: ValueKind::Int8,
			index: 1,
		}
	);

	let mut array = Array::new(ValueKind::String);
	array.push("a").expect("string pushes");
	assert!(array.push(1_u8).is_err(), "u8 should not push into string array");
	assert_eq!(array.len(), 1);
	assert_eq!(array.get(3).expect_err("index past end should fail"), AccessError::IndexOutOfRange { index: 3, len: 1 });
}

#[test]
fn object_preserves_order_and_duplicates() {
	let object = Object::new().with("b", 1_u8).with("a", 2_u8).with("b", 3_u8);
	let names: Vec<_> = object.iter().map(|entry| entry.name.as_str()).collect();
	assert_eq!(names, ["b", "a", "b"]);
	assert_eq!(object.get("b"), Some(&Value::UInt8(1)));
	assert_eq!(
		object.entry("missing").expect_err("missing entry should fail"),
		AccessError::EntryNotFound { name: "missing".to_owned() }
	);
}
