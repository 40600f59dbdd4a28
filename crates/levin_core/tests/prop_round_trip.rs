#![allow(missing_docs)]

use levin::storage::{Array, Object, Value, ValueKind, decode_container, decode_value, encode_container, encode_value};
use proptest::prelude::*;

fn leaf() -> impl Strategy<Value = Value> {
	prop_oneof![
		any::<i64>().prop_map(Value::Int64),
		any::<i32>().prop_map(Value::Int32),
		any::<i16>().prop_map(Value::Int16),
		any::<i8>().prop_map(Value::Int8),
		any::<u64>().prop_map(Value::UInt64),
		any::<u32>().prop_map(Value::UInt32),
		any::<u16>().prop_map(Value::UInt16),
		any::<u8>().prop_map(Value::UInt8),
		(proptest::num::f64::NORMAL | proptest::num::f64::ZERO).prop_map(Value::Double),
		proptest::collection::vec(any::<u8>(), 0..48).prop_map(Value::String),
		any::<bool>().prop_map(Value::Bool),
	]
}

fn object_of(inner: impl Strategy<Value = Value>) -> impl Strategy<Value = Object> {
	proptest::collection::vec(("[a-z_]{1,12}", inner), 0..5).prop_map(|entries| {
		let mut object = Object::new();
		for (name, value) in entries {
			object.push(name, value);
		}
		object
	})
}

fn value_tree() -> impl Strategy<Value = Value> {
	leaf().prop_recursive(4, 48, 5, |inner| {
		prop_oneof![
			object_of(inner.clone()).prop_map(Value::Object),
			proptest::collection::vec(inner, 1..5).prop_map(|items| {
				let kind = items[0].kind();
				let items = items.into_iter().filter(|item| item.kind() == kind).collect();
				Value::Array(Array::with_items(kind, items).expect("filtered items are homogeneous"))
			}),
		]
	})
}

fn double_bits(value: &Value) -> Vec<u64> {
	match value {
		Value::Double(v) => vec![v.to_bits()],
		Value::Array(array) => array.iter().flat_map(double_bits).collect(),
		_ => Vec::new(),
	}
}

#[test]
fn special_doubles_round_trip_bit_for_bit() {
	let specials = [
		f64::NAN,
		-f64::NAN,
		f64::from_bits(0x7ff8_0000_dead_beef),
		f64::from_bits(0x7ff0_0000_0000_0001),
		f64::INFINITY,
		f64::NEG_INFINITY,
		f64::from_bits(1),
		f64::MIN_POSITIVE / 2.0,
		-0.0,
		f64::MAX,
	];

	for special in specials {
		let bytes = encode_value(&Value::Double(special)).expect("double encodes");
		assert_eq!(bytes[0], 0x09);
		assert_eq!(&bytes[1..], &special.to_bits().to_le_bytes()[..]);

		let (consumed, back) = decode_value(bytes[0], &bytes[1..]).expect("double decodes");
		assert_eq!(consumed, 8);
		assert_eq!(double_bits(&back), vec![special.to_bits()]);
	}

	let array = Value::Array(Array::with_items(ValueKind::Double, specials.into_iter().map(Value::Double).collect()).expect("doubles are homogeneous"));
	let bytes = encode_value(&array).expect("array encodes");
	let (_, back) = decode_value(bytes[0], &bytes[1..]).expect("array decodes");
	assert_eq!(double_bits(&back), double_bits(&array));
}

proptest! {
	#[test]
	fn any_double_round_trips_bit_for_bit(raw in any::<u64>()) {
		let value = Value::Double(f64::from_bits(raw));
		let bytes = encode_value(&value).expect("double encodes");
		let (consumed, back) = decode_value(bytes[0], &bytes[1..]).expect("double decodes");
		prop_assert_eq!(consumed, 8);
		prop_assert_eq!(double_bits(&back), vec![raw]);
	}

	#[test]
	fn tagged_values_round_trip(value in value_tree()) {
		let bytes = encode_value(&value).expect("value encodes");
		let (consumed, back) = decode_value(bytes[0], &bytes[1..]).expect("value decodes");
		prop_assert_eq!(consumed, bytes.len() - 1);
		prop_assert_eq!(back, value);
	}

	#[test]
	fn containers_round_trip(root in object_of(value_tree())) {
		let bytes = encode_container(&root).expect("container encodes");
		prop_assert_eq!(decode_container(&bytes).expect("container decodes"), root);
	}
}
