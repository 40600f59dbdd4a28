use levin::storage::{Array, Object, Value, ValueKind};
use serde::{Deserialize, Serialize};

use crate::cmd::CliResult;
use crate::cmd::util::{decode_f64_bits, decode_hex, encode_f64_bits, printable_text};

/// Whole payload as typed JSON: `{"root": [entries]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageDocument {
	/// Root object entries in wire order.
	pub root: Vec<TypedEntry>,
}

/// Named typed value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypedEntry {
	/// Entry name.
	pub name: String,
	/// Entry payload.
	pub value: TypedValue,
}

/// Externally tagged JSON rendering of a value, e.g. `{"u32": 12345}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypedValue {
	/// Signed 64-bit integer.
	I64(i64),
	/// Signed 32-bit integer.
	I32(i32),
	/// Signed 16-bit integer.
	I16(i16),
	/// Signed 8-bit integer.
	I8(i8),
	/// Unsigned 64-bit integer.
	U64(u64),
	/// Unsigned 32-bit integer.
	U32(u32),
	/// Unsigned 16-bit integer.
	U16(u16),
	/// Unsigned 8-bit integer.
	U8(u8),
	/// Finite double.
	F64(f64),
	/// Non-finite double as 16 hex digits of its bit pattern.
	F64Bits(String),
	/// Boolean.
	Bool(bool),
	/// Printable string.
	String(String),
	/// Binary string as lowercase hex.
	Blob(String),
	/// Nested object.
	Object(Vec<TypedEntry>),
	/// Homogeneous array.
	Array(TypedArray),
}

/// Array with its declared element kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypedArray {
	/// Element kind.
	pub kind: TypedKind,
	/// Elements in order.
	pub items: Vec<TypedValue>,
}

/// JSON label of a wire kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypedKind {
	/// `i64`
	I64,
	/// `i32`
	I32,
	/// `i16`
	I16,
	/// `i8`
	I8,
	/// `u64`
	U64,
	/// `u32`
	U32,
	/// `u16`
	U16,
	/// `u8`
	U8,
	/// `f64`
	F64,
	/// `string`
	String,
	/// `bool`
	Bool,
	/// `object`
	Object,
	/// `array`
	Array,
}

impl From<ValueKind> for TypedKind {
	fn from(kind: ValueKind) -> Self {
		match kind {
			ValueKind::Int64 => Self::I64,
			ValueKind::Int32 => Self::I32,
			ValueKind::Int16 => Self::I16,
			ValueKind::Int8 => Self::I8,
			ValueKind::UInt64 => Self::U64,
			ValueKind::UInt32 => Self::U32,
			ValueKind::UInt16 => Self::U16,
			ValueKind::UInt8 => Self::U8,
			ValueKind::Double => Self::F64,
			ValueKind::String => Self::String,
			ValueKind::Bool => Self::Bool,
			ValueKind::Object => Self::Object,
			ValueKind::Array => Self::Array,
		}
	}
}

impl From<TypedKind> for ValueKind {
	fn from(kind: TypedKind) -> Self {
		match kind {
			TypedKind::I64 => Self::Int64,
			TypedKind::I32 => Self::Int32,
			TypedKind::I16 => Self::Int16,
			TypedKind::I8 => Self::Int8,
			TypedKind::U64 => Self::UInt64,
			TypedKind::U32 => Self::UInt32,
			TypedKind::U16 => Self::UInt16,
			TypedKind::U8 => Self::UInt8,
			TypedKind::F64 => Self::Double,
			TypedKind::String => Self::String,
			TypedKind::Bool => Self::Bool,
			TypedKind::Object => Self::Object,
			TypedKind::Array => Self::Array,
		}
	}
}

impl StorageDocument {
	/// Render a decoded root object.
	pub fn from_root(root: &Object) -> Self {
		Self { root: typed_entries(root) }
	}

	/// Build the root object this document describes.
	pub fn into_root(self) -> CliResult<Object> {
		object_from_entries(self.root)
	}
}

/// Render one value as typed JSON.
pub fn to_typed(value: &Value) -> TypedValue {
	match value {
		Value::Int64(v) => TypedValue::I64(*v),
		Value::Int32(v) => TypedValue::I32(*v),
		Value::Int16(v) => TypedValue::I16(*v),
		Value::Int8(v) => TypedValue::I8(*v),
		Value::UInt64(v) => TypedValue::U64(*v),
		Value::UInt32(v) => TypedValue::U32(*v),
		Value::UInt16(v) => TypedValue::U16(*v),
		Value::UInt8(v) => TypedValue::U8(*v),
		Value::Double(v) if v.is_finite() => TypedValue::F64(*v),
		Value::Double(v) => TypedValue::F64Bits(encode_f64_bits(*v)),
		Value::Bool(v) => TypedValue::Bool(*v),
		Value::String(bytes) => match printable_text(bytes) {
			Some(text) => TypedValue::String(text.to_owned()),
			None => TypedValue::Blob(hex::encode(bytes)),
		},
		Value::Object(object) => TypedValue::Object(typed_entries(object)),
		Value::Array(array) => TypedValue::Array(TypedArray {
			kind: array.kind().into(),
			items: array.iter().map(to_typed).collect(),
		}),
	}
}

/// Build a value from typed JSON.
pub fn from_typed(value: TypedValue) -> CliResult<Value> {
	Ok(match value {
		TypedValue::I64(v) => Value::Int64(v),
		TypedValue::I32(v) => Value::Int32(v),
		TypedValue::I16(v) => Value::Int16(v),
		TypedValue::I8(v) => Value::Int8(v),
		TypedValue::U64(v) => Value::UInt64(v),
		TypedValue::U32(v) => Value::UInt32(v),
		TypedValue::U16(v) => Value::UInt16(v),
		TypedValue::U8(v) => Value::UInt8(v),
		TypedValue::F64(v) => Value::Double(v),
		TypedValue::F64Bits(bits) => Value::Double(decode_f64_bits(&bits)?),
		TypedValue::Bool(v) => Value::Bool(v),
		TypedValue::String(text) => Value::from(text),
		TypedValue::Blob(text) => Value::String(decode_hex(&text)?),
		TypedValue::Object(entries) => Value::Object(object_from_entries(entries)?),
		TypedValue::Array(array) => {
			let items = array.items.into_iter().map(from_typed).collect::<CliResult<Vec<_>>>()?;
			Value::Array(Array::with_items(array.kind.into(), items)?)
		}
	})
}

fn typed_entries(object: &Object) -> Vec<TypedEntry> {
	object
		.iter()
		.map(|entry| TypedEntry {
			name: entry.name.clone(),
			value: to_typed(&entry.value),
		})
		.collect()
}

fn object_from_entries(entries: Vec<TypedEntry>) -> CliResult<Object> {
	let mut object = Object::new();
	for entry in entries {
		object.push(entry.name, from_typed(entry.value)?);
	}
	Ok(object)
}
