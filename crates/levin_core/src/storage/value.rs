use crate::storage::{AccessError, EncodeError, EntryPath, ValueKind};

/// One serializable value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// Signed 64-bit integer.
	Int64(i64),
	/// Signed 32-bit integer.
	Int32(i32),
	/// Signed 16-bit integer.
	Int16(i16),
	/// Signed 8-bit integer.
	Int8(i8),
	/// Unsigned 64-bit integer.
	UInt64(u64),
	/// Unsigned 32-bit integer.
	UInt32(u32),
	/// Unsigned 16-bit integer.
	UInt16(u16),
	/// Unsigned 8-bit integer.
	UInt8(u8),
	/// 64-bit float.
	Double(f64),
	/// Raw string bytes, usually but not necessarily UTF-8.
	String(Vec<u8>),
	/// Boolean scalar.
	Bool(bool),
	/// Nested object.
	Object(Object),
	/// Homogeneous array.
	Array(Array),
}

/// Ordered sequence of named entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Object {
	/// Entries in wire order, duplicates preserved.
	pub entries: Vec<Entry>,
}

/// Named value inside an object.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
	/// Entry name, at most 255 bytes on the wire.
	///
	/// Names are text: payloads whose name bytes are not UTF-8 are rejected
	/// with [`DecodeError::InvalidEntryName`](crate::storage::DecodeError::InvalidEntryName)
	/// rather than kept as raw bytes the way string values are.
	pub name: String,
	/// Entry payload.
	pub value: Value,
}

/// Count-prefixed list of unnamed values sharing one element kind.
#[derive(Debug, Clone, PartialEq)]
pub struct Array {
	kind: ValueKind,
	items: Vec<Value>,
}

macro_rules! scalar_accessors {
	($($(#[$doc:meta])* $fn_name:ident => $variant:ident: $ty:ty),* $(,)?) => {
		$(
			$(#[$doc])*
			pub fn $fn_name(&self) -> Result<$ty, AccessError> {
				match self {
					Self::$variant(value) => Ok(*value),
					other => Err(AccessError::TypeMismatch {
						expected: ValueKind::$variant,
						got: other.kind(),
					}),
				}
			}
		)*
	};
}

impl Value {
	/// Wire kind of this value.
	pub fn kind(&self) -> ValueKind {
		match self {
			Self::Int64(_) => ValueKind::Int64,
			Self::Int32(_) => ValueKind::Int32,
			Self::Int16(_) => ValueKind::Int16,
			Self::Int8(_) => ValueKind::Int8,
			Self::UInt64(_) => ValueKind::UInt64,
			Self::UInt32(_) => ValueKind::UInt32,
			Self::UInt16(_) => ValueKind::UInt16,
			Self::UInt8(_) => ValueKind::UInt8,
			Self::Double(_) => ValueKind::Double,
			Self::String(_) => ValueKind::String,
			Self::Bool(_) => ValueKind::Bool,
			Self::Object(_) => ValueKind::Object,
			Self::Array(_) => ValueKind::Array,
		}
	}

	/// Tag byte written in front of this value inside an object entry.
	///
	/// Arrays are announced by their element kind with the array flag set.
	pub fn tag(&self) -> u8 {
		match self {
			Self::Array(array) => array.kind().array_tag(),
			other => other.kind().tag(),
		}
	}

	scalar_accessors! {
		/// Read an `Int64` payload.
		as_i64 => Int64: i64,
		/// Read an `Int32` payload.
		as_i32 => Int32: i32,
		/// Read an `Int16` payload.
		as_i16 => Int16: i16,
		/// Read an `Int8` payload.
		as_i8 => Int8: i8,
		/// Read a `UInt64` payload.
		as_u64 => UInt64: u64,
		/// Read a `UInt32` payload.
		as_u32 => UInt32: u32,
		/// Read a `UInt16` payload.
		as_u16 => UInt16: u16,
		/// Read a `UInt8` payload.
		as_u8 => UInt8: u8,
		/// Read a `Double` payload.
		as_f64 => Double: f64,
		/// Read a `Bool` payload.
		as_bool => Bool: bool,
	}

	/// Borrow raw string bytes.
	pub fn as_bytes(&self) -> Result<&[u8], AccessError> {
		match self {
			Self::String(bytes) => Ok(bytes),
			other => Err(mismatch(ValueKind::String, other)),
		}
	}

	/// Borrow string bytes as UTF-8 text.
	pub fn as_str(&self) -> Result<&str, AccessError> {
		std::str::from_utf8(self.as_bytes()?).map_err(|_| AccessError::InvalidUtf8)
	}

	/// Borrow a nested object.
	pub fn as_object(&self) -> Result<&Object, AccessError> {
		match self {
			Self::Object(object) => Ok(object),
			other => Err(mismatch(ValueKind::Object, other)),
		}
	}

	/// Borrow an array.
	pub fn as_array(&self) -> Result<&Array, AccessError> {
		match self {
			Self::Array(array) => Ok(array),
			other => Err(mismatch(ValueKind::Array, other)),
		}
	}
}

fn mismatch(expected: ValueKind, got: &Value) -> AccessError {
	AccessError::TypeMismatch { expected, got: got.kind() }
}

macro_rules! value_from {
	($($ty:ty => $variant:ident),* $(,)?) => {
		$(
			impl From<$ty> for Value {
				fn from(value: $ty) -> Self {
					Self::$variant(value)
				}
			}
		)*
	};
}

value_from! {
	i64 => Int64,
	i32 => Int32,
	i16 => Int16,
	i8 => Int8,
	u64 => UInt64,
	u32 => UInt32,
	u16 => UInt16,
	u8 => UInt8,
	f64 => Double,
	bool => Bool,
	Vec<u8> => String,
	Object => Object,
	Array => Array,
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Self::String(value.as_bytes().to_vec())
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Self::String(value.into_bytes())
	}
}

impl Object {
	/// Create an empty object.
	pub fn new() -> Self {
		Self::default()
	}

	/// Append an entry and return the object, for builder-style construction.
	pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
		self.push(name, value);
		self
	}

	/// Append an entry.
	pub fn push(&mut self, name: impl Into<String>, value: impl Into<Value>) {
		self.entries.push(Entry {
			name: name.into(),
			value: value.into(),
		});
	}

	/// Return the first value named `name`.
	pub fn get(&self, name: &str) -> Option<&Value> {
		self.entries.iter().find(|entry| entry.name == name).map(|entry| &entry.value)
	}

	/// Return the first value named `name`, or an error naming the missing entry.
	pub fn entry(&self, name: &str) -> Result<&Value, AccessError> {
		self.get(name).ok_or_else(|| AccessError::EntryNotFound { name: name.to_owned() })
	}

	/// Resolve a dotted entry path below this object.
	pub fn lookup(&self, path: &EntryPath) -> Result<&Value, AccessError> {
		path.resolve(self)
	}

	/// Number of entries.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether the object has no entries.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterate entries in wire order.
	pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
		self.entries.iter()
	}
}

impl<'a> IntoIterator for &'a Object {
	type Item = &'a Entry;
	type IntoIter = std::slice::Iter<'a, Entry>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl Array {
	/// Create an empty array of `kind` elements.
	pub fn new(kind: ValueKind) -> Self {
		Self { kind, items: Vec::new() }
	}

	/// Create an array, checking that every item matches `kind`.
	pub fn with_items(kind: ValueKind, items: Vec<Value>) -> Result<Self, EncodeError> {
		if let Some((index, item)) = items.iter().enumerate().find(|(_, item)| item.kind() != kind) {
			return Err(EncodeError::MixedArray {
				expected: kind,
				got: item.kind(),
				index,
			});
		}
		Ok(Self { kind, items })
	}

	/// Create an array without checking element kinds; the writer re-checks.
	pub(crate) fn from_parts(kind: ValueKind, items: Vec<Value>) -> Self {
		Self { kind, items }
	}

	/// Append an item of the declared element kind.
	pub fn push(&mut self, value: impl Into<Value>) -> Result<(), AccessError> {
		let value = value.into();
		if value.kind() != self.kind {
			return Err(AccessError::TypeMismatch {
				expected: self.kind,
				got: value.kind(),
			});
		}
		self.items.push(value);
		Ok(())
	}

	/// Declared element kind.
	pub fn kind(&self) -> ValueKind {
		self.kind
	}

	/// Borrow items in order.
	pub fn items(&self) -> &[Value] {
		&self.items
	}

	/// Return the item at `index`.
	pub fn get(&self, index: usize) -> Result<&Value, AccessError> {
		self.items.get(index).ok_or(AccessError::IndexOutOfRange {
			index,
			len: self.items.len(),
		})
	}

	/// Number of items.
	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// Whether the array has no items.
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// Iterate items in order.
	pub fn iter(&self) -> std::slice::Iter<'_, Value> {
		self.items.iter()
	}
}

impl<'a> IntoIterator for &'a Array {
	type Item = &'a Value;
	type IntoIter = std::slice::Iter<'a, Value>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

#[cfg(test)]
mod tests;
