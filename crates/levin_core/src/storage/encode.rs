use crate::storage::varint::write_varint;
use crate::storage::{Array, EncodeError, Object, Value, ValueKind};

/// Longest entry name the single-byte length prefix can describe.
pub const MAX_NAME_LEN: usize = u8::MAX as usize;

/// Whether an object body is preceded by its own `Object` tag.
///
/// The container root and array elements are untagged; an object stored as
/// an entry value is tagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectFraming {
	/// Body only.
	Untagged,
	/// `Object` tag, then body.
	Tagged,
}

/// Encode a value with its leading tag byte.
pub fn encode_value(value: &Value) -> Result<Vec<u8>, EncodeError> {
	let mut out = Vec::new();
	write_value(&mut out, value)?;
	Ok(out)
}

/// Append a tagged value to `out`; on error `out` is left as it was.
pub fn encode_value_into(out: &mut Vec<u8>, value: &Value) -> Result<(), EncodeError> {
	let mark = out.len();
	write_value(out, value).inspect_err(|_| out.truncate(mark))
}

/// Encode an object body (entry count and entries) without any tag.
pub fn encode_object_body(object: &Object) -> Result<Vec<u8>, EncodeError> {
	let mut out = Vec::new();
	write_object(&mut out, object, ObjectFraming::Untagged)?;
	Ok(out)
}

pub(crate) fn write_object(out: &mut Vec<u8>, object: &Object, framing: ObjectFraming) -> Result<(), EncodeError> {
	if framing == ObjectFraming::Tagged {
		out.push(ValueKind::Object.tag());
	}

	write_varint(out, object.len())?;
	for entry in object {
		let len = entry.name.len();
		if len > MAX_NAME_LEN {
			return Err(EncodeError::NameTooLong {
				name: entry.name.clone(),
				len,
			});
		}
		out.push(len as u8);
		out.extend_from_slice(entry.name.as_bytes());
		write_value(out, &entry.value)?;
	}
	Ok(())
}

fn write_value(out: &mut Vec<u8>, value: &Value) -> Result<(), EncodeError> {
	match value {
		Value::Object(object) => write_object(out, object, ObjectFraming::Tagged),
		other => {
			out.push(other.tag());
			write_payload(out, other)
		}
	}
}

/// Write an un-tagged payload.
fn write_payload(out: &mut Vec<u8>, value: &Value) -> Result<(), EncodeError> {
	match value {
		Value::Int64(v) => out.extend_from_slice(&v.to_le_bytes()),
		Value::Int32(v) => out.extend_from_slice(&v.to_le_bytes()),
		Value::Int16(v) => out.extend_from_slice(&v.to_le_bytes()),
		Value::Int8(v) => out.extend_from_slice(&v.to_le_bytes()),
		Value::UInt64(v) => out.extend_from_slice(&v.to_le_bytes()),
		Value::UInt32(v) => out.extend_from_slice(&v.to_le_bytes()),
		Value::UInt16(v) => out.extend_from_slice(&v.to_le_bytes()),
		Value::UInt8(v) => out.push(*v),
		Value::Double(v) => out.extend_from_slice(&v.to_le_bytes()),
		Value::String(bytes) => {
			write_varint(out, bytes.len())?;
			out.extend_from_slice(bytes);
		}
		Value::Bool(v) => out.push(u8::from(*v)),
		Value::Object(object) => write_object(out, object, ObjectFraming::Untagged)?,
		Value::Array(array) => write_array(out, array)?,
	}
	Ok(())
}

/// Count and elements; the element tag was already written by the caller.
fn write_array(out: &mut Vec<u8>, array: &Array) -> Result<(), EncodeError> {
	write_varint(out, array.len())?;
	for (index, item) in array.iter().enumerate() {
		if item.kind() != array.kind() {
			return Err(EncodeError::MixedArray {
				expected: array.kind(),
				got: item.kind(),
				index,
			});
		}
		// Nested arrays repeat their own flagged tag per element.
		if let Value::Array(inner) = item {
			out.push(inner.kind().array_tag());
		}
		write_payload(out, item)?;
	}
	Ok(())
}
