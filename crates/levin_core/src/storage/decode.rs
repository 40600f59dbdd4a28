use tracing::trace;

use crate::storage::bytes::Cursor;
use crate::storage::kind::ARRAY_FLAG;
use crate::storage::{Array, DecodeError, Entry, Object, Value, ValueKind};

/// Runtime limits and behavior switches for payload decoding.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
	/// Maximum nesting of objects and arrays below the root object.
	pub max_depth: u32,
	/// Maximum declared element count of a single array.
	pub max_array_elems: usize,
	/// Error when bytes remain after the root object.
	pub reject_trailing_bytes: bool,
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self {
			max_depth: 100,
			max_array_elems: 1 << 20,
			reject_trailing_bytes: false,
		}
	}
}

impl DecodeOptions {
	/// Preset that also rejects trailing bytes after the root object.
	pub fn strict() -> Self {
		Self {
			reject_trailing_bytes: true,
			..Self::default()
		}
	}
}

/// Decode one value announced by `tag`, returning `(consumed, value)`.
pub fn decode_value(tag: u8, bytes: &[u8]) -> Result<(usize, Value), DecodeError> {
	decode_value_with(tag, bytes, &DecodeOptions::default())
}

/// Decode one value announced by `tag` with explicit limits.
pub fn decode_value_with(tag: u8, bytes: &[u8], opt: &DecodeOptions) -> Result<(usize, Value), DecodeError> {
	let mut cursor = Cursor::new(bytes);
	let value = read_value(&mut cursor, tag, opt, 0)?;
	Ok((cursor.pos(), value))
}

/// Decode an object body (entry count and entries), returning `(consumed, object)`.
///
/// Entry names must be UTF-8; any other name bytes fail with
/// [`DecodeError::InvalidEntryName`].
pub fn decode_object(bytes: &[u8]) -> Result<(usize, Object), DecodeError> {
	decode_object_with(bytes, &DecodeOptions::default())
}

/// Decode an object body with explicit limits.
pub fn decode_object_with(bytes: &[u8], opt: &DecodeOptions) -> Result<(usize, Object), DecodeError> {
	let mut cursor = Cursor::new(bytes);
	let object = read_object(&mut cursor, opt, 0)?;
	Ok((cursor.pos(), object))
}

pub(crate) fn read_object(cursor: &mut Cursor<'_>, opt: &DecodeOptions, depth: u32) -> Result<Object, DecodeError> {
	check_depth(opt, depth)?;

	let count = cursor.read_varint()? as usize;
	// Each entry occupies at least one byte.
	if count > cursor.remaining() {
		return Err(DecodeError::TruncatedInput {
			at: cursor.pos(),
			need: count,
			rem: cursor.remaining(),
		});
	}

	let mut entries = Vec::with_capacity(count);
	for _ in 0..count {
		let name = read_entry_name(cursor)?;
		let tag_at = cursor.pos();
		let tag = cursor.read_u8()?;
		trace!(name = %name, tag, at = tag_at, "decoding entry");

		let value = read_tagged(cursor, tag, tag_at, opt, depth)?;
		entries.push(Entry { name, value });
	}

	Ok(Object { entries })
}

fn read_entry_name(cursor: &mut Cursor<'_>) -> Result<String, DecodeError> {
	let len = usize::from(cursor.read_u8()?);
	let at = cursor.pos();
	if len > cursor.remaining() {
		return Err(DecodeError::NameTooLong {
			at,
			len,
			rem: cursor.remaining(),
		});
	}

	let raw = cursor.read_exact(len)?;
	String::from_utf8(raw.to_vec()).map_err(|_| DecodeError::InvalidEntryName { at })
}

fn read_value(cursor: &mut Cursor<'_>, tag: u8, opt: &DecodeOptions, depth: u32) -> Result<Value, DecodeError> {
	let at = cursor.pos();
	read_tagged(cursor, tag, at, opt, depth)
}

/// Dispatch on a tag whose byte (when read from input) sat at `tag_at`.
fn read_tagged(cursor: &mut Cursor<'_>, tag: u8, tag_at: usize, opt: &DecodeOptions, depth: u32) -> Result<Value, DecodeError> {
	let kind = ValueKind::from_tag(tag & !ARRAY_FLAG).ok_or(DecodeError::UnknownTypeTag { tag, at: tag_at })?;

	if tag & ARRAY_FLAG != 0 {
		return read_array(cursor, kind, opt, depth + 1).map(Value::Array);
	}

	read_payload(cursor, kind, opt, depth)
}

/// Read an un-tagged payload of `kind`.
fn read_payload(cursor: &mut Cursor<'_>, kind: ValueKind, opt: &DecodeOptions, depth: u32) -> Result<Value, DecodeError> {
	Ok(match kind {
		ValueKind::Int64 => Value::Int64(cursor.read_i64_le()?),
		ValueKind::Int32 => Value::Int32(cursor.read_i32_le()?),
		ValueKind::Int16 => Value::Int16(cursor.read_i16_le()?),
		ValueKind::Int8 => Value::Int8(cursor.read_i8()?),
		ValueKind::UInt64 => Value::UInt64(cursor.read_u64_le()?),
		ValueKind::UInt32 => Value::UInt32(cursor.read_u32_le()?),
		ValueKind::UInt16 => Value::UInt16(cursor.read_u16_le()?),
		ValueKind::UInt8 => Value::UInt8(cursor.read_u8()?),
		ValueKind::Double => Value::Double(cursor.read_f64_le()?),
		ValueKind::String => {
			let len = cursor.read_varint()? as usize;
			Value::String(cursor.read_exact(len)?.to_vec())
		}
		// Only strictly positive bytes are true.
		ValueKind::Bool => Value::Bool(cursor.read_i8()? > 0),
		ValueKind::Object => Value::Object(read_object(cursor, opt, depth + 1)?),
		// A bare array kind is always followed by a complete flagged array.
		ValueKind::Array => {
			let at = cursor.pos();
			let tag = cursor.read_u8()?;
			if tag & ARRAY_FLAG == 0 {
				return Err(DecodeError::ExpectedArrayTag { tag, at });
			}
			read_tagged(cursor, tag, at, opt, depth)?
		}
	})
}

fn read_array(cursor: &mut Cursor<'_>, kind: ValueKind, opt: &DecodeOptions, depth: u32) -> Result<Array, DecodeError> {
	check_depth(opt, depth)?;

	let count = cursor.read_varint()? as usize;
	if count > opt.max_array_elems {
		return Err(DecodeError::ArrayTooLarge {
			count,
			max: opt.max_array_elems,
		});
	}
	let min_size = kind.fixed_width().unwrap_or(1);
	if count.saturating_mul(min_size) > cursor.remaining() {
		return Err(DecodeError::TruncatedInput {
			at: cursor.pos(),
			need: count.saturating_mul(min_size),
			rem: cursor.remaining(),
		});
	}

	let mut items = Vec::with_capacity(count);
	for _ in 0..count {
		items.push(read_payload(cursor, kind, opt, depth)?);
	}
	Ok(Array::from_parts(kind, items))
}

fn check_depth(opt: &DecodeOptions, depth: u32) -> Result<(), DecodeError> {
	if depth > opt.max_depth {
		return Err(DecodeError::DepthExceeded { max_depth: opt.max_depth });
	}
	Ok(())
}
