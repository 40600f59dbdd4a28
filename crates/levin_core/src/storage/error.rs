use thiserror::Error;

use crate::storage::ValueKind;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors produced while turning bytes into a value tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
	/// Container signature did not match the fixed constant.
	#[error("bad signature: expected 0x{expected:08x}, got 0x{got:08x}")]
	BadSignature {
		/// Required signature value.
		expected: u32,
		/// Signature read from the input.
		got: u32,
	},
	/// Container format version did not match the fixed constant.
	#[error("bad format version: expected {expected}, got {got}")]
	BadVersion {
		/// Required format version.
		expected: u8,
		/// Version byte read from the input.
		got: u8,
	},
	/// Not enough bytes remained for a requested read.
	#[error("truncated input at offset {at}, need {need} bytes, remaining {rem}")]
	TruncatedInput {
		/// Byte offset where the read was attempted.
		at: usize,
		/// Requested bytes.
		need: usize,
		/// Bytes still available.
		rem: usize,
	},
	/// Type tag outside the known set.
	#[error("unknown type tag 0x{tag:02x} at offset {at}")]
	UnknownTypeTag {
		/// Offending tag byte.
		tag: u8,
		/// Offset of the tag byte, or of the payload when the tag was supplied by the caller.
		at: usize,
	},
	/// Bare array tag was not followed by a flagged element tag.
	#[error("expected flagged array tag at offset {at}, got 0x{tag:02x}")]
	ExpectedArrayTag {
		/// Tag byte that lacked the array flag.
		tag: u8,
		/// Offset of the tag byte.
		at: usize,
	},
	/// Varint used the 8-byte size marker.
	#[error("unsupported 8-byte varint width at offset {at}")]
	UnsupportedWidth {
		/// Offset of the varint's first byte.
		at: usize,
	},
	/// Entry name length byte points past the end of input.
	#[error("entry name at offset {at} declares {len} bytes, remaining {rem}")]
	NameTooLong {
		/// Offset of the first name byte.
		at: usize,
		/// Declared name length.
		len: usize,
		/// Bytes still available.
		rem: usize,
	},
	/// Entry name bytes are not valid UTF-8; such payloads are rejected, not lossily decoded.
	#[error("entry name at offset {at} is not valid utf-8")]
	InvalidEntryName {
		/// Offset of the first name byte.
		at: usize,
	},
	/// Nesting exceeded the configured limit.
	#[error("decode depth exceeded (max={max_depth})")]
	DepthExceeded {
		/// Configured depth ceiling.
		max_depth: u32,
	},
	/// Declared array count exceeded the configured limit.
	#[error("decode array too large: count={count}, max={max}")]
	ArrayTooLarge {
		/// Declared element count.
		count: usize,
		/// Maximum permitted element count.
		max: usize,
	},
	/// Bytes remained after the root object in strict mode.
	#[error("trailing bytes after root object: leftover={leftover}")]
	TrailingBytes {
		/// Unconsumed bytes.
		leftover: usize,
	},
}

/// Errors produced while turning a value tree into bytes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
	/// Count or length exceeds the 30-bit varint ceiling.
	#[error("value {value} exceeds varint ceiling 1073741823")]
	ValueTooLarge {
		/// Value that could not be encoded.
		value: usize,
	},
	/// Entry name does not fit the single-byte length prefix.
	#[error("entry name {name:?} is {len} bytes (max 255)")]
	NameTooLong {
		/// Offending name.
		name: String,
		/// Name length in bytes.
		len: usize,
	},
	/// Array element kind differs from the declared element kind.
	#[error("mixed array: expected {expected} elements, got {got} at index {index}")]
	MixedArray {
		/// Declared element kind.
		expected: ValueKind,
		/// Kind of the offending element.
		got: ValueKind,
		/// Element position.
		index: usize,
	},
}

/// Errors produced by typed accessors and entry paths.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
	/// Value held a different kind than requested.
	#[error("type mismatch: expected {expected}, got {got}")]
	TypeMismatch {
		/// Requested kind.
		expected: ValueKind,
		/// Actual kind.
		got: ValueKind,
	},
	/// Named entry is missing from an object.
	#[error("entry not found: {name}")]
	EntryNotFound {
		/// Requested entry name.
		name: String,
	},
	/// Array index past the end.
	#[error("index {index} out of range (len={len})")]
	IndexOutOfRange {
		/// Requested index.
		index: usize,
		/// Array length.
		len: usize,
	},
	/// String bytes are not valid UTF-8.
	#[error("string value is not valid utf-8")]
	InvalidUtf8,
	/// Path expression syntax is invalid.
	#[error("invalid entry path: {path}")]
	InvalidEntryPath {
		/// Original path string.
		path: String,
	},
}

/// Errors produced while loading, decoding, and querying payload files.
#[derive(Debug, Error)]
pub enum StorageError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Payload decode failure.
	#[error("decode: {0}")]
	Decode(#[from] DecodeError),
	/// Payload encode failure.
	#[error("encode: {0}")]
	Encode(#[from] EncodeError),
	/// Value access failure.
	#[error("access: {0}")]
	Access(#[from] AccessError),
}
