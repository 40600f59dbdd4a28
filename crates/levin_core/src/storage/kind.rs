use std::fmt;

/// Bit OR-ed into an element kind's tag to mark an array.
pub const ARRAY_FLAG: u8 = 0x80;

/// Wire kind of a serialized value, one tag byte each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum ValueKind {
	/// Signed 64-bit integer.
	Int64 = 0x01,
	/// Signed 32-bit integer.
	Int32 = 0x02,
	/// Signed 16-bit integer.
	Int16 = 0x03,
	/// Signed 8-bit integer.
	Int8 = 0x04,
	/// Unsigned 64-bit integer.
	UInt64 = 0x05,
	/// Unsigned 32-bit integer.
	UInt32 = 0x06,
	/// Unsigned 16-bit integer.
	UInt16 = 0x07,
	/// Unsigned 8-bit integer.
	UInt8 = 0x08,
	/// IEEE-754 double.
	Double = 0x09,
	/// Varint-length-prefixed byte string.
	String = 0x0a,
	/// Single signed byte, positive means true.
	Bool = 0x0b,
	/// Ordered list of named entries.
	Object = 0x0c,
	/// Array whose elements are themselves flagged arrays.
	Array = 0x0d,
}

impl ValueKind {
	/// Every kind in tag order.
	pub const ALL: [ValueKind; 13] = [
		Self::Int64,
		Self::Int32,
		Self::Int16,
		Self::Int8,
		Self::UInt64,
		Self::UInt32,
		Self::UInt16,
		Self::UInt8,
		Self::Double,
		Self::String,
		Self::Bool,
		Self::Object,
		Self::Array,
	];

	/// Map a bare tag byte (array flag cleared) to a kind.
	pub fn from_tag(tag: u8) -> Option<Self> {
		Self::ALL.into_iter().find(|kind| kind.tag() == tag)
	}

	/// Wire tag byte.
	pub fn tag(self) -> u8 {
		self as u8
	}

	/// Tag byte announcing an array of this element kind.
	pub fn array_tag(self) -> u8 {
		self.tag() | ARRAY_FLAG
	}

	/// Payload width for fixed-size kinds.
	pub fn fixed_width(self) -> Option<usize> {
		match self {
			Self::Int8 | Self::UInt8 | Self::Bool => Some(1),
			Self::Int16 | Self::UInt16 => Some(2),
			Self::Int32 | Self::UInt32 => Some(4),
			Self::Int64 | Self::UInt64 | Self::Double => Some(8),
			Self::String | Self::Object | Self::Array => None,
		}
	}

	/// Render kind as a stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Int64 => "i64",
			Self::Int32 => "i32",
			Self::Int16 => "i16",
			Self::Int8 => "i8",
			Self::UInt64 => "u64",
			Self::UInt32 => "u32",
			Self::UInt16 => "u16",
			Self::UInt8 => "u8",
			Self::Double => "f64",
			Self::String => "string",
			Self::Bool => "bool",
			Self::Object => "object",
			Self::Array => "array",
		}
	}
}

impl fmt::Display for ValueKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests;
