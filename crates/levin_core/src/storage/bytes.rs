use crate::storage::DecodeError;
use crate::storage::varint::{MARK_BYTE, MARK_DWORD, MARK_WORD, SIZE_MARK_MASK};

/// Simple bounded cursor over an immutable byte slice.
pub struct Cursor<'a> {
	bytes: &'a [u8],
	pos: usize,
}

impl<'a> Cursor<'a> {
	/// Create a cursor at position 0.
	pub fn new(bytes: &'a [u8]) -> Self {
		Self { bytes, pos: 0 }
	}

	/// Return current byte offset.
	pub fn pos(&self) -> usize {
		self.pos
	}

	/// Return remaining unread bytes.
	pub fn remaining(&self) -> usize {
		self.bytes.len().saturating_sub(self.pos)
	}

	/// Read exactly `n` bytes and advance cursor.
	pub fn read_exact(&mut self, n: usize) -> Result<&'a [u8], DecodeError> {
		if n > self.remaining() {
			return Err(DecodeError::TruncatedInput {
				at: self.pos,
				need: n,
				rem: self.remaining(),
			});
		}

		let start = self.pos;
		self.pos += n;
		Ok(&self.bytes[start..self.pos])
	}

	fn read_array<const N: usize>(&mut self) -> Result<[u8; N], DecodeError> {
		let raw = self.read_exact(N)?;
		let mut buf = [0_u8; N];
		buf.copy_from_slice(raw);
		Ok(buf)
	}

	/// Read one unsigned byte.
	pub fn read_u8(&mut self) -> Result<u8, DecodeError> {
		Ok(self.read_array::<1>()?[0])
	}

	/// Read one signed byte.
	pub fn read_i8(&mut self) -> Result<i8, DecodeError> {
		Ok(i8::from_le_bytes(self.read_array()?))
	}

	/// Read a little-endian `u16`.
	pub fn read_u16_le(&mut self) -> Result<u16, DecodeError> {
		Ok(u16::from_le_bytes(self.read_array()?))
	}

	/// Read a little-endian `i16`.
	pub fn read_i16_le(&mut self) -> Result<i16, DecodeError> {
		Ok(i16::from_le_bytes(self.read_array()?))
	}

	/// Read a little-endian `u32`.
	pub fn read_u32_le(&mut self) -> Result<u32, DecodeError> {
		Ok(u32::from_le_bytes(self.read_array()?))
	}

	/// Read a little-endian `i32`.
	pub fn read_i32_le(&mut self) -> Result<i32, DecodeError> {
		Ok(i32::from_le_bytes(self.read_array()?))
	}

	/// Read a little-endian `u64`.
	pub fn read_u64_le(&mut self) -> Result<u64, DecodeError> {
		Ok(u64::from_le_bytes(self.read_array()?))
	}

	/// Read a little-endian `i64`.
	pub fn read_i64_le(&mut self) -> Result<i64, DecodeError> {
		Ok(i64::from_le_bytes(self.read_array()?))
	}

	/// Read a little-endian IEEE-754 double.
	pub fn read_f64_le(&mut self) -> Result<f64, DecodeError> {
		Ok(f64::from_le_bytes(self.read_array()?))
	}

	/// Read a size-marked varint (1, 2, or 4 bytes).
	pub fn read_varint(&mut self) -> Result<u32, DecodeError> {
		let at = self.pos;
		let first = *self.bytes.get(at).ok_or(DecodeError::TruncatedInput { at, need: 1, rem: 0 })?;

		let raw = match first & SIZE_MARK_MASK {
			MARK_BYTE => u32::from(self.read_u8()?),
			MARK_WORD => u32::from(self.read_u16_le()?),
			MARK_DWORD => self.read_u32_le()?,
			_ => return Err(DecodeError::UnsupportedWidth { at }),
		};
		Ok(raw >> 2)
	}
}
