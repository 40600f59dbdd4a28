//! Size-marked variable-width integers used for counts and lengths.
//!
//! The two low bits of the first byte select the width: `00` one byte,
//! `01` two bytes, `10` four bytes, `11` eight bytes (rejected). The value
//! occupies the remaining bits, little-endian.

use crate::storage::bytes::Cursor;
use crate::storage::{DecodeError, EncodeError};

/// Largest value representable in the four-byte width.
pub const MAX_VARINT: usize = 0x3FFF_FFFF;

pub(crate) const SIZE_MARK_MASK: u8 = 0x03;
pub(crate) const MARK_BYTE: u8 = 0x00;
pub(crate) const MARK_WORD: u8 = 0x01;
pub(crate) const MARK_DWORD: u8 = 0x02;

const MAX_BYTE: usize = 0x3F;
const MAX_WORD: usize = 0x3FFF;

/// Number of bytes `value` occupies once encoded.
pub fn varint_len(value: usize) -> Result<usize, EncodeError> {
	if value <= MAX_BYTE {
		Ok(1)
	} else if value <= MAX_WORD {
		Ok(2)
	} else if value <= MAX_VARINT {
		Ok(4)
	} else {
		Err(EncodeError::ValueTooLarge { value })
	}
}

/// Append the encoding of `value` to `out`, returning the bytes written.
pub fn write_varint(out: &mut Vec<u8>, value: usize) -> Result<usize, EncodeError> {
	let len = varint_len(value)?;
	match len {
		1 => out.push(((value as u8) << 2) | MARK_BYTE),
		2 => out.extend_from_slice(&(((value as u16) << 2) | u16::from(MARK_WORD)).to_le_bytes()),
		_ => out.extend_from_slice(&(((value as u32) << 2) | u32::from(MARK_DWORD)).to_le_bytes()),
	}
	Ok(len)
}

/// Encode `value` using the smallest width that fits.
pub fn encode_varint(value: usize) -> Result<Vec<u8>, EncodeError> {
	let mut out = Vec::with_capacity(4);
	write_varint(&mut out, value)?;
	Ok(out)
}

/// Decode a varint from the start of `bytes`, returning `(consumed, value)`.
pub fn decode_varint(bytes: &[u8]) -> Result<(usize, u32), DecodeError> {
	let mut cursor = Cursor::new(bytes);
	let value = cursor.read_varint()?;
	Ok((cursor.pos(), value))
}
