use crate::storage::DecodeError;
use crate::storage::bytes::Cursor;

/// First container signature.
pub const SIGNATURE_A: u32 = 0x0101_1101;
/// Second container signature.
pub const SIGNATURE_B: u32 = 0x0102_0101;
/// Only supported container format version.
pub const FORMAT_VERSION: u8 = 0x01;

/// Fixed 9-byte container header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StorageHeader {
	/// First signature, always [`SIGNATURE_A`] once parsed.
	pub signature_a: u32,
	/// Second signature, always [`SIGNATURE_B`] once parsed.
	pub signature_b: u32,
	/// Format version, always [`FORMAT_VERSION`] once parsed.
	pub version: u8,
}

impl Default for StorageHeader {
	fn default() -> Self {
		Self {
			signature_a: SIGNATURE_A,
			signature_b: SIGNATURE_B,
			version: FORMAT_VERSION,
		}
	}
}

impl StorageHeader {
	/// Encoded header size in bytes.
	pub const SIZE: usize = 9;

	/// Parse and validate a header from the beginning of `bytes`.
	pub fn parse(bytes: &[u8]) -> Result<Self, DecodeError> {
		let mut cursor = Cursor::new(bytes);

		let signature_a = cursor.read_u32_le()?;
		if signature_a != SIGNATURE_A {
			return Err(DecodeError::BadSignature {
				expected: SIGNATURE_A,
				got: signature_a,
			});
		}

		let signature_b = cursor.read_u32_le()?;
		if signature_b != SIGNATURE_B {
			return Err(DecodeError::BadSignature {
				expected: SIGNATURE_B,
				got: signature_b,
			});
		}

		let version = cursor.read_u8()?;
		if version != FORMAT_VERSION {
			return Err(DecodeError::BadVersion {
				expected: FORMAT_VERSION,
				got: version,
			});
		}

		Ok(Self {
			signature_a,
			signature_b,
			version,
		})
	}

	/// Append the encoded header to `out`.
	pub fn write(&self, out: &mut Vec<u8>) {
		out.extend_from_slice(&self.signature_a.to_le_bytes());
		out.extend_from_slice(&self.signature_b.to_le_bytes());
		out.push(self.version);
	}
}
