use tracing::debug;

use crate::storage::bytes::Cursor;
use crate::storage::decode::read_object;
use crate::storage::encode::{ObjectFraming, write_object};
use crate::storage::{DecodeError, DecodeOptions, EncodeError, Object, StorageHeader};

/// Complete self-identifying payload: header plus root object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PortableStorage {
	/// Root object.
	pub root: Object,
}

impl PortableStorage {
	/// Wrap a root object.
	pub fn new(root: Object) -> Self {
		Self { root }
	}

	/// Decode a container with default limits.
	pub fn decode(bytes: &[u8]) -> Result<Self, DecodeError> {
		Self::decode_with(bytes, &DecodeOptions::default())
	}

	/// Decode a container with explicit limits.
	pub fn decode_with(bytes: &[u8], opt: &DecodeOptions) -> Result<Self, DecodeError> {
		decode_container_with(bytes, opt).map(Self::new)
	}

	/// Encode header and root object.
	pub fn encode(&self) -> Result<Vec<u8>, EncodeError> {
		encode_container(&self.root)
	}
}

/// Validate the header and decode the root object.
pub fn decode_container(bytes: &[u8]) -> Result<Object, DecodeError> {
	decode_container_with(bytes, &DecodeOptions::default())
}

/// Validate the header and decode the root object with explicit limits.
pub fn decode_container_with(bytes: &[u8], opt: &DecodeOptions) -> Result<Object, DecodeError> {
	read_container(bytes, opt).map(|(_, root)| root)
}

/// Parse the header once, then decode the root object that follows it.
pub(crate) fn read_container(bytes: &[u8], opt: &DecodeOptions) -> Result<(StorageHeader, Object), DecodeError> {
	let header = StorageHeader::parse(bytes)?;

	let mut cursor = Cursor::new(bytes);
	cursor.read_exact(StorageHeader::SIZE)?;
	let root = read_object(&mut cursor, opt, 0)?;

	let leftover = cursor.remaining();
	if leftover > 0 && opt.reject_trailing_bytes {
		return Err(DecodeError::TrailingBytes { leftover });
	}

	debug!(bytes = bytes.len(), entries = root.len(), leftover, "decoded portable storage");
	Ok((header, root))
}

/// Encode the header followed by the untagged root object.
pub fn encode_container(root: &Object) -> Result<Vec<u8>, EncodeError> {
	let mut out = Vec::new();
	StorageHeader::default().write(&mut out);
	write_object(&mut out, root, ObjectFraming::Untagged)?;

	debug!(bytes = out.len(), entries = root.len(), "encoded portable storage");
	Ok(out)
}

#[cfg(test)]
mod tests;
