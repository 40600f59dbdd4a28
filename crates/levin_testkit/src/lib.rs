//! Shared test helpers for workspace crates.

use std::path::{Path, PathBuf};

/// Encoded container header: both signatures and the format version.
pub const HEADER: [u8; 9] = [0x01, 0x11, 0x01, 0x01, 0x01, 0x01, 0x02, 0x01, 0x01];

/// Resolve the workspace root path.
pub fn workspace_root() -> PathBuf {
	let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
	manifest_dir
		.join("..")
		.join("..")
		.canonicalize()
		.unwrap_or_else(|_| manifest_dir.join("..").join(".."))
}

/// Resolve a fixture path under `<workspace>/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
	workspace_root().join("fixtures").join(name)
}

/// Read a fixture file, panicking with the path on failure.
pub fn fixture_bytes(name: &str) -> Vec<u8> {
	let path = fixture_path(name);
	std::fs::read(&path).unwrap_or_else(|err| panic!("fixture {} readable: {err}", path.display()))
}

/// Prefix a root-object body with the container header.
pub fn container(body: &[u8]) -> Vec<u8> {
	let mut out = HEADER.to_vec();
	out.extend_from_slice(body);
	out
}

/// Hand-assembled object entry: name length, name, tag, payload.
pub fn entry(name: &str, tag: u8, payload: &[u8]) -> Vec<u8> {
	let mut out = Vec::with_capacity(name.len() + payload.len() + 2);
	out.push(u8::try_from(name.len()).expect("test entry name fits one byte"));
	out.extend_from_slice(name.as_bytes());
	out.push(tag);
	out.extend_from_slice(payload);
	out
}

/// The `{ "height": UInt32(12345) }` payload, byte for byte.
pub fn height_payload() -> Vec<u8> {
	let mut body = vec![0x04];
	body.extend_from_slice(&entry("height", 0x06, &12345_u32.to_le_bytes()));
	container(&body)
}
