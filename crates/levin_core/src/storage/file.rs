use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::storage::container::read_container;
use crate::storage::{DecodeOptions, Object, Result, StorageHeader, Value, ValueKind};

/// Payload file loaded from disk and decoded into a value tree.
#[derive(Debug, Clone)]
pub struct StorageFile {
	/// Parsed container header.
	pub header: StorageHeader,
	/// Decoded root object.
	pub root: Object,
	len: usize,
}

impl StorageFile {
	/// Read and decode a payload file with default limits.
	pub fn open(path: impl AsRef<Path>) -> Result<Self> {
		Self::open_with(path, &DecodeOptions::default())
	}

	/// Read and decode a payload file with explicit limits.
	pub fn open_with(path: impl AsRef<Path>, opt: &DecodeOptions) -> Result<Self> {
		let path = path.as_ref();
		let raw = fs::read(path)?;
		debug!(path = %path.display(), bytes = raw.len(), "read payload file");
		Self::from_bytes(&raw, opt)
	}

	/// Decode in-memory payload bytes.
	pub fn from_bytes(bytes: &[u8], opt: &DecodeOptions) -> Result<Self> {
		let (header, root) = read_container(bytes, opt)?;

		Ok(Self {
			header,
			root,
			len: bytes.len(),
		})
	}

	/// Payload length in bytes.
	pub fn len(&self) -> usize {
		self.len
	}

	/// Whether the payload was empty (never true once decoded).
	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	/// Walk the value tree and collect shape statistics.
	pub fn scan_stats(&self) -> StorageStats {
		let mut stats = StorageStats::default();
		scan_object(&self.root, 0, &mut stats);
		stats
	}
}

/// Aggregate shape counts from a full tree walk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StorageStats {
	/// Named entries across all objects, root included.
	pub entry_count: u32,
	/// Values of any kind, array elements included.
	pub value_count: u32,
	/// Deepest object or array nesting below the root.
	pub max_depth: u32,
	/// Frequency table by value kind.
	pub kinds: BTreeMap<ValueKind, u32>,
}

fn scan_object(object: &Object, depth: u32, stats: &mut StorageStats) {
	stats.max_depth = stats.max_depth.max(depth);
	for entry in object {
		stats.entry_count += 1;
		scan_value(&entry.value, depth, stats);
	}
}

fn scan_value(value: &Value, depth: u32, stats: &mut StorageStats) {
	stats.value_count += 1;
	*stats.kinds.entry(value.kind()).or_insert(0) += 1;
	match value {
		Value::Object(object) => scan_object(object, depth + 1, stats),
		Value::Array(array) => {
			stats.max_depth = stats.max_depth.max(depth + 1);
			for item in array {
				scan_value(item, depth + 1, stats);
			}
		}
		_ => {}
	}
}
