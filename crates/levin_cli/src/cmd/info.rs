use std::path::PathBuf;

use levin::storage::StorageFile;
use serde::Serialize;

use crate::cmd::CliResult;
use crate::cmd::util::{LimitArgs, emit_json};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	/// Emit a JSON summary instead of text.
	#[arg(long)]
	pub json: bool,
	#[command(flatten)]
	pub limits: LimitArgs,
}

#[derive(Serialize)]
struct InfoJson {
	path: String,
	bytes: usize,
	signature_a: String,
	signature_b: String,
	version: u8,
	root_entries: usize,
	entry_count: u32,
	value_count: u32,
	max_depth: u32,
	kinds: Vec<KindCount>,
}

#[derive(Serialize)]
struct KindCount {
	kind: &'static str,
	count: u32,
}

/// Print container header fields and value tree statistics.
pub fn run(args: Args) -> CliResult<()> {
	let Args { path, json, limits } = args;

	let file = StorageFile::open_with(&path, &limits.decode_options())?;
	let stats = file.scan_stats();

	let mut kinds: Vec<_> = stats.kinds.into_iter().map(|(kind, count)| KindCount { kind: kind.as_str(), count }).collect();
	kinds.sort_by(|left, right| right.count.cmp(&left.count).then_with(|| left.kind.cmp(right.kind)));

	let info = InfoJson {
		path: path.display().to_string(),
		bytes: file.len(),
		signature_a: format!("0x{:08x}", file.header.signature_a),
		signature_b: format!("0x{:08x}", file.header.signature_b),
		version: file.header.version,
		root_entries: file.root.len(),
		entry_count: stats.entry_count,
		value_count: stats.value_count,
		max_depth: stats.max_depth,
		kinds,
	};

	if json {
		return emit_json(&info);
	}

	println!("path: {}", info.path);
	println!("bytes: {}", info.bytes);
	println!("signature_a: {}", info.signature_a);
	println!("signature_b: {}", info.signature_b);
	println!("version: {}", info.version);
	println!("root_entries: {}", info.root_entries);
	println!("entry_count: {}", info.entry_count);
	println!("value_count: {}", info.value_count);
	println!("max_depth: {}", info.max_depth);
	println!("kinds:");
	for item in &info.kinds {
		println!("  {}: {}", item.kind, item.count);
	}

	Ok(())
}
