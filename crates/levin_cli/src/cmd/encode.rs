use std::fs;
use std::path::PathBuf;

use levin::storage::encode_container;
use tracing::info;

use crate::cmd::CliResult;
use crate::cmd::json::StorageDocument;

#[derive(clap::Args)]
pub struct Args {
	/// Typed JSON document, as written by `dump --json`.
	pub input: PathBuf,
	/// Destination payload file.
	#[arg(long)]
	pub out: PathBuf,
}

/// Build a payload file from a typed JSON document.
pub fn run(args: Args) -> CliResult<()> {
	let Args { input, out } = args;

	let text = fs::read_to_string(&input)?;
	let document: StorageDocument = serde_json::from_str(&text)?;
	let root = document.into_root()?;

	let bytes = encode_container(&root)?;
	fs::write(&out, &bytes)?;
	info!(path = %out.display(), bytes = bytes.len(), entries = root.len(), "wrote payload file");

	println!("path: {}", out.display());
	println!("bytes: {}", bytes.len());
	Ok(())
}
