use std::path::PathBuf;

use levin::storage::{EntryPath, StorageFile, Value};

use crate::cmd::CliResult;
use crate::cmd::dump::{PrintOptions, print_value, render_scalar};
use crate::cmd::json::to_typed;
use crate::cmd::util::{LimitArgs, emit_json};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	/// Entry path such as `node_data.peer_id` or `matrix[0][1]`.
	pub entry: String,
	/// Emit the typed JSON value.
	#[arg(long)]
	pub json: bool,
	#[command(flatten)]
	pub limits: LimitArgs,
}

/// Resolve one entry path and print the selected value.
pub fn run(args: Args) -> CliResult<()> {
	let Args { path, entry, json, limits } = args;

	let entry_path = EntryPath::parse(&entry)?;
	let file = StorageFile::open_with(&path, &limits.decode_options())?;
	let value = entry_path.resolve(&file.root)?;

	if json {
		return emit_json(&to_typed(value));
	}

	let options = PrintOptions::default();
	match value {
		Value::Object(_) | Value::Array(_) => {
			println!("{entry_path} ({}) =", value.kind());
			print_value(value, 2, 0, options);
		}
		scalar => println!("{entry_path} ({}) = {}", scalar.kind(), render_scalar(scalar, options)),
	}
	Ok(())
}
