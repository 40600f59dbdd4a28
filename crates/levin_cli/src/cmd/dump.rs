use std::path::PathBuf;

use levin::storage::{Object, StorageFile, Value};

use crate::cmd::CliResult;
use crate::cmd::json::StorageDocument;
use crate::cmd::util::{LimitArgs, emit_json, printable_text, truncate};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	/// Emit the typed JSON document accepted by `encode`.
	#[arg(long)]
	pub json: bool,
	#[command(flatten)]
	pub limits: LimitArgs,
}

/// Output truncation and formatting limits for the text tree.
#[derive(Debug, Clone, Copy)]
pub struct PrintOptions {
	/// Maximum number of entries printed for a single object.
	pub max_entries_per_object: usize,
	/// Maximum number of Unicode scalar values printed for strings.
	pub max_string_len: usize,
	/// Maximum number of elements printed for arrays.
	pub max_array_items: usize,
	/// Maximum recursive print depth for nested arrays/objects.
	pub max_print_depth: u32,
}

impl Default for PrintOptions {
	fn default() -> Self {
		Self {
			max_entries_per_object: 80,
			max_string_len: 200,
			max_array_items: 16,
			max_print_depth: 8,
		}
	}
}

/// Decode a payload file and print its value tree.
pub fn run(args: Args) -> CliResult<()> {
	let Args { path, json, limits } = args;

	let file = StorageFile::open_with(&path, &limits.decode_options())?;
	if json {
		return emit_json(&StorageDocument::from_root(&file.root));
	}

	println!("path: {}", path.display());
	println!("root:");
	print_object(&file.root, 0, 0, PrintOptions::default());
	Ok(())
}

pub(crate) fn print_value(value: &Value, indent: usize, depth: u32, options: PrintOptions) {
	let pad = " ".repeat(indent);
	match value {
		Value::Object(object) => print_object(object, indent, depth, options),
		Value::Array(array) => {
			if depth >= options.max_print_depth {
				println!("{pad}[{}; ... {} items]", array.kind(), array.len());
				return;
			}
			println!("{pad}[{}; {}", array.kind(), array.len());
			for item in array.iter().take(options.max_array_items) {
				print_value(item, indent + 2, depth + 1, options);
			}
			if array.len() > options.max_array_items {
				println!("{pad}  ... {} more", array.len() - options.max_array_items);
			}
			println!("{pad}]");
		}
		scalar => println!("{pad}{}", render_scalar(scalar, options)),
	}
}

fn print_object(object: &Object, indent: usize, depth: u32, options: PrintOptions) {
	let pad = " ".repeat(indent);
	if depth >= options.max_print_depth {
		println!("{pad}{{ ... {} entries }}", object.len());
		return;
	}
	println!("{pad}{{");
	for entry in object.iter().take(options.max_entries_per_object) {
		if matches!(entry.value, Value::Object(_) | Value::Array(_)) {
			println!("{pad}  {} =", entry.name);
			print_value(&entry.value, indent + 4, depth + 1, options);
		} else {
			println!("{pad}  {} = {}", entry.name, render_scalar(&entry.value, options));
		}
	}
	if object.len() > options.max_entries_per_object {
		println!("{pad}  ... {} more entries", object.len() - options.max_entries_per_object);
	}
	println!("{pad}}}");
}

pub(crate) fn render_scalar(value: &Value, options: PrintOptions) -> String {
	match value {
		Value::Int64(v) => format!("{v}_i64"),
		Value::Int32(v) => format!("{v}_i32"),
		Value::Int16(v) => format!("{v}_i16"),
		Value::Int8(v) => format!("{v}_i8"),
		Value::UInt64(v) => format!("{v}_u64"),
		Value::UInt32(v) => format!("{v}_u32"),
		Value::UInt16(v) => format!("{v}_u16"),
		Value::UInt8(v) => format!("{v}_u8"),
		Value::Double(v) => format!("{v:?}"),
		Value::Bool(v) => v.to_string(),
		Value::String(bytes) => match printable_text(bytes) {
			Some(text) => format!("{:?}", truncate(text, options.max_string_len)),
			None => format!("blob[{}] {}", bytes.len(), truncate(&hex::encode(bytes), options.max_string_len)),
		},
		Value::Object(object) => format!("{{ {} entries }}", object.len()),
		Value::Array(array) => format!("[{}; {}]", array.kind(), array.len()),
	}
}
