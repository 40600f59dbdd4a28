use levin::storage::DecodeOptions;
use serde::Serialize;

use crate::cmd::{CliError, CliResult};

/// Decode limit flags shared by every command that reads a payload.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct LimitArgs {
	/// Maximum object/array nesting depth.
	#[arg(long, env = "LEVIN_MAX_DEPTH")]
	pub max_depth: Option<u32>,
	/// Maximum element count of a single array.
	#[arg(long, env = "LEVIN_MAX_ARRAY_ELEMS")]
	pub max_array_elems: Option<usize>,
	/// Reject bytes after the root object.
	#[arg(long)]
	pub strict: bool,
}

impl LimitArgs {
	/// Overlay flags on top of library defaults.
	pub fn decode_options(&self) -> DecodeOptions {
		let mut opt = if self.strict { DecodeOptions::strict() } else { DecodeOptions::default() };
		if let Some(max_depth) = self.max_depth {
			opt.max_depth = max_depth;
		}
		if let Some(max_array_elems) = self.max_array_elems {
			opt.max_array_elems = max_array_elems;
		}
		opt
	}
}

/// Pretty-print a serializable payload to stdout.
pub(crate) fn emit_json(payload: &impl Serialize) -> CliResult<()> {
	println!("{}", serde_json::to_string_pretty(payload)?);
	Ok(())
}

/// Return printable text for string bytes, or `None` when they read as binary.
pub(crate) fn printable_text(bytes: &[u8]) -> Option<&str> {
	let text = std::str::from_utf8(bytes).ok()?;
	if text.chars().any(|ch| ch.is_control() && !matches!(ch, '\n' | '\r' | '\t')) {
		return None;
	}
	Some(text)
}

/// Parse hex text (either case) into bytes.
pub(crate) fn decode_hex(text: &str) -> CliResult<Vec<u8>> {
	hex::decode(text).map_err(|source| CliError::InvalidHex {
		value: text.to_owned(),
		source,
	})
}

/// Render a double's IEEE-754 bits as 16 big-endian hex digits.
pub(crate) fn encode_f64_bits(value: f64) -> String {
	hex::encode(value.to_bits().to_be_bytes())
}

/// Parse exactly 16 hex digits back into a double, bit for bit.
pub(crate) fn decode_f64_bits(text: &str) -> CliResult<f64> {
	let mut raw = [0_u8; 8];
	hex::decode_to_slice(text, &mut raw).map_err(|source| CliError::InvalidHex {
		value: text.to_owned(),
		source,
	})?;
	Ok(f64::from_bits(u64::from_be_bytes(raw)))
}

/// Truncate to `max_len` Unicode scalar values with an ellipsis.
pub(crate) fn truncate(input: &str, max_len: usize) -> String {
	if input.chars().count() <= max_len {
		return input.to_owned();
	}
	let out: String = input.chars().take(max_len).collect();
	format!("{out}...")
}
