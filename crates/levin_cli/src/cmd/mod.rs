use levin::storage::{AccessError, EncodeError, StorageError};
use thiserror::Error;

/// Typed JSON document model.
pub mod json;
/// Shared argument and rendering helpers.
pub mod util;

/// Payload dump command.
pub mod dump;
/// Typed JSON to payload command.
pub mod encode;
/// Entry path lookup command.
pub mod get;
/// File-level information command.
pub mod info;

/// Command result type.
pub type CliResult<T> = std::result::Result<T, CliError>;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
	/// Payload load, decode, or encode failure.
	#[error(transparent)]
	Storage(#[from] StorageError),
	/// Entry path or accessor failure.
	#[error(transparent)]
	Access(#[from] AccessError),
	/// Value tree could not be encoded.
	#[error(transparent)]
	Encode(#[from] EncodeError),
	/// JSON document could not be read or written.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Blob or double-bits text is not valid hexadecimal.
	#[error("invalid hex {value:?}: {source}")]
	InvalidHex {
		/// Offending text.
		value: String,
		/// Decoder failure.
		source: hex::FromHexError,
	},
}

impl From<std::io::Error> for CliError {
	fn from(err: std::io::Error) -> Self {
		Self::Storage(StorageError::Io(err))
	}
}
