mod bytes;
mod container;
mod decode;
mod encode;
mod error;
mod file;
mod header;
mod kind;
mod path;
mod value;
mod varint;

/// Bounded little-endian byte cursor.
pub use bytes::Cursor;
/// Container framing entry points.
pub use container::{PortableStorage, decode_container, decode_container_with, encode_container};
/// Value reader entry points and options.
pub use decode::{DecodeOptions, decode_object, decode_object_with, decode_value, decode_value_with};
/// Value writer entry points.
pub use encode::{MAX_NAME_LEN, ObjectFraming, encode_object_body, encode_value, encode_value_into};
/// Error and result aliases.
pub use error::{AccessError, DecodeError, EncodeError, Result, StorageError};
/// Payload file abstraction and shape statistics.
pub use file::{StorageFile, StorageStats};
/// Container header representation.
pub use header::{FORMAT_VERSION, SIGNATURE_A, SIGNATURE_B, StorageHeader};
/// Wire kinds and the array flag.
pub use kind::{ARRAY_FLAG, ValueKind};
/// Entry path parser types.
pub use path::{EntryPath, PathStep};
/// Value tree types.
pub use value::{Array, Entry, Object, Value};
/// Size-marked varint codec.
pub use varint::{MAX_VARINT, decode_varint, encode_varint, varint_len, write_varint};
