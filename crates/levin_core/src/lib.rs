//! Public library API for encoding and decoding portable-storage payloads.

/// Portable-storage value model, varint codec, reader, writer, and container framing.
pub mod storage;
