//! Payload codec.
//!
//! An embedded payload is the standard-alphabet base64 text of a gzip stream
//! of the asset's raw bytes. Generators usually wrap the text over several
//! lines; line breaks are ignored on decode.

use std::io::{Read, Write};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use flate2::Compression;
use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;

use crate::error::DecodeError;

/// Upper bound on how far the size hint may exceed the compressed length.
const MAX_HINT_RATIO: usize = 32;

/// Decode a stored payload: base64 → gzip → raw bytes.
///
/// `size_hint` is the declared uncompressed length. It only pre-sizes the
/// output buffer, capped relative to the compressed length; the stream is
/// always read to completion whatever the hint says.
pub fn decode(payload: &str, size_hint: usize) -> Result<Vec<u8>, DecodeError> {
    let text: Vec<u8> = payload
        .bytes()
        .filter(|b| !matches!(b, b'\r' | b'\n'))
        .collect();
    let compressed = STANDARD.decode(text)?;

    let mut data = Vec::new();
    let cap = size_hint.min(compressed.len().saturating_mul(MAX_HINT_RATIO));
    // Allocation failure only loses the pre-sizing.
    let _ = data.try_reserve(cap);
    MultiGzDecoder::new(compressed.as_slice()).read_to_end(&mut data)?;
    Ok(data)
}

/// Encode raw bytes into the payload format accepted by [`decode`].
///
/// This is the build-time half of the pipeline. It is used by
/// [`RegistryBuilder::file_from_bytes`](super::RegistryBuilder::file_from_bytes)
/// and by generators that emit registries as Rust source.
pub fn encode(content: &[u8]) -> String {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::best());
    let compressed = encoder
        .write_all(content)
        .and_then(|()| encoder.finish())
        .expect("writing to a Vec cannot fail");
    STANDARD.encode(compressed)
}
