//! Filename decoding and cleanup.

use encoding_rs::SHIFT_JIS;

/// Name used when a header's filename is empty after cleanup.
pub const PLACEHOLDER_NAME: &str = "unnamed";

/// Path separator used inside level-1 directory extensions.
const EXT_DIR_SEPARATOR: u8 = 0xFF;

/// Decode filename bytes (UTF-8, then Shift_JIS, then lossy UTF-8).
///
/// Bytes from the first NUL onward are ignored.
pub fn decode_filename(bytes: &[u8]) -> String {
    let bytes = match bytes.iter().position(|&b| b == 0) {
        Some(nul) => &bytes[..nul],
        None => bytes,
    };

    if let Ok(name) = std::str::from_utf8(bytes) {
        return name.to_owned();
    }

    let (decoded, _, had_errors) = SHIFT_JIS.decode(bytes);
    if !had_errors {
        return decoded.into_owned();
    }

    String::from_utf8_lossy(bytes).into_owned()
}

/// Remove control characters.
pub fn strip_control(name: &str) -> String {
    name.chars().filter(|c| !c.is_control()).collect()
}

/// Decode, clean, and fall back to [`PLACEHOLDER_NAME`] when empty.
pub fn read_filename(bytes: &[u8]) -> String {
    with_placeholder(strip_control(&decode_filename(bytes)))
}

/// Decode a directory extension payload, mapping `0xFF` separators to `/`.
pub fn decode_directory(bytes: &[u8]) -> String {
    let mapped: Vec<u8> = bytes
        .iter()
        .map(|&b| if b == EXT_DIR_SEPARATOR { b'/' } else { b })
        .collect();
    strip_control(&decode_filename(&mapped))
}

/// Replace an empty name with [`PLACEHOLDER_NAME`].
pub fn with_placeholder(name: String) -> String {
    if name.is_empty() {
        PLACEHOLDER_NAME.to_string()
    } else {
        name
    }
}

/// Longest prefix of `name` that fits in `max_len` bytes on a char boundary.
pub fn truncate_utf8(name: &str, max_len: usize) -> &str {
    if name.len() <= max_len {
        return name;
    }
    let mut end = max_len;
    while !name.is_char_boundary(end) {
        end -= 1;
    }
    &name[..end]
}
