//! Payload decoding dispatch.
//!
//! Every routine is bounded by the declared original size: it stops once
//! that many bytes exist and stops early, returning what it has, when the
//! compressed input runs out.

use crate::flagbyte::FlagByteDecoder;
use crate::lzss::LzssDecoder;
use crate::methods::LhaMethod;

/// Decode an entry payload according to `method`.
///
/// - `Lh0`: identity.
/// - `Lh1`: 4KB bit-flag LZSS.
/// - `Lh4`..`Lh7`: 8KB flag-byte LZSS.
/// - `Lhd`: empty output, input ignored.
/// - `Unknown`: payload returned unmodified.
pub fn decode_lha(data: &[u8], method: LhaMethod, original_size: usize) -> Vec<u8> {
    let output = match method {
        LhaMethod::Lh0 => data.to_vec(),
        LhaMethod::Lhd => Vec::new(),
        LhaMethod::Lh1 => LzssDecoder::new().decode(data, original_size),
        LhaMethod::Lh4 | LhaMethod::Lh5 | LhaMethod::Lh6 | LhaMethod::Lh7 => {
            FlagByteDecoder::new().decode(data, original_size)
        }
        LhaMethod::Unknown(_) => {
            log::debug!(
                "no decoder for method {}, passing {} bytes through",
                method,
                data.len()
            );
            data.to_vec()
        }
    };

    if ended_early(method, output.len(), original_size) {
        log::warn!(
            "{} payload ended early: produced {} of {} bytes",
            method,
            output.len(),
            original_size
        );
    }

    output
}

/// Whether a decoder produced fewer bytes than the header declared.
///
/// Store, directory and pass-through payloads are never short.
fn ended_early(method: LhaMethod, produced: usize, original_size: usize) -> bool {
    let decoded = method.is_supported() && !method.is_stored() && !method.is_directory();
    decoded && produced < original_size
}
