//! Hex and base64 encodings.

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::error::{Result, ShextError};

/// Uppercase two-digit hex per byte, separated by single spaces:
/// `[0x0A, 0xFF]` gives `"0A FF"`.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    let hex = hex::encode_upper(bytes);
    let mut out = String::with_capacity(bytes.len() * 3);
    for (i, pair) in hex.as_bytes().chunks(2).enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.extend(pair.iter().map(|&b| b as char));
    }
    out
}

/// Decodes hex text, ignoring spaces. Either case is accepted.
///
/// Fails with [`ShextError::Format`] on an odd digit count or a non-hex char.
pub fn hex_to_bytes(s: &str) -> Result<Vec<u8>> {
    let compact: String = s.chars().filter(|&c| c != ' ').collect();
    hex::decode(&compact).map_err(|source| ShextError::Format {
        input: s.to_string(),
        source,
    })
}

/// Standard (padded) base64 of the UTF-8 bytes of `s`.
pub fn to_base64(s: &str) -> String {
    STANDARD.encode(s.as_bytes())
}
