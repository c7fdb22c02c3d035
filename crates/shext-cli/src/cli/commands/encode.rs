//! Hex and base64 commands.

use anyhow::{Context, Result};
use shext_core::text;

pub fn run_hex(input: &str) {
    println!("{}", text::bytes_to_hex(input.as_bytes()));
}

pub fn run_unhex(hex: &str) -> Result<()> {
    println!("{}", decode_hex_text(hex)?);
    Ok(())
}

pub fn run_base64(input: &str) {
    println!("{}", text::to_base64(input));
}

/// Hex to text; invalid UTF-8 sequences are replaced, not rejected.
fn decode_hex_text(hex: &str) -> Result<String> {
    let bytes = text::hex_to_bytes(hex).context("decode hex")?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
