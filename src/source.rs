//! Loading source text from raw bytes.
//!
//! Lox sources are single-byte ASCII/Latin text. Input that is valid
//! UTF-8 is taken as-is; anything else is decoded as Latin-1, one
//! `char` per byte, so a stray high byte becomes an unexpected
//! character at scan time instead of a read failure.

use std::fs;
use std::io;
use std::path::Path;

/// Decode raw input bytes into scannable text.
#[must_use]
pub fn decode(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes).unwrap_or_else(|e| latin1(e.as_bytes()))
}

/// Read and decode a whole source file.
pub fn read_file(path: &Path) -> io::Result<String> {
    fs::read(path).map(decode)
}

fn latin1(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}
