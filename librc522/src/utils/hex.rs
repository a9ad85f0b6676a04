//! Hexadecimal helpers used for UID rendering and debug output.
//!
//! UIDs are rendered the way scan consumers expect them: uppercase, two
//! digits per byte, colon separated. The compact form is used for logging
//! raw bus traffic.

use std::fmt::Write;

/// Convert a byte slice to a lowercase hex string without separators.
///
/// Example: `&[0xde, 0xad]` -> `"dead"`
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        // write! never fails writing to a String
        let _ = write!(&mut s, "{:02x}", b);
    }
    s
}

/// Convert a byte slice to an uppercase, colon separated hex string.
///
/// Example: `&[0x04, 0xa3]` -> `"04:A3"`
pub fn bytes_to_hex_colon(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i != 0 {
            s.push(':');
        }
        let _ = write!(&mut s, "{:02X}", b);
    }
    s
}

/// Parse a colon separated hex string (either case) into bytes.
pub fn parse_hex_colon(s: &str) -> Result<Vec<u8>, String> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(Vec::new());
    }

    s.split(':')
        .map(|pair| {
            if pair.len() != 2 {
                return Err(format!("invalid hex pair '{}'", pair));
            }
            u8::from_str_radix(pair, 16).map_err(|e| format!("invalid hex pair '{}': {}", pair, e))
        })
        .collect()
}
