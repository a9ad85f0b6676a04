// rc522-rs/librc522/src/protocol/checksum.rs
//! Block Check Character

/// Compute the Block Check Character for a cascade-level UID
/// BCC = uid[0] ^ uid[1] ^ ... ^ uid[n-1]
pub fn bcc(uid: &[u8]) -> u8 {
    uid.iter().fold(0u8, |acc, &b| acc ^ b)
}

/// Check a received BCC against the UID it accompanies
pub fn verify_bcc(uid: &[u8], received: u8) -> bool {
    bcc(uid) == received
}
