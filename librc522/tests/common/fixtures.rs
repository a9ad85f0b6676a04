// fixtures.rs: UIDs and register values shared by the integration tests

fn uid_from_hex(s: &str) -> [u8; 4] {
    let bytes = hex::decode(s).unwrap();
    bytes.as_slice().try_into().unwrap()
}

pub fn uid_a_bytes() -> [u8; 4] {
    uid_from_hex("04a39f1b")
}

pub fn uid_b_bytes() -> [u8; 4] {
    uid_from_hex("deadbeef")
}

pub const UID_A: &str = "04:A3:9F:1B";
pub const UID_B: &str = "DE:AD:BE:EF";

/// BCC of `uid_a_bytes()`
pub const UID_A_BCC: u8 = 0x23;

/// VersionReg of a genuine v2.0 chip
pub const VERSION_V2: u8 = 0x92;
