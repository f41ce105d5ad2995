/// Initial value of the telegram checksum.
pub const CHECKSUM_SEED: u8 = 0x7F;

/// Telegram terminator. Part of the checksum even though it is sent separately.
pub const TERMINATOR: u8 = b'\r';

/// IBIS checksum: `0x7F ^ body[0] ^ .. ^ body[n-1] ^ '\r'`.
pub fn checksum(body: &[u8]) -> u8 {
    body.iter().fold(CHECKSUM_SEED, |acc, b| acc ^ b) ^ TERMINATOR
}
