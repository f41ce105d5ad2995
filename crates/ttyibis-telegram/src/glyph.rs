//! Umlaut substitution.
//!
//! IBIS displays have no 8-bit character set. German umlauts and sharp s
//! live on the 7-bit positions normally used for brackets and braces.

/// `(latin-1 byte, IBIS byte)` pairs. Source and target sets are disjoint.
pub const GLYPH_MAP: [(u8, u8); 7] = [
    (0xC4, b'['),  // Ä
    (0xE4, b'{'),  // ä
    (0xD6, b'\\'), // Ö
    (0xF6, b'|'),  // ö
    (0xDC, b']'),  // Ü
    (0xFC, b'}'),  // ü
    (0xDF, b'~'),  // ß
];

/// Replace every mapped byte in `body` with its IBIS glyph code, in place.
pub fn substitute(body: &mut [u8]) {
    for &(from, to) in &GLYPH_MAP {
        for byte in body.iter_mut().filter(|b| **b == from) {
            *byte = to;
        }
    }
}
