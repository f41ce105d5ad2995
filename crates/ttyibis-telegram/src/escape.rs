//! Escape expansion for telegram text.
//!
//! An underscore introduces a two-character escape:
//!
//! | escape      | byte          |
//! |-------------|---------------|
//! | `__`        | `_`           |
//! | `_n`        | `\n`          |
//! | `_0`..`_9`  | `0x00`..`0x09`|
//! | `_A`..`_F`  | `:`..`?`      |
//!
//! Any other selector, and a lone trailing underscore, produce nothing.

use bytes::{BufMut, BytesMut};
use tracing::debug;

/// Character that starts an escape sequence.
pub const ESCAPE: char = '_';

/// Expand escapes in `input` and narrow every other code point to its low byte.
///
/// Decoding stops at the first NUL code point. The result never holds more
/// bytes than `input` has code points.
pub fn decode(input: &str) -> BytesMut {
    let mut out = BytesMut::with_capacity(input.len());
    let mut chars = input.chars().take_while(|&c| c != '\0');

    while let Some(c) = chars.next() {
        if c != ESCAPE {
            out.put_u8(low_byte(c));
            continue;
        }

        match chars.next() {
            Some(selector) => match resolve(selector) {
                Some(byte) => out.put_u8(byte),
                None => debug!(?selector, "dropping unknown escape"),
            },
            None => debug!("dropping trailing escape character"),
        }
    }

    out
}

/// Byte produced by the escape `_<selector>`, if the selector is known.
pub fn resolve(selector: char) -> Option<u8> {
    match selector {
        '_' => Some(b'_'),
        'n' => Some(b'\n'),
        // IBIS hex digits: 0-9 as raw values, A-F continue after '9' in ASCII.
        '0'..='9' => Some(selector as u8 - b'0'),
        'A'..='F' => Some(b':' + (selector as u8 - b'A')),
        _ => None,
    }
}

fn low_byte(c: char) -> u8 {
    (u32::from(c) & 0xFF) as u8
}
