use bytes::{BufMut, Bytes, BytesMut};

use crate::checksum::{checksum, TERMINATOR};
use crate::{escape, glyph};

/// Bytes following the body: terminator (1) + checksum (1).
pub const TRAILER_SIZE: usize = 2;

/// A fully assembled IBIS telegram. Immutable once built.
///
/// Wire format:
/// ```text
/// ┌──────────────────┬──────┬──────────┐
/// │ Body             │ '\r' │ Checksum │
/// │ (encoded text)   │ 0x0D │ (1B)     │
/// └──────────────────┴──────┴──────────┘
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Telegram {
    wire: Bytes,
}

impl Telegram {
    /// Build a telegram from user text: expand escapes, substitute umlauts,
    /// then append terminator and checksum.
    pub fn encode(text: &str) -> Self {
        let mut body = escape::decode(text);
        glyph::substitute(&mut body);
        Self::from_body(&body)
    }

    /// Build a telegram around an already encoded body.
    pub fn from_body(body: &[u8]) -> Self {
        let mut buf = BytesMut::with_capacity(body.len() + TRAILER_SIZE);
        encode_telegram(body, &mut buf);
        Self { wire: buf.freeze() }
    }

    /// The encoded text, without terminator and checksum.
    pub fn body(&self) -> &[u8] {
        &self.wire[..self.wire.len() - TRAILER_SIZE]
    }

    /// The terminator byte (always `\r`).
    pub fn terminator(&self) -> u8 {
        self.wire[self.wire.len() - TRAILER_SIZE]
    }

    /// The checksum byte.
    pub fn checksum(&self) -> u8 {
        self.wire[self.wire.len() - 1]
    }

    /// The complete wire representation.
    pub fn as_bytes(&self) -> &[u8] {
        &self.wire
    }

    /// The total wire size of this telegram (body + trailer).
    pub fn wire_len(&self) -> usize {
        self.wire.len()
    }

    /// Consume the telegram and return its wire bytes.
    pub fn into_bytes(self) -> Bytes {
        self.wire
    }
}

/// Append `body`, the terminator and the checksum to `dst`.
pub fn encode_telegram(body: &[u8], dst: &mut BytesMut) {
    dst.reserve(body.len() + TRAILER_SIZE);
    dst.put_slice(body);
    dst.put_u8(TERMINATOR);
    dst.put_u8(checksum(body));
}
