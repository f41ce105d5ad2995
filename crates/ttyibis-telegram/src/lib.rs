//! IBIS telegram construction.
//!
//! A telegram is built from user text in four steps:
//! - escape expansion (`_n`, `__`, `_0`..`_9`, `_A`..`_F`)
//! - substitution of German umlauts with the 7-bit IBIS glyph codes
//! - an XOR checksum over body and terminator
//! - assembly as body, `\r`, checksum byte
//!
//! There is no length prefix and no start/end marker.

pub mod checksum;
pub mod codec;
pub mod error;
pub mod escape;
pub mod glyph;
pub mod writer;

pub use checksum::{checksum, CHECKSUM_SEED, TERMINATOR};
pub use codec::{encode_telegram, Telegram};
pub use error::{Result, TelegramError};
pub use writer::TelegramWriter;
