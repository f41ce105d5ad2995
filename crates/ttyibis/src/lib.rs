//! Send IBIS telegrams to public-transport display equipment.
//!
//! ttyibis turns a line of text into a byte-exact IBIS telegram and pushes it
//! down a 1200 bps 7E2 serial line.
//!
//! # Crate Structure
//!
//! - [`serial`] — Serial line framing and the owned device handle
//! - [`telegram`] — Escape expansion, umlaut substitution, checksum and assembly

/// Re-export serial link types.
pub mod serial {
    pub use ttyibis_serial::*;
}

/// Re-export telegram types.
pub mod telegram {
    pub use ttyibis_telegram::*;
}
