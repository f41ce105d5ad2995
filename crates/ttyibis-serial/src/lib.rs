//! Serial line plumbing for IBIS display equipment.
//!
//! IBIS devices listen on a slow, oddly framed serial line:
//! - 1200 bps
//! - 7 data bits, even parity, 2 stop bits (7E2)
//! - no hardware handshake, raw byte transport
//!
//! [`LinkConfig`] describes that framing as a value, [`SerialPort`] owns an
//! open device node and applies the framing before anything is written.

pub mod config;
pub mod error;

#[cfg(unix)]
pub mod tty;

pub use config::{BaudRate, DataBits, FlowControl, LinkConfig, Parity, StopBits};
pub use error::{Result, SerialError};

#[cfg(unix)]
pub use tty::SerialPort;
