use clap::Args;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::exit::{CliError, CliResult, FAILURE};

pub mod send;
pub mod version;

#[derive(Args, Debug)]
pub struct SendArgs {
    /// Serial device node, e.g. /dev/ttyUSB0, then the message text.
    ///
    /// Everything after the device is taken literally, flags included.
    /// Message escapes: `_n` newline, `__` underscore, `_0`..`_9` and
    /// `_A`..`_F` IBIS hex digits.
    #[arg(
        value_name = "DEVICE MESSAGE",
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub operands: Vec<OsString>,
    /// Encode and print the telegram without opening the device.
    #[arg(long)]
    pub dry_run: bool,
}

/// A fully specified send request.
#[derive(Debug)]
pub struct SendRequest {
    pub device: PathBuf,
    pub message: String,
    pub dry_run: bool,
}

impl SendArgs {
    /// `Ok(None)` unless exactly a device and a message were given.
    pub fn into_request(self) -> CliResult<Option<SendRequest>> {
        let [device, message]: [OsString; 2] = match self.operands.try_into() {
            Ok(operands) => operands,
            Err(_) => return Ok(None),
        };
        let message = message
            .into_string()
            .map_err(|_| CliError::new(FAILURE, "message is not valid UTF-8"))?;

        Ok(Some(SendRequest {
            device: PathBuf::from(device),
            message,
            dry_run: self.dry_run,
        }))
    }
}

pub fn print_usage(exe: &str) {
    println!("Usage: {exe} [--version] /dev/ttyX Message");
    println!("Example: {exe} /dev/ttyUSB0 l001");
}
