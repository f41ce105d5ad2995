use std::fmt;
use std::io;

use ttyibis_serial::SerialError;
use ttyibis_telegram::TelegramError;

pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const LINK_ERROR: i32 = 3;
pub const PERMISSION_DENIED: i32 = 50;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

fn io_code(err: &io::Error) -> i32 {
    match err.kind() {
        io::ErrorKind::PermissionDenied => PERMISSION_DENIED,
        _ => LINK_ERROR,
    }
}

pub fn io_error(context: &str, err: &io::Error) -> CliError {
    CliError::new(io_code(err), format!("{context}: {err}"))
}

pub fn serial_error(err: &SerialError) -> CliError {
    CliError::new(io_code(err.io_source()), err.to_string())
}

pub fn telegram_error(context: &str, err: &TelegramError) -> CliError {
    match err {
        TelegramError::Io(source) => io_error(context, source),
        TelegramError::ShortWrite { .. } => CliError::new(FAILURE, format!("{context}: {err}")),
    }
}
