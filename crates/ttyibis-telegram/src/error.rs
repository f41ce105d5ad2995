/// Errors that can occur while transmitting a telegram.
#[derive(Debug, thiserror::Error)]
pub enum TelegramError {
    /// The sink accepted fewer bytes than the telegram holds.
    #[error("short write ({written} of {expected} bytes)")]
    ShortWrite { written: usize, expected: usize },

    /// An I/O error occurred while writing the telegram.
    #[error("telegram I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TelegramError>;
