use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Read, Write};
use std::os::unix::fs::OpenOptionsExt;
use std::path::{Path, PathBuf};

use rustix::io::Errno;
use rustix::termios::{self, OptionalActions, QueueSelector};
use tracing::debug;

use crate::config::LinkConfig;
use crate::error::{Result, SerialError};

/// An open serial device node.
///
/// The descriptor is owned exclusively and closed when the value is dropped,
/// on success and error paths alike.
pub struct SerialPort {
    file: File,
    path: PathBuf,
    config: Option<LinkConfig>,
}

impl SerialPort {
    /// Open `path` for reading and writing without making it the
    /// controlling terminal.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .custom_flags(libc::O_NOCTTY)
            .open(&path)
            .map_err(|e| SerialError::Open {
                path: path.clone(),
                source: e,
            })?;

        debug!(?path, "opened serial device");

        Ok(Self {
            file,
            path,
            config: None,
        })
    }

    /// Open `path` and apply `config` in one step.
    pub fn open_configured(path: impl AsRef<Path>, config: &LinkConfig) -> Result<Self> {
        let mut port = Self::open(path)?;
        port.configure(config)?;
        Ok(port)
    }

    /// Apply `config` over the device's current line settings, then discard
    /// anything still sitting in the input and output queues.
    pub fn configure(&mut self, config: &LinkConfig) -> Result<()> {
        let mut tty = termios::tcgetattr(&self.file).map_err(|e| SerialError::GetAttributes {
            path: self.path.clone(),
            source: e.into(),
        })?;

        config
            .apply(&mut tty)
            .map_err(|e| SerialError::SetAttributes {
                path: self.path.clone(),
                source: e,
            })?;

        termios::tcsetattr(&self.file, OptionalActions::Now, &tty).map_err(|e| {
            SerialError::SetAttributes {
                path: self.path.clone(),
                source: e.into(),
            }
        })?;

        termios::tcflush(&self.file, QueueSelector::IOFlush).map_err(|e| SerialError::Flush {
            path: self.path.clone(),
            source: e.into(),
        })?;

        debug!(path = ?self.path, link = %config, "applied line settings");
        self.config = Some(config.clone());
        Ok(())
    }

    /// Block until every queued byte has left the transmitter.
    pub fn drain(&self) -> Result<()> {
        loop {
            match termios::tcdrain(&self.file) {
                Ok(()) => {
                    debug!(path = ?self.path, "output drained");
                    return Ok(());
                }
                Err(Errno::INTR) => continue,
                Err(e) => {
                    return Err(SerialError::Drain {
                        path: self.path.clone(),
                        source: e.into(),
                    })
                }
            }
        }
    }

    /// The device path this port was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The line settings applied by the last successful [`configure`](Self::configure).
    pub fn config(&self) -> Option<&LinkConfig> {
        self.config.as_ref()
    }
}

impl Read for SerialPort {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.file.read(buf)
    }
}

impl Write for SerialPort {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.file.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.file.flush()
    }
}

impl std::fmt::Debug for SerialPort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SerialPort")
            .field("path", &self.path)
            .field("config", &self.config)
            .finish()
    }
}
