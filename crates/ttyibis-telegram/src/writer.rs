use std::io::{ErrorKind, Write};

use tracing::debug;

use crate::checksum::TERMINATOR;
use crate::codec::Telegram;
use crate::error::{Result, TelegramError};

/// Writes complete telegrams to any `Write` sink.
pub struct TelegramWriter<T> {
    inner: T,
}

impl<T: Write> TelegramWriter<T> {
    /// Create a new telegram writer.
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    /// Send a telegram as body, terminator and checksum (blocking).
    ///
    /// Returns the total number of bytes written. Any part the sink refuses
    /// fails the whole telegram; nothing is retried or rolled back.
    pub fn send(&mut self, telegram: &Telegram) -> Result<usize> {
        let expected = telegram.wire_len();
        let mut written = 0usize;

        for part in [
            telegram.body(),
            &[TERMINATOR][..],
            &[telegram.checksum()][..],
        ] {
            written += self.write_part(part, written, expected)?;
        }

        self.flush()?;
        debug!(
            bytes = written,
            checksum = telegram.checksum(),
            "telegram written"
        );
        Ok(written)
    }

    fn write_part(&mut self, part: &[u8], already: usize, expected: usize) -> Result<usize> {
        let mut offset = 0usize;
        while offset < part.len() {
            match self.inner.write(&part[offset..]) {
                Ok(0) => {
                    return Err(TelegramError::ShortWrite {
                        written: already + offset,
                        expected,
                    })
                }
                Ok(n) => offset += n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(TelegramError::Io(err)),
            }
        }
        Ok(offset)
    }

    /// Flush the underlying sink.
    pub fn flush(&mut self) -> Result<()> {
        loop {
            match self.inner.flush() {
                Ok(()) => return Ok(()),
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(TelegramError::Io(err)),
            }
        }
    }

    /// Borrow the underlying sink.
    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    /// Mutably borrow the underlying sink.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Consume the writer and return the inner sink.
    pub fn into_inner(self) -> T {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    /// Records each write call separately.
    #[derive(Default)]
    struct RecordingSink {
        writes: Vec<Vec<u8>>,
        flushed: bool,
    }

    impl Write for RecordingSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.writes.push(buf.to_vec());
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            self.flushed = true;
            Ok(())
        }
    }

    /// Accepts `capacity` bytes, then reports a zero-length write.
    struct FullSink {
        capacity: usize,
        data: Vec<u8>,
    }

    impl Write for FullSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            let n = buf.len().min(self.capacity - self.data.len());
            self.data.extend_from_slice(&buf[..n]);
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Interrupts the first call, then writes one byte per call.
    struct TrickleSink {
        interrupted: bool,
        data: Vec<u8>,
    }

    impl Write for TrickleSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if !self.interrupted {
                self.interrupted = true;
                return Err(io::Error::from(ErrorKind::Interrupted));
            }
            self.data.push(buf[0]);
            Ok(1)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct BrokenSink;

    impl Write for BrokenSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_three_part_write() {
        let telegram = Telegram::encode("l001");
        let mut writer = TelegramWriter::new(RecordingSink::default());

        let written = writer.send(&telegram).unwrap();
        assert_eq!(written, 6);

        let sink = writer.into_inner();
        assert!(sink.flushed);
        assert_eq!(
            sink.writes,
            vec![b"l001".to_vec(), vec![b'\r'], vec![telegram.checksum()]]
        );
    }

    #[test]
    fn test_empty_body_still_sends_trailer() {
        let telegram = Telegram::encode("");
        let mut writer = TelegramWriter::new(Vec::new());

        assert_eq!(writer.send(&telegram).unwrap(), 2);
        assert_eq!(writer.get_ref().as_slice(), &[b'\r', 0x72]);
    }

    #[test]
    fn test_short_write_fails() {
        let telegram = Telegram::encode("l001");
        let mut writer = TelegramWriter::new(FullSink {
            capacity: 5,
            data: Vec::new(),
        });

        let result = writer.send(&telegram);
        assert!(matches!(
            result,
            Err(TelegramError::ShortWrite {
                written: 5,
                expected: 6
            })
        ));
    }

    #[test]
    fn test_partial_writes_and_interrupts_are_resumed() {
        let telegram = Telegram::encode("zA1");
        let mut writer = TelegramWriter::new(TrickleSink {
            interrupted: false,
            data: Vec::new(),
        });

        assert_eq!(writer.send(&telegram).unwrap(), telegram.wire_len());
        assert_eq!(writer.get_ref().data.as_slice(), telegram.as_bytes());
    }

    #[test]
    fn test_io_error_propagates() {
        let mut writer = TelegramWriter::new(BrokenSink);
        let result = writer.send(&Telegram::encode("l001"));
        assert!(matches!(result, Err(TelegramError::Io(_))));
    }
}
