use std::io::Write;
use std::path::Path;

use tracing::{debug, info};
use ttyibis_serial::{LinkConfig, SerialError, SerialPort};
use ttyibis_telegram::{Telegram, TelegramWriter};

use crate::cmd::SendRequest;
use crate::exit::{serial_error, telegram_error, CliResult, SUCCESS};
use crate::output::{print_telegram, OutputFormat};

pub fn run(request: SendRequest, format: OutputFormat) -> CliResult<i32> {
    let link = LinkConfig::ibis();
    let telegram = Telegram::encode(&request.message);
    debug!(
        body_len = telegram.body().len(),
        checksum = telegram.checksum(),
        "encoded telegram"
    );

    if request.dry_run {
        print_telegram(&telegram, &request.device, &link, format);
        return Ok(SUCCESS);
    }

    let port =
        SerialPort::open_configured(&request.device, &link).map_err(|err| serial_error(&err))?;
    let written = transmit(port, &telegram, &request.device)?;

    info!(device = ?request.device, bytes = written, "telegram sent");
    Ok(SUCCESS)
}

/// A writable line that can wait for its output queue to empty.
trait Link: Write {
    fn drain(&self) -> Result<(), SerialError>;
}

impl Link for SerialPort {
    fn drain(&self) -> Result<(), SerialError> {
        SerialPort::drain(self)
    }
}

/// Write the telegram and drain the line. The drain runs even when the write
/// failed; the link is closed when it goes out of scope.
fn transmit<L: Link>(link: L, telegram: &Telegram, device: &Path) -> CliResult<usize> {
    let mut writer = TelegramWriter::new(link);
    let sent = writer.send(telegram);
    let drained = writer.get_ref().drain();

    let written = sent.map_err(|err| {
        telegram_error(&format!("failed to send to {}", device.display()), &err)
    })?;
    drained.map_err(|err| serial_error(&err))?;
    Ok(written)
}
