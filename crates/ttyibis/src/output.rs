use std::io::{IsTerminal, Write};
use std::path::Path;

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;
use ttyibis_serial::LinkConfig;
use ttyibis_telegram::Telegram;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize)]
struct TelegramOutput {
    device: String,
    link: String,
    body: String,
    body_hex: String,
    checksum: u8,
    wire_hex: String,
    wire_len: usize,
}

pub fn print_telegram(
    telegram: &Telegram,
    device: &Path,
    link: &LinkConfig,
    format: OutputFormat,
) {
    match format {
        OutputFormat::Json => {
            let out = TelegramOutput {
                device: device.display().to_string(),
                link: link.to_string(),
                body: body_preview(telegram.body()),
                body_hex: hex(telegram.body()),
                checksum: telegram.checksum(),
                wire_hex: hex(telegram.as_bytes()),
                wire_len: telegram.wire_len(),
            };
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["DEVICE", "LINK", "BODY", "CHECKSUM", "BYTES"])
                .add_row(vec![
                    device.display().to_string(),
                    link.to_string(),
                    body_preview(telegram.body()),
                    format!("0x{:02X}", telegram.checksum()),
                    telegram.wire_len().to_string(),
                ]);
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!(
                "device={} link=\"{}\" body=\"{}\" checksum=0x{:02X} wire=[{}]",
                device.display(),
                link,
                body_preview(telegram.body()),
                telegram.checksum(),
                hex(telegram.as_bytes())
            );
        }
        OutputFormat::Raw => {
            print_raw(telegram.as_bytes());
        }
    }
}

pub fn print_raw(data: &[u8]) {
    let mut out = std::io::stdout();
    let _ = out.write_all(data);
    let _ = out.flush();
}

/// Printable view of a telegram body; control and 8-bit bytes are escaped.
pub fn body_preview(body: &[u8]) -> String {
    body.iter()
        .flat_map(|b| std::ascii::escape_default(*b))
        .map(char::from)
        .collect()
}

pub fn hex(data: &[u8]) -> String {
    data.iter()
        .map(|b| format!("{b:02X}"))
        .collect::<Vec<_>>()
        .join(" ")
}
