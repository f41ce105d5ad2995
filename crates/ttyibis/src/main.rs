mod cmd;
mod exit;
mod logging;
mod output;

use std::ffi::OsString;
use std::path::Path;

use clap::Parser;

use crate::cmd::SendArgs;
use crate::exit::CliResult;
use crate::logging::{init_logging, LogFormat, LogLevel};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "ttyibis",
    about = "Send an IBIS telegram over a serial line",
    disable_version_flag = true,
    disable_help_flag = true
)]
struct Cli {
    /// Output format for --dry-run.
    #[arg(long, value_name = "FORMAT")]
    format: Option<OutputFormat>,

    /// Log output format (stderr).
    #[arg(
        long,
        value_name = "FORMAT",
        default_value = "text",
        env = "TTYIBIS_LOG_FORMAT"
    )]
    log_format: LogFormat,

    /// Minimum log level (stderr).
    #[arg(
        long,
        value_name = "LEVEL",
        default_value = "warn",
        env = "TTYIBIS_LOG_LEVEL"
    )]
    log_level: LogLevel,

    #[command(flatten)]
    send: SendArgs,
}

fn main() {
    if version_requested(std::env::args_os()) {
        finish(cmd::version::run());
    }

    let exe = exe_name();
    let Ok(cli) = Cli::try_parse() else {
        cmd::print_usage(&exe);
        std::process::exit(exit::FAILURE);
    };
    init_logging(cli.log_format, cli.log_level);

    let request = match cli.send.into_request() {
        Ok(Some(request)) => request,
        Ok(None) => {
            cmd::print_usage(&exe);
            std::process::exit(exit::FAILURE);
        }
        Err(err) => finish(Err(err)),
    };
    let format = cli.format.unwrap_or_else(OutputFormat::default_for_stdout);
    finish(cmd::send::run(request, format));
}

/// `--version` is only recognised as the first argument. Anywhere else it is
/// a device or message operand.
fn version_requested(args: impl IntoIterator<Item = OsString>) -> bool {
    args.into_iter().nth(1).is_some_and(|arg| arg == "--version")
}

fn finish(result: CliResult<i32>) -> ! {
    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}

/// Executable name without its directory, for the usage text.
fn exe_name() -> String {
    std::env::args_os()
        .next()
        .as_deref()
        .and_then(|arg0| Path::new(arg0).file_name())
        .map_or_else(
            || "ttyibis".to_string(),
            |name| name.to_string_lossy().into_owned(),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(args: &[&str]) -> Option<cmd::SendRequest> {
        let cli = Cli::try_parse_from(args).expect("args should parse");
        cli.send.into_request().expect("message should be valid UTF-8")
    }

    fn os_args(args: &[&str]) -> Vec<OsString> {
        args.iter().map(OsString::from).collect()
    }

    #[test]
    fn parses_device_and_message() {
        let request =
            request(&["ttyibis", "/dev/ttyUSB0", "l001"]).expect("request should be complete");
        assert_eq!(request.device, Path::new("/dev/ttyUSB0"));
        assert_eq!(request.message, "l001");
        assert!(!request.dry_run);
    }

    #[test]
    fn message_may_start_with_hyphen() {
        let request =
            request(&["ttyibis", "/dev/ttyUSB0", "-5 min"]).expect("request should be complete");
        assert_eq!(request.message, "-5 min");
    }

    #[test]
    fn flags_after_device_are_message_text() {
        for flag in ["--version", "--dry-run", "--help", "-h"] {
            let request =
                request(&["ttyibis", "/dev/ttyUSB0", flag]).expect("request should be complete");
            assert_eq!(request.message, flag);
            assert!(!request.dry_run);
        }
    }

    #[test]
    fn flags_before_device_still_apply() {
        let request = request(&[
            "ttyibis",
            "--dry-run",
            "--format",
            "raw",
            "/dev/ttyUSB0",
            "l001",
        ])
        .expect("request should be complete");
        assert!(request.dry_run);
        assert_eq!(request.message, "l001");
    }

    #[test]
    fn missing_message_is_incomplete() {
        assert!(request(&["ttyibis", "/dev/ttyUSB0"]).is_none());
        assert!(request(&["ttyibis"]).is_none());
    }

    #[test]
    fn extra_operand_is_incomplete() {
        assert!(request(&["ttyibis", "/dev/ttyUSB0", "l001", "extra"]).is_none());
    }

    #[test]
    fn help_flags_are_not_special() {
        assert!(request(&["ttyibis", "--help"]).is_none());
        assert!(request(&["ttyibis", "-h"]).is_none());
    }

    #[test]
    fn version_only_as_first_argument() {
        assert!(version_requested(os_args(&["ttyibis", "--version"])));
        assert!(version_requested(os_args(&["ttyibis", "--version", "extra"])));
        assert!(!version_requested(os_args(&["ttyibis", "/dev/ttyUSB0", "--version"])));
        assert!(!version_requested(os_args(&["ttyibis"])));
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_message_is_an_error() {
        use std::os::unix::ffi::OsStringExt;

        let cli = Cli::try_parse_from([
            OsString::from("ttyibis"),
            OsString::from("/dev/ttyUSB0"),
            OsString::from_vec(b"l\xff".to_vec()),
        ])
        .expect("args should parse");
        let err = cli.send.into_request().expect_err("message should be rejected");
        assert_eq!(err.code, exit::FAILURE);
        assert_eq!(err.message, "message is not valid UTF-8");
    }
}
