use clap::ValueEnum;
use tracing_subscriber::EnvFilter;

/// Crates whose events follow `--log-level`. Everything else stays at `warn`.
const OWN_TARGETS: [&str; 3] = ["ttyibis", "ttyibis_serial", "ttyibis_telegram"];

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Filter directives: `level` for the ttyibis crates, `warn` for dependencies
/// (or `error` when even our own warnings are muted).
pub fn filter_directives(level: LogLevel) -> String {
    let own = level.as_directive();
    let base = if level == LogLevel::Error { "error" } else { "warn" };

    let mut directives = base.to_string();
    for target in OWN_TARGETS {
        directives.push(',');
        directives.push_str(target);
        directives.push('=');
        directives.push_str(own);
    }
    directives
}

/// Install the stderr subscriber. Stdout stays reserved for command output.
///
/// Event targets are only shown at `debug` and `trace`, where events from the
/// serial and telegram crates interleave with the CLI's own.
pub fn init_logging(format: LogFormat, level: LogLevel) {
    let verbose = matches!(level, LogLevel::Debug | LogLevel::Trace);
    let builder = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::new(filter_directives(level)))
        .with_ansi(false)
        .with_target(verbose);

    match format {
        LogFormat::Text => {
            let _ = builder.try_init();
        }
        LogFormat::Json => {
            let _ = builder.json().try_init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn own_crates_follow_level() {
        assert_eq!(
            filter_directives(LogLevel::Debug),
            "warn,ttyibis=debug,ttyibis_serial=debug,ttyibis_telegram=debug"
        );
    }

    #[test]
    fn error_level_mutes_dependencies_too() {
        assert_eq!(
            filter_directives(LogLevel::Error),
            "error,ttyibis=error,ttyibis_serial=error,ttyibis_telegram=error"
        );
    }

    #[test]
    fn directives_parse_as_env_filter() {
        for level in [
            LogLevel::Error,
            LogLevel::Warn,
            LogLevel::Info,
            LogLevel::Debug,
            LogLevel::Trace,
        ] {
            let filter = EnvFilter::try_new(filter_directives(level));
            assert!(filter.is_ok(), "{level:?} directives should parse");
        }
    }
}
