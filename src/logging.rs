use std::io::Write;

use env_logger::WriteStyle;
use log::LevelFilter;

/// Installs a terminal logger for the crate's `log` output.
///
/// Defaults to `Info`; `RUST_LOG` overrides the filter.
pub fn try_init() -> Result<(), log::SetLoggerError> {
    env_logger::builder()
        .format(|buf, record| writeln!(buf, "[RLPREDICT | {}] {}", record.level(), record.args()))
        .write_style(WriteStyle::Always)
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .try_init()
}
