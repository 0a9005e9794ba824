// src/logging.rs
// `log` backend: the devtools console in the browser, env_logger on native
// builds. Both print the same line format.
use log::{Level, LevelFilter};

/// Installs the logger once; later calls only adjust the max level.
pub fn init(level: LevelFilter) {
    if install(level).is_err() {
        log::debug!("logger already installed");
    }
    log::set_max_level(level);
}

fn format_record(level: Level, target: &str, message: &str) -> String {
    format!("[{level:<5} {target}] {message}")
}

#[cfg(target_arch = "wasm32")]
fn install(_level: LevelFilter) -> Result<(), log::SetLoggerError> {
    log::set_logger(&console::LOGGER)
}

#[cfg(not(target_arch = "wasm32"))]
fn install(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    use std::io::Write;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level.as_str()))
        .format(|buf, record| {
            let line = format_record(record.level(), record.target(), &record.args().to_string());
            writeln!(buf, "{line}")
        })
        .try_init()
}

#[cfg(target_arch = "wasm32")]
mod console {
    use super::format_record;
    use log::{Level, Log, Metadata, Record};
    use wasm_bindgen::JsValue;
    use web_sys::console;

    pub(super) struct ConsoleLogger;

    pub(super) static LOGGER: ConsoleLogger = ConsoleLogger;

    impl Log for ConsoleLogger {
        fn enabled(&self, metadata: &Metadata) -> bool {
            metadata.level() <= log::max_level()
        }

        fn log(&self, record: &Record) {
            if !self.enabled(record.metadata()) {
                return;
            }
            let line = format_record(record.level(), record.target(), &record.args().to_string());
            let value = JsValue::from_str(&line);
            match record.level() {
                Level::Error => console::error_1(&value),
                Level::Warn => console::warn_1(&value),
                Level::Info => console::info_1(&value),
                Level::Debug => console::log_1(&value),
                Level::Trace => console::debug_1(&value),
            }
        }

        fn flush(&self) {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_carry_level_and_target() {
        assert_eq!(
            format_record(Level::Warn, "blocky_animal::gl", "slow frame"),
            "[WARN  blocky_animal::gl] slow frame"
        );
        assert_eq!(format_record(Level::Error, "web", "boom"), "[ERROR web] boom");
    }

    #[test]
    fn second_init_only_moves_the_level() {
        init(LevelFilter::Debug);
        assert_eq!(log::max_level(), LevelFilter::Debug);
        init(LevelFilter::Warn);
        assert_eq!(log::max_level(), LevelFilter::Warn);
        log::warn!("still routed after reinit");
    }
}
