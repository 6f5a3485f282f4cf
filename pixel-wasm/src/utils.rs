use std::str::FromStr;

use log::{Level, LevelFilter, Metadata, Record};
use wasm_bindgen::JsValue;

/// `log` backend writing to the browser console.
pub struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let msg = JsValue::from_str(&format!("[{}] {}", record.target(), record.args()));
        match record.level() {
            Level::Error => web_sys::console::error_1(&msg),
            Level::Warn => web_sys::console::warn_1(&msg),
            Level::Info => web_sys::console::info_1(&msg),
            Level::Debug | Level::Trace => web_sys::console::log_1(&msg),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger. A second call keeps the first logger.
pub fn init_logging(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

/// Start-up options read from the page's query string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LaunchConfig {
    /// Fixed palette seed; `None` draws one from the browser.
    pub seed: Option<u64>,
    pub log_level: LevelFilter,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        LaunchConfig {
            seed: None,
            log_level: LevelFilter::Info,
        }
    }
}

impl LaunchConfig {
    /// Read `?seed=<u64>&log=<level>`. Unparseable values keep the defaults.
    pub fn from_query(search: &str) -> Self {
        let mut cfg = LaunchConfig::default();
        if let Some(seed) = get_query_param(search, "seed") {
            cfg.seed = seed.trim().parse().ok();
        }
        if let Some(level) = get_query_param(search, "log")
            && let Ok(level) = LevelFilter::from_str(level.trim())
        {
            cfg.log_level = level;
        }
        cfg
    }
}

/// Seed for a fresh page load, mixed from `Math.random()` and the clock.
pub fn entropy_seed() -> u64 {
    let r = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let t = js_sys::Date::now() as u64;
    (r << 32) ^ t
}

/// Simple query string parser used at start-up.
pub fn get_query_param(search: &str, key: &str) -> Option<String> {
    let s = search.trim_start_matches('?');
    for pair in s.split('&') {
        let mut it = pair.splitn(2, '=');
        let k = it.next()?;
        let v = it.next().unwrap_or("");
        if k == key {
            return Some(url_decode(v));
        }
    }
    None
}

fn url_decode(s: &str) -> String {
    percent_encoding::percent_decode_str(s)
        .decode_utf8()
        .unwrap_or_else(|_| s.into())
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_params_are_decoded() {
        assert_eq!(get_query_param("?seed=42", "seed").as_deref(), Some("42"));
        assert_eq!(
            get_query_param("?a=1&log=de%62ug", "log").as_deref(),
            Some("debug")
        );
        assert_eq!(get_query_param("?a=1", "seed"), None);
        assert_eq!(get_query_param("", "seed"), None);
    }

    #[test]
    fn launch_config_from_query() {
        assert_eq!(LaunchConfig::from_query(""), LaunchConfig::default());
        let cfg = LaunchConfig::from_query("?seed=%2017&log=warn");
        assert_eq!(cfg.seed, Some(17));
        assert_eq!(cfg.log_level, LevelFilter::Warn);
        let cfg = LaunchConfig::from_query("?seed=abc&log=loud");
        assert_eq!(cfg, LaunchConfig::default());
    }
}
