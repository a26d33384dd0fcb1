//! Console Logger
//!
//! `tracing-subscriber` fmt setup for WASM frontends. Each formatted event is
//! written to the browser console with the method matching its level
//! (stderr when running natively, e.g. under `cargo test`).

use std::io;
use std::sync::OnceLock;

use tracing::{Level, Metadata, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::fmt::MakeWriter;

/// Name of the app that installed the global subscriber
static INSTALLED_FOR: OnceLock<String> = OnceLock::new();

#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error("logger already initialised for {0}")]
    AlreadyInitialised(String),
    #[error("failed to install tracing subscriber: {0}")]
    Install(String),
}

/// Wall-clock timestamps via chrono (`SystemTime` is unavailable in the browser)
#[derive(Clone, Copy, Debug, Default)]
pub struct ChronoTimer;

impl FormatTime for ChronoTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%H:%M:%S%.3f"))
    }
}

/// Browser console method used for a level
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsoleMethod {
    Error,
    Warn,
    Info,
    Log,
    Debug,
}

pub fn console_method(level: Level) -> ConsoleMethod {
    match level {
        Level::ERROR => ConsoleMethod::Error,
        Level::WARN => ConsoleMethod::Warn,
        Level::INFO => ConsoleMethod::Info,
        Level::DEBUG => ConsoleMethod::Log,
        Level::TRACE => ConsoleMethod::Debug,
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(method: ConsoleMethod, line: &str) {
    use wasm_bindgen::JsValue;
    let value = JsValue::from_str(line);
    match method {
        ConsoleMethod::Error => web_sys::console::error_1(&value),
        ConsoleMethod::Warn => web_sys::console::warn_1(&value),
        ConsoleMethod::Info => web_sys::console::info_1(&value),
        ConsoleMethod::Log => web_sys::console::log_1(&value),
        ConsoleMethod::Debug => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_method: ConsoleMethod, line: &str) {
    eprintln!("{}", line);
}

/// Buffers one formatted event and emits it when dropped
pub struct ConsoleWriter {
    method: ConsoleMethod,
    buf: Vec<u8>,
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.buf.is_empty() {
            return Ok(());
        }
        let line = String::from_utf8_lossy(&self.buf);
        emit(self.method, line.trim_end());
        self.buf.clear();
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let _ = io::Write::flush(self);
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct MakeConsoleWriter;

impl<'a> MakeWriter<'a> for MakeConsoleWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter { method: ConsoleMethod::Log, buf: Vec::new() }
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter { method: console_method(*meta.level()), buf: Vec::new() }
    }
}

/// Level used when the caller has no preference
pub fn default_level() -> Level {
    if cfg!(debug_assertions) { Level::DEBUG } else { Level::INFO }
}

/// Build the fmt subscriber around any writer
pub fn subscriber<W>(writer: W, level: Level) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_timer(ChronoTimer)
        .with_ansi(false)
        .with_max_level(level)
        .with_target(true)
        .compact()
        .finish()
}

/// Install the console subscriber as the global default
pub fn init_logger(app_name: &str, level: Level) -> Result<(), InitError> {
    if let Some(existing) = INSTALLED_FOR.get() {
        return Err(InitError::AlreadyInitialised(existing.clone()));
    }
    tracing::subscriber::set_global_default(subscriber(MakeConsoleWriter, level))
        .map_err(|e| InitError::Install(e.to_string()))?;
    let _ = INSTALLED_FOR.set(app_name.to_string());
    tracing::info!(app = app_name, %level, "logger ready");
    Ok(())
}
