//! Debugger - leveled logging handed to the scene by its owner
//!
//! Levels: 10 = everything, 0 = nothing. A message tagged with level `l`
//! is emitted when `l <= level`.
//!
//! There is no global instance: whoever builds a `SceneCore` decides where
//! its messages go.

pub const LEVEL_ALL: u8 = 10;
pub const LEVEL_NONE: u8 = 0;

/// Severity of a recorded message
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogKind {
    Info,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogRecord {
    pub kind: LogKind,
    pub level: u8,
    pub message: String,
}

/// Where emitted messages end up
#[derive(Clone, Debug)]
pub enum LogSink {
    /// Browser console on wasm32, stderr elsewhere
    Console,
    /// Kept in memory (tests, headless runs)
    Memory(Vec<LogRecord>),
    Silent,
}

#[derive(Clone, Debug)]
pub struct Debugger {
    level: u8,
    error_level: u8,
    sink: LogSink,
}

impl Debugger {
    pub fn new(level: u8, error_level: u8, sink: LogSink) -> Self {
        Self { level, error_level, sink }
    }

    pub fn console(level: u8) -> Self {
        Self::new(level, level, LogSink::Console)
    }

    pub fn memory() -> Self {
        Self::new(LEVEL_ALL, LEVEL_ALL, LogSink::Memory(Vec::new()))
    }

    pub fn silent() -> Self {
        Self::new(LEVEL_NONE, LEVEL_NONE, LogSink::Silent)
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn set_level(&mut self, level: u8) {
        self.level = level.min(LEVEL_ALL);
    }

    pub fn set_error_level(&mut self, level: u8) {
        self.error_level = level.min(LEVEL_ALL);
    }

    /// Message is built lazily so filtered-out logs cost nothing.
    pub fn log<F: FnOnce() -> String>(&mut self, level: u8, message: F) {
        if level <= self.level {
            self.emit(LogKind::Info, level, message());
        }
    }

    pub fn error<F: FnOnce() -> String>(&mut self, level: u8, message: F) {
        if level <= self.error_level {
            self.emit(LogKind::Error, level, message());
        }
    }

    /// Records captured by a `Memory` sink (empty for other sinks)
    pub fn records(&self) -> &[LogRecord] {
        match &self.sink {
            LogSink::Memory(records) => records,
            _ => &[],
        }
    }

    fn emit(&mut self, kind: LogKind, level: u8, message: String) {
        match &mut self.sink {
            LogSink::Console => write_console(kind, &message),
            LogSink::Memory(records) => records.push(LogRecord { kind, level, message }),
            LogSink::Silent => {}
        }
    }
}

impl Default for Debugger {
    fn default() -> Self {
        Self::console(LEVEL_ALL)
    }
}

#[cfg(target_arch = "wasm32")]
fn write_console(kind: LogKind, message: &str) {
    match kind {
        LogKind::Info => web_sys::console::log_1(&message.into()),
        LogKind::Error => web_sys::console::error_1(&message.into()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(kind: LogKind, message: &str) {
    match kind {
        LogKind::Info => eprintln!("[planar] {}", message),
        LogKind::Error => eprintln!("[planar] error: {}", message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_above_level_are_dropped() {
        let mut dbg = Debugger::memory();
        dbg.set_level(3);
        dbg.log(2, || "kept".to_string());
        dbg.log(5, || "dropped".to_string());
        assert_eq!(dbg.records().len(), 1);
        assert_eq!(dbg.records()[0].message, "kept");
    }

    #[test]
    fn error_level_is_independent() {
        let mut dbg = Debugger::memory();
        dbg.set_level(LEVEL_NONE);
        dbg.log(0, || "info at zero".to_string());
        dbg.error(7, || "boom".to_string());
        let kinds: Vec<LogKind> = dbg.records().iter().map(|r| r.kind).collect();
        assert_eq!(kinds, vec![LogKind::Info, LogKind::Error]);
    }

    #[test]
    fn filtered_message_is_never_built() {
        let mut dbg = Debugger::silent();
        dbg.log(10, || panic!("should not be evaluated"));
        assert!(dbg.records().is_empty());
    }
}
