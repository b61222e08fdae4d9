//! Core - ambient pieces shared by every layer

pub mod log;
pub mod viewport;

pub use log::{Debugger, LogKind, LogRecord, LogSink};
pub use viewport::Viewport;
