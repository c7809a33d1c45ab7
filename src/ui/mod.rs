//! Terminal presentation: capability detection, theme and console sink

mod console;
mod terminal;
mod theme;

pub use console::{ConsoleEventSink, ConsoleStyle};
pub use terminal::{detect_capabilities, TerminalCapabilities};
pub use theme::Icons;
