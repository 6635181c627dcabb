//! Backend implementations of the [`Logger`](crate::Logger) contract

pub mod bus;
pub mod console;
pub mod event;
pub mod file;
pub mod multi;
pub mod null;

pub use bus::{LogEvent, LogEventData, MemoryBus, MessageBus};
pub use console::{CapturedStreams, ConsoleLogger, ConsoleStream, ConsoleStreams, StdStreams};
pub use event::EventLogger;
pub use file::FileLogger;
pub use multi::MultiLogger;
pub use null::NullLogger;
