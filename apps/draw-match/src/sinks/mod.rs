//! Output collaborators: the game log and the console view.

pub mod console;
pub mod event_log;

pub use console::{ConsoleView, NullView, TableSnapshot, TableView};
pub use event_log::{EventLog, MemoryLog, NullLog, WriterLog};
