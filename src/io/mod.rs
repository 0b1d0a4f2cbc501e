pub mod input;
pub mod output;

pub use input::{load_tasks, parse_tasks, read_tasks, InputFormat, TaskSource};
pub use output::{create_writer, JsonWriter, OutputFormat, OutputWriter, TerminalWriter};
