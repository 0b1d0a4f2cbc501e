pub mod types;

pub use types::{Status, Task, TaskCollection};
