// Library interface for wordmaster
// The binary is a thin shell around these modules; integration tests drive them directly.

pub mod cli;
pub mod command;
pub mod completion;
pub mod editor;
pub mod error;
pub mod loader;
pub mod logging;
pub mod session;
pub mod tokenizer;
pub mod wordset;

pub use command::Command;
pub use error::{CommandError, FilterError, LoadError};
pub use loader::{load_file, load_from_str, normalize_line};
pub use session::{BufReadSource, Flow, LineSource, Session, repl};
pub use tokenizer::tokenize;
pub use wordset::{Filter, WordSet};
