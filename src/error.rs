use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

/// Problems with a command line that are caught before anything touches the word list.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Missing argument.")]
    MissingArgument,
    #[error("Unnecessary argument.")]
    UnnecessaryArgument,
    #[error("Invalid number of arguments.")]
    InvalidArgumentCount,
    #[error("Invalid {which}: {source}")]
    InvalidNumber {
        which: &'static str,
        #[source]
        source: ParseIntError,
    },
    #[error("Type \"clean yes\" if you REALLY mean it!")]
    CleanNotConfirmed,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FilterError {
    #[error("Sanity check failed. No words would be left, aborting.")]
    NoWordsLeft,
}

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read \"{}\": {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
