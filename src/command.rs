//! Turns tokenized input into a [`Command`].

use crate::error::CommandError;
use crate::tokenizer::tokenize;
use crate::wordset::Filter;

pub const CLEAN_CONFIRMATION: &str = "yes";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Load(Vec<String>),
    /// One filter per argument, applied one after another.
    Filter(Vec<Filter>),
    Print,
    Count,
    Clean,
    Help,
    Exit,
    /// Anything that isn't a known command, echoed back as-is.
    Unknown(Vec<String>),
}

impl Command {
    /// Parses a raw input line. Returns `Ok(None)` for a blank line.
    ///
    /// # Errors
    ///
    /// See [`Command::from_tokens`].
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let tokens = tokenize(line);
        if tokens.is_empty() {
            return Ok(None);
        }
        Self::from_tokens(tokens).map(Some)
    }

    /// # Errors
    ///
    /// Returns a [`CommandError`] for wrong argument counts, non-numeric
    /// lengths and an unconfirmed `clean`.
    pub fn from_tokens(tokens: Vec<String>) -> Result<Self, CommandError> {
        let Some((name, args)) = tokens.split_first() else {
            return Ok(Self::Unknown(tokens));
        };

        match name.as_str() {
            "load" => {
                require_args(args)?;
                Ok(Self::Load(args.to_vec()))
            }
            "length" => parse_length(args).map(|filter| Self::Filter(vec![filter])),
            "mask" | "!mask" => {
                require_args(args)?;
                let inverted = name.starts_with('!');
                Ok(Self::Filter(
                    args.iter().map(|p| Filter::mask(p, inverted)).collect(),
                ))
            }
            "letters" | "!letters" => {
                require_args(args)?;
                let inverted = name.starts_with('!');
                Ok(Self::Filter(
                    args.iter().map(|l| Filter::letters(l, inverted)).collect(),
                ))
            }
            "print" => no_args(args, Self::Print),
            "count" => no_args(args, Self::Count),
            "help" => no_args(args, Self::Help),
            "exit" => no_args(args, Self::Exit),
            "clean" => match args {
                [confirm] if confirm == CLEAN_CONFIRMATION => Ok(Self::Clean),
                _ => Err(CommandError::CleanNotConfirmed),
            },
            _ => Ok(Self::Unknown(tokens)),
        }
    }
}

fn require_args(args: &[String]) -> Result<(), CommandError> {
    if args.is_empty() {
        Err(CommandError::MissingArgument)
    } else {
        Ok(())
    }
}

fn no_args(args: &[String], command: Command) -> Result<Command, CommandError> {
    if args.is_empty() {
        Ok(command)
    } else {
        Err(CommandError::UnnecessaryArgument)
    }
}

fn parse_length(args: &[String]) -> Result<Filter, CommandError> {
    match args {
        [exact] => Ok(Filter::ExactLength(parse_number(exact, "length")?)),
        [min, max] => Ok(Filter::LengthRange {
            min: parse_number(min, "min")?,
            max: parse_number(max, "max")?,
        }),
        _ => Err(CommandError::InvalidArgumentCount),
    }
}

fn parse_number(arg: &str, which: &'static str) -> Result<i64, CommandError> {
    arg.parse()
        .map_err(|source| CommandError::InvalidNumber { which, source })
}
