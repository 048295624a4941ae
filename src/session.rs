//! One interactive session: owns the word list and reports every command's result.

use crate::command::Command;
use crate::completion::COMMANDS;
use crate::loader::{expand_home, load_file};
use crate::wordset::{Filter, WordSet};
use crate::{debug_log, info_log};
use std::io::{self, BufRead, Write};

/// Whether the loop should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Source of command lines for [`repl`].
pub trait LineSource {
    /// Returns the next line without its terminator, or `None` at end of input.
    ///
    /// # Errors
    ///
    /// Propagates I/O errors from the underlying terminal or reader.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// Plain line-by-line input, used for pipes and scripted sessions.
pub struct BufReadSource<R: BufRead> {
    reader: R,
}

impl<R: BufRead> BufReadSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for BufReadSource<R> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut input = String::new();
        if self.reader.read_line(&mut input)? == 0 {
            return Ok(None);
        }
        let line = input.strip_suffix('\n').unwrap_or(&input);
        let line = line.strip_suffix('\r').unwrap_or(line);
        Ok(Some(line.to_string()))
    }
}

#[derive(Debug, Default)]
pub struct Session {
    words: WordSet,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn words(&self) -> &WordSet {
        &self.words
    }

    /// Parses and runs one input line. Command errors are reported, never returned.
    ///
    /// # Errors
    ///
    /// Only fails when writing to `out` fails.
    pub fn run_line<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<Flow> {
        match Command::parse(line) {
            Ok(Some(command)) => self.execute(command, out),
            Ok(None) => Ok(Flow::Continue),
            Err(e) => {
                debug_log!("run_line() - rejected {:?}: {:?}", line, e);
                writeln!(out, "{e}")?;
                Ok(Flow::Continue)
            }
        }
    }

    /// # Errors
    ///
    /// Only fails when writing to `out` fails.
    pub fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> io::Result<Flow> {
        info_log!("execute() - {:?}", command);
        match command {
            Command::Load(paths) => {
                for path in &paths {
                    self.load(path, out)?;
                }
                self.print_count(out)?;
            }
            Command::Filter(filters) => {
                for filter in &filters {
                    self.apply_filter(filter, out)?;
                }
                self.print_count(out)?;
            }
            Command::Print => self.print_list(out)?,
            Command::Count => self.print_count(out)?,
            Command::Clean => {
                self.words.clear();
                self.print_count(out)?;
            }
            Command::Help => print_help(out)?,
            Command::Exit => return Ok(Flow::Exit),
            Command::Unknown(tokens) => {
                writeln!(out, "Unrecognized input: [{}]", tokens.join(" "))?;
            }
        }
        Ok(Flow::Continue)
    }

    fn load<W: Write>(&mut self, path: &str, out: &mut W) -> io::Result<()> {
        writeln!(out, "Loading \"{path}\"...")?;
        match load_file(expand_home(path)) {
            Ok(words) => {
                let added = words.len();
                self.words.extend(words);
                writeln!(out, "Loaded \"{path}\". {added} entries added.")
            }
            Err(e) => {
                debug_log!("load() - {:?}", e);
                writeln!(out, "{e}")
            }
        }
    }

    fn apply_filter<W: Write>(&mut self, filter: &Filter, out: &mut W) -> io::Result<()> {
        match filter {
            Filter::ExactLength(exact) => writeln!(out, "Filtering for length {exact}...")?,
            Filter::LengthRange { min, max } => {
                writeln!(out, "Filtering for {min} <= length <= {max}...")?;
            }
            Filter::Mask { .. } | Filter::Letters { .. } => {}
        }
        if let Err(e) = self.words.apply(filter) {
            writeln!(out, "{e}")?;
        }
        Ok(())
    }

    fn print_count<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "WordList now contains {} words.", self.words.len())
    }

    fn print_list<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "---- LIST START ----")?;
        for word in self.words.words() {
            writeln!(out, "{word}")?;
        }
        writeln!(out, "---- LIST   END ----")
    }
}

fn print_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, " --[ HELP ]-- ")?;
    writeln!(out)?;
    for (name, description) in COMMANDS {
        writeln!(out, " {name:<10} {description}")?;
    }
    writeln!(out)?;
    writeln!(out, " --  Mask  -- ")?;
    writeln!(out)?;
    writeln!(out, " A mask is a string with exactly as many letters")?;
    writeln!(out, " as you are searching for, containing \"-\" for")?;
    writeln!(out, " unknown letters.")
}

/// Reads and runs lines until `exit` or end of input.
///
/// # Errors
///
/// Propagates read errors from `source` and write errors on `out`.
pub fn repl<S: LineSource, W: Write>(
    session: &mut Session,
    source: &mut S,
    out: &mut W,
) -> io::Result<()> {
    while let Some(line) = source.read_line()? {
        if session.run_line(&line, out)? == Flow::Exit {
            info_log!("repl() - exit requested");
            break;
        }
        out.flush()?;
    }
    Ok(())
}
