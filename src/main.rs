use anyhow::Result;
use std::io::{self, IsTerminal, Write};
use wordmaster::cli::parse_cli;
use wordmaster::command::Command;
use wordmaster::editor::{LineEditor, PROMPT};
use wordmaster::session::{BufReadSource, Session, repl};

fn main() -> Result<()> {
    let cli = parse_cli();
    wordmaster::logging::init(cli.verbose);

    let mut out = io::stdout();
    writeln!(out, "WordMaster v{}", env!("CARGO_PKG_VERSION"))?;
    writeln!(out)?;

    let mut session = Session::new();
    if !cli.files.is_empty() {
        let paths = cli
            .files
            .iter()
            .map(|p| p.to_string_lossy().into_owned())
            .collect();
        session.execute(Command::Load(paths), &mut out)?;
    }

    if cli.plain || !io::stdin().is_terminal() {
        log::debug!("reading commands from plain stdin");
        repl(&mut session, &mut BufReadSource::new(io::stdin().lock()), &mut out)?;
    } else {
        repl(&mut session, &mut LineEditor::new(PROMPT), &mut out)?;
    }
    Ok(())
}
