//! Interactive line editor with history and tab completion.
//!
//! The terminal is only in raw mode while a line is being read; [`RawModeGuard`]
//! restores it on every way out, including `exit` and panics.

use crate::completion::{Suggestion, common_prefix, complete, word_before_cursor};
use crate::session::LineSource;
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    queue,
    style::Print,
    terminal::{Clear, ClearType, disable_raw_mode, enable_raw_mode},
};
use std::io::{self, Write};

pub const PROMPT: &str = "WM] ";

struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        enable_raw_mode()?;
        debug_log!("RawModeGuard::enable() - raw mode on");
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        debug_log!("RawModeGuard::drop() - raw mode off");
    }
}

/// Text being edited, indexed by code point.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LineBuffer {
    chars: Vec<char>,
    cursor: usize,
}

impl LineBuffer {
    #[must_use]
    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    #[must_use]
    pub fn before_cursor(&self) -> String {
        self.chars[..self.cursor].iter().collect()
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn insert(&mut self, c: char) {
        self.chars.insert(self.cursor, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.chars.remove(self.cursor);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.chars.len() {
            self.chars.remove(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.chars.len());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.chars.len();
    }

    /// Replaces the whole text and puts the cursor at the end.
    pub fn set(&mut self, text: &str) {
        self.chars = text.chars().collect();
        self.cursor = self.chars.len();
    }

    pub fn replace_word_before_cursor(&mut self, replacement: &str) {
        let before = self.before_cursor();
        let start = self.cursor - word_before_cursor(&before).chars().count();
        self.chars.splice(start..self.cursor, replacement.chars());
        self.cursor = start + replacement.chars().count();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyAction {
    Redraw,
    Submit,
    Complete,
    Interrupt,
    EndOfInput,
    Ignore,
}

pub struct LineEditor {
    prompt: String,
    buffer: LineBuffer,
    history: Vec<String>,
    history_index: Option<usize>,
    draft: String,
}

impl LineEditor {
    #[must_use]
    pub fn new(prompt: &str) -> Self {
        Self {
            prompt: prompt.to_string(),
            buffer: LineBuffer::default(),
            history: Vec::new(),
            history_index: None,
            draft: String::new(),
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::ALT) {
            debug_log!("handle_key() - Ignoring key with Alt: {:?}", key.code);
            return KeyAction::Ignore;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => return KeyAction::Interrupt,
            KeyCode::Char('d') if ctrl && self.buffer.is_empty() => return KeyAction::EndOfInput,
            KeyCode::Char('d') if ctrl => self.buffer.delete(),
            KeyCode::Char('a') if ctrl => self.buffer.move_home(),
            KeyCode::Char('e') if ctrl => self.buffer.move_end(),
            KeyCode::Char('u') if ctrl => self.buffer = LineBuffer::default(),
            KeyCode::Char(_) if ctrl => return KeyAction::Ignore,
            KeyCode::Char(c) => self.buffer.insert(c),
            KeyCode::Enter => return KeyAction::Submit,
            KeyCode::Tab => return KeyAction::Complete,
            KeyCode::Backspace => self.buffer.backspace(),
            KeyCode::Delete => self.buffer.delete(),
            KeyCode::Left => self.buffer.move_left(),
            KeyCode::Right => self.buffer.move_right(),
            KeyCode::Home => self.buffer.move_home(),
            KeyCode::End => self.buffer.move_end(),
            KeyCode::Up => self.history_prev(),
            KeyCode::Down => self.history_next(),
            _ => return KeyAction::Ignore,
        }
        KeyAction::Redraw
    }

    fn history_prev(&mut self) {
        let index = match self.history_index {
            _ if self.history.is_empty() => return,
            None => {
                self.draft = self.buffer.text();
                self.history.len() - 1
            }
            Some(i) => i.saturating_sub(1),
        };
        self.history_index = Some(index);
        self.buffer.set(&self.history[index]);
    }

    fn history_next(&mut self) {
        let Some(index) = self.history_index else {
            return;
        };
        if index + 1 < self.history.len() {
            self.history_index = Some(index + 1);
            self.buffer.set(&self.history[index + 1]);
        } else {
            self.history_index = None;
            let draft = std::mem::take(&mut self.draft);
            self.buffer.set(&draft);
        }
    }

    /// Completes as far as the suggestions agree and returns them all.
    fn complete(&mut self) -> Vec<Suggestion> {
        let before = self.buffer.before_cursor();
        let suggestions = complete(&before);
        match suggestions.as_slice() {
            [] => {}
            [only] => self.buffer.replace_word_before_cursor(&only.text),
            _ => {
                let typed = word_before_cursor(&before).chars().count();
                if let Some(prefix) = common_prefix(&suggestions)
                    && prefix.chars().count() > typed
                {
                    self.buffer.replace_word_before_cursor(&prefix);
                }
            }
        }
        debug_log!("complete() - {} suggestions for {:?}", suggestions.len(), before);
        suggestions
    }

    fn take_line(&mut self) -> String {
        let line = std::mem::take(&mut self.buffer).text();
        self.history_index = None;
        self.draft.clear();
        if !line.is_empty() && self.history.last() != Some(&line) {
            self.history.push(line.clone());
        }
        line
    }

    fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let column = self.prompt.chars().count() + self.buffer.cursor();
        queue!(
            out,
            cursor::MoveToColumn(0),
            Clear(ClearType::CurrentLine),
            Print(&self.prompt),
            Print(self.buffer.text()),
            cursor::MoveToColumn(u16::try_from(column).unwrap_or(u16::MAX)),
        )?;
        out.flush()
    }
}

impl LineSource for LineEditor {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut stdout = io::stdout();
        let _raw = RawModeGuard::enable()?;
        self.render(&mut stdout)?;

        loop {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match self.handle_key(key) {
                KeyAction::Submit => {
                    write!(stdout, "\r\n")?;
                    let line = self.take_line();
                    info_log!("read_line() - submitted {:?}", line);
                    return Ok(Some(line));
                }
                KeyAction::EndOfInput => {
                    write!(stdout, "\r\n")?;
                    return Ok(None);
                }
                KeyAction::Interrupt => {
                    write!(stdout, "^C\r\n")?;
                    self.buffer = LineBuffer::default();
                    self.history_index = None;
                }
                KeyAction::Complete => {
                    let suggestions = self.complete();
                    if suggestions.len() > 1 {
                        write!(stdout, "\r\n")?;
                        for suggestion in &suggestions {
                            write!(
                                stdout,
                                "  {:<24} {}\r\n",
                                suggestion.text, suggestion.description
                            )?;
                        }
                    }
                }
                KeyAction::Redraw => {}
                KeyAction::Ignore => continue,
            }
            self.render(&mut stdout)?;
        }
    }
}
