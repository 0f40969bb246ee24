use crate::io::{CarWashIo, Tone};
use anyhow::Result;
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    ExecutableCommand,
};
use std::io::{self, BufRead, Write};

/// A `crossterm`-based implementation of `CarWashIo`, reading whole lines
/// from stdin.
#[derive(Debug)]
pub struct TerminalIo {
    color: bool,
}

impl TerminalIo {
    pub fn new(color: bool) -> Self {
        Self { color }
    }
}

impl CarWashIo for TerminalIo {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        let mut stdout = io::stdout();
        stdout.execute(Print(prompt))?;
        stdout.flush()?;

        let mut buf = vec![];
        if io::stdin().lock().read_until(b'\n', &mut buf)? == 0 {
            // Leave the cursor on a fresh line; the prompt has no newline.
            println!();
            return Ok(None);
        }

        Ok(Some(decode_line(&buf)))
    }

    fn show(&mut self, tone: Tone, text: &str) -> Result<()> {
        let mut stdout = io::stdout();
        match tone_color(tone).filter(|_| self.color) {
            Some(color) => {
                stdout
                    .execute(SetForegroundColor(color))?
                    .execute(Print(text))?
                    .execute(ResetColor)?;
            }
            None => {
                stdout.execute(Print(text))?;
            }
        }
        stdout.execute(Print('\n'))?;
        Ok(())
    }
}

fn tone_color(tone: Tone) -> Option<Color> {
    match tone {
        Tone::Plain => None,
        Tone::Success => Some(Color::Green),
        Tone::Warning => Some(Color::Yellow),
    }
}

/// Strip the line terminator. Bytes that are not UTF-8 become U+FFFD rather
/// than failing the read.
fn decode_line(buf: &[u8]) -> String {
    let line = String::from_utf8_lossy(buf);
    line.trim_end_matches(['\r', '\n']).to_owned()
}
