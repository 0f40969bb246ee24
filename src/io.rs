use anyhow::Result;
use std::fmt::Debug;

/// How a message should stand out to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Success,
    Warning,
}

/// The input/output methods needed by the menu driver.
pub trait CarWashIo: Debug {
    /// Show `prompt` (without a trailing newline) and block for one line of
    /// input. The line terminator is stripped.
    ///
    /// Returns `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;

    /// Print `text` followed by a newline.
    fn show(&mut self, tone: Tone, text: &str) -> Result<()>;
}
