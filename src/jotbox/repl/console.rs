use crate::error::{JotError, Result};
use std::io::{self, BufRead, Write};

/// The input/output pair an interactive session talks through.
///
/// The interpreter reads command lines from it, and handlers use it for
/// follow-up questions (`prompt`, `confirm`).
pub struct Console {
    input: Box<dyn BufRead>,
    output: Box<dyn Write>,
    assume_yes: bool,
}

impl std::fmt::Debug for Console {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Console")
            .field("assume_yes", &self.assume_yes)
            .finish_non_exhaustive()
    }
}

/// Anything that can hand out the session console.
pub trait Terminal {
    fn console(&mut self) -> &mut Console;
}

impl Terminal for Console {
    fn console(&mut self) -> &mut Console {
        self
    }
}

const CONFIRM_ATTEMPTS: usize = 3;

impl Console {
    pub fn new<R, W>(input: R, output: W) -> Self
    where
        R: BufRead + 'static,
        W: Write + 'static,
    {
        Self {
            input: Box::new(input),
            output: Box::new(output),
            assume_yes: false,
        }
    }

    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }

    /// Answer every confirmation with "yes" without reading input.
    pub fn with_assume_yes(mut self, assume_yes: bool) -> Self {
        self.assume_yes = assume_yes;
        self
    }

    /// Reads one line without its line terminator. `None` at end of input.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        while buf.ends_with('\n') || buf.ends_with('\r') {
            buf.pop();
        }
        Ok(Some(buf))
    }

    pub fn write_str(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()
    }

    /// Writes `text` followed by a newline unless it already ends with one.
    pub fn write_block(&mut self, text: &str) -> io::Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        if text.ends_with('\n') {
            self.write_str(text)
        } else {
            self.write_str(&format!("{}\n", text))
        }
    }

    /// Shows `msg` and returns the next line; end of input yields "".
    pub fn prompt(&mut self, msg: &str) -> Result<String> {
        self.write_str(msg)?;
        let line = self.read_line().map_err(JotError::ReadFailure)?;
        Ok(line.unwrap_or_default())
    }

    /// Asks a yes/no question. Unrecognised answers are echoed back and the
    /// question repeated; running out of attempts or input means "no".
    pub fn confirm(&mut self, msg: &str) -> Result<bool> {
        if self.assume_yes {
            return Ok(true);
        }
        for _ in 0..CONFIRM_ATTEMPTS {
            self.write_str(&format!("{} [yes:no]?>", msg))?;
            let Some(answer) = self.read_line().map_err(JotError::ReadFailure)? else {
                return Ok(false);
            };
            match answer.trim() {
                "yes" | "y" => return Ok(true),
                "no" | "n" => return Ok(false),
                other => self.write_str(&format!("{}\n", other))?,
            }
        }
        Ok(false)
    }
}
