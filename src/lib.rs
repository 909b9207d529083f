use log::{error, warn};
use serde::{Deserialize, Serialize};
use std::io;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

mod increment;

pub use increment::add_one;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Increment {
    pub input: i64,
    pub output: i64,
}

impl Increment {
    pub fn of(input: i64) -> Self {
        Self {
            input,
            output: add_one(input),
        }
    }

    /// True when the input is `i64::MAX`, so the output wrapped to `i64::MIN`.
    pub fn wrapped(&self) -> bool {
        self.input == i64::MAX
    }
}

/// Parses one line of input and increments it.
///
/// Blank lines are skipped silently, anything else that is not an `i64` is
/// logged and skipped.
pub fn handle_line(line: &str) -> Option<Increment> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    match line.parse::<i64>() {
        Ok(input) => {
            let increment = Increment::of(input);
            if increment.wrapped() {
                warn!(
                    "Input {} is the maximum value, result wrapped to {}",
                    increment.input, increment.output
                );
            }
            Some(increment)
        }
        Err(e) => {
            error!("Could not parse \"{}\" as an integer: {}", line, e);
            None
        }
    }
}

/// Increments every integer line of `reader`, writing one JSON record per
/// line to `writer`.
pub async fn run<R, W>(reader: R, writer: &mut W) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await? {
        if let Some(increment) = handle_line(&line) {
            let mut json = serde_json::to_string(&increment)?;
            json.push('\n');
            writer.write_all(json.as_bytes()).await?;
            writer.flush().await?;
        }
    }

    Ok(())
}
