//! Line-oriented output sinks

use std::io::Write;

use parking_lot::Mutex;
use tracing::trace;

use crate::error::ReportError;

/// A destination that accepts one line of text at a time
pub trait LineSink: Send + Sync {
    /// Emit a single line, without a trailing newline in `line`
    fn write_line(&self, line: &str) -> Result<(), ReportError>;
}

/// Writes lines to stdout, flushing after each line.
///
/// Writes are serialized under a mutex so concurrent callers never
/// interleave partial lines.
#[derive(Debug, Default)]
pub struct ConsoleSink {
    lock: Mutex<()>,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LineSink for ConsoleSink {
    fn write_line(&self, line: &str) -> Result<(), ReportError> {
        let _guard = self.lock.lock();
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{line}")?;
        stdout.flush()?;
        trace!(line, "console output");
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Captures lines in memory for assertions
    #[derive(Debug, Default)]
    pub struct MemorySink {
        pub lines: Mutex<Vec<String>>,
    }

    impl MemorySink {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn lines(&self) -> Vec<String> {
            self.lines.lock().clone()
        }
    }

    impl LineSink for MemorySink {
        fn write_line(&self, line: &str) -> Result<(), ReportError> {
            self.lines.lock().push(line.to_string());
            Ok(())
        }
    }

    /// Fails every write after the first `accept` lines
    #[derive(Debug)]
    pub struct FailingSink {
        pub accept: Mutex<usize>,
    }

    impl FailingSink {
        pub fn after(accept: usize) -> Self {
            Self {
                accept: Mutex::new(accept),
            }
        }
    }

    impl LineSink for FailingSink {
        fn write_line(&self, _line: &str) -> Result<(), ReportError> {
            let mut remaining = self.accept.lock();
            if *remaining == 0 {
                return Err(ReportError::Io(std::io::Error::other("sink closed")));
            }
            *remaining -= 1;
            Ok(())
        }
    }
}
