//! Line-oriented console adapter over any reader/writer pair

use quickask_application::{ConsoleError, ConsolePort};
use std::io::{BufRead, BufReader, Stdin, Stdout, Write};
use std::sync::Mutex;

/// [`ConsolePort`] backed by a buffered reader and a writer.
///
/// The prompt and the answer go to the same writer.
pub struct LineConsole<R, W> {
    reader: Mutex<R>,
    writer: Mutex<W>,
}

/// Console on the process's stdin/stdout
pub type StdioConsole = LineConsole<BufReader<Stdin>, Stdout>;

impl StdioConsole {
    pub fn stdio() -> Self {
        Self::new(BufReader::new(std::io::stdin()), std::io::stdout())
    }
}

impl<R, W> LineConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader: Mutex::new(reader),
            writer: Mutex::new(writer),
        }
    }

    /// Consume the console and return the writer
    pub fn into_writer(self) -> W {
        self.writer.into_inner().unwrap_or_else(|e| e.into_inner())
    }

    fn with_writer<T>(
        &self,
        f: impl FnOnce(&mut W) -> std::io::Result<T>,
    ) -> Result<T, ConsoleError> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| ConsoleError::Io("writer lock poisoned".to_string()))?;
        Ok(f(&mut *writer)?)
    }
}

impl<R, W> ConsolePort for LineConsole<R, W>
where
    R: BufRead + Send,
    W: Write + Send,
{
    fn read_line(&self, prompt: &str) -> Result<String, ConsoleError> {
        self.with_writer(|w| {
            w.write_all(prompt.as_bytes())?;
            w.flush()
        })?;

        let mut reader = self
            .reader
            .lock()
            .map_err(|_| ConsoleError::Io("reader lock poisoned".to_string()))?;
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            return Err(ConsoleError::EndOfInput);
        }
        Ok(line)
    }

    fn write_answer(&self, answer: &str) -> Result<(), ConsoleError> {
        self.with_writer(|w| {
            w.write_all(answer.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()
        })
    }

    fn write_chunk(&self, chunk: &str) -> Result<(), ConsoleError> {
        self.with_writer(|w| {
            w.write_all(chunk.as_bytes())?;
            w.flush()
        })
    }

    fn finish_line(&self) -> Result<(), ConsoleError> {
        self.with_writer(|w| {
            w.write_all(b"\n")?;
            w.flush()
        })
    }
}
