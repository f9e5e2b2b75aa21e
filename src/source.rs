use crate::*;
use std::{
    fs::File,
    io::{self, BufRead, BufReader, Write},
    path::Path,
};

/// What to do after a recoverable error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Recovery {
    /// Discard the offending line and read the next one.
    Retry,
    /// Give up on the whole construction.
    Abort,
}

/// A supply of raw coordinate lines, and the policy for when a line is rejected.
pub trait CoordinateSource {
    /// The next raw line, or `None` at end of input.
    fn next_line(&mut self) -> Result<Option<String>>;

    /// Decide how to proceed after `err` was raised for the last line.
    fn on_error(&mut self, err: &Error) -> Recovery;
}

impl<S: CoordinateSource + ?Sized> CoordinateSource for &mut S {
    fn next_line(&mut self) -> Result<Option<String>> {
        (**self).next_line()
    }

    fn on_error(&mut self, err: &Error) -> Recovery {
        (**self).on_error(err)
    }
}

/// Strip the line terminator.
fn chomp(mut line: String) -> String {
    while line.ends_with(['\n', '\r']) {
        line.pop();
    }
    line
}

/// Prompts a person for each point.
///
/// Errors are reported back through the output and the prompt repeats.
pub struct Interactive<R, W> {
    input: R,
    output: W,
}

impl Interactive<io::StdinLock<'static>, io::Stdout> {
    /// Prompt on the terminal.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Interactive<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Explain how to drive the prompt.
    pub fn intro(&mut self) -> io::Result<()> {
        writeln!(
            self.output,
            "When polygon will be complete, prompt automatically stops. \
             To automatically complete polygon with existing vectors, leave prompt blank."
        )
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> CoordinateSource for Interactive<R, W> {
    fn next_line(&mut self) -> Result<Option<String>> {
        write!(self.output, "x y:")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(chomp(line)))
    }

    fn on_error(&mut self, err: &Error) -> Recovery {
        let _ = writeln!(self.output, "{err}");
        Recovery::Retry
    }
}

/// Reads points from a file (or any buffered reader), one per line.
///
/// There is nobody to correct a bad line, so any error aborts.
pub struct Batch<R> {
    lines: io::Lines<R>,
    line_no: usize,
}

impl Batch<BufReader<File>> {
    /// Open an input file.
    ///
    /// An empty path, or a file that does not exist, is [`Error::MissingInput`].
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(Error::MissingInput(
                "Input file location not provided, cannot proceed.".to_string(),
            ));
        }

        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => {
                Error::MissingInput(format!("input file {} not found", path.display()))
            }
            _ => Error::Io(e),
        })?;

        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> Batch<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_no: 0,
        }
    }

    /// The number of lines read so far.
    pub fn line_no(&self) -> usize {
        self.line_no
    }
}

impl<R: BufRead> CoordinateSource for Batch<R> {
    fn next_line(&mut self) -> Result<Option<String>> {
        let line = self.lines.next().transpose()?;
        if line.is_some() {
            self.line_no += 1;
        }
        Ok(line.map(chomp))
    }

    fn on_error(&mut self, err: &Error) -> Recovery {
        log::error!(
            "line {}: {}; data passed is of incorrect format",
            self.line_no,
            err
        );
        Recovery::Abort
    }
}
