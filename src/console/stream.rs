use super::Console;
use std::io::BufRead;
use std::io::Write;

/// Console over a buffered reader and a writer.
///
/// Used when stdin is not a terminal, e.g. when moves are piped in.
/// Prompts and warnings go to the writer.
#[derive(Debug)]
pub struct Stream<R, W> {
    reader: R,
    writer: W,
}

impl<R, W> Stream<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl Stream<std::io::StdinLock<'static>, std::io::Stdout> {
    /// Locks stdin for reading; prompts go to stdout.
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R, W> Console for Stream<R, W>
where
    R: BufRead,
    W: Write,
{
    fn read(&mut self, prompt: &str) -> anyhow::Result<String> {
        write!(self.writer, "{}: ", prompt)?;
        self.writer.flush()?;
        let ref mut bytes = Vec::new();
        match self.reader.read_until(b'\n', bytes)? {
            0 => Err(anyhow::anyhow!("input closed at prompt {:?}", prompt)),
            _ => Ok(String::from_utf8_lossy(bytes)
                .trim_end_matches(['\r', '\n'])
                .to_owned()),
        }
    }
    fn warn(&mut self, message: &str) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", message)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_lines_and_echoes_prompts() {
        let mut stream = Stream::new(Cursor::new("Rock\r\nPaper\n"), Vec::new());
        assert_eq!(stream.read("Your call").unwrap(), "Rock");
        assert_eq!(stream.read("Your call").unwrap(), "Paper");
        stream.warn("nope").unwrap();
        let (_, out) = stream.into_inner();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Your call: Your call: nope\n"
        );
    }
    #[test]
    fn undecodable_line_is_rejected_not_fatal() {
        let stream = Stream::new(Cursor::new(&b"\xff\xfe\nRock\n"[..]), Vec::new());
        let mut human = crate::players::Human::new(stream);
        assert_eq!(
            crate::players::Player::decide(&mut human).unwrap(),
            crate::gameplay::Move::Rock
        );
    }
    #[test]
    fn end_of_input_is_an_error() {
        let mut stream = Stream::new(Cursor::new(""), Vec::new());
        assert!(stream.read("Your call").is_err());
    }
}
