use crate::error::ConsoleError;
use core_types::validation::{validate_email, validate_non_empty, validate_numeric_id, validate_phone};
use core_types::ValidationError;
use std::io::{BufRead, Write};

/// Line-oriented prompting over any reader/writer pair.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// Writes one line of output.
    pub fn say(&mut self, message: &str) -> Result<(), ConsoleError> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    /// Shows `prompt` and reads one line, without its line terminator.
    pub fn ask(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        // Bytes, not `read_line`: a line that is not UTF-8 is a bad answer,
        // not a broken console.
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Err(ConsoleError::InputClosed);
        }
        Ok(String::from_utf8_lossy(&line)
            .trim_end_matches(['\r', '\n'])
            .to_string())
    }

    /// Asks until `validate` accepts the answer, printing the rejection
    /// reason after every bad attempt. Only I/O failures end the loop early.
    pub fn ask_until<T>(
        &mut self,
        prompt: &str,
        validate: impl Fn(&str) -> Result<T, ValidationError>,
    ) -> Result<T, ConsoleError> {
        loop {
            let answer = self.ask(prompt)?;
            match validate(&answer) {
                Ok(value) => return Ok(value),
                Err(rejection) => {
                    tracing::debug!(%rejection, "Rejected console input.");
                    self.say(&rejection.to_string())?;
                }
            }
        }
    }

    pub fn non_empty(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        self.ask_until(prompt, validate_non_empty)
    }

    pub fn email(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        self.ask_until(prompt, validate_email)
    }

    pub fn phone(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        self.ask_until(prompt, validate_phone)
    }

    /// Asks once. `None` means the answer was not a numeric id; the caller
    /// reports it and abandons the operation.
    pub fn numeric_id(&mut self, prompt: &str) -> Result<Option<u64>, ConsoleError> {
        let answer = self.ask(prompt)?;
        Ok(validate_numeric_id(&answer).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(script: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
    }

    fn printed(p: &Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(p.output().clone()).unwrap()
    }

    #[test]
    fn ask_strips_the_line_ending_only() {
        let mut p = prompter("  padded  \r\n");
        assert_eq!(p.ask("> ").unwrap(), "  padded  ");
        assert_eq!(printed(&p), "> ");
    }

    #[test]
    fn non_utf8_lines_are_read_lossily() {
        let mut p = Prompter::new(Cursor::new(b"\xff\xfe\nAda\n".to_vec()), Vec::new());
        assert_eq!(p.ask("> ").unwrap(), "\u{FFFD}\u{FFFD}");
        assert_eq!(p.non_empty("> ").unwrap(), "Ada");
    }

    #[test]
    fn non_utf8_answer_is_rejected_by_the_retry_loop() {
        let mut p = Prompter::new(Cursor::new(b"\xff@\xfe.com\nada@example.com\n".to_vec()), Vec::new());
        assert_eq!(p.email("Email: ").unwrap(), "ada@example.com");
        assert_eq!(printed(&p).matches("Invalid email format").count(), 1);
    }

    #[test]
    fn end_of_input_is_reported() {
        let mut p = prompter("");
        assert!(matches!(p.ask("> "), Err(ConsoleError::InputClosed)));
    }

    #[test]
    fn non_empty_keeps_asking_until_something_is_typed() {
        let mut p = prompter("\n   \nAda\n");
        assert_eq!(p.non_empty("Name: ").unwrap(), "Ada");

        let out = printed(&p);
        assert_eq!(out.matches("Name: ").count(), 3);
        assert_eq!(out.matches("This field cannot be empty").count(), 2);
    }

    #[test]
    fn email_and_phone_loops_print_their_hints() {
        let mut p = prompter("a@b\nada@example.com\n12345\n12345abcde\n1234567890\n");
        assert_eq!(p.email("Email: ").unwrap(), "ada@example.com");
        assert_eq!(p.phone("Phone: ").unwrap(), "1234567890");

        let out = printed(&p);
        assert_eq!(out.matches("Invalid email format").count(), 1);
        assert_eq!(out.matches("Invalid phone number").count(), 2);
    }

    #[test]
    fn retry_loop_ends_when_input_runs_out() {
        let mut p = prompter("not-an-email\n");
        assert!(matches!(p.email("Email: "), Err(ConsoleError::InputClosed)));
    }

    #[test]
    fn numeric_id_asks_exactly_once() {
        let mut p = prompter("abc\n12\n");
        assert_eq!(p.numeric_id("ID: ").unwrap(), None);
        assert_eq!(p.numeric_id("ID: ").unwrap(), Some(12));
    }
}
