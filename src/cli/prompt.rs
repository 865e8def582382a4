//! Line-based prompts over any reader/writer pair

use std::io::{self, BufRead, Write};

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Print `prompt` and read one trimmed line. `None` at end of input.
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Ask a yes/no question; anything but an affirmative answer is a no
    pub fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        Ok(self.ask(prompt)?.is_some_and(|answer| is_affirmative(&answer)))
    }
}

pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_ask_trims_and_echoes_prompt() {
        let mut out = Vec::new();
        let mut prompter = Prompter::new(Cursor::new("  alpha \n"), &mut out);

        let answer = prompter.ask("Name: ").unwrap();

        assert_eq!(answer.as_deref(), Some("alpha"));
        assert_eq!(String::from_utf8(out).unwrap(), "Name: ");
    }

    #[test]
    fn test_ask_end_of_input() {
        let mut prompter = Prompter::new(Cursor::new(""), Vec::new());
        assert_eq!(prompter.ask("> ").unwrap(), None);
    }

    #[test]
    fn test_ask_empty_line_is_not_end_of_input() {
        let mut prompter = Prompter::new(Cursor::new("\n"), Vec::new());
        assert_eq!(prompter.ask("> ").unwrap().as_deref(), Some(""));
    }

    #[test]
    fn test_confirm() {
        let mut prompter = Prompter::new(Cursor::new("Y\nno\n\n"), Vec::new());
        assert!(prompter.confirm("? ").unwrap());
        assert!(!prompter.confirm("? ").unwrap());
        assert!(!prompter.confirm("? ").unwrap());
        assert!(!prompter.confirm("? ").unwrap());
    }

    #[test]
    fn test_is_affirmative() {
        assert!(is_affirmative("y"));
        assert!(is_affirmative("YES"));
        assert!(is_affirmative(" y "));
        assert!(!is_affirmative("n"));
        assert!(!is_affirmative("yep"));
        assert!(!is_affirmative(""));
    }
}
