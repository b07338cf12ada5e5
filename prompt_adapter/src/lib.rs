use std::collections::VecDeque;
use std::io::{self, BufRead, BufReader, Stdin, Write};

use tracing::{debug, error};

#[cfg(test)]
mod tests;

/// Blocking user dialogs: a notice the operator has to acknowledge and a
/// yes/no confirmation.
pub trait Prompter {
    fn notify(&mut self, message: &str);
    fn confirm(&mut self, message: &str) -> bool;
}

impl<P: Prompter + ?Sized> Prompter for Box<P> {
    fn notify(&mut self, message: &str) {
        (**self).notify(message);
    }

    fn confirm(&mut self, message: &str) -> bool {
        (**self).confirm(message)
    }
}

/// Line-based prompter over any reader/writer pair.
#[derive(Debug)]
pub struct TerminalPrompter<R, W> {
    input: R,
    output: W,
}

/// Line reader over the process stdin that never buffers past the current
/// line, so several readers can take turns on the same stdin.
#[must_use]
pub fn stdin_lines() -> BufReader<Stdin> {
    BufReader::with_capacity(1, io::stdin())
}

impl TerminalPrompter<BufReader<Stdin>, io::Stdout> {
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(stdin_lines(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    fn write_line(&mut self, line: &str) {
        if let Err(e) = writeln!(self.output, "{line}").and_then(|()| self.output.flush()) {
            error!("Failed to write prompt: {}", e);
        }
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn notify(&mut self, message: &str) {
        self.write_line(&format!("! {message}"));
    }

    fn confirm(&mut self, message: &str) -> bool {
        if let Err(e) = write!(self.output, "{message} [y/N] ").and_then(|()| self.output.flush())
        {
            error!("Failed to write prompt: {}", e);
        }

        let mut answer = String::new();
        match self.input.read_line(&mut answer) {
            Ok(0) => {
                debug!("Confirmation input closed, treating as declined");
                false
            }
            Ok(_) => is_affirmative(&answer),
            Err(e) => {
                error!("Failed to read confirmation: {}", e);
                false
            }
        }
    }
}

/// `y` or `yes`, case-insensitive, surrounding whitespace ignored.
#[must_use]
pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}

/// Prompter that answers from a queue and remembers everything it was asked.
#[derive(Debug, Default, Clone)]
pub struct ScriptedPrompter {
    answers: VecDeque<bool>,
    default_answer: bool,
    notices: Vec<String>,
    confirmations: Vec<String>,
}

impl ScriptedPrompter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers every confirmation with `answer`.
    #[must_use]
    pub fn always(answer: bool) -> Self {
        Self {
            default_answer: answer,
            ..Self::default()
        }
    }

    /// Queues answers consumed in order; once exhausted the default answer is used.
    #[must_use]
    pub fn with_answers(mut self, answers: impl IntoIterator<Item = bool>) -> Self {
        self.answers.extend(answers);
        self
    }

    pub fn notices(&self) -> &[String] {
        &self.notices
    }

    pub fn confirmations(&self) -> &[String] {
        &self.confirmations
    }
}

impl Prompter for ScriptedPrompter {
    fn notify(&mut self, message: &str) {
        debug!("Notice: {message}");
        self.notices.push(message.to_string());
    }

    fn confirm(&mut self, message: &str) -> bool {
        self.confirmations.push(message.to_string());
        let answer = self.answers.pop_front().unwrap_or(self.default_answer);
        debug!("Confirmation '{message}' answered with {answer}");
        answer
    }
}
