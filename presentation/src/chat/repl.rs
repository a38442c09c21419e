//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::ConsoleFormatter;
use crate::RequestSpinner;
use parley_application::ChatSession;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::path::PathBuf;

/// What one line of input asks the loop to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// End the session.
    Quit,
    /// Reset the conversation history.
    Clear,
    /// Blank line; do nothing.
    Ignore,
    /// Send the text as a user message.
    Say(String),
}

impl ReplCommand {
    /// Classify one input line. Control words are case-insensitive.
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Self::Ignore;
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "exit" | "quit" | "bye" => Self::Quit,
            "clear" => Self::Clear,
            _ => Self::Say(trimmed.to_string()),
        }
    }
}

/// Interactive chat REPL
///
/// Sequential and single-threaded: one outstanding request at a time, the
/// loop blocks on the completion call before reading the next line. A failed
/// turn is printed and the loop continues; interrupt ends the session
/// immediately without persisting anything.
pub struct ChatRepl {
    session: ChatSession,
    show_progress: bool,
    history_file: Option<PathBuf>,
}

impl ChatRepl {
    pub fn new(session: ChatSession) -> Self {
        Self {
            session,
            show_progress: true,
            history_file: None,
        }
    }

    /// Set whether to show the in-flight spinner
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Override the input-line history file location
    pub fn with_history_file(mut self, path: Option<PathBuf>) -> Self {
        self.history_file = path;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        // Try to load input-line history
        let history_path = self
            .history_file
            .clone()
            .or_else(|| dirs::data_dir().map(|p| p.join("parley").join("history.txt")));

        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            let readline = rl.readline("> ");

            match readline {
                Ok(line) => match ReplCommand::parse(&line) {
                    ReplCommand::Ignore => continue,
                    ReplCommand::Quit => {
                        println!("Bye!");
                        break;
                    }
                    ReplCommand::Clear => {
                        self.session.reset();
                        println!("Conversation cleared.");
                    }
                    ReplCommand::Say(text) => {
                        let _ = rl.add_history_entry(&text);
                        self.process_input(&text).await;
                    }
                },
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        // Save input-line history
        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│                   Parley                    │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Chatting with {}.", self.session.name());
        println!("Commands: exit/quit/bye to leave, clear to reset the conversation.");
        println!();
    }

    async fn process_input(&mut self, text: &str) {
        println!("{}", ConsoleFormatter::user_line(text));

        let spinner = self.show_progress.then(RequestSpinner::start);
        let result = self.session.send(text).await;
        if let Some(spinner) = spinner {
            spinner.finish();
        }

        match result {
            Ok(reply) => {
                println!("{}", ConsoleFormatter::assistant_line(self.session.name(), &reply));
            }
            Err(e) => {
                eprintln!("{}", ConsoleFormatter::error_line(&e));
            }
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quit_commands_are_case_insensitive() {
        for line in ["exit", "QUIT", "Bye", "  bye  "] {
            assert_eq!(ReplCommand::parse(line), ReplCommand::Quit);
        }
    }

    #[test]
    fn test_clear_command() {
        assert_eq!(ReplCommand::parse("clear"), ReplCommand::Clear);
        assert_eq!(ReplCommand::parse("CLEAR"), ReplCommand::Clear);
    }

    #[test]
    fn test_empty_input_is_ignored() {
        assert_eq!(ReplCommand::parse(""), ReplCommand::Ignore);
        assert_eq!(ReplCommand::parse("   "), ReplCommand::Ignore);
    }

    #[test]
    fn test_other_input_is_a_message() {
        assert_eq!(
            ReplCommand::parse("  hello world  "),
            ReplCommand::Say("hello world".to_string())
        );
        // Control words embedded in a sentence are ordinary text
        assert_eq!(
            ReplCommand::parse("please clear this up"),
            ReplCommand::Say("please clear this up".to_string())
        );
    }
}
