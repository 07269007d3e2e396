use std::fmt;

/// Outcome of the most recent foreground command. Kept across prompts
/// until the next foreground command finishes; background completions
/// never replace it.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Status {
	Exited(i32),
	Signaled(i32),
}

impl fmt::Display for Status {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match *self {
			Status::Exited(code) => write!(f, "exit value {}", code),
			Status::Signaled(sig) => write!(f, "terminated by signal {}", sig),
		}
	}
}

/// A fully resolved command line: argv with redirection tokens already
/// stripped out, plus the captured redirection targets.
#[derive(Debug, PartialEq, Eq)]
pub struct Command {
	pub args: Vec<String>,
	pub input: Option<String>,
	pub output: Option<String>,
	pub background: bool,
}
