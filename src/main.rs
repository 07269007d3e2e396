mod builtin;
mod eval;
mod global;
mod job;
mod parser;
mod signals;
mod types;

use std::io;
use std::io::{BufRead, Write};

use nix::unistd;

const PROMPT: &[u8] = b": ";

fn main() {
	if let Err(e) = signals::install_shell_policy() {
		eprintln!("msh: cannot install signal handlers: {}", e);
		std::process::exit(1);
	}

	let pid = unistd::getpid();
	let mut state = global::State::new();
	let mut stdout = io::stdout();
	let stdin = io::stdin();
	let mut stdin_locked = stdin.lock();

	loop {
		// reap finished background children before prompting again
		for (child, status) in state.jobs.reap() {
			println!("background pid {} is done: {}", child, status);
		}

		let _ = stdout.write(PROMPT);
		let _ = stdout.flush();

		let mut line = String::new();
		match stdin_locked.read_line(&mut line) {
			Ok(0) => break,
			Ok(_) => {},
			Err(e) => {
				eprintln!("msh: read error: {}", e);
				break;
			},
		}

		let command = match parser::parse(&line, pid.as_raw()) {
			Ok(Some(command)) => command,
			Ok(None) => continue,
			Err(e) => {
				eprintln!("msh: {}", e);
				continue;
			},
		};

		if let Some(func) = builtin::match_builtin(&command.args[0]) {
			func(&mut state, &command.args[1..]);
			continue;
		}

		// a trailing '&' is honored only while the toggle is off
		let background = command.background && !signals::foreground_only();
		eval::launch(&mut state, &command, background);
	}
}
