use libc::pid_t;

use crate::types::Command;

type ParseResult<T> = Result<T, String>;

// every occurrence of "$$" in a token becomes the shell's pid
fn expand_pid(token: &str, pid: pid_t) -> String {
	if token.contains("$$") {
		token.replace("$$", &pid.to_string())
	} else {
		token.to_owned()
	}
}

// scan from the second token onward; "<" and ">" consume the following
// token as a path and both disappear from argv. A later occurrence of
// the same operator overwrites an earlier capture.
fn resolve_redirects(words: Vec<String>) -> ParseResult<(Vec<String>, Option<String>, Option<String>)> {
	let mut args: Vec<String> = Vec::with_capacity(words.len());
	let mut input: Option<String> = None;
	let mut output: Option<String> = None;

	let mut it = words.into_iter();
	if let Some(name) = it.next() {
		args.push(name);
	}
	while let Some(word) = it.next() {
		match word.as_str() {
			"<" => match it.next() {
				Some(path) => input = Some(path),
				None => { return Err("missing file name after '<'".to_string()); },
			},
			">" => match it.next() {
				Some(path) => output = Some(path),
				None => { return Err("missing file name after '>'".to_string()); },
			},
			_ => args.push(word),
		}
	}
	Ok((args, input, output))
}

/// Parse one input line into a launchable command. `Ok(None)` means the
/// line asks for nothing (blank or comment) and the caller reprompts.
pub fn parse(line: &str, pid: pid_t) -> ParseResult<Option<Command>> {
	let mut words: Vec<String> = line.split_whitespace().map(|w| expand_pid(w, pid)).collect();

	match words.first() {
		None => { return Ok(None); },
		Some(w) if w.starts_with('#') => { return Ok(None); },
		Some(_) => {},
	}

	// only a trailing "&" requests background execution; anywhere else
	// it is an ordinary argument
	let background = words.last().map(|w| w.as_str()) == Some("&");
	if background {
		words.pop();
		if words.is_empty() {
			return Err("missing command before '&'".to_string());
		}
	}

	let (args, input, output) = resolve_redirects(words)?;
	Ok(Some(Command { args, input, output, background }))
}
