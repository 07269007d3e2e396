use std::path::Path;
use std::{env, process};

use crate::global;

// built-ins run in the shell process itself and never touch the status
// string

fn builtin_exit(_: &mut global::State, _: &[String]) {
	process::exit(0);
}

fn builtin_cd(_: &mut global::State, args: &[String]) {
	let target = match args.first() {
		Some(dir) => dir.clone(),
		None => match env::var("HOME") {
			Ok(home) => home,
			Err(_) => {
				eprintln!("msh: cd: HOME not set");
				return;
			},
		},
	};
	if let Err(e) = env::set_current_dir(Path::new(&target)) {
		eprintln!("msh: cd: {}: {}", target, e);
	}
}

fn builtin_status(state: &mut global::State, _: &[String]) {
	println!("{}", state.status);
}

pub fn match_builtin(name: &str) -> Option<fn(&mut global::State, &[String])> {
	match name {
		"exit" => Some(builtin_exit),
		"cd" => Some(builtin_cd),
		"status" => Some(builtin_status),
		_ => None,
	}
}
