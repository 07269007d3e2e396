use std::ffi::{self, CString};
use std::io::Write;
use std::os::unix::io::IntoRawFd;
use std::{error, fmt, fs, io};

use nix::unistd::{self, ForkResult, Pid};

use crate::global;
use crate::job;
use crate::signals;
use crate::types::{Command, Status};

#[derive(Debug)]
enum ExecError {
	Nix(nix::Error),
	Open(String, io::Error),
	Nul(ffi::NulError),
	Exec(String, nix::Error),
}
impl From<nix::Error> for ExecError {
	fn from(e: nix::Error) -> ExecError {
		ExecError::Nix(e)
	}
}
impl From<ffi::NulError> for ExecError {
	fn from(e: ffi::NulError) -> ExecError {
		ExecError::Nul(e)
	}
}
impl fmt::Display for ExecError {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match *self {
			ExecError::Nix(ref e) => write!(f, "system error: {}", e),
			ExecError::Open(ref path, ref e) => write!(f, "cannot open {}: {}", path, e),
			ExecError::Nul(ref e) => write!(f, "nul char in argument: {}", e),
			ExecError::Exec(ref name, ref e) => write!(f, "{}: {}", name, e),
		}
	}
}
impl error::Error for ExecError {
	fn source(&self) -> Option<&(dyn error::Error + 'static)> {
		match *self {
			ExecError::Nix(ref e) => Some(e),
			ExecError::Open(_, ref e) => Some(e),
			ExecError::Nul(ref e) => Some(e),
			ExecError::Exec(_, ref e) => Some(e),
		}
	}
}

// open the redirection target and splice it over stdin/stdout
fn redirect_stream(path: &str, opts: &fs::OpenOptions, target_fd: i32) -> Result<(), ExecError> {
	let file = opts
		.open(path)
		.map_err(|e| ExecError::Open(path.to_owned(), e))?;
	let fd = file.into_raw_fd();
	unistd::dup2(fd, target_fd)?;
	unistd::close(fd)?;
	Ok(())
}

// child side, between fork and exec; never returns on success
fn do_exec_child(command: &Command) -> Result<(), ExecError> {
	signals::install_child_policy()?;

	if let Some(ref path) = command.input {
		redirect_stream(path, fs::OpenOptions::new().read(true), libc::STDIN_FILENO)?;
	}
	if let Some(ref path) = command.output {
		redirect_stream(
			path,
			fs::OpenOptions::new().write(true).create(true).truncate(true),
			libc::STDOUT_FILENO,
		)?;
	}

	let argv: Result<Vec<CString>, ffi::NulError> =
		command.args.iter().map(|s| CString::new(s.as_str())).collect();
	let argv = argv?;
	unistd::execvp(&argv[0], &argv).map_err(|e| ExecError::Exec(command.args[0].clone(), e))?;
	unreachable!()
}

fn exec_child(command: &Command) -> ! {
	if let Err(e) = do_exec_child(command) {
		let _ = writeln!(io::stderr(), "msh: {}", e);
	}
	// must not fall back into the shell's own control loop
	unsafe { libc::_exit(1) }
}

fn wait_and_record(state: &mut global::State, pid: Pid) {
	match job::wait_foreground(pid) {
		Ok(status) => {
			if let Status::Signaled(sig) = status {
				println!("process {} terminated by signal {}", pid, sig);
			}
			state.status = status;
		},
		Err(e) => {
			eprintln!("msh: waitpid on pid {}: {}", pid, e);
		},
	}
}

/// Fork and exec an external command. Foreground launches block until
/// the child is done and record its outcome as the new status;
/// background launches report the pid, register it, and return at
/// once, leaving the status untouched.
pub fn launch(state: &mut global::State, command: &Command, background: bool) {
	match unsafe { unistd::fork() } {
		Err(e) => {
			eprintln!("msh: fork: {}", e);
		},
		Ok(ForkResult::Child) => exec_child(command),
		Ok(ForkResult::Parent { child }) => {
			if background {
				println!("background pid is {}", child);
				state.jobs.push(child);
			} else {
				wait_and_record(state, child);
			}
		},
	}
}
