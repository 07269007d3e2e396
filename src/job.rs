use nix::sys::wait::{waitpid, WaitPidFlag, WaitStatus};
use nix::unistd::Pid;

use crate::types::Status;

// None for the in-between states (stopped, continued) that are not a
// termination; callers keep waiting or keep polling.
fn classify(status: WaitStatus) -> Option<Status> {
	match status {
		WaitStatus::Exited(_, code) => Some(Status::Exited(code)),
		WaitStatus::Signaled(_, sig, _) => Some(Status::Signaled(sig as i32)),
		_ => None,
	}
}

/// Block until the given child terminates and classify how it went.
/// The one blocking call in the shell; nothing else may wait.
pub fn wait_foreground(pid: Pid) -> nix::Result<Status> {
	loop {
		if let Some(status) = classify(waitpid(pid, None)?) {
			return Ok(status);
		}
	}
}

/// Live background children. Grows as needed; entries leave in the
/// same pass their termination is first observed.
pub struct JobSet {
	pids: Vec<Pid>,
}

impl JobSet {
	pub fn new() -> JobSet {
		JobSet { pids: Vec::new() }
	}

	pub fn push(&mut self, pid: Pid) {
		self.pids.push(pid);
	}

	pub fn is_empty(&self) -> bool {
		self.pids.is_empty()
	}

	/// Poll every entry once, without blocking. Terminated children are
	/// removed and returned for reporting; a failing poll is reported
	/// and its entry dropped so it cannot fail on every pass.
	pub fn reap(&mut self) -> Vec<(Pid, Status)> {
		let mut done: Vec<(Pid, Status)> = Vec::new();
		self.pids.retain(|&pid| {
			match waitpid(pid, Some(WaitPidFlag::WNOHANG)) {
				Ok(WaitStatus::StillAlive) => true,
				Ok(status) => match classify(status) {
					Some(status) => {
						done.push((pid, status));
						false
					},
					None => true,
				},
				Err(e) => {
					eprintln!("msh: waitpid on background pid {}: {}", pid, e);
					false
				},
			}
		});
		done
	}
}
