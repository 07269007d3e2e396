use std::sync::atomic::{AtomicBool, Ordering};

use libc::c_int;
use nix::sys::signal::{sigaction, SaFlags, SigAction, SigHandler, SigSet, Signal};

// Written only by the SIGTSTP handler, read by the dispatch loop. No
// other state crosses the handler/main-loop boundary.
static FOREGROUND_ONLY: AtomicBool = AtomicBool::new(false);

// exact bytes, trailing re-prompt included, written raw from the handler
const ENTER_MSG: &[u8] = b"Entering foreground-only mode (& is now ignored)\n: ";
const EXIT_MSG: &[u8] = b"Exiting foreground-only mode\n: ";

// async-signal-safe: one atomic flip and one raw write, nothing else
extern "C" fn handle_sigtstp(_: c_int) {
	let was_on = FOREGROUND_ONLY.fetch_xor(true, Ordering::Relaxed);
	let msg = if was_on { EXIT_MSG } else { ENTER_MSG };
	unsafe {
		libc::write(libc::STDOUT_FILENO, msg.as_ptr() as *const libc::c_void, msg.len());
	}
}

pub fn foreground_only() -> bool {
	FOREGROUND_ONLY.load(Ordering::Relaxed)
}

/// Install the shell's own dispositions, once at startup. Interactive
/// signals must not kill the shell; SIGTSTP becomes the
/// foreground-only toggle instead of stopping it.
pub fn install_shell_policy() -> nix::Result<()> {
	let ignore = SigAction::new(SigHandler::SigIgn, SaFlags::empty(), SigSet::empty());
	// SA_RESTART so the blocking read of the next line survives the toggle
	let toggle = SigAction::new(
		SigHandler::Handler(handle_sigtstp),
		SaFlags::SA_RESTART,
		SigSet::all(),
	);
	unsafe {
		sigaction(Signal::SIGINT, &ignore)?;
		sigaction(Signal::SIGTERM, &ignore)?;
		sigaction(Signal::SIGHUP, &ignore)?;
		sigaction(Signal::SIGQUIT, &ignore)?;
		sigaction(Signal::SIGTSTP, &toggle)?;
	}
	Ok(())
}

/// Install the dispositions a child runs with, between fork and exec.
/// Ctrl-C must terminate a foreground child normally again, while
/// terminal-originated stop/quit signals never reach background
/// children. Dispositions differ from the shell's, so this is applied
/// per child rather than inherited.
pub fn install_child_policy() -> nix::Result<()> {
	let default = SigAction::new(SigHandler::SigDfl, SaFlags::empty(), SigSet::empty());
	let ignore = SigAction::new(SigHandler::SigIgn, SaFlags::empty(), SigSet::empty());
	unsafe {
		sigaction(Signal::SIGINT, &default)?;
		sigaction(Signal::SIGTERM, &ignore)?;
		sigaction(Signal::SIGHUP, &ignore)?;
		sigaction(Signal::SIGQUIT, &ignore)?;
		sigaction(Signal::SIGTSTP, &ignore)?;
	}
	Ok(())
}
