use crate::job;
use crate::types::Status;

pub struct State {
	pub status: Status,
	pub jobs: job::JobSet,
}

impl State {
	pub fn new() -> State {
		State { status: Status::Exited(0), jobs: job::JobSet::new() }
	}
}
