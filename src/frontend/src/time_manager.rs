use std::time::{Duration, Instant};

/// Fixed-rate frame pacing: one simulation step per frame.
pub struct TimeManager {
	pft: Duration,
	start_time: Instant,
	late_frames: u64,
}

impl TimeManager {
	pub fn new(fps: u32) -> Self {
		Self {
			pft: Duration::from_secs(1) / fps.max(1),
			start_time: Instant::now(),
			late_frames: 0,
		}
	}

	pub fn frame_time(&self) -> Duration {
		self.pft
	}

	pub fn late_frames(&self) -> u64 {
		self.late_frames
	}

	/// Time left in the current frame, `None` when the frame overran.
	pub fn remaining(&self, now: Instant) -> Option<Duration> {
		self.pft.checked_sub(now.duration_since(self.start_time))
	}

	/// Sleeps out the rest of the frame and starts the next one.
	pub fn tick(&mut self) {
		match self.remaining(Instant::now()) {
			Some(dt) => std::thread::sleep(dt),
			None => {
				self.late_frames += 1;
				log::trace!("frame overran {:?}", self.pft);
			}
		}
		self.start_time = Instant::now();
	}
}
