use sdl2::keyboard::Keycode;

use cloth::controller_message::ControllerMessage;
use cloth::V2;

/// Turns absolute pointer positions into per-frame movement.
#[derive(Default)]
pub struct PointerTracker {
	last: Option<V2>,
}

impl PointerTracker {
	/// Movement since the previous sample, zero on the first one.
	pub fn sample(&mut self, pos: V2) -> V2 {
		let delta = match self.last {
			Some(last) => pos - last,
			None => V2::zeros(),
		};
		self.last = Some(pos);
		delta
	}
}

pub fn key2message(key: Keycode) -> Option<ControllerMessage> {
	let msg = match key {
		Keycode::Space => ControllerMessage::TogglePause,
		Keycode::S => ControllerMessage::FrameForward,
		Keycode::R => ControllerMessage::Reset,
		_ => return None,
	};
	Some(msg)
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_pointer_delta() {
		let mut pt = PointerTracker::default();
		assert_eq!(pt.sample(V2::new(10., 10.)), V2::zeros());
		assert_eq!(pt.sample(V2::new(15., 8.)), V2::new(5., -2.));
		assert_eq!(pt.sample(V2::new(15., 8.)), V2::zeros());
	}

	#[test]
	fn test_key2message() {
		assert_eq!(key2message(Keycode::Space), Some(ControllerMessage::TogglePause));
		assert_eq!(key2message(Keycode::R), Some(ControllerMessage::Reset));
		assert_eq!(key2message(Keycode::X), None);
	}
}
