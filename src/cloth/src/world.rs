use crate::cloth::Cloth;
use crate::config::ClothConfig;
use crate::controller_message::ControllerMessage;
use crate::error::ClothError;
use crate::V2;
use protocol::pr_model::PrModel;

/// Per-frame driver around a [`Cloth`].
///
/// One call to [`World::run_frame`] is one rendered frame. The pointer
/// delta sampled for that frame is scaled into a force applied to every
/// free particle before the cloth steps.
pub struct World {
	cloth: Cloth,
	frame: u64,

	// -1: always play
	// 0: pause
	// n: play n frames
	forward_frames: i32,
}

impl World {
	pub fn new(config: ClothConfig) -> Result<Self, ClothError> {
		Ok(Self {
			cloth: Cloth::new(config)?,
			frame: 0,
			forward_frames: -1,
		})
	}

	pub fn with_paused(mut self) -> Self {
		self.forward_frames = 0;
		self
	}

	pub fn cloth(&self) -> &Cloth {
		&self.cloth
	}

	pub fn frame(&self) -> u64 {
		self.frame
	}

	pub fn is_paused(&self) -> bool {
		self.forward_frames == 0
	}

	pub fn external_force(&self, pointer_delta: V2) -> V2 {
		pointer_delta * self.cloth.config().force_scale
	}

	/// Runs one frame unless paused, returns whether the cloth moved on.
	pub fn run_frame(&mut self, pointer_delta: V2) -> bool {
		if self.forward_frames == 0 {
			return false;
		}
		if self.forward_frames > 0 {
			self.forward_frames -= 1;
		}
		let force = self.external_force(pointer_delta);
		self.cloth.apply_force(force);
		self.cloth.step();
		self.frame += 1;
		true
	}

	pub fn handle(&mut self, msg: ControllerMessage) {
		log::debug!("frame {}: {:?}", self.frame, msg);
		match msg {
			ControllerMessage::TogglePause => {
				if self.forward_frames == 0 {
					self.forward_frames = -1;
				} else {
					self.forward_frames = 0;
				}
			}
			ControllerMessage::FrameForward => {
				if self.forward_frames == 0 {
					self.forward_frames += 1;
				}
			}
			ControllerMessage::Reset => {
				match Cloth::new(self.cloth.config().clone()) {
					Ok(cloth) => self.cloth = cloth,
					Err(e) => log::error!("reset failed: {}", e),
				}
				self.frame = 0;
			}
		}
	}

	pub fn pr_model(&self) -> PrModel {
		self.cloth.pr_model()
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_external_force_scaled() {
		let world = World::new(ClothConfig::default()).unwrap();
		assert_eq!(world.external_force(V2::new(10., -20.)), V2::new(1., -2.));
	}

	#[test]
	fn test_pause_and_frame_forward() {
		let mut world = World::new(ClothConfig::default()).unwrap().with_paused();
		let before = world.pr_model();
		assert!(!world.run_frame(V2::zeros()));
		assert_eq!(world.frame(), 0);

		world.handle(ControllerMessage::FrameForward);
		// only one frame is granted however often it is requested
		world.handle(ControllerMessage::FrameForward);
		assert!(world.run_frame(V2::zeros()));
		assert!(!world.run_frame(V2::zeros()));
		assert_eq!(world.frame(), 1);
		assert_ne!(world.pr_model().particles, before.particles);

		world.handle(ControllerMessage::TogglePause);
		assert!(!world.is_paused());
		assert!(world.run_frame(V2::zeros()));
		assert!(world.run_frame(V2::zeros()));
		world.handle(ControllerMessage::TogglePause);
		assert!(world.is_paused());
		assert_eq!(world.frame(), 3);
	}

	#[test]
	fn test_reset() {
		let mut world = World::new(ClothConfig::default()).unwrap();
		let before = world.pr_model();
		for _ in 0..5 {
			world.run_frame(V2::new(3., 0.));
		}
		world.handle(ControllerMessage::Reset);
		assert_eq!(world.frame(), 0);
		assert_eq!(world.pr_model(), before);
	}

	#[test]
	fn test_pointer_force_pushes_cloth() {
		let config = ClothConfig::default().with_gravity(V2::zeros());
		let mut world = World::new(config).unwrap();
		let x0 = world.cloth().particle_at(2, 10).get_pos()[0];
		world.run_frame(V2::new(10., 0.));
		let x1 = world.cloth().particle_at(2, 10).get_pos()[0];
		assert!(x1 > x0);
		// pinned anchors ignore the pointer
		assert_eq!(world.cloth().particle_at(0, 0).get_pos(), V2::new(100., 100.));
	}
}
