use crate::posbox::Posbox;
use crate::V2;
use protocol::pr_model::PrParticle;

// velocity is implicit: pos - ppos
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub id: usize,
	pub pos: V2,
	pub ppos: V2,
	pub force: V2,
	pub pinned: bool,
}

impl Particle {
	pub fn new(id: usize, pos: V2, pinned: bool) -> Self {
		Self {
			id,
			pos,
			ppos: pos,
			force: V2::zeros(),
			pinned,
		}
	}

	pub fn get_id(&self) -> usize {
		self.id
	}

	pub fn get_pos(&self) -> V2 {
		self.pos
	}

	pub fn is_pinned(&self) -> bool {
		self.pinned
	}

	pub fn add_pos(&mut self, dp: V2) {
		self.pos += dp
	}

	pub fn velocity(&self) -> V2 {
		self.pos - self.ppos
	}

	pub fn apply_force(&mut self, f: V2) {
		if !self.pinned {
			self.force += f;
		}
	}

	pub fn update(&mut self, damping: f32) {
		if self.pinned {
			return;
		}
		// derive velocity before either position is overwritten
		let v = (self.pos - self.ppos) * damping;
		self.ppos = self.pos;
		self.pos += v + self.force;
		self.force = V2::zeros();
	}

	/// Clamps the particle into `posbox`, returns true if it was outside.
	pub fn constrain(&mut self, posbox: &Posbox) -> bool {
		let hit = posbox.apply(&mut self.pos);
		if hit && self.pinned {
			self.ppos = self.pos;
		}
		hit
	}

	pub fn render(&self) -> PrParticle {
		PrParticle {
			pos: [self.pos[0], self.pos[1]],
			pinned: self.pinned,
		}
	}
}
