use crate::config::PinnedCorrection;
use crate::particle::Particle;
use protocol::pr_model::PrConstraint;

/// Distance constraint between two particles of the cloth.
///
/// Endpoints are indices into the particle slice the spring is relaxed
/// against, the spring never owns them.
#[derive(Clone, Debug, PartialEq)]
pub struct Spring {
	ps: [usize; 2],
	l0: f32,
}

impl Spring {
	pub fn new(p1: usize, p2: usize, l0: f32) -> Self {
		Self { ps: [p1, p2], l0 }
	}

	/// Rest length taken from the current distance of the endpoints.
	pub fn new_relaxed(particles: &[Particle], p1: usize, p2: usize) -> Self {
		let l0 = (particles[p2].get_pos() - particles[p1].get_pos()).magnitude();
		Self::new(p1, p2, l0)
	}

	pub fn endpoints(&self) -> [usize; 2] {
		self.ps
	}

	pub fn rest_length(&self) -> f32 {
		self.l0
	}

	/// Moves the endpoints toward the rest length once.
	///
	/// Each free endpoint takes half of the correction along the line
	/// joining them. Returns false when the endpoints (nearly) coincide, in
	/// which case nothing moves.
	pub fn relax(&self, particles: &mut [Particle], pc: PinnedCorrection) -> bool {
		let [i1, i2] = self.ps;
		let dp = particles[i2].get_pos() - particles[i1].get_pos();
		let l = dp.magnitude();
		if !l.is_normal() {
			log::warn!("bad distance {} in spring {:?}", l, self.ps);
			return false;
		}
		let pinned1 = particles[i1].is_pinned();
		let pinned2 = particles[i2].is_pinned();
		let mut k = 0.5;
		if pc == PinnedCorrection::Full && pinned1 != pinned2 {
			k = 1.0;
		}
		let correct = dp * (k * (l - self.l0) / l);
		if !pinned1 {
			particles[i1].add_pos(correct);
		}
		if !pinned2 {
			particles[i2].add_pos(-correct);
		}
		true
	}

	pub fn render(&self) -> PrConstraint {
		PrConstraint {
			particles: self.ps,
		}
	}
}
