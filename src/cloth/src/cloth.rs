use crate::config::ClothConfig;
use crate::error::ClothError;
use crate::particle::Particle;
use crate::posbox::Posbox;
use crate::spring::Spring;
use crate::V2;
use protocol::pr_model::PrModel;

/// Rectangular mesh of particles joined by horizontal and vertical springs.
///
/// Particle `(col, row)` lives at index `row * width + col`. The topology is
/// fixed at construction.
#[derive(Clone, Debug)]
pub struct Cloth {
	config: ClothConfig,
	posbox: Posbox,
	particles: Vec<Particle>,
	springs: Vec<Spring>,
}

impl Cloth {
	pub fn new(config: ClothConfig) -> Result<Self, ClothError> {
		config.validate()?;
		let w = config.grid_width;
		let h = config.grid_height;
		let mut particles = Vec::with_capacity(w * h);
		let mut springs = Vec::with_capacity((w - 1) * h + w * (h - 1));
		for y in 0..h {
			for x in 0..w {
				let id = y * w + x;
				let pinned = config.pin_rule.is_pinned(y, x);
				particles.push(Particle::new(id, config.layout_pos(x, y), pinned));
				if x > 0 {
					springs.push(Spring::new(id - 1, id, config.spacing));
				}
				if y > 0 {
					springs.push(Spring::new(id - w, id, config.spacing));
				}
			}
		}
		log::info!(
			"cloth {}x{}: {} particles ({} pinned), {} springs",
			w,
			h,
			particles.len(),
			particles.iter().filter(|p| p.is_pinned()).count(),
			springs.len(),
		);
		Ok(Self {
			posbox: config.posbox(),
			config,
			particles,
			springs,
		})
	}

	pub fn config(&self) -> &ClothConfig {
		&self.config
	}

	pub fn dims(&self) -> (usize, usize) {
		(self.config.grid_width, self.config.grid_height)
	}

	pub fn index(&self, col: usize, row: usize) -> usize {
		row * self.config.grid_width + col
	}

	pub fn particle_at(&self, col: usize, row: usize) -> &Particle {
		&self.particles[self.index(col, row)]
	}

	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	pub fn springs(&self) -> &[Spring] {
		&self.springs
	}

	pub fn apply_force(&mut self, f: V2) {
		for p in self.particles.iter_mut() {
			p.apply_force(f);
		}
	}

	/// Advances one frame: gravity, integration, one relaxation pass over
	/// every spring in construction order, then the viewport clamp.
	pub fn step(&mut self) {
		let gravity = self.config.gravity;
		let damping = self.config.damping;
		for p in self.particles.iter_mut() {
			p.apply_force(gravity);
			p.update(damping);
		}
		let pc = self.config.pinned_correction;
		for spring in self.springs.iter() {
			spring.relax(&mut self.particles, pc);
		}
		for p in self.particles.iter_mut() {
			p.constrain(&self.posbox);
		}
	}

	pub fn pr_model(&self) -> PrModel {
		PrModel {
			particles: self.particles.iter().map(|p| p.render()).collect(),
			constraints: self.springs.iter().map(|s| s.render()).collect(),
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::config::PinRule;

	fn small() -> ClothConfig {
		ClothConfig::default().with_grid(3, 2, 20.)
	}

	#[test]
	fn test_counts() {
		let cloth = Cloth::new(ClothConfig::default()).unwrap();
		assert_eq!(cloth.particles().len(), 30 * 20);
		assert_eq!(cloth.springs().len(), 29 * 20 + 30 * 19);
		let pinned: Vec<usize> = cloth
			.particles()
			.iter()
			.filter(|p| p.is_pinned())
			.map(|p| p.get_id())
			.collect();
		assert_eq!(pinned, vec![0, 5, 10, 15, 20, 25]);
	}

	#[test]
	fn test_single_particle() {
		let cloth = Cloth::new(ClothConfig::default().with_grid(1, 1, 20.)).unwrap();
		assert_eq!(cloth.particles().len(), 1);
		assert!(cloth.springs().is_empty());
	}

	#[test]
	fn test_layout_and_spring_order() {
		let cloth = Cloth::new(small()).unwrap();
		assert_eq!(cloth.particle_at(2, 1).get_pos(), V2::new(140., 120.));
		let endpoints: Vec<[usize; 2]> =
			cloth.springs().iter().map(|s| s.endpoints()).collect();
		assert_eq!(
			endpoints,
			vec![[0, 1], [1, 2], [0, 3], [3, 4], [1, 4], [4, 5], [2, 5]]
		);
		assert!(cloth.springs().iter().all(|s| s.rest_length() == 20.));
	}

	#[test]
	fn test_at_rest_without_gravity_stays_put() {
		let config = small().with_gravity(V2::zeros());
		let mut cloth = Cloth::new(config).unwrap();
		let before = cloth.particles().to_vec();
		for _ in 0..10 {
			cloth.step();
		}
		assert_eq!(cloth.particles(), &before[..]);
	}

	#[test]
	fn test_unpinned_cloth_falls_to_floor() {
		let config = small().with_pin_rule(PinRule::Nothing);
		let mut cloth = Cloth::new(config).unwrap();
		for _ in 0..2000 {
			cloth.step();
		}
		for p in cloth.particles() {
			assert!(p.get_pos()[1] <= 600.);
		}
		assert!(cloth.particles().iter().any(|p| p.get_pos()[1] == 600.));
	}

	#[test]
	fn test_pr_model() {
		let cloth = Cloth::new(small()).unwrap();
		let model = cloth.pr_model();
		assert_eq!(model.particles.len(), 6);
		assert_eq!(model.constraints.len(), 7);
		assert_eq!(model.particles[1].pos, [120., 100.]);
		assert!(model.particles[0].pinned);
		assert!(!model.particles[1].pinned);
		assert_eq!(model.constraints[2].particles, [0, 3]);
	}
}
