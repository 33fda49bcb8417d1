// pr_model: Physical model for rendering

#[derive(Clone, Debug, PartialEq)]
pub struct PrParticle {
	pub pos: [f32; 2],
	pub pinned: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PrConstraint {
	pub particles: [usize; 2],
}

/// Snapshot of one frame handed to a renderer.
///
/// `particles` is in storage order, constraint endpoints index into it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PrModel {
	pub particles: Vec<PrParticle>,
	pub constraints: Vec<PrConstraint>,
}

impl PrModel {
	pub fn segments(&self) -> impl Iterator<Item = ([f32; 2], [f32; 2])> + '_ {
		self.constraints.iter().filter_map(move |c| {
			let [p1, p2] = c.particles;
			let prp1 = self.particles.get(p1)?;
			let prp2 = self.particles.get(p2)?;
			Some((prp1.pos, prp2.pos))
		})
	}
}
