use crate::error::ClothError;
use crate::posbox::Posbox;
use crate::V2;

/// Which grid cells start out pinned.
#[derive(Clone, Copy, Debug)]
pub enum PinRule {
	/// Pin `row`, every `interval`-th column starting at column 0.
	EveryNth { row: usize, interval: usize },
	/// Pin the whole top row.
	TopRow,
	Nothing,
	/// Arbitrary predicate over `(row, col)`.
	Custom(fn(usize, usize) -> bool),
}

impl PinRule {
	pub fn is_pinned(&self, row: usize, col: usize) -> bool {
		match *self {
			PinRule::EveryNth { row: r, interval } => {
				row == r && interval != 0 && col % interval == 0
			}
			PinRule::TopRow => row == 0,
			PinRule::Nothing => false,
			PinRule::Custom(f) => f(row, col),
		}
	}
}

impl Default for PinRule {
	fn default() -> Self {
		PinRule::EveryNth {
			row: 0,
			interval: 5,
		}
	}
}

/// How much of a spring correction a free endpoint takes when the other
/// endpoint is pinned.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PinnedCorrection {
	/// The same half share as when both endpoints are free.
	#[default]
	Half,
	/// The whole correction.
	Full,
}

#[derive(Clone, Debug)]
pub struct ClothConfig {
	pub viewport: [f32; 2],
	pub grid_width: usize,
	pub grid_height: usize,
	pub spacing: f32,
	pub origin: V2,
	// force per step, not an acceleration
	pub gravity: V2,
	pub damping: f32,
	pub pin_rule: PinRule,
	pub force_scale: f32,
	pub pinned_correction: PinnedCorrection,
}

impl Default for ClothConfig {
	fn default() -> Self {
		Self {
			viewport: [800., 600.],
			grid_width: 30,
			grid_height: 20,
			spacing: 20.,
			origin: V2::new(100., 100.),
			gravity: V2::new(0., 0.5),
			damping: 0.99,
			pin_rule: PinRule::default(),
			force_scale: 0.1,
			pinned_correction: PinnedCorrection::Half,
		}
	}
}

impl ClothConfig {
	pub fn with_viewport(mut self, width: f32, height: f32) -> Self {
		self.viewport = [width, height];
		self
	}

	pub fn with_grid(mut self, width: usize, height: usize, spacing: f32) -> Self {
		self.grid_width = width;
		self.grid_height = height;
		self.spacing = spacing;
		self
	}

	pub fn with_origin(mut self, origin: V2) -> Self {
		self.origin = origin;
		self
	}

	pub fn with_gravity(mut self, gravity: V2) -> Self {
		self.gravity = gravity;
		self
	}

	pub fn with_damping(mut self, damping: f32) -> Self {
		self.damping = damping;
		self
	}

	pub fn with_pin_rule(mut self, pin_rule: PinRule) -> Self {
		self.pin_rule = pin_rule;
		self
	}

	pub fn with_force_scale(mut self, force_scale: f32) -> Self {
		self.force_scale = force_scale;
		self
	}

	pub fn with_pinned_correction(mut self, pc: PinnedCorrection) -> Self {
		self.pinned_correction = pc;
		self
	}

	pub fn posbox(&self) -> Posbox {
		Posbox::from_viewport(self.viewport[0], self.viewport[1])
	}

	/// Position of grid cell `(col, row)` before any simulation.
	pub fn layout_pos(&self, col: usize, row: usize) -> V2 {
		self.origin + V2::new(col as f32, row as f32) * self.spacing
	}

	pub fn validate(&self) -> Result<(), ClothError> {
		let [vw, vh] = self.viewport;
		if !(vw.is_finite() && vh.is_finite() && vw > 0. && vh > 0.) {
			return Err(ClothError::BadViewport(vw, vh));
		}
		if self.grid_width == 0 || self.grid_height == 0 {
			return Err(ClothError::EmptyGrid {
				width: self.grid_width,
				height: self.grid_height,
			});
		}
		if !(self.spacing.is_finite() && self.spacing > 0.) {
			return Err(ClothError::BadSpacing(self.spacing));
		}
		if !(0.0..=1.0).contains(&self.damping) {
			return Err(ClothError::BadDamping(self.damping));
		}
		if !self.origin.iter().all(|x| x.is_finite()) {
			return Err(ClothError::NonFinite("origin"));
		}
		if !self.gravity.iter().all(|x| x.is_finite()) {
			return Err(ClothError::NonFinite("gravity"));
		}
		if !self.force_scale.is_finite() {
			return Err(ClothError::NonFinite("force scale"));
		}
		if let PinRule::EveryNth { interval: 0, .. } = self.pin_rule {
			return Err(ClothError::ZeroPinInterval);
		}
		let lo = self.layout_pos(0, 0);
		let hi = self.layout_pos(self.grid_width - 1, self.grid_height - 1);
		let posbox = self.posbox();
		if !posbox.contains(lo) || !posbox.contains(hi) {
			return Err(ClothError::GridOutOfBounds(lo[0], lo[1], hi[0], hi[1]));
		}
		Ok(())
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_default_is_valid() {
		assert_eq!(ClothConfig::default().validate(), Ok(()));
	}

	#[test]
	fn test_default_pin_rule() {
		let rule = PinRule::default();
		assert!(rule.is_pinned(0, 0));
		assert!(rule.is_pinned(0, 5));
		assert!(rule.is_pinned(0, 25));
		assert!(!rule.is_pinned(0, 4));
		assert!(!rule.is_pinned(1, 0));
	}

	#[test]
	fn test_custom_pin_rule() {
		let rule = PinRule::Custom(|row, col| row == 1 && col == 2);
		assert!(rule.is_pinned(1, 2));
		assert!(!rule.is_pinned(0, 2));
		assert!(PinRule::TopRow.is_pinned(0, 7));
		assert!(!PinRule::Nothing.is_pinned(0, 0));
	}

	#[test]
	fn test_rejects_bad_values() {
		let base = ClothConfig::default;
		assert_eq!(
			base().with_grid(0, 3, 20.).validate(),
			Err(ClothError::EmptyGrid {
				width: 0,
				height: 3
			})
		);
		assert_eq!(
			base().with_grid(3, 3, 0.).validate(),
			Err(ClothError::BadSpacing(0.))
		);
		assert_eq!(
			base().with_damping(1.5).validate(),
			Err(ClothError::BadDamping(1.5))
		);
		assert!(matches!(
			base().with_damping(f32::NAN).validate(),
			Err(ClothError::BadDamping(_))
		));
		assert_eq!(
			base().with_viewport(-1., 600.).validate(),
			Err(ClothError::BadViewport(-1., 600.))
		);
		assert_eq!(
			base().with_gravity(V2::new(0., f32::INFINITY)).validate(),
			Err(ClothError::NonFinite("gravity"))
		);
		assert_eq!(
			base().with_force_scale(f32::NAN).validate(),
			Err(ClothError::NonFinite("force scale"))
		);
		assert_eq!(
			base()
				.with_pin_rule(PinRule::EveryNth {
					row: 0,
					interval: 0
				})
				.validate(),
			Err(ClothError::ZeroPinInterval)
		);
	}

	#[test]
	fn test_rejects_grid_outside_viewport() {
		let config = ClothConfig::default().with_viewport(400., 300.);
		assert!(matches!(
			config.validate(),
			Err(ClothError::GridOutOfBounds(..))
		));
	}
}
