use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ClothError {
	#[error("grid must have at least one particle, got {width}x{height}")]
	EmptyGrid { width: usize, height: usize },

	#[error("spacing must be positive and finite, got {0}")]
	BadSpacing(f32),

	#[error("damping must be in [0, 1], got {0}")]
	BadDamping(f32),

	#[error("viewport must be positive and finite, got {0}x{1}")]
	BadViewport(f32, f32),

	#[error("{0} must be finite")]
	NonFinite(&'static str),

	#[error("pin interval must be at least 1")]
	ZeroPinInterval,

	#[error("grid spans ({0}, {1})..({2}, {3}), outside the viewport")]
	GridOutOfBounds(f32, f32, f32, f32),
}
