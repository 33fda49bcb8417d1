use sdl2::gfx::primitives::DrawRenderer;
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

use protocol::pr_model::PrModel;

const BACKGROUND: Color = Color::RGB(0, 0, 0);
const SPRING: Color = Color::RGB(255, 255, 255);
const PARTICLE: Color = Color::RGB(255, 0, 0);
const ANCHOR: Color = Color::RGB(255, 255, 0);
const RADIUS: i16 = 3;

// the cloth lives in pixel coordinates, no view transform
pub struct Renderer {
	canvas: Canvas<Window>,
}

impl Renderer {
	pub fn new(mut canvas: Canvas<Window>) -> Self {
		canvas.set_draw_color(BACKGROUND);
		canvas.clear();
		canvas.present();
		Self { canvas }
	}

	fn map_pos(pos: [f32; 2]) -> (i16, i16) {
		// overflow is okay, the cloth is clamped to the window
		(pos[0] as i16, pos[1] as i16)
	}

	pub fn draw(&mut self, pr_model: &PrModel) -> Result<(), String> {
		self.canvas.set_draw_color(BACKGROUND);
		self.canvas.clear();
		for (pos1, pos2) in pr_model.segments() {
			let (x1, y1) = Self::map_pos(pos1);
			let (x2, y2) = Self::map_pos(pos2);
			self.canvas.aa_line(x1, y1, x2, y2, SPRING)?;
		}
		for pr_particle in pr_model.particles.iter() {
			let (x, y) = Self::map_pos(pr_particle.pos);
			let color = if pr_particle.pinned { ANCHOR } else { PARTICLE };
			self.canvas.filled_circle(x, y, RADIUS, color)?;
		}
		self.canvas.present();
		Ok(())
	}
}
