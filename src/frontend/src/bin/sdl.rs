use clap::Parser;
use ftlog::LevelFilter;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

use cloth::config::{ClothConfig, PinRule, PinnedCorrection};
use cloth::world::World;
use cloth::V2;
use frontend::input::{key2message, PointerTracker};
use frontend::renderer::Renderer;
use frontend::time_manager::TimeManager;

#[derive(Parser, Debug)]
#[command(version, about = "Verlet cloth hanging in an SDL window")]
struct Args {
	/// Window width, also the right wall of the cloth.
	#[arg(long, default_value_t = 800)]
	viewport_width: u32,

	/// Window height, also the floor of the cloth.
	#[arg(long, default_value_t = 600)]
	viewport_height: u32,

	/// Particles per row.
	#[arg(long, default_value_t = 30)]
	grid_width: usize,

	/// Particles per column.
	#[arg(long, default_value_t = 20)]
	grid_height: usize,

	/// Distance between neighbours, also the spring rest length.
	#[arg(long, default_value_t = 20.)]
	spacing: f32,

	#[arg(long, default_value_t = 100.)]
	origin_x: f32,

	#[arg(long, default_value_t = 100.)]
	origin_y: f32,

	/// Downward force added to every free particle each frame.
	#[arg(long, default_value_t = 0.5)]
	gravity: f32,

	/// Fraction of the implicit velocity kept each frame.
	#[arg(long, default_value_t = 0.99)]
	damping: f32,

	/// Pin every n-th particle of the top row.
	#[arg(long, default_value_t = 5)]
	pin_every: usize,

	/// Force per pixel of pointer movement.
	#[arg(long, default_value_t = 0.1)]
	force_scale: f32,

	/// Let a particle next to an anchor take the whole spring correction.
	#[arg(long)]
	full_correction: bool,

	#[arg(long, default_value_t = 60)]
	fps: u32,

	/// Start paused (space toggles, s steps one frame).
	#[arg(long)]
	paused: bool,

	#[arg(long, default_value = "info")]
	log_level: LevelFilter,
}

impl Args {
	fn cloth_config(&self) -> ClothConfig {
		let pc = if self.full_correction {
			PinnedCorrection::Full
		} else {
			PinnedCorrection::Half
		};
		ClothConfig::default()
			.with_viewport(self.viewport_width as f32, self.viewport_height as f32)
			.with_grid(self.grid_width, self.grid_height, self.spacing)
			.with_origin(V2::new(self.origin_x, self.origin_y))
			.with_gravity(V2::new(0., self.gravity))
			.with_damping(self.damping)
			.with_pin_rule(PinRule::EveryNth {
				row: 0,
				interval: self.pin_every,
			})
			.with_force_scale(self.force_scale)
			.with_pinned_correction(pc)
	}
}

pub fn main() -> Result<(), String> {
	let args = Args::parse();
	let _guard = ftlog::Builder::new()
		.max_log_level(args.log_level)
		.try_init()
		.map_err(|e| e.to_string())?;

	let mut world = World::new(args.cloth_config()).map_err(|e| e.to_string())?;
	if args.paused {
		world = world.with_paused();
	}

	let sdl_context = sdl2::init()?;
	let video_subsystem = sdl_context.video()?;
	let window = video_subsystem
		.window("cloth", args.viewport_width, args.viewport_height)
		.position_centered()
		.build()
		.map_err(|e| e.to_string())?;
	let canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
	let mut renderer = Renderer::new(canvas);
	let mut event_pump = sdl_context.event_pump()?;
	let mut pointer = PointerTracker::default();
	let mut tm = TimeManager::new(args.fps);
	ftlog::info!("running at {} fps", args.fps);
	'running: loop {
		for event in event_pump.poll_iter() {
			match event {
				Event::Quit { .. }
				| Event::KeyDown {
					keycode: Some(Keycode::Q),
					..
				}
				| Event::KeyDown {
					keycode: Some(Keycode::Escape),
					..
				} => break 'running,
				Event::KeyDown {
					keycode: Some(key),
					repeat: false,
					..
				} => {
					if let Some(msg) = key2message(key) {
						world.handle(msg);
					}
				}
				_ => {}
			}
		}
		let mouse = event_pump.mouse_state();
		let delta = pointer.sample(V2::new(mouse.x() as f32, mouse.y() as f32));
		world.run_frame(delta);
		renderer.draw(&world.pr_model())?;
		tm.tick();
	}
	ftlog::info!(
		"exit after {} frames, {} late",
		world.frame(),
		tm.late_frames()
	);
	Ok(())
}
