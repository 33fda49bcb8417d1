use std::time::SystemTime;

use cloth::config::ClothConfig;
use cloth::world::World;
use cloth::V2;

// fraction of a 60 fps frame budget spent stepping the default cloth
fn main() -> Result<(), String> {
	let start = SystemTime::now();
	let mut world = World::new(ClothConfig::default()).map_err(|e| e.to_string())?;
	let rframes = 10_000;
	for idx in 0..rframes {
		let wiggle = if idx % 120 < 60 { 1. } else { -1. };
		world.run_frame(V2::new(wiggle, 0.));
	}
	let time = rframes as f32 / 60.;
	let duration = SystemTime::now()
		.duration_since(start)
		.map_err(|e| e.to_string())?
		.as_micros();
	eprintln!("{:.3}%", duration as f32 / time / 1e4);
	Ok(())
}
