//! Cut a horizontal strip sheet into an animation
//!
//! cargo run --example walk -- sheets/walk.png 8

use std::{env, path::PathBuf};

use anyhow::{bail, Result};
use roast2d_frames::prelude::*;

fn main() -> Result<()> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let Some(path) = args.next().map(PathBuf::from) else {
        bail!("Usage: walk <sheet.png> [frames]");
    };
    let count: u32 = args.next().as_deref().unwrap_or("1").parse()?;
    if count == 0 {
        bail!("Frame count must be positive");
    }

    let config = Config {
        asset_root: PathBuf::from("."),
        default_delay: 0.1,
        ..Default::default()
    };
    let mut cache = TextureCache::with_config(&config);
    let texture = cache.load_texture(&path)?;

    let frame_size = Vec2::new((texture.size().x / count) as f32, texture.sizef().y);
    let mut anim = config.animation("walk").build()?;
    for i in 0..count {
        let rect = Rect::new(Vec2::new(i as f32 * frame_size.x, 0.0), frame_size);
        anim.add_frame_with_texture(texture.clone(), rect);
    }

    println!(
        "{}: {} frames, {}s per frame, {}s per loop",
        anim.name(),
        anim.len(),
        anim.delay(),
        anim.duration()
    );
    for (i, frame) in anim.frames().iter().enumerate() {
        println!("  #{i} {:?}", frame.rect());
    }
    Ok(())
}
