use std::path::PathBuf;

use glam::Vec2;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to load texture {}", .path.display())]
    ResourceLoad {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("animation name is empty")]
    EmptyName,
    #[error("invalid frame delay {0}")]
    InvalidDelay(f32),
    #[error("frame rect size {rect} exceeds original size {original}")]
    InvalidFrameSize { rect: Vec2, original: Vec2 },
}
