pub mod animation;
pub mod asset;
pub mod config;
pub mod errors;
pub mod handle;
pub mod prelude;
pub mod sprite_frame;
pub mod texture;
pub mod types;
