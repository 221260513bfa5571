pub use crate::animation::{Animation, AnimationBuilder, FrameList, SharedFrame};
pub use crate::asset::TextureCache;
pub use crate::config::Config;
pub use crate::errors::{Error, Result};
pub use crate::handle::Handle;
pub use crate::sprite_frame::SpriteFrame;
pub use crate::texture::{Texture, TextureLoader};
pub use crate::types::Rect;
pub use glam::{self, UVec2, Vec2};
