use core::fmt;
use std::{fmt::Debug, path::Path};

use anyhow::Result;
use glam::{UVec2, Vec2};

use crate::handle::{Handle, HandleId};

/// Shared texture resource
///
/// Cloning acquires a reference and dropping releases it, the pixel data
/// stays with the loader that created the handle.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Texture {
    handle: Handle,
    size: UVec2,
}

impl Texture {
    pub fn new(handle: Handle, size: UVec2) -> Self {
        Self { handle, size }
    }

    pub fn handle(&self) -> &Handle {
        &self.handle
    }

    pub fn id(&self) -> HandleId {
        self.handle.id()
    }

    /// Return texture size in pixels
    pub fn size(&self) -> UVec2 {
        self.size
    }

    /// Return texture size in Vec2
    pub fn sizef(&self) -> Vec2 {
        self.size.as_vec2()
    }

    /// Number of live references to this texture
    pub fn ref_count(&self) -> usize {
        self.handle.ref_count()
    }
}

impl Debug for Texture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Texture")
            .field("id", &self.id())
            .field("size", &self.size)
            .finish()
    }
}

/// Resolve a file name to a texture
pub trait TextureLoader {
    fn load_texture(&mut self, path: &Path) -> Result<Texture>;
}
