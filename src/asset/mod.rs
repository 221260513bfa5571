use hashbrown::HashMap;
use std::{
    path::{Path, PathBuf},
    sync::mpsc::{channel, Receiver, Sender},
};

use anyhow::Result;
use glam::UVec2;

use crate::{
    config::{Config, DEFAULT_MAX_TEXTURES},
    handle::{DropEvent, Handle, HandleId, WeakHandle},
    texture::{Texture, TextureLoader},
};

pub mod io;

use io::{AssetReader, FileAssetReader};

struct TextureData {
    path: PathBuf,
    size: UVec2,
    pixels: Vec<u8>,
}

/// Texture cache
///
/// Decodes images into RGBA8 pixels and hands out shared textures. A path is
/// decoded once while any texture loaded from it is alive, the pixels are
/// purged after the last handle is dropped.
pub struct TextureCache {
    reader: Box<dyn AssetReader>,
    receiver: Receiver<DropEvent>,
    sender: Sender<DropEvent>,
    paths: HashMap<PathBuf, WeakHandle>,
    textures: HashMap<HandleId, TextureData>,
    max_textures: usize,
}

impl TextureCache {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self::with_reader(Box::new(FileAssetReader::new(path)), DEFAULT_MAX_TEXTURES)
    }

    pub fn with_config(config: &Config) -> Self {
        Self::with_reader(
            Box::new(FileAssetReader::new(&config.asset_root)),
            config.max_textures,
        )
    }

    pub fn with_reader(reader: Box<dyn AssetReader>, max_textures: usize) -> Self {
        let (sender, receiver) = channel();
        Self {
            reader,
            receiver,
            sender,
            paths: Default::default(),
            textures: Default::default(),
            max_textures,
        }
    }

    /// Return decoded RGBA8 pixels of a texture
    pub fn pixels(&self, texture: &Texture) -> Option<&[u8]> {
        self.textures
            .get(&texture.id())
            .map(|data| data.pixels.as_slice())
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }

    /// Remove textures which have no live handle
    /// return number of removed textures
    pub fn collect_dropped(&mut self) -> usize {
        let mut removed = 0;
        while let Ok(event) = self.receiver.try_recv() {
            let Some(data) = self.textures.remove(&event.0) else {
                continue;
            };
            if self
                .paths
                .get(&data.path)
                .is_some_and(|weak| weak.upgrade().is_none())
            {
                self.paths.remove(&data.path);
            }
            log::debug!("Purge texture {} {}", event.0, data.path.display());
            removed += 1;
        }
        removed
    }

    fn cached(&self, path: &Path) -> Option<Texture> {
        let handle = self.paths.get(path)?.upgrade()?;
        let data = self.textures.get(&handle.id())?;
        Some(Texture::new(handle, data.size))
    }

    fn decode(&self, path: &Path) -> Result<(UVec2, Vec<u8>)> {
        let bytes = self.reader.read(path)?;
        let im = match image::ImageFormat::from_path(path) {
            Ok(f) => image::load_from_memory_with_format(&bytes, f),
            _ => image::load_from_memory(&bytes),
        }?;
        let size = UVec2::new(im.width(), im.height());
        Ok((size, im.into_rgba8().into_raw()))
    }
}

impl TextureLoader for TextureCache {
    fn load_texture(&mut self, path: &Path) -> Result<Texture> {
        self.collect_dropped();
        if let Some(texture) = self.cached(path) {
            log::trace!("Texture cache hit {}", path.display());
            return Ok(texture);
        }

        let (size, pixels) = self.decode(path)?;
        let handle = Handle::tracked(self.sender.clone());
        log::debug!(
            "Load texture {} {} {}x{}",
            handle.id(),
            path.display(),
            size.x,
            size.y
        );
        self.paths.insert(path.to_owned(), handle.downgrade());
        self.textures.insert(
            handle.id(),
            TextureData {
                path: path.to_owned(),
                size,
                pixels,
            },
        );
        if self.textures.len() > self.max_textures {
            log::warn!("Too many textures");
        }
        Ok(Texture::new(handle, size))
    }
}
