use super::AssetReader;
use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

/// Resolve the asset base path, borrowed from bevy's file asset reader
pub fn get_base_path() -> PathBuf {
    if let Ok(manifest_dir) = env::var("ROAST2D_ASSET_ROOT") {
        PathBuf::from(manifest_dir)
    } else if let Ok(manifest_dir) = env::var("CARGO_MANIFEST_DIR") {
        PathBuf::from(manifest_dir)
    } else {
        env::current_exe()
            .ok()
            .and_then(|path| path.parent().map(ToOwned::to_owned))
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

pub struct FileAssetReader {
    root_path: PathBuf,
}

impl FileAssetReader {
    pub fn root_path(&self) -> &Path {
        &self.root_path
    }
}

impl AssetReader for FileAssetReader {
    fn new<P: AsRef<Path>>(path: P) -> Self {
        let root_path = get_base_path().join(path);
        Self { root_path }
    }

    fn get_full_path(&self, path: &Path) -> PathBuf {
        self.root_path.join(path)
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        let full_path = self.get_full_path(path);
        fs::read(&full_path).with_context(|| format!("Failed to read {}", full_path.display()))
    }
}
