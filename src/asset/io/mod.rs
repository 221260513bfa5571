use std::path::{Path, PathBuf};

use anyhow::Result;

mod file;

pub use file::{get_base_path, FileAssetReader};

pub trait AssetReader: Send + Sync + 'static {
    fn new<P: AsRef<Path>>(path: P) -> Self
    where
        Self: Sized;
    fn get_full_path(&self, path: &Path) -> PathBuf;
    fn read(&self, path: &Path) -> Result<Vec<u8>>;
}
