//! Android mipmap density buckets and the launcher filenames written into each.

use std::path::{Path, PathBuf};

/// One density bucket: a `mipmap-*` resource directory and its icon edge length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MipmapBucket {
    pub directory: &'static str,
    pub size: u32,
}

impl MipmapBucket {
    pub const fn new(directory: &'static str, size: u32) -> Self {
        Self { directory, size }
    }

    /// `<res_dir>/<directory>/<filename>`
    pub fn file_path(&self, res_dir: &Path, filename: &str) -> PathBuf {
        res_dir.join(self.directory).join(filename)
    }
}

/// Buckets in processing order.
pub const DENSITIES: [MipmapBucket; 5] = [
    MipmapBucket::new("mipmap-mdpi", 48),
    MipmapBucket::new("mipmap-hdpi", 72),
    MipmapBucket::new("mipmap-xhdpi", 96),
    MipmapBucket::new("mipmap-xxhdpi", 144),
    MipmapBucket::new("mipmap-xxxhdpi", 192),
];

/// Every bucket gets the same raster under each of these names, in this order.
/// The foreground layer has no art of its own.
pub const LAUNCHER_FILENAMES: [&str; 3] = [
    "ic_launcher.png",
    "ic_launcher_round.png",
    "ic_launcher_foreground.png",
];

/// Number of files a run over `buckets` writes.
pub fn total_files(buckets: &[MipmapBucket]) -> usize {
    buckets.len() * LAUNCHER_FILENAMES.len()
}
