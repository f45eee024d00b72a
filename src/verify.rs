//! Checks a generated resource directory: every bucket holds its three
//! launcher files at the bucket size, in RGBA, with identical pixels.

use crate::error::Result;
use crate::icon_gen::load_image;
use crate::mipmap::{MipmapBucket, LAUNCHER_FILENAMES};
use image::{ColorType, RgbaImage};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketReport {
    pub bucket: MipmapBucket,
    /// Decoded `(width, height)` of each launcher file, in filename order.
    pub dimensions: Vec<(u32, u32)>,
    pub all_rgba: bool,
    pub identical: bool,
}

impl BucketReport {
    pub fn is_valid(&self) -> bool {
        let expected = (self.bucket.size, self.bucket.size);
        self.all_rgba && self.identical && self.dimensions.iter().all(|&d| d == expected)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerifyReport {
    pub buckets: Vec<BucketReport>,
}

impl VerifyReport {
    pub fn is_valid(&self) -> bool {
        self.buckets.iter().all(BucketReport::is_valid)
    }
}

pub fn verify_icons(res_dir: &Path, buckets: &[MipmapBucket]) -> Result<VerifyReport> {
    let mut report = VerifyReport::default();
    for bucket in buckets {
        report.buckets.push(verify_bucket(res_dir, bucket)?);
    }
    Ok(report)
}

fn verify_bucket(res_dir: &Path, bucket: &MipmapBucket) -> Result<BucketReport> {
    let mut dimensions = Vec::with_capacity(LAUNCHER_FILENAMES.len());
    let mut all_rgba = true;
    let mut first: Option<RgbaImage> = None;
    let mut identical = true;

    for filename in LAUNCHER_FILENAMES {
        let path = bucket.file_path(res_dir, filename);
        let icon = load_image(&path)?;

        dimensions.push((icon.width(), icon.height()));
        all_rgba &= icon.color() == ColorType::Rgba8;

        let pixels = icon.into_rgba8();
        match &first {
            Some(reference) => identical &= *reference == pixels,
            None => first = Some(pixels),
        }
    }

    Ok(BucketReport {
        bucket: *bucket,
        dimensions,
        all_rgba,
        identical,
    })
}
