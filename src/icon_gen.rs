use crate::error::{IconError, Result};
use crate::mipmap::{total_files, MipmapBucket, DENSITIES, LAUNCHER_FILENAMES};
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    imageops::FilterType,
    ColorType, DynamicImage, ImageEncoder, RgbaImage,
};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Source logo, relative to the app project root the tool is run from.
pub const SOURCE_PATH: &str = "assets/launcher_logo.png";

/// Android resource directory holding the `mipmap-*` buckets.
pub const RES_DIR: &str = "android/app/src/main/res";

/// A file written by a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedIcon {
    pub path: PathBuf,
    pub size: u32,
}

/// Generate every launcher icon for the fixed density table.
pub fn generate_icons(source: &Path, res_dir: &Path) -> Result<Vec<GeneratedIcon>> {
    generate_icons_with(source, res_dir, &DENSITIES)
}

/// Generate the launcher icons for `buckets`, in order.
///
/// Bucket directories must already exist under `res_dir`. The first failing
/// write aborts the run; files written before it are left in place.
pub fn generate_icons_with(
    source: &Path,
    res_dir: &Path,
    buckets: &[MipmapBucket],
) -> Result<Vec<GeneratedIcon>> {
    // Load source image once; a decode failure aborts before any write
    let source = normalize_rgba(load_image(source)?);

    let mut generated = Vec::with_capacity(total_files(buckets));
    for bucket in buckets {
        generated.extend(generate_bucket(&source, res_dir, bucket)?);
    }

    println!("\nAll icons generated successfully!");
    Ok(generated)
}

fn generate_bucket(
    source: &DynamicImage,
    res_dir: &Path,
    bucket: &MipmapBucket,
) -> Result<Vec<GeneratedIcon>> {
    let resized = resize_square(source, bucket.size);

    // Encode once so every launcher file in the bucket gets the same bytes
    let png = encode_png(&resized).map_err(|source| IconError::Encode {
        directory: bucket.directory.to_string(),
        source,
    })?;

    let mut generated = Vec::with_capacity(LAUNCHER_FILENAMES.len());
    for filename in LAUNCHER_FILENAMES {
        let path = bucket.file_path(res_dir, filename);
        // Overwrites existing icons; the bucket directory itself must exist
        fs::write(&path, &png).map_err(|source| IconError::Write {
            path: path.clone(),
            source,
        })?;
        println!(
            "  ✓ Generated {}/{filename} ({}x{})",
            bucket.directory, bucket.size, bucket.size
        );
        generated.push(GeneratedIcon {
            path,
            size: bucket.size,
        });
    }
    Ok(generated)
}

pub fn load_image(path: &Path) -> Result<DynamicImage> {
    image::open(path).map_err(|source| IconError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Convert to 8-bit RGBA; formats without alpha become fully opaque.
pub fn normalize_rgba(image: DynamicImage) -> DynamicImage {
    match image {
        DynamicImage::ImageRgba8(_) => image,
        other => DynamicImage::ImageRgba8(other.into_rgba8()),
    }
}

/// Stretch `image` to `size`×`size`. Aspect ratio is not preserved.
pub fn resize_square(image: &DynamicImage, size: u32) -> RgbaImage {
    image
        .resize_exact(size, size, FilterType::Lanczos3)
        .into_rgba8()
}

// Encode image data as PNG with compression
pub fn encode_png(image: &RgbaImage) -> image::ImageResult<Vec<u8>> {
    let mut buf = Vec::new();
    let encoder =
        PngEncoder::new_with_quality(&mut buf, CompressionType::Best, PngFilterType::Adaptive);
    encoder.write_image(image.as_raw(), image.width(), image.height(), ColorType::Rgba8)?;
    Ok(buf)
}
