//! Android launcher icon generation.
//!
//! Loads one source image, normalizes it to RGBA and writes the
//! `ic_launcher`, `ic_launcher_round` and `ic_launcher_foreground` PNGs into
//! every `mipmap-*` density bucket of an app's resource directory.

pub mod error;
pub mod icon_gen;
pub mod mipmap;
pub mod verify;

pub use error::{IconError, Result};
pub use icon_gen::{generate_icons, generate_icons_with, GeneratedIcon, RES_DIR, SOURCE_PATH};
pub use mipmap::{MipmapBucket, DENSITIES, LAUNCHER_FILENAMES};
