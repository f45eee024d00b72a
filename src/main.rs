use anyhow::{Context, Result};
use launcher_icons::{generate_icons, RES_DIR, SOURCE_PATH};
use std::path::Path;

fn main() -> Result<()> {
    generate_icons(Path::new(SOURCE_PATH), Path::new(RES_DIR))
        .context("Failed to generate launcher icons")?;
    Ok(())
}
