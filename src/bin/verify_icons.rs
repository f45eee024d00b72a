use anyhow::{bail, Result};
use launcher_icons::{verify::verify_icons, DENSITIES, RES_DIR};
use std::path::Path;

fn main() -> Result<()> {
    let res_dir = Path::new(RES_DIR);
    println!("Checking launcher icons in: {}", res_dir.display());

    let report = verify_icons(res_dir, &DENSITIES)?;
    for bucket in &report.buckets {
        let mark = if bucket.is_valid() { "✓" } else { "⚠" };
        println!(
            "  {mark} {} expected {}x{}, got {:?} (rgba: {}, identical: {})",
            bucket.bucket.directory,
            bucket.bucket.size,
            bucket.bucket.size,
            bucket.dimensions,
            bucket.all_rgba,
            bucket.identical
        );
    }

    if !report.is_valid() {
        bail!("Launcher icons do not match the density table");
    }
    println!("\n✓ All launcher icons verified!");
    Ok(())
}
