//! CSS, script and static asset output

use anyhow::{Context, Result};
use std::{fs, path::Path};

const BASE: &str = include_str!("../assets/base.css");
const LAYOUT: &str = include_str!("../assets/components/layout.css");
const HERO: &str = include_str!("../assets/components/hero.css");
const CARDS: &str = include_str!("../assets/components/cards.css");
const CAROUSEL: &str = include_str!("../assets/components/carousel.css");
const SECTIONS_PAGE: &str = include_str!("../assets/page-sections.css");

const CAROUSEL_SCRIPT: &str = include_str!("../assets/carousel.js");

/// Writes bundled stylesheet and carousel script to the assets directory
pub fn write_assets(assets_dir: &Path) -> Result<()> {
    fs::create_dir_all(assets_dir).with_context(|| {
        format!(
            "Failed to create assets directory: {}",
            assets_dir.display()
        )
    })?;

    write_bundled(
        assets_dir,
        "portfolio.css",
        &[BASE, LAYOUT, HERO, CARDS, CAROUSEL, SECTIONS_PAGE],
    )?;
    fs::write(assets_dir.join("carousel.js"), CAROUSEL_SCRIPT)
        .context("Failed to write carousel script")?;
    Ok(())
}

fn write_bundled(dir: &Path, name: &str, parts: &[&str]) -> Result<()> {
    let css = parts.join("\n");
    fs::write(dir.join(name), css)
        .with_context(|| format!("Failed to write CSS asset: {}", name))?;
    Ok(())
}

/// Copies a static directory (photo, PDFs, certificate images) into the
/// output root, recursing into subdirectories.
///
/// # Returns
///
/// Number of files copied
///
/// # Errors
///
/// Returns error if any directory cannot be read or any file cannot be
/// copied.
pub fn copy_static_dir(source: &Path, dest: &Path) -> Result<usize> {
    fs::create_dir_all(dest)
        .with_context(|| format!("Failed to create directory: {}", dest.display()))?;

    let entries = fs::read_dir(source)
        .with_context(|| format!("Failed to read static directory: {}", source.display()))?;

    let mut copied = 0;
    for entry in entries {
        let entry = entry.context("Failed to read static directory entry")?;
        let path = entry.path();
        let target = dest.join(entry.file_name());

        let file_type = entry
            .file_type()
            .with_context(|| format!("Failed to stat: {}", path.display()))?;

        if file_type.is_dir() {
            copied += copy_static_dir(&path, &target)?;
        } else if file_type.is_file() {
            fs::copy(&path, &target).with_context(|| {
                format!("Failed to copy {} to {}", path.display(), target.display())
            })?;
            copied += 1;
        }
    }

    Ok(copied)
}
