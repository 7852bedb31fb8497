//! Directory iteration and per-image transform-and-save.

use crate::config::Config;
use anyhow::{Context, Result};
use color_transparency::{fix_transparency, keep_black};
use image::RgbaImage;
use std::{fs, path::Path};
use walkdir::WalkDir;

const SUPPORTED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

pub fn run(config: &Config) -> Result<()> {
    match &config.source_file {
        Some(name) if !name.eq_ignore_ascii_case("all") => {
            transform_and_save(config, &config.source_dir.join(name))
        }
        _ => transform_all_in_dir(config),
    }
}

/// Walks the source directory (one level deep) and transforms every
/// supported image. A failing image is logged and skipped; it never aborts
/// the rest of the batch.
fn transform_all_in_dir(config: &Config) -> Result<()> {
    for entry in WalkDir::new(&config.source_dir)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        if !entry.file_type().is_file() || !is_supported_image(entry.path()) {
            continue;
        }

        if let Err(e) = transform_and_save(config, entry.path()) {
            log::warn!("Skipping {}: {e:#}", entry.path().display());
        }
    }

    Ok(())
}

fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}

/// Decodes one image and writes one output per configured strategy (or the
/// single keep-black output) into the output subdirectory.
fn transform_and_save(config: &Config, path: &Path) -> Result<()> {
    log::info!("Transform image {}", path.display());
    let image = image::open(path)
        .with_context(|| path.display().to_string())?
        .to_rgba8();

    let output_dir = config.source_dir.join(&config.output_dir);
    if !output_dir.exists() {
        fs::create_dir_all(&output_dir)?;
    }

    let stem = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .context("file name is not valid UTF-8")?;

    if config.keep_black {
        let fixed = keep_black(&image)?;
        return save(&fixed, &output_dir.join(format!("{stem}-trans-keep-black.png")));
    }

    for strategy in &config.strategies {
        let fixed = fix_transparency(&image, *strategy)?;
        save(
            &fixed,
            &output_dir.join(format!("{stem}-trans-strategy-{strategy}.png")),
        )?;
    }

    Ok(())
}

fn save(image: &RgbaImage, path: &Path) -> Result<()> {
    log::info!("Save image to {}", path.display());
    image
        .save(path)
        .with_context(|| path.to_string_lossy().to_string())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use color_transparency::MainColorStrategy;
    use image::Rgba;
    use tempfile::TempDir;

    fn config(dir: &Path) -> Config {
        Config {
            source_dir: dir.to_path_buf(),
            source_file: None,
            output_dir: "fixed-transparency".to_string(),
            strategies: MainColorStrategy::ALL.to_vec(),
            keep_black: false,
        }
    }

    /// 2x2 with three black pixels and one white.
    fn write_test_image(path: &Path) {
        let mut image = RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 255]));
        image.put_pixel(1, 1, Rgba([255, 255, 255, 255]));
        image.save(path).expect("save test image");
    }

    fn write_uniform_image(path: &Path) {
        RgbaImage::from_pixel(2, 2, Rgba([10, 10, 10, 255]))
            .save(path)
            .expect("save uniform image");
    }

    #[test]
    fn test_is_supported_image() {
        assert!(is_supported_image(Path::new("a.png")));
        assert!(is_supported_image(Path::new("a.jpg")));
        assert!(is_supported_image(Path::new("a.JPEG")));
        assert!(is_supported_image(Path::new("dir/b.PNG")));
        assert!(!is_supported_image(Path::new("a.gif")));
        assert!(!is_supported_image(Path::new("a.png.txt")));
        assert!(!is_supported_image(Path::new("png")));
    }

    #[test]
    fn test_batch_writes_one_output_per_strategy() -> Result<()> {
        let dir = TempDir::new()?;
        write_test_image(&dir.path().join("shape.png"));

        run(&config(dir.path()))?;

        let output_dir = dir.path().join("fixed-transparency");
        for strategy in MainColorStrategy::ALL {
            let expected = output_dir.join(format!("shape-trans-strategy-{strategy}.png"));
            assert!(expected.exists(), "missing {}", expected.display());
        }
        Ok(())
    }

    #[test]
    fn test_output_has_expected_alpha() -> Result<()> {
        let dir = TempDir::new()?;
        write_test_image(&dir.path().join("shape.png"));

        let mut cfg = config(dir.path());
        cfg.strategies = vec![MainColorStrategy::MostUsed];
        run(&cfg)?;

        let output = dir
            .path()
            .join("fixed-transparency/shape-trans-strategy-most-used.png");
        let result = image::open(output)?.to_rgba8();
        assert_eq!(result.get_pixel(0, 0), &Rgba([0, 0, 0, 255]));
        assert_eq!(result.get_pixel(1, 1), &Rgba([0, 0, 0, 0]));
        Ok(())
    }

    /// A degenerate (single-color) image fails its own transform but the
    /// batch carries on with the remaining files.
    #[test]
    fn test_failing_image_does_not_abort_batch() -> Result<()> {
        let dir = TempDir::new()?;
        write_uniform_image(&dir.path().join("flat.png"));
        write_test_image(&dir.path().join("shape.png"));

        run(&config(dir.path()))?;

        let output_dir = dir.path().join("fixed-transparency");
        assert!(
            output_dir
                .join("shape-trans-strategy-most-used.png")
                .exists()
        );
        assert!(
            !output_dir
                .join("flat-trans-strategy-most-used.png")
                .exists()
        );
        Ok(())
    }

    #[test]
    fn test_unsupported_files_are_ignored() -> Result<()> {
        let dir = TempDir::new()?;
        fs::write(dir.path().join("notes.txt"), "not an image")?;

        run(&config(dir.path()))?;

        assert!(!dir.path().join("fixed-transparency").exists());
        Ok(())
    }

    #[test]
    fn test_single_file_mode_only_touches_named_file() -> Result<()> {
        let dir = TempDir::new()?;
        write_test_image(&dir.path().join("shape.png"));
        write_test_image(&dir.path().join("other.png"));

        let mut cfg = config(dir.path());
        cfg.source_file = Some("shape.png".to_string());
        run(&cfg)?;

        let output_dir = dir.path().join("fixed-transparency");
        assert!(
            output_dir
                .join("shape-trans-strategy-most-used.png")
                .exists()
        );
        assert!(
            !output_dir
                .join("other-trans-strategy-most-used.png")
                .exists()
        );
        Ok(())
    }

    #[test]
    fn test_all_keyword_selects_every_file() -> Result<()> {
        let dir = TempDir::new()?;
        write_test_image(&dir.path().join("shape.png"));
        write_test_image(&dir.path().join("other.png"));

        let mut cfg = config(dir.path());
        cfg.source_file = Some("ALL".to_string());
        run(&cfg)?;

        let output_dir = dir.path().join("fixed-transparency");
        assert!(
            output_dir
                .join("shape-trans-strategy-most-used.png")
                .exists()
        );
        assert!(
            output_dir
                .join("other-trans-strategy-most-used.png")
                .exists()
        );
        Ok(())
    }

    #[test]
    fn test_keep_black_writes_single_output() -> Result<()> {
        let dir = TempDir::new()?;
        write_test_image(&dir.path().join("shape.png"));

        let mut cfg = config(dir.path());
        cfg.keep_black = true;
        run(&cfg)?;

        let output_dir = dir.path().join("fixed-transparency");
        assert!(output_dir.join("shape-trans-keep-black.png").exists());
        assert!(
            !output_dir
                .join("shape-trans-strategy-most-used.png")
                .exists()
        );
        Ok(())
    }
}
