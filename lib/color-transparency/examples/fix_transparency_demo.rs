use anyhow::{Context, Result};
use color_transparency::{KeepColorConfig, MainColorStrategy, detect_main_color};
use std::{fs, path::PathBuf};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let input_file = "./data/test.png";

    let output_dir = PathBuf::from("./tmp");
    if !output_dir.exists() {
        fs::create_dir(&output_dir)?;
    }

    let img = image::open(input_file)?.to_rgba8();
    log::info!("Image size: {}x{}", img.width(), img.height());

    for strategy in MainColorStrategy::ALL {
        let detection = detect_main_color(&img, strategy)?;
        log::info!(
            "Strategy {strategy}: main color {:?}, most different {:?}",
            detection.main_color,
            detection.most_different
        );

        let fixed = KeepColorConfig::from_detection(detection).apply(&img)?;

        let output_path = output_dir.join(format!("test-trans-strategy-{strategy}.png"));
        fixed
            .save(&output_path)
            .with_context(|| output_path.to_string_lossy().to_string())?;
        log::info!("Saving result to: {:?}", output_path);
    }

    log::info!("Transparency fix completed successfully!");

    Ok(())
}
