//! `lumen`: render one of the built-in scenes to a PPM or PNG file.

mod cli;
mod scenes;

use anyhow::{Context, Result};
use clap::Parser;
use lumen_renderer::output::{self, OutputFormat};
use lumen_renderer::ScanlineProgress;
use rand::rngs::StdRng;
use rand::SeedableRng;

use cli::Args;

/// Roughly every tenth of the image is reported at info, the rest at debug.
fn progress_level(progress: ScanlineProgress) -> log::Level {
    let step = (progress.total_rows / 10).max(1);
    if progress.rows_remaining % step == 0 {
        log::Level::Info
    } else {
        log::Level::Debug
    }
}

fn log_progress(progress: ScanlineProgress) {
    log::log!(
        progress_level(progress),
        "Scanlines remaining: {}",
        progress.rows_remaining
    );
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.into())
        .init();

    log::info!("Starting lumen {}", env!("CARGO_PKG_VERSION"));

    // Fail before rendering rather than after
    let format = OutputFormat::from_path(&args.output)
        .with_context(|| format!("Cannot write {}", args.output.display()))?;
    log::debug!("Output format: {:?}", format);

    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("Random seed: {}", seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let scenes::Scene { world, mut camera } = args.scene.build(&mut rng);
    args.apply_to(&mut camera);
    camera.validate().context("Invalid camera settings")?;
    log::info!("Scene {:?} with {} objects", args.scene, world.len());

    let image = camera.render_with_progress(&world, &mut rng, log_progress);

    output::save_image(&image, &args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn levels(total_rows: u32) -> Vec<log::Level> {
        (0..total_rows)
            .map(|row| {
                progress_level(ScanlineProgress {
                    row,
                    rows_remaining: total_rows - row - 1,
                    total_rows,
                })
            })
            .collect()
    }

    #[test]
    fn test_progress_reports_about_ten_lines_at_info() {
        let levels = levels(225);
        let info = levels.iter().filter(|&&l| l == log::Level::Info).count();

        // Every 22nd remaining count, including the final row
        assert_eq!(info, 11);
        assert_eq!(levels.last(), Some(&log::Level::Info));
    }

    #[test]
    fn test_short_images_report_every_row() {
        assert!(levels(7).iter().all(|&l| l == log::Level::Info));
    }
}
