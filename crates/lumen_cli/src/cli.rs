use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use lumen_renderer::Camera;

use crate::scenes::SceneKind;

/// Log levels selectable on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments.
#[derive(Debug, Parser)]
#[command(name = "lumen")]
#[command(about = "Render a built-in sphere scene with a CPU ray tracer")]
pub struct Args {
    /// Scene to render
    #[arg(long, value_enum, default_value = "spheres")]
    pub scene: SceneKind,

    /// Image width in pixels (scene default if omitted)
    #[arg(long)]
    pub width: Option<u32>,

    /// Image aspect ratio, width / height (scene default if omitted)
    #[arg(long)]
    pub aspect_ratio: Option<f64>,

    /// Number of samples per pixel (scene default if omitted)
    #[arg(long, short = 's')]
    pub samples: Option<u32>,

    /// Maximum number of ray bounces (scene default if omitted)
    #[arg(long)]
    pub max_depth: Option<u32>,

    /// Seed for the random generator; drawn from entropy and logged if omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output file path (.ppm or .png)
    #[arg(short, long, default_value = "output.ppm")]
    pub output: PathBuf,

    /// Set the logging level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

impl Args {
    /// Override the scene's camera with any settings given on the command line.
    pub fn apply_to(&self, camera: &mut Camera) {
        if let Some(width) = self.width {
            camera.image_width = width;
        }
        if let Some(aspect_ratio) = self.aspect_ratio {
            camera.aspect_ratio = aspect_ratio;
        }
        if let Some(samples) = self.samples {
            camera.samples_per_pixel = samples;
        }
        if let Some(max_depth) = self.max_depth {
            camera.max_depth = max_depth;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["lumen"]);
        assert_eq!(args.scene, SceneKind::Spheres);
        assert_eq!(args.output, PathBuf::from("output.ppm"));
        assert!(args.seed.is_none());
        assert!(args.width.is_none());
    }

    #[test]
    fn test_overrides_apply_to_camera() {
        let args = Args::parse_from([
            "lumen",
            "--scene",
            "cover",
            "--width",
            "320",
            "--aspect-ratio",
            "1.5",
            "-s",
            "4",
            "--max-depth",
            "7",
            "--seed",
            "99",
            "-o",
            "cover.png",
        ]);
        assert_eq!(args.scene, SceneKind::Cover);
        assert_eq!(args.seed, Some(99));

        let mut camera = Camera::new();
        args.apply_to(&mut camera);
        assert_eq!(camera.image_width, 320);
        assert_eq!(camera.aspect_ratio, 1.5);
        assert_eq!(camera.samples_per_pixel, 4);
        assert_eq!(camera.max_depth, 7);
    }

    #[test]
    fn test_unset_options_keep_scene_camera() {
        let args = Args::parse_from(["lumen", "--samples", "3"]);
        let mut camera = Camera::new().with_image(2.0, 123).with_quality(8, 9);
        args.apply_to(&mut camera);

        assert_eq!(camera.image_width, 123);
        assert_eq!(camera.aspect_ratio, 2.0);
        assert_eq!(camera.samples_per_pixel, 3);
        assert_eq!(camera.max_depth, 9);
    }
}
