mod config;

use anyhow::{Context, Result};
use clap::Parser;
use config::{Grayscale, Settings};
use std::path::{Path, PathBuf};
use stripe_disc::{Effect, io};

#[derive(Parser, Debug)]
#[command(name = "stripe-disc", version, about = "Keep horizontal bands of an image inside a centered disc")]
struct Cli {
    /// PNG or JPEG image to transform
    input: PathBuf,

    /// Output PNG [default: <input>_stripe_disc.png]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Binarization cutoff, samples above it become white
    #[arg(short, long, value_parser = clap::value_parser!(i32).range(50..=200))]
    threshold: Option<i32>,

    /// Height in rows of each band and of each gap
    #[arg(short, long, value_parser = clap::value_parser!(i32).range(1..=20))]
    stripe_thickness: Option<i32>,

    #[arg(long, value_enum)]
    grayscale: Option<Grayscale>,

    /// Pick the cutoff from the image histogram
    #[arg(long, conflicts_with = "threshold")]
    otsu: bool,

    /// TOML file with default settings; flags override it
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl Cli {
    fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };

        if let Some(threshold) = self.threshold {
            settings.threshold = threshold;
            settings.otsu = false;
        }
        if let Some(stripe_thickness) = self.stripe_thickness {
            settings.stripe_thickness = stripe_thickness;
        }
        if let Some(grayscale) = self.grayscale {
            settings.grayscale = grayscale;
        }
        settings.otsu |= self.otsu;

        Ok(settings)
    }

    fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| default_output_path(&self.input))
    }
}

fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());

    input.with_file_name(format!("{stem}_stripe_disc.png"))
}

fn init_logger() {
    use std::io::Write;

    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .format(|buf, record| {
            let style = buf.default_level_style(record.level());
            let ts = chrono::Local::now().format("%H:%M:%S");

            writeln!(
                buf,
                "[{} {style}{}{style:#} {} {}] {}",
                ts,
                record.level(),
                record
                    .file()
                    .unwrap_or("None")
                    .split('/')
                    .next_back()
                    .unwrap_or("None"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}

fn run(cli: &Cli) -> Result<PathBuf> {
    let settings = cli.settings()?;
    log::debug!("{settings:?}");

    let input = io::load_image(&cli.input)
        .with_context(|| format!("load {} failed", cli.input.display()))?;
    let output = settings
        .effect()
        .apply(&input.to_rgb8())
        .context("apply stripe disc effect failed")?;

    let output_path = cli.output_path();
    io::save_png(&output, &output_path)
        .with_context(|| format!("save {} failed", output_path.display()))?;

    Ok(output_path)
}

fn main() -> Result<()> {
    init_logger();

    let cli = Cli::parse();
    let output_path = run(&cli)?;
    log::info!("{} -> {}", cli.input.display(), output_path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::ffi::OsStr;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() -> Result<()> {
        let cli = Cli::try_parse_from(["stripe-disc", "photos/cat.jpg"])?;
        assert_eq!(cli.settings()?, Settings::default());
        assert_eq!(cli.output_path(), PathBuf::from("photos/cat_stripe_disc.png"));
        Ok(())
    }

    #[test]
    fn test_flags() -> Result<()> {
        let cli = Cli::try_parse_from([
            "stripe-disc",
            "in.png",
            "-o",
            "out.png",
            "-t",
            "100",
            "-s",
            "7",
            "--grayscale",
            "average",
        ])?;
        let settings = cli.settings()?;

        assert_eq!(settings.threshold, 100);
        assert_eq!(settings.stripe_thickness, 7);
        assert_eq!(settings.grayscale, Grayscale::Average);
        assert_eq!(cli.output_path(), PathBuf::from("out.png"));
        Ok(())
    }

    #[test]
    fn test_ranges_are_enforced() {
        assert!(Cli::try_parse_from(["stripe-disc", "in.png", "-t", "20"]).is_err());
        assert!(Cli::try_parse_from(["stripe-disc", "in.png", "-t", "201"]).is_err());
        assert!(Cli::try_parse_from(["stripe-disc", "in.png", "-s", "0"]).is_err());
        assert!(Cli::try_parse_from(["stripe-disc", "in.png", "-s", "21"]).is_err());
        assert!(Cli::try_parse_from(["stripe-disc", "in.png", "--otsu", "-t", "100"]).is_err());
    }

    #[test]
    fn test_flags_override_config() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let config = dir.path().join("settings.toml");
        std::fs::write(&config, "threshold = 90\nstripe_thickness = 9\notsu = true\n")?;

        let cli = Cli::try_parse_from([
            OsStr::new("stripe-disc"),
            OsStr::new("in.png"),
            OsStr::new("-c"),
            config.as_os_str(),
            OsStr::new("-s"),
            OsStr::new("2"),
        ])?;
        let settings = cli.settings()?;
        assert_eq!(settings.threshold, 90);
        assert_eq!(settings.stripe_thickness, 2);
        assert!(settings.otsu);

        let cli = Cli::try_parse_from([
            OsStr::new("stripe-disc"),
            OsStr::new("in.png"),
            OsStr::new("-c"),
            config.as_os_str(),
            OsStr::new("-t"),
            OsStr::new("150"),
        ])?;
        let settings = cli.settings()?;
        assert_eq!(settings.threshold, 150);
        assert!(!settings.otsu);
        Ok(())
    }

    #[test]
    fn test_run_writes_png() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let input = dir.path().join("gradient.png");
        image::RgbImage::from_fn(32, 24, |x, _| image::Rgb([(x * 8) as u8; 3])).save(&input)?;

        let cli = Cli::try_parse_from([OsStr::new("stripe-disc"), input.as_os_str()])?;
        let output_path = run(&cli)?;

        assert_eq!(output_path, dir.path().join("gradient_stripe_disc.png"));
        let output = io::load_image(&output_path)?.to_luma8();
        assert_eq!(output.dimensions(), (32, 24));
        assert!(output.pixels().all(|p| p[0] == 0 || p[0] == 255));
        Ok(())
    }
}
