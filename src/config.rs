use std::path::PathBuf;

use clap::{ArgAction, Parser};

/// Command-line surface of the converter.
#[derive(Parser, Clone, Debug)]
#[command(version, about, long_about = None, disable_version_flag = true)]
pub struct Config {
    /// Directory holding the source .jpg stills.
    #[arg(default_value = ".")]
    pub src_dir: PathBuf,

    /// Directory the numbered gifs are written into.
    #[arg(default_value = ".")]
    pub dest_dir: PathBuf,

    /// Max images per batch/gif.
    #[arg(short, long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..))]
    pub max: u32,

    /// Inter-frame delay in hundredths of a second.
    #[arg(short, long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..))]
    pub delay: u32,

    /// Resize to width maintaining aspect ratio.
    #[arg(short, long, default_value_t = 600, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Resize to height maintaining aspect ratio.
    #[arg(short = 'y', long, default_value_t = 600, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Skip all image I/O; report the paths a real run would produce.
    #[arg(long)]
    pub noop: bool,

    /// Show version.
    // -V is clap's stock short flag; this tool has always answered to -v.
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    pub version: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = Config::parse_from(["create-gif-rs"]);

        assert_eq!(config.src_dir, PathBuf::from("."));
        assert_eq!(config.dest_dir, PathBuf::from("."));
        assert_eq!(config.max, 100);
        assert_eq!(config.delay, 5);
        assert_eq!(config.width, 600);
        assert_eq!(config.height, 600);
        assert!(!config.noop);
    }

    #[test]
    fn positionals_and_short_flags_parse() {
        let config = Config::parse_from([
            "create-gif-rs",
            "-m",
            "10",
            "-d",
            "2",
            "-w",
            "320",
            "-y",
            "240",
            "--noop",
            "shots",
            "out",
        ]);

        assert_eq!(config.src_dir, PathBuf::from("shots"));
        assert_eq!(config.dest_dir, PathBuf::from("out"));
        assert_eq!(config.max, 10);
        assert_eq!(config.delay, 2);
        assert_eq!(config.width, 320);
        assert_eq!(config.height, 240);
        assert!(config.noop);
    }

    #[test]
    fn zero_values_are_rejected() {
        for flag in ["-m", "-d", "-w", "-y"] {
            assert!(Config::try_parse_from(["create-gif-rs", flag, "0"]).is_err());
        }
    }

    #[test]
    fn lowercase_short_version_flag() {
        let err = Config::try_parse_from(["create-gif-rs", "-v"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }
}
