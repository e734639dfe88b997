use crate::atok::ConvertOptions;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "atok2azookey",
    about = "Convert an ATOK dictionary export to azooKey user dictionary entries"
)]
pub struct Args {
    /// Path to ATOK export file (UTF-16LE)
    pub atok_file: PathBuf,

    /// Write converted entries to this JSON file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Merge converted entries into this azooKey settings.json
    #[arg(short, long, env = "AZOOKEY_SETTINGS")]
    pub merge: Option<PathBuf>,

    /// Skip emoticon entries (always on; kept for compatibility)
    #[arg(long, action = ArgAction::SetTrue, default_value_t = true)]
    pub skip_emoticons: bool,

    /// Skip auto-registered words
    #[arg(long)]
    pub skip_auto: bool,
}

impl Args {
    /// Load `.env` if present, then parse the command line.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::parse()
    }

    pub fn options(&self) -> ConvertOptions {
        ConvertOptions {
            skip_emoticons: self.skip_emoticons,
            skip_auto: self.skip_auto,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["atok2azookey", "dict.txt"]).unwrap();
        assert_eq!(args.atok_file, PathBuf::from("dict.txt"));
        assert!(args.output.is_none());
        assert_eq!(args.options(), ConvertOptions::default());
    }

    #[test]
    fn test_short_flags() {
        let args = Args::try_parse_from([
            "atok2azookey",
            "dict.txt",
            "-o",
            "out.json",
            "-m",
            "settings.json",
            "--skip-auto",
        ])
        .unwrap();
        assert_eq!(args.output, Some(PathBuf::from("out.json")));
        assert_eq!(args.merge, Some(PathBuf::from("settings.json")));
        assert!(args.options().skip_auto);
    }

    #[test]
    fn test_emoticon_skipping_cannot_be_turned_off() {
        let args = Args::try_parse_from(["atok2azookey", "dict.txt", "--skip-emoticons"]).unwrap();
        assert!(args.options().skip_emoticons);
        assert!(Args::try_parse_from(["atok2azookey", "dict.txt", "--skip-emoticons=false"]).is_err());
    }

    #[test]
    fn test_input_path_is_required() {
        assert!(Args::try_parse_from(["atok2azookey"]).is_err());
    }
}
