use crate::config::DEFAULT_DEST_FOLDER;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "live_photo_sorter")]
#[command(
    about = "Sort live photos made on an iPhone away from the rest of the image library. \
             Live photos are told apart from regular videos by filename, ignoring the extension."
)]
#[command(version)]
pub struct Cli {
    /// Directory to sort live photos in
    #[arg(long, value_name = "PATH", default_value = ".")]
    pub path: PathBuf,

    /// Directory to move the live photos to
    #[arg(long, value_name = "DESTINATION", default_value = DEFAULT_DEST_FOLDER)]
    pub dest: PathBuf,

    /// Prefix added to each moved live photo filename
    #[arg(long)]
    pub prefix: Option<String>,

    /// Delete the live photos instead of moving them
    #[arg(short, long)]
    pub delete: bool,

    /// Do not ask before deleting
    #[arg(short, long)]
    pub force: bool,

    /// Print every file operation
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["live_photo_sorter"]).unwrap();

        assert_eq!(cli.path, PathBuf::from("."));
        assert_eq!(cli.dest, PathBuf::from("live_photos"));
        assert_eq!(cli.prefix, None);
        assert!(!cli.delete);
        assert!(!cli.force);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_short_flags_and_values() {
        let cli = Cli::try_parse_from([
            "live_photo_sorter",
            "--path",
            "/photos",
            "--dest",
            "out",
            "--prefix",
            "LP_",
            "-d",
            "-f",
            "-v",
        ])
        .unwrap();

        assert_eq!(cli.path, PathBuf::from("/photos"));
        assert_eq!(cli.dest, PathBuf::from("out"));
        assert_eq!(cli.prefix.as_deref(), Some("LP_"));
        assert!(cli.delete && cli.force && cli.verbose);
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(Cli::try_parse_from(["live_photo_sorter", "--recursive"]).is_err());
    }
}
