use clap::Parser;
use std::path::{Path, PathBuf};

/// Upload a photo to the blog and set its title and description.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Title for photo entry.
    #[arg(long, default_value = "")]
    pub title: String,

    /// Description of photo.
    #[arg(long, default_value = "")]
    pub description: String,

    /// Path to photo file.
    #[arg(long, default_value = "")]
    pub file: String,

    /// Path to config file (defaults to ~/.photoblog/config.ini).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Request timeout in seconds. Overrides TIMEOUT from the config file.
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Prompt for a missing title or description and show upload progress.
    #[arg(long, short)]
    pub interactive: bool,

    /// Log each step to stderr.
    #[arg(long, short)]
    pub verbose: bool,
}

impl Cli {
    /// The photo path, unless it was left out or given as an empty string.
    pub fn photo_path(&self) -> Option<&Path> {
        if self.file.is_empty() {
            None
        } else {
            Some(Path::new(&self.file))
        }
    }
}
