use clap::Parser;
use simplelog::LevelFilter;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Extract GPS positions from JPEG photos into an emailed CSV report")]
pub struct Cli {
    /// Photo file or directory tree to analyze (prompted for when omitted)
    pub path: Option<PathBuf>,

    /// Comma-separated recipient email addresses (prompted for when omitted)
    #[arg(long)]
    pub to: Option<String>,

    /// Write the report without emailing it
    #[arg(long, conflicts_with = "to")]
    pub no_email: bool,

    /// Enable file logging to geotriage.log
    #[arg(long = "log")]
    pub log: bool,

    /// Log level for file logging (debug, info, warn, error)
    #[arg(long, default_value_t = LevelFilter::Debug)]
    pub log_level: LevelFilter,
}

/// Ask for the recipient list on stdin.
pub fn prompt_recipients() -> io::Result<String> {
    print!(
        "Enter an email address to send the results to.\nIf there are multiple, separate them by a comma: "
    );
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input)
}

/// Ask for the photo or folder path on stdin.
pub fn prompt_path() -> io::Result<PathBuf> {
    print!("Enter the file path to the photo or folder: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(PathBuf::from(input.trim()))
}

/// Split a comma-separated address list, trimming each entry and dropping
/// empties. Order and duplicates are preserved; no further validation
/// happens here.
pub fn parse_recipient_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}
