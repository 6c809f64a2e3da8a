use std::path::PathBuf;

use clap::Parser;

use tagshelf::config::Settings;

/// Scan a music directory and export its tags and stream info as XML.
#[derive(Parser, Debug)]
#[clap(name = "tagshelf", version)]
pub struct Args {
    /// Library root to scan (defaults to the current directory)
    #[clap(value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Write the XML document to FILE instead of stdout
    #[clap(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Emit the document on a single line
    #[clap(long)]
    pub compact: bool,

    /// Log every imported and skipped file
    #[clap(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Flags given on the command line win over config and environment.
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(output) = &self.output {
            settings.export.output = Some(output.clone());
        }
        if self.compact {
            settings.export.pretty = false;
        }
    }
}
