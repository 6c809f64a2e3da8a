use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use chrono::Utc;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tagshelf::{Error, Library};

mod args;
mod settings;

use args::Args;

/// Logs go to stderr so stdout carries only the document.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(io::stderr)
        .init();
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut settings = settings::load_settings();
    args.apply(&mut settings);

    let dir = match args.dir {
        Some(dir) => dir,
        None => env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    };

    let library = Library::from_path(&dir, settings.library.clone());

    let indent = settings.export.pretty.then_some(settings.export.indent);
    let mut xml = library.to_xml_with(Utc::now(), indent)?;
    xml.push('\n');

    match &settings.export.output {
        Some(path) => {
            fs::write(path, &xml).map_err(|e| Error::Io {
                path: path.clone(),
                source: e,
            })?;
            info!(path = %path.display(), tracks = library.len(), "export written");
        }
        None => io::stdout().lock().write_all(xml.as_bytes())?,
    }

    Ok(())
}
