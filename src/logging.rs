//! File logging
//!
//! The terminal belongs to the UI, so log records only go to a file and only
//! when one is requested. `RUST_LOG` overrides the default `info` filter.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;

use env_logger::{Builder, Env, Target};

use crate::error::VidscoutError;

const DEFAULT_FILTER: &str = "info";

/// Send log records to `path`, appending to an existing file
pub fn init(path: &Path) -> Result<(), VidscoutError> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .map_err(|e| io::Error::other(e.to_string()))?;

    log::info!(
        "vidscout {} logging to {}",
        env!("CARGO_PKG_VERSION"),
        path.display()
    );
    Ok(())
}
