//! Log file opening for the file output layer

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use crate::logger::config::FileConfig;

/// Opens the configured log file, creating missing parent directories.
///
/// The returned `Mutex<File>` is a `MakeWriter` for the fmt layer; each event
/// locks it for the duration of a single write.
pub(crate) fn open_log_file(config: &FileConfig) -> io::Result<Mutex<File>> {
    create_parent_dir(&config.path)?;

    let mut options = OpenOptions::new();
    options.create(true);
    if config.append {
        options.append(true);
    } else {
        options.write(true).truncate(true);
    }

    options.open(&config.path).map(Mutex::new)
}

fn create_parent_dir(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}
