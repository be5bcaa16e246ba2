use crate::config::LOG_FILE;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

lazy_static::lazy_static! {
    static ref LOGGER: Mutex<Option<File>> = Mutex::new(None);
}

pub fn init() {
    if let Err(e) = init_at(LOG_FILE) {
        eprintln!("quiz20: could not open {}: {}", LOG_FILE, e);
    }
}

/// Opens `path` for appending unless a log file is already open.
pub fn init_at<P: AsRef<Path>>(path: P) -> io::Result<()> {
    let Ok(mut logger) = LOGGER.lock() else {
        return Ok(());
    };
    if logger.is_none() {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        *logger = Some(file);
    }
    Ok(())
}

pub fn log(message: &str) {
    if let Ok(mut logger) = LOGGER.lock()
        && let Some(file) = logger.as_mut()
    {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        let _ = writeln!(file, "[{}] {}", timestamp, message);
    }
}
