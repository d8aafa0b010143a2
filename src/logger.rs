use once_cell::sync::Lazy;
use std::fmt::Arguments;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Error as IoError, Write};
use std::path::Path;
use std::sync::Mutex;

// Global static logger instance
static LOGGER: Lazy<Mutex<Option<BufWriter<File>>>> = Lazy::new(|| Mutex::new(None));

/// Initializes the global logger to write to the specified file path.
/// The file is created if missing and truncated otherwise, so each run starts fresh.
pub fn init_global_logger<P: AsRef<Path>>(log_file_path: P) -> Result<(), IoError> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(log_file_path)?;
    let writer = BufWriter::new(file);
    match LOGGER.lock() {
        Ok(mut logger_guard) => *logger_guard = Some(writer),
        Err(poisoned) => *poisoned.into_inner() = Some(writer),
    }
    Ok(())
}

/// Writes a verbose message to the global logger.
/// Messages are dropped while the logger is not initialized.
pub fn log_verbose_message_args(args: Arguments<'_>) {
    write_log_line("", args);
}

/// Writes a verbose error message to the global logger, prefixed with `ERROR: `.
pub fn log_verbose_error_args(args: Arguments<'_>) {
    write_log_line("ERROR: ", args);
}

// A line the log cannot take goes to stderr instead.
fn write_log_line(prefix: &str, args: Arguments<'_>) {
    let failure = match LOGGER.lock() {
        Ok(mut guard) => match guard.as_mut() {
            Some(writer) => writeln!(writer, "{}{}", prefix, args)
                .err()
                .map(|e| e.to_string()),
            None => None,
        },
        Err(_) => Some("log lock poisoned".to_string()),
    };
    if let Some(reason) = failure {
        eprintln!("[pathfinder log unavailable: {}] {}{}", reason, prefix, args);
    }
}

/// Flushes buffered log output to disk. A no-op if the logger is not initialized.
pub fn flush_global_logger() -> Result<(), IoError> {
    match LOGGER.lock() {
        Ok(mut logger_guard) => match logger_guard.as_mut() {
            Some(writer) => writer.flush(),
            None => Ok(()),
        },
        Err(_) => Err(IoError::other("logger mutex poisoned")),
    }
}
