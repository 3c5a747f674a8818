use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use chrono::Local;
use log::LevelFilter;

use crate::error::Result;

/// Initialise `env_logger` with timestamped lines, to stderr or appended to
/// `log_file`. Safe to call more than once; later calls are no-ops.
pub fn init_logging(level: LevelFilter, log_file: Option<&Path>) -> Result<()> {
    let mut builder = env_logger::Builder::new();
    builder
        .format(|buf, record| {
            writeln!(buf,
                "{} [{}] - {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter(None, level);

    if let Some(path) = log_file {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    // Already initialised (tests, embedding applications)
    let _ = builder.try_init();
    Ok(())
}
