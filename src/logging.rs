use crate::error::AppError;
use env_logger::{Builder, Env, Target};
use log::LevelFilter;
use std::fs::OpenOptions;
use std::path::Path;

/// Initializes the global logger.
///
/// The terminal is in the alternate screen while playing, so log output only
/// goes to a file when `log_file` is set. Without one, just warnings and errors
/// reach stderr. `verbose` raises the file level from info to debug. `RUST_LOG`
/// overrides either default.
pub fn init(verbose: bool, log_file: Option<&Path>) -> Result<(), AppError> {
    let level = match (log_file, verbose) {
        (None, _) => LevelFilter::Warn,
        (Some(_), true) => LevelFilter::Debug,
        (Some(_), false) => LevelFilter::Info,
    };

    let env = Env::default().default_filter_or(level.to_string());
    let mut builder = Builder::from_env(env);

    if let Some(path) = log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| AppError::LogFile {
                path: path.to_path_buf(),
                source,
            })?;
        builder.target(Target::Pipe(Box::new(file)));
    }

    // `try_init` only fails if a logger was already set. Ignore that case so
    // tests can call `init` multiple times without panicking.
    let _ = builder.try_init();
    Ok(())
}
