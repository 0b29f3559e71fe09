use log::LevelFilter;
use std::fs::File;
use std::io;
use std::path::Path;

/// Initialize logging for Scramble.
///
/// # Behavior
/// - Level is `Debug` when `debug_enabled`, otherwise `Info`; `RUST_LOG` overrides.
/// - Output goes to `log_file`. The terminal belongs to the game screen, so
///   if the file cannot be opened a warning naming it is printed to stderr
///   before the screen takes over, and log records are discarded.
pub fn init_logger(debug_enabled: bool, log_file: Option<&Path>) {
    let level = if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let target: Box<dyn io::Write + Send> = match log_file {
        Some(path) => match File::create(path) {
            Ok(file) => Box::new(file),
            Err(e) => {
                // Still on the normal screen here; the game has not started drawing
                eprintln!("warning: cannot write log file {}: {}", path.display(), e);
                Box::new(io::sink())
            }
        },
        None => Box::new(io::sink()),
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_module_path(false)
        .target(env_logger::Target::Pipe(target));

    // Let RUST_LOG override our defaults if explicitly set
    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    if builder.try_init().is_ok() {
        log::info!("logger initialized at {level:?} level");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unwritable_log_file_does_not_abort() {
        init_logger(false, Some(Path::new("/no/such/scramble/dir/scramble.log")));
        log::info!("still running");
    }
}
