use env_logger::{Builder, Env, Target};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

// Conditional logging macros - only active in debug builds

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        log::debug!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{}};
}

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        log::info!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {{}};
}

const APP_DIR: &str = "word-guess";
const LOG_FILE: &str = "word-guess.log";

/// Location of the log file used while the terminal UI owns the screen.
pub fn log_file_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join(APP_DIR).join(LOG_FILE))
}

/// Sets up `env_logger` from `RUST_LOG` (default `warn`).
///
/// With `to_file` set, output goes to [`log_file_path`] instead of stderr;
/// if that file cannot be created, logging stays on stderr.
pub fn init_logging(to_file: bool) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} {:<5} [{}] {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    if to_file && let Some(file) = log_file_path().and_then(|path| open_log_file(&path)) {
        builder.target(Target::Pipe(Box::new(file)));
    }

    // A logger may already be installed (e.g. by a test harness)
    let _ = builder.try_init();
}

fn open_log_file(path: &Path) -> Option<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    File::options().create(true).append(true).open(path).ok()
}
